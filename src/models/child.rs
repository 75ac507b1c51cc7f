//! Child profile as seen by the hire engine: identity, owning parent and the
//! birthdate ages are derived from. Age is never stored.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// A child profile owned by a parent.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Child {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub name: String,
    pub birthdate: Date,
}
