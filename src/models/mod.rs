mod child;
mod hire;
mod nanny;
mod role;
mod state;

pub use child::Child;
pub use hire::{Hire, HireChanges, HireStatus};
pub use nanny::{Nanny, Workdays};
pub use role::Role;
pub use state::AppState;
