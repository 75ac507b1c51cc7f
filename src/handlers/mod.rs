//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Hire** (`hire`) - Reservation lifecycle and the monthly listing
//! - **Health Check** (`health_check`) - Application health monitoring

mod health_check;
mod hire;

pub use health_check::*;
pub use hire::*;
