pub mod constant;
pub mod month;
