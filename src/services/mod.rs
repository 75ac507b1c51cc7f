pub mod age;
pub mod hire;
pub mod jwt;
