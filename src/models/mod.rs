pub mod common;
pub mod norm;
pub mod types;
