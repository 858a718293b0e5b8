pub mod constants;
pub mod core;
