pub mod constants;
pub mod env;
pub mod error;
pub mod log;
pub mod types;
pub mod utils;
