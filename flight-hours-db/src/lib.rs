pub mod models;
pub mod utils;

pub use models::*;
