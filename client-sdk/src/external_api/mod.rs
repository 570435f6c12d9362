pub mod filter_api;
pub mod utils;
