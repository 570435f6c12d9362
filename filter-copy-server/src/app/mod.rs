pub mod error;
pub mod filter_copy_server;
pub mod upload;
