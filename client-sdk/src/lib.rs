pub mod client;
pub mod external_api;
