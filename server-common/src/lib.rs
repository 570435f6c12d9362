pub mod env;
pub mod health_check;
pub mod logger;
