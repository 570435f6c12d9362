pub mod delay;
pub mod error;
pub mod transfer;
