pub mod form;
pub mod render;
pub mod routes;
pub mod state;
