use std::sync::Arc;

use crate::{app::filter_copy_server::FilterCopyServer, Env};

#[derive(Clone)]
pub struct State {
    pub filter_copy_server: Arc<FilterCopyServer>,
}

impl State {
    pub fn new(env: &Env) -> Self {
        Self::from_server(FilterCopyServer::new(env))
    }

    pub fn from_server(filter_copy_server: FilterCopyServer) -> Self {
        State {
            filter_copy_server: Arc::new(filter_copy_server),
        }
    }
}
