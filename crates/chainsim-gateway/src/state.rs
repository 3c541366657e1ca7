//! Shared application state: the dispatcher behind the single
//! serialization mutex every handler funnels through (spec.md §5).

use chainsim_engine::Dispatcher;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Mutex<Dispatcher>>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(Mutex::new(dispatcher)),
        }
    }
}
