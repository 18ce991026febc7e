use std::sync::Arc;

use service::destination::DestinationStore;
use service::join::JoinService;

/// Shared handler state: the destination store and the join service built
/// over the same store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DestinationStore>,
    pub joins: Arc<JoinService>,
}

impl AppState {
    pub fn new(store: Arc<dyn DestinationStore>, joins: JoinService) -> Self {
        Self { store, joins: Arc::new(joins) }
    }
}
