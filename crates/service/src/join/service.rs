use std::sync::Arc;

use tracing::{debug, instrument};

use common::metrics;

use super::{filter_by_key, join, JoinConfig, JoinPair, JoinStrategy};
use crate::destination::DestinationStore;
use crate::errors::ServiceError;
use crate::upstream::Upstreams;

/// Computes joined views per request.
///
/// Each call takes a fresh destination snapshot first, then performs exactly
/// one fetch of the paired remote collection. Nothing is cached between calls,
/// and a failed fetch fails the whole view.
pub struct JoinService {
    store: Arc<dyn DestinationStore>,
    upstreams: Upstreams,
    strategies: JoinConfig,
}

impl JoinService {
    pub fn new(store: Arc<dyn DestinationStore>, upstreams: Upstreams, strategies: JoinConfig) -> Self {
        Self { store, upstreams, strategies }
    }

    pub fn upstreams(&self) -> &Upstreams { &self.upstreams }

    pub fn strategy_for<P: JoinPair>(&self) -> JoinStrategy { P::strategy(&self.strategies) }

    #[instrument(skip(self), fields(pair = P::NAME))]
    pub async fn joined<P: JoinPair>(&self) -> Result<Vec<P::Joined>, ServiceError> {
        let dests = self.store.list().await?;
        let remotes = P::source(&self.upstreams).fetch_all().await?;
        let strategy = self.strategy_for::<P>();
        metrics::record_join(P::NAME, strategy.as_str());

        let joined = join::<P>(strategy, &dests, &remotes);
        debug!(
            strategy = strategy.as_str(),
            destinations = dests.len(),
            remotes = remotes.len(),
            joined = joined.len(),
            "joined view computed"
        );
        Ok(joined)
    }

    /// Recompute the view and keep records whose remote identity is `key`.
    pub async fn joined_by_key<P: JoinPair>(&self, key: i64) -> Result<Vec<P::Joined>, ServiceError> {
        let joined = self.joined::<P>().await?;
        filter_by_key::<P>(joined, key)
    }
}
