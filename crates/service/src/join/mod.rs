//! Join Engine.
//!
//! Combines the destination snapshot with one remote collection into a
//! sequence of flattened joined records. Every entity pair implements
//! [`JoinPair`] once; the strategies below are shared by all of them.
//!
//! - [`JoinStrategy::Cartesian`]: every destination with every remote record,
//!   destinations outer, remote records inner. `|D| * |R|` records.
//! - [`JoinStrategy::Zip`]: position `i` with position `i`; the shorter side is
//!   padded with nulls. `max(|D|, |R|)` records. Foreign keys are ignored, so
//!   the result only means something when both sides are kept in the same
//!   order by convention.
//! - [`JoinStrategy::Keyed`]: left join on the destination's foreign key
//!   against the remote identity. `|D|` records. This changes behaviour
//!   relative to `Zip` and is opt-in per pair.

pub mod pairs;
pub mod service;

use serde::Serialize;

pub use configs::{JoinConfig, JoinStrategy};
use models::remote::RemoteRecord;
use models::wisata::Destination;

use crate::errors::ServiceError;
use crate::upstream::{RemoteSource, Upstreams};

pub use pairs::{AsuransiPair, BankPair, HotelPair, PajakPair, TourGuidePair};
pub use service::JoinService;

/// Capability of one destination x remote entity pair.
pub trait JoinPair: Send + Sync + 'static {
    type Remote: RemoteRecord;
    type Joined: Serialize + Clone + Send + Sync + 'static;

    /// Pair label for logs and metrics.
    const NAME: &'static str;

    /// Build one joined record. A `None` side contributes nulls.
    fn combine(dest: Option<&Destination>, remote: Option<&Self::Remote>) -> Self::Joined;

    /// Remote identity carried by a joined record, if its remote side is present.
    fn remote_key(joined: &Self::Joined) -> Option<i64>;

    /// The destination's foreign key into this pair's remote collection.
    fn foreign_key(dest: &Destination) -> Option<i64>;

    fn source(upstreams: &Upstreams) -> &RemoteSource<Self::Remote>;

    fn strategy(cfg: &JoinConfig) -> JoinStrategy;
}

pub fn cartesian<P: JoinPair>(dests: &[Destination], remotes: &[P::Remote]) -> Vec<P::Joined> {
    dests
        .iter()
        .flat_map(|d| remotes.iter().map(move |r| P::combine(Some(d), Some(r))))
        .collect()
}

pub fn zip<P: JoinPair>(dests: &[Destination], remotes: &[P::Remote]) -> Vec<P::Joined> {
    let len = dests.len().max(remotes.len());
    (0..len)
        .map(|i| P::combine(dests.get(i), remotes.get(i)))
        .collect()
}

pub fn keyed<P: JoinPair>(dests: &[Destination], remotes: &[P::Remote]) -> Vec<P::Joined> {
    dests
        .iter()
        .map(|d| {
            let matched = P::foreign_key(d).and_then(|fk| remotes.iter().find(|r| r.key() == fk));
            P::combine(Some(d), matched)
        })
        .collect()
}

pub fn join<P: JoinPair>(strategy: JoinStrategy, dests: &[Destination], remotes: &[P::Remote]) -> Vec<P::Joined> {
    match strategy {
        JoinStrategy::Cartesian => cartesian::<P>(dests, remotes),
        JoinStrategy::Zip => zip::<P>(dests, remotes),
        JoinStrategy::Keyed => keyed::<P>(dests, remotes),
    }
}

/// Keep the records whose remote identity equals `key`; empty is `NotFound`.
pub fn filter_by_key<P: JoinPair>(joined: Vec<P::Joined>, key: i64) -> Result<Vec<P::Joined>, ServiceError> {
    let hits: Vec<P::Joined> = joined
        .into_iter()
        .filter(|j| P::remote_key(j) == Some(key))
        .collect();
    if hits.is_empty() {
        return Err(ServiceError::NotFound(format!("no joined {} data for key {}", P::NAME, key)));
    }
    Ok(hits)
}
