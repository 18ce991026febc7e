//! Destination Store: the authoritative collection of destinations.
//!
//! Two interchangeable backings implement [`DestinationStore`]:
//! an in-memory list guarded by a lock, and a SeaORM table.

pub mod memory;
pub mod repository;

pub use memory::MemoryDestinationStore;
pub use repository::{DestinationStore, SeaOrmDestinationStore};
