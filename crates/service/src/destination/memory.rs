use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use models::wisata::Destination;

use crate::destination::repository::DestinationStore;
use crate::errors::ServiceError;

/// In-memory destination list.
///
/// Keeps insertion order and does not enforce unique ids; `update` and
/// `delete` act on the first record with a matching id. Every mutation holds
/// the write lock for its whole duration, so readers never see a half-applied
/// change.
#[derive(Default)]
pub struct MemoryDestinationStore {
    inner: RwLock<Vec<Destination>>,
}

impl MemoryDestinationStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_records(records: Vec<Destination>) -> Self {
        Self { inner: RwLock::new(records) }
    }

    /// Store preloaded with the sample destinations.
    pub fn seeded() -> Self {
        Self::with_records(models::wisata::sample_destinations())
    }
}

#[async_trait]
impl DestinationStore for MemoryDestinationStore {
    async fn list(&self) -> Result<Vec<Destination>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Destination>, ServiceError> {
        let items = self.inner.read().await;
        Ok(items.iter().find(|d| d.id_wisata == id).cloned())
    }

    #[instrument(skip(self, record), fields(id = %record.id_wisata))]
    async fn insert(&self, record: Destination) -> Result<Destination, ServiceError> {
        record.validate()?;
        let mut items = self.inner.write().await;
        items.push(record.clone());
        info!(count = items.len(), "destination inserted");
        Ok(record)
    }

    #[instrument(skip(self, record))]
    async fn update(&self, id: &str, record: Destination) -> Result<Destination, ServiceError> {
        record.validate()?;
        let mut items = self.inner.write().await;
        let slot = items
            .iter_mut()
            .find(|d| d.id_wisata == id)
            .ok_or_else(|| ServiceError::not_found("wisata"))?;
        *slot = Destination { id_wisata: id.to_string(), ..record };
        info!("destination replaced");
        Ok(slot.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        let pos = items
            .iter()
            .position(|d| d.id_wisata == id)
            .ok_or_else(|| ServiceError::not_found("wisata"))?;
        items.remove(pos);
        info!(count = items.len(), "destination deleted");
        Ok(())
    }
}
