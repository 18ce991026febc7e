use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, SimpleExpr};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use models::wisata::{self, Destination, Entity as WisataEntity};

use crate::errors::ServiceError;

#[async_trait]
pub trait DestinationStore: Send + Sync {
    /// Full snapshot of the collection.
    async fn list(&self) -> Result<Vec<Destination>, ServiceError>;
    /// Exact-match lookup; `None` when no record has that id.
    async fn get(&self, id: &str) -> Result<Option<Destination>, ServiceError>;
    async fn insert(&self, record: Destination) -> Result<Destination, ServiceError>;
    /// Replace the full record stored under `id`. `id` wins over `record.id_wisata`.
    async fn update(&self, id: &str, record: Destination) -> Result<Destination, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

/// SeaORM-backed store over the `wisata` table.
///
/// Listing follows the table's `seq` column, so records come back in
/// insertion order just like the in-memory store. Duplicate ids are refused
/// by the unique key and reported as [`ServiceError::Conflict`]. Row locking
/// is left to the database.
pub struct SeaOrmDestinationStore {
    pub db: DatabaseConnection,
}

impl SeaOrmDestinationStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl DestinationStore for SeaOrmDestinationStore {
    async fn list(&self) -> Result<Vec<Destination>, ServiceError> {
        // `seq` is database-assigned and not part of the record
        let seq: SimpleExpr = Expr::col(Alias::new("seq")).into();
        let rows = WisataEntity::find()
            .order_by_asc(seq)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: &str) -> Result<Option<Destination>, ServiceError> {
        let found = WisataEntity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(found)
    }

    #[instrument(skip(self, record), fields(id = %record.id_wisata))]
    async fn insert(&self, record: Destination) -> Result<Destination, ServiceError> {
        record.validate()?;
        let created = record.into_active_model_full().insert(&self.db).await?;
        info!("destination inserted");
        Ok(created)
    }

    #[instrument(skip(self, record))]
    async fn update(&self, id: &str, record: Destination) -> Result<Destination, ServiceError> {
        record.validate()?;
        let record = Destination { id_wisata: id.to_string(), ..record };
        // one statement, so a concurrent delete shows up as zero rows
        let res = WisataEntity::update_many()
            .set(record.clone().into_active_model_full())
            .filter(wisata::Column::IdWisata.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("wisata"));
        }
        info!("destination replaced");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let res = WisataEntity::delete_by_id(id.to_string()).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("wisata"));
        }
        info!("destination deleted");
        Ok(())
    }
}
