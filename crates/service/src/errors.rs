use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    /// Duplicate key on insert; carries the storage layer's error text.
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("failed to fetch {service} data from upstream (status {status})")]
    Upstream { service: &'static str, status: u16 },
    #[error("{service} upstream unreachable: {message}")]
    UpstreamUnavailable { service: &'static str, message: String },
    #[error("{service} upstream returned an unexpected payload: {message}")]
    UpstreamDecode { service: &'static str, message: String },
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(e.to_string()),
            _ => Self::Db(e.to_string()),
        }
    }
}
