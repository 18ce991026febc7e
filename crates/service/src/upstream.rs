//! Remote Fetch Adapters.
//!
//! One [`RemoteSource`] per collaborator. A fetch is a single GET on a fixed
//! collection URL: it either yields the whole collection or fails. No retry,
//! no cache, and the client's default timeouts are left untouched.

use std::marker::PhantomData;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use common::metrics;
use configs::UpstreamsConfig;
use models::remote::{Asuransi, Bank, Hotel, Pajak, RemoteRecord, TourGuide};

use crate::errors::ServiceError;

/// Where the collection sits in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// The body is the JSON array itself.
    Bare,
    /// The array sits under `data.data`.
    NestedData,
}

pub struct RemoteSource<T> {
    client: reqwest::Client,
    url: String,
    envelope: Envelope,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RemoteSource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            url: self.url.clone(),
            envelope: self.envelope,
            _record: PhantomData,
        }
    }
}

impl<T: RemoteRecord> RemoteSource<T> {
    pub fn new(client: reqwest::Client, url: impl Into<String>, envelope: Envelope) -> Self {
        Self { client, url: url.into(), envelope, _record: PhantomData }
    }

    /// Fetch the full collection.
    pub async fn fetch_all(&self) -> Result<Vec<T>, ServiceError> {
        metrics::record_upstream_fetch(T::SERVICE);
        match self.fetch_inner().await {
            Ok(records) => {
                debug!(service = T::SERVICE, count = records.len(), "upstream collection fetched");
                Ok(records)
            }
            Err(e) => {
                metrics::record_upstream_error(T::SERVICE);
                warn!(service = T::SERVICE, url = %self.url, err = %e, "upstream fetch failed");
                Err(e)
            }
        }
    }

    /// Fetch the collection and pick the first record with the given identity.
    pub async fn fetch_one(&self, key: i64) -> Result<Option<T>, ServiceError> {
        let records = self.fetch_all().await?;
        Ok(records.into_iter().find(|r| r.key() == key))
    }

    async fn fetch_inner(&self) -> Result<Vec<T>, ServiceError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ServiceError::UpstreamUnavailable { service: T::SERVICE, message: e.to_string() })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ServiceError::Upstream { service: T::SERVICE, status: status.as_u16() });
        }

        let body: Value = resp.json().await.map_err(|e| decode_err::<T>(e.to_string()))?;
        let collection = match self.envelope {
            Envelope::Bare => body,
            Envelope::NestedData => unwrap_nested::<T>(body)?,
        };
        serde_json::from_value(collection).map_err(|e| decode_err::<T>(e.to_string()))
    }
}

fn decode_err<T: RemoteRecord>(message: String) -> ServiceError {
    ServiceError::UpstreamDecode { service: T::SERVICE, message }
}

fn unwrap_nested<T: RemoteRecord>(mut body: Value) -> Result<Value, ServiceError> {
    body.get_mut("data")
        .and_then(|outer| outer.get_mut("data"))
        .map(Value::take)
        .ok_or_else(|| decode_err::<T>("missing `data.data` envelope".to_string()))
}

/// The five collaborators, sharing one HTTP client.
#[derive(Clone)]
pub struct Upstreams {
    pub pajak: RemoteSource<Pajak>,
    pub tour_guide: RemoteSource<TourGuide>,
    pub asuransi: RemoteSource<Asuransi>,
    pub hotel: RemoteSource<Hotel>,
    pub bank: RemoteSource<Bank>,
}

impl Upstreams {
    pub fn from_config(cfg: &UpstreamsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), cfg)
    }

    pub fn with_client(client: reqwest::Client, cfg: &UpstreamsConfig) -> Self {
        Self {
            pajak: RemoteSource::new(client.clone(), &cfg.pajak_url, Envelope::Bare),
            tour_guide: RemoteSource::new(client.clone(), &cfg.tour_guide_url, Envelope::Bare),
            asuransi: RemoteSource::new(client.clone(), &cfg.asuransi_url, Envelope::Bare),
            hotel: RemoteSource::new(client.clone(), &cfg.hotel_url, Envelope::Bare),
            bank: RemoteSource::new(client, &cfg.bank_url, Envelope::NestedData),
        }
    }
}
