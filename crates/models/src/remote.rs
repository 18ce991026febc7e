//! Record shapes owned by the remote collaborators.
//!
//! These are read-only here: decoded from each service's collection endpoint
//! on every request and never stored. Every field is required; a payload that
//! misses one is rejected as a whole rather than patched with defaults.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A record fetched from one remote service, identified by an integer key.
pub trait RemoteRecord: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Service label used in errors, logs and metrics.
    const SERVICE: &'static str;

    /// The identity field (`id_pajak`, `id_guide`, ...).
    fn key(&self) -> i64;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pajak {
    pub id_pajak: i64,
    pub jenis_pajak: String,
    pub tarif_pajak: f64,
    pub besar_pajak: f64,
}

impl RemoteRecord for Pajak {
    const SERVICE: &'static str = "pajak";
    fn key(&self) -> i64 { self.id_pajak }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourGuide {
    pub id_guide: i64,
    pub nama_guider: String,
    pub profile: String,
    pub fee: f64,
}

impl RemoteRecord for TourGuide {
    const SERVICE: &'static str = "tour_guide";
    fn key(&self) -> i64 { self.id_guide }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asuransi {
    pub id_asuransi: i64,
    pub nama_wisata: String,
    pub nama_daerah: String,
}

impl RemoteRecord for Asuransi {
    const SERVICE: &'static str = "asuransi";
    fn key(&self) -> i64 { self.id_asuransi }
}

/// A hotel room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id_room: i64,
    pub room_number: i64,
    pub room_type: String,
    pub rate: String,
    pub availability: i64,
}

impl RemoteRecord for Hotel {
    const SERVICE: &'static str = "hotel";
    fn key(&self) -> i64 { self.id_room }
}

/// A bank account holder, keyed by national id number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub nik: i64,
    pub nama: String,
    pub kabupaten: String,
}

impl RemoteRecord for Bank {
    const SERVICE: &'static str = "bank";
    fn key(&self) -> i64 { self.nik }
}
