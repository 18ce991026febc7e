//! Joined record shapes and the five [`JoinPair`] implementations.
//!
//! Each joined record projects a few destination fields and a few remote
//! fields. All fields are optional: a side without a counterpart at that
//! position is serialized as `null` throughout, a present side always
//! fills every one of its fields.

use serde::{Deserialize, Serialize};

use models::remote::{Asuransi, Bank, Hotel, Pajak, TourGuide};
use models::wisata::Destination;

use super::{JoinConfig, JoinPair, JoinStrategy};
use crate::upstream::{RemoteSource, Upstreams};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WisataPajak {
    pub id_wisata: Option<String>,
    pub nama_objek: Option<String>,
    pub harga_tiket: Option<i64>,
    pub id_pajak: Option<i64>,
    pub jenis_pajak: Option<String>,
    pub tarif_pajak: Option<f64>,
    pub besar_pajak: Option<f64>,
}

pub struct PajakPair;

impl JoinPair for PajakPair {
    type Remote = Pajak;
    type Joined = WisataPajak;
    const NAME: &'static str = "pajak";

    fn combine(dest: Option<&Destination>, remote: Option<&Pajak>) -> WisataPajak {
        WisataPajak {
            id_wisata: dest.map(|d| d.id_wisata.clone()),
            nama_objek: dest.map(|d| d.nama_objek.clone()),
            harga_tiket: dest.map(|d| d.harga_tiket),
            id_pajak: remote.map(|r| r.id_pajak),
            jenis_pajak: remote.map(|r| r.jenis_pajak.clone()),
            tarif_pajak: remote.map(|r| r.tarif_pajak),
            besar_pajak: remote.map(|r| r.besar_pajak),
        }
    }

    fn remote_key(joined: &WisataPajak) -> Option<i64> { joined.id_pajak }
    fn foreign_key(dest: &Destination) -> Option<i64> { dest.id_pajak }
    fn source(upstreams: &Upstreams) -> &RemoteSource<Pajak> { &upstreams.pajak }
    fn strategy(cfg: &JoinConfig) -> JoinStrategy { cfg.pajak }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WisataTourGuide {
    pub id_wisata: Option<String>,
    pub nama_objek: Option<String>,
    pub nama_daerah: Option<String>,
    pub id_guide: Option<i64>,
    pub nama_guider: Option<String>,
    pub profile: Option<String>,
    pub fee: Option<f64>,
}

pub struct TourGuidePair;

impl JoinPair for TourGuidePair {
    type Remote = TourGuide;
    type Joined = WisataTourGuide;
    const NAME: &'static str = "tour_guide";

    fn combine(dest: Option<&Destination>, remote: Option<&TourGuide>) -> WisataTourGuide {
        WisataTourGuide {
            id_wisata: dest.map(|d| d.id_wisata.clone()),
            nama_objek: dest.map(|d| d.nama_objek.clone()),
            nama_daerah: dest.map(|d| d.nama_daerah.clone()),
            id_guide: remote.map(|r| r.id_guide),
            nama_guider: remote.map(|r| r.nama_guider.clone()),
            profile: remote.map(|r| r.profile.clone()),
            fee: remote.map(|r| r.fee),
        }
    }

    fn remote_key(joined: &WisataTourGuide) -> Option<i64> { joined.id_guide }
    fn foreign_key(dest: &Destination) -> Option<i64> { dest.id_guide }
    fn source(upstreams: &Upstreams) -> &RemoteSource<TourGuide> { &upstreams.tour_guide }
    fn strategy(cfg: &JoinConfig) -> JoinStrategy { cfg.tour_guide }
}

/// The insurer's own `nama_daerah` is dropped in favour of the destination's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WisataAsuransi {
    pub id_wisata: Option<String>,
    pub nama_objek: Option<String>,
    pub nama_daerah: Option<String>,
    pub id_asuransi: Option<i64>,
    pub nama_wisata: Option<String>,
}

pub struct AsuransiPair;

impl JoinPair for AsuransiPair {
    type Remote = Asuransi;
    type Joined = WisataAsuransi;
    const NAME: &'static str = "asuransi";

    fn combine(dest: Option<&Destination>, remote: Option<&Asuransi>) -> WisataAsuransi {
        WisataAsuransi {
            id_wisata: dest.map(|d| d.id_wisata.clone()),
            nama_objek: dest.map(|d| d.nama_objek.clone()),
            nama_daerah: dest.map(|d| d.nama_daerah.clone()),
            id_asuransi: remote.map(|r| r.id_asuransi),
            nama_wisata: remote.map(|r| r.nama_wisata.clone()),
        }
    }

    fn remote_key(joined: &WisataAsuransi) -> Option<i64> { joined.id_asuransi }
    fn foreign_key(dest: &Destination) -> Option<i64> { dest.id_asuransi }
    fn source(upstreams: &Upstreams) -> &RemoteSource<Asuransi> { &upstreams.asuransi }
    fn strategy(cfg: &JoinConfig) -> JoinStrategy { cfg.asuransi }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WisataHotel {
    pub id_wisata: Option<String>,
    pub nama_objek: Option<String>,
    pub nama_daerah: Option<String>,
    pub id_room: Option<i64>,
    pub room_number: Option<i64>,
    pub room_type: Option<String>,
    pub rate: Option<String>,
    pub availability: Option<i64>,
}

pub struct HotelPair;

impl JoinPair for HotelPair {
    type Remote = Hotel;
    type Joined = WisataHotel;
    const NAME: &'static str = "hotel";

    fn combine(dest: Option<&Destination>, remote: Option<&Hotel>) -> WisataHotel {
        WisataHotel {
            id_wisata: dest.map(|d| d.id_wisata.clone()),
            nama_objek: dest.map(|d| d.nama_objek.clone()),
            nama_daerah: dest.map(|d| d.nama_daerah.clone()),
            id_room: remote.map(|r| r.id_room),
            room_number: remote.map(|r| r.room_number),
            room_type: remote.map(|r| r.room_type.clone()),
            rate: remote.map(|r| r.rate.clone()),
            availability: remote.map(|r| r.availability),
        }
    }

    fn remote_key(joined: &WisataHotel) -> Option<i64> { joined.id_room }
    fn foreign_key(dest: &Destination) -> Option<i64> { dest.id_room }
    fn source(upstreams: &Upstreams) -> &RemoteSource<Hotel> { &upstreams.hotel }
    fn strategy(cfg: &JoinConfig) -> JoinStrategy { cfg.hotel }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WisataBank {
    pub id_wisata: Option<String>,
    pub nama_objek: Option<String>,
    pub kontak: Option<String>,
    pub nik: Option<i64>,
    pub nama: Option<String>,
    pub kabupaten: Option<String>,
}

pub struct BankPair;

impl JoinPair for BankPair {
    type Remote = Bank;
    type Joined = WisataBank;
    const NAME: &'static str = "bank";

    fn combine(dest: Option<&Destination>, remote: Option<&Bank>) -> WisataBank {
        WisataBank {
            id_wisata: dest.map(|d| d.id_wisata.clone()),
            nama_objek: dest.map(|d| d.nama_objek.clone()),
            kontak: dest.map(|d| d.kontak.clone()),
            nik: remote.map(|r| r.nik),
            nama: remote.map(|r| r.nama.clone()),
            kabupaten: remote.map(|r| r.kabupaten.clone()),
        }
    }

    fn remote_key(joined: &WisataBank) -> Option<i64> { joined.nik }
    fn foreign_key(dest: &Destination) -> Option<i64> { dest.nik }
    fn source(upstreams: &Upstreams) -> &RemoteSource<Bank> { &upstreams.bank }
    fn strategy(cfg: &JoinConfig) -> JoinStrategy { cfg.bank }
}
