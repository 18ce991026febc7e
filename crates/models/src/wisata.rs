use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A tourism destination, the only locally owned entity.
///
/// The optional ids point at records owned by the remote tax, guide,
/// insurance, hotel and bank services. They are nullable on the wire and
/// in the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wisata")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_wisata: String,
    pub nama_objek: String,
    pub nama_daerah: String,
    pub kategori: String,
    pub alamat: String,
    pub kontak: String,
    pub harga_tiket: i64,
    #[serde(default)]
    pub id_pajak: Option<i64>,
    #[serde(default)]
    pub id_guide: Option<i64>,
    #[serde(default)]
    pub id_asuransi: Option<i64>,
    #[serde(default)]
    pub id_room: Option<i64>,
    #[serde(default)]
    pub nik: Option<i64>,
}

pub type Destination = Model;

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.id_wisata.trim().is_empty() {
            return Err(errors::ModelError::Validation("id_wisata must not be empty".into()));
        }
        if self.harga_tiket < 0 {
            return Err(errors::ModelError::Validation("harga_tiket must be non-negative".into()));
        }
        Ok(())
    }

    /// Fully-set active model, used for both insert and full-record replace.
    pub fn into_active_model_full(self) -> ActiveModel {
        ActiveModel {
            id_wisata: Set(self.id_wisata),
            nama_objek: Set(self.nama_objek),
            nama_daerah: Set(self.nama_daerah),
            kategori: Set(self.kategori),
            alamat: Set(self.alamat),
            kontak: Set(self.kontak),
            harga_tiket: Set(self.harga_tiket),
            id_pajak: Set(self.id_pajak),
            id_guide: Set(self.id_guide),
            id_asuransi: Set(self.id_asuransi),
            id_room: Set(self.id_room),
            nik: Set(self.nik),
        }
    }
}

fn sample(id: &str, nama_objek: &str, nama_daerah: &str, kategori: &str, alamat: &str, kontak: &str, harga_tiket: i64) -> Model {
    Model {
        id_wisata: id.to_string(),
        nama_objek: nama_objek.to_string(),
        nama_daerah: nama_daerah.to_string(),
        kategori: kategori.to_string(),
        alamat: alamat.to_string(),
        kontak: kontak.to_string(),
        harga_tiket,
        id_pajak: None,
        id_guide: None,
        id_asuransi: None,
        id_room: None,
        nik: None,
    }
}

/// The five destinations the service ships with.
pub fn sample_destinations() -> Vec<Model> {
    vec![
        sample(
            "OP01",
            "Orchid Forest Cikole",
            "Bandung",
            "Wisata Alam, Wisata Keluarga, Wisata Edukasi",
            "Jl. Tangkuban Perahu Raya No.80E, Cikole, Lembang, Kabupaten Bandung Barat, Jawa Barat 40391, Indonesia",
            "02282325888",
            40000,
        ),
        sample(
            "OP02",
            "Taman Impian Jaya Ancol",
            "Jakarta",
            "Wisata Hiburan, Wisata Keluarga, Wisata Alam, Wisata Edukasi",
            "Jl. Lodan Timur No.7, Ancol, Pademangan, Kota Jakarta Utara, Daerah Khusus Ibukota Jakarta 14430, Indonesia",
            "02129222222",
            25000,
        ),
        sample(
            "OP03",
            "Candi Borobudur",
            "Yogyakarta",
            "Wisata Budaya, Wisata Sejarah, Wisata Religi",
            "Jl. Badrawati No.1, Borobudur, Magelang, Jawa Tengah 56553, Indonesia",
            "0293788210",
            50000,
        ),
        sample(
            "OP04",
            "Uluwatu Temple",
            "Bali",
            "Wisata Budaya, Wisata Religi, Wisata Alam",
            "Pecatu, Kec. Kuta Selatan, Kabupaten Badung, Bali",
            "0361915078",
            50000,
        ),
        sample(
            "OP05",
            "Surabaya North Quay",
            "Surabaya",
            "Wisata Hiburan, Wisata Keluarga, Wisata Kuliner",
            "Jalan Perak Timur, Perak Utara, Pabean Cantian, Kota Surabaya, Jawa Timur 60161",
            "081336101290",
            30000,
        ),
    ]
}
