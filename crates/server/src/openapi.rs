use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize)]
pub struct HealthResponse {
    #[serde(rename = "Data")]
    pub data: String,
}

#[derive(ToSchema, Serialize)]
pub struct MessageDoc { pub message: String }

/// Destination as accepted and returned by `/wisata`.
#[derive(ToSchema, Serialize)]
pub struct DestinationDoc {
    pub id_wisata: String,
    pub nama_objek: String,
    pub nama_daerah: String,
    /// Comma-separated tags
    pub kategori: String,
    pub alamat: String,
    pub kontak: String,
    #[schema(minimum = 0)]
    pub harga_tiket: i64,
    pub id_pajak: Option<i64>,
    pub id_guide: Option<i64>,
    pub id_asuransi: Option<i64>,
    pub id_room: Option<i64>,
    pub nik: Option<i64>,
}

// Remote proxies and joined views are generic handlers and stay undocumented here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::wisata::create,
        crate::routes::wisata::list,
        crate::routes::wisata::get,
        crate::routes::wisata::update,
        crate::routes::wisata::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            DestinationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "wisata")
    )
)]
pub struct ApiDoc;
