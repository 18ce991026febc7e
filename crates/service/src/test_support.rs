#![cfg(test)]
use axum::Router;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use models::wisata::Destination;

use crate::upstream::Upstreams;

/// Fresh in-memory SQLite database with the schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_sqlite_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Serve `router` on an ephemeral local port, returning its base URL.
pub async fn spawn_upstream(router: Router) -> Result<String, anyhow::Error> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await { eprintln!("fake upstream error: {}", e); }
    });
    Ok(format!("http://{}", addr))
}

/// Adapters pointed at `{base}/pajak`, `{base}/tourguide`, ... on a fake upstream.
pub fn upstreams_at(base: &str) -> Upstreams {
    let cfg = configs::UpstreamsConfig {
        pajak_url: format!("{base}/pajak"),
        tour_guide_url: format!("{base}/tourguide"),
        asuransi_url: format!("{base}/asuransi"),
        hotel_url: format!("{base}/hotel"),
        bank_url: format!("{base}/bank"),
    };
    Upstreams::from_config(&cfg)
}

pub fn destination(id: &str, name: &str) -> Destination {
    Destination {
        id_wisata: id.to_string(),
        nama_objek: name.to_string(),
        nama_daerah: "Bandung".to_string(),
        kategori: "Wisata Alam, Wisata Keluarga".to_string(),
        alamat: "Jl. Tangkuban Perahu".to_string(),
        kontak: "022".to_string(),
        harga_tiket: 40000,
        id_pajak: None,
        id_guide: None,
        id_asuransi: None,
        id_room: None,
        nik: None,
    }
}
