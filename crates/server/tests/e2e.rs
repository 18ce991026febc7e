use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use configs::{JoinConfig, UpstreamsConfig};
use service::destination::{DestinationStore, MemoryDestinationStore, SeaOrmDestinationStore};
use service::join::JoinService;
use service::upstream::Upstreams;

use server::startup::build_app;
use server::state::AppState;

struct TestApp {
    base_url: String,
}

async fn serve(router: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await { eprintln!("server error: {}", e); }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

/// Collaborators: three taxes, two guides, one insurance, two rooms,
/// a nested bank payload and a hotel-like service that is down.
fn fake_upstreams() -> Router {
    Router::new()
        .route("/pajak", get(|| async {
            Json(json!([
                {"id_pajak": 1, "jenis_pajak": "PB1", "tarif_pajak": 0.1, "besar_pajak": 4000.0},
                {"id_pajak": 2, "jenis_pajak": "PB1", "tarif_pajak": 0.1, "besar_pajak": 2500.0},
                {"id_pajak": 3, "jenis_pajak": "Hiburan", "tarif_pajak": 0.15, "besar_pajak": 7500.0}
            ]))
        }))
        .route("/tourguide", get(|| async {
            Json(json!([
                {"id_guide": 1, "nama_guider": "Asep", "profile": "Pemandu gunung", "fee": 150000.0},
                {"id_guide": 2, "nama_guider": "Rina", "profile": "Pemandu kota", "fee": 120000.0}
            ]))
        }))
        .route("/asuransi", get(|| async {
            Json(json!([{"id_asuransi": 7, "nama_wisata": "Tangkuban Perahu", "nama_daerah": "Bandung"}]))
        }))
        .route("/hotel", get(|| async {
            (StatusCode::SERVICE_UNAVAILABLE, "maintenance")
        }))
        .route("/bank", get(|| async {
            Json(json!({"data": {"data": [
                {"nik": 3273010101010001i64, "nama": "Budi", "kabupaten": "Bandung"}
            ]}}))
        }))
}

fn upstreams_at(base: &str) -> Upstreams {
    Upstreams::from_config(&UpstreamsConfig {
        pajak_url: format!("{base}/pajak"),
        tour_guide_url: format!("{base}/tourguide"),
        asuransi_url: format!("{base}/asuransi"),
        hotel_url: format!("{base}/hotel"),
        bank_url: format!("{base}/bank"),
    })
}

async fn start_server_with(store: Arc<dyn DestinationStore>) -> anyhow::Result<TestApp> {
    let upstream_base = serve(fake_upstreams()).await?;
    let joins = JoinService::new(Arc::clone(&store), upstreams_at(&upstream_base), JoinConfig::default());
    let app = build_app(AppState::new(store, joins));
    let base_url = serve(app).await?;
    Ok(TestApp { base_url })
}

async fn start_server() -> anyhow::Result<TestApp> {
    start_server_with(Arc::new(MemoryDestinationStore::seeded())).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn destination_body(id: &str) -> Value {
    json!({
        "id_wisata": id,
        "nama_objek": "Kawah Putih",
        "nama_daerah": "Ciwidey",
        "kategori": "Wisata Alam",
        "alamat": "Jl. Raya Soreang",
        "kontak": "022-5928",
        "harga_tiket": 28000
    })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"Data": "Successful"}));
    Ok(())
}

#[tokio::test]
async fn e2e_wisata_crud_flow() -> anyhow::Result<()> {
    let app = start_server_with(Arc::new(MemoryDestinationStore::new())).await?;
    let c = client();

    let res = c.post(format!("{}/wisata", app.base_url)).json(&destination_body("OP10")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Data wisata berhasil ditambahkan.");

    let got: Value = c.get(format!("{}/wisata/OP10", app.base_url)).send().await?.json().await?;
    assert_eq!(got["nama_objek"], "Kawah Putih");
    assert_eq!(got["id_pajak"], Value::Null);

    let mut changed = destination_body("ignored");
    changed["harga_tiket"] = json!(30000);
    let res = c.put(format!("{}/wisata/OP10", app.base_url)).json(&changed).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Data wisata berhasil diperbarui.");

    let got: Value = c.get(format!("{}/wisata/OP10", app.base_url)).send().await?.json().await?;
    assert_eq!(got["id_wisata"], "OP10");
    assert_eq!(got["harga_tiket"], 30000);

    let list: Vec<Value> = c.get(format!("{}/wisata", app.base_url)).send().await?.json().await?;
    assert_eq!(list.len(), 1);

    let res = c.delete(format!("{}/wisata/OP10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Data wisata berhasil dihapus.");

    let res = c.get(format!("{}/wisata/OP10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert!(body.is_null());

    let res = c.delete(format!("{}/wisata/OP10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .put(format!("{}/wisata/NOPE", app.base_url))
        .json(&destination_body("NOPE"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_negative_price_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let mut body = destination_body("OP11");
    body["harga_tiket"] = json!(-1);
    let res = client().post(format!("{}/wisata", app.base_url)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_database_backend_rejects_duplicate_id() -> anyhow::Result<()> {
    let db = models::db::connect_sqlite_memory().await?;
    {
        use migration::MigratorTrait;
        migration::Migrator::up(&db, None).await?;
    }
    let app = start_server_with(Arc::new(SeaOrmDestinationStore::new(db))).await?;
    let c = client();

    let first = c.post(format!("{}/wisata", app.base_url)).json(&destination_body("OP20")).send().await?;
    assert_eq!(first.status(), HttpStatusCode::OK);
    let second = c.post(format!("{}/wisata", app.base_url)).json(&destination_body("OP20")).send().await?;
    assert_eq!(second.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = second.json().await?;
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn e2e_wisata_pajak_zips_by_position() -> anyhow::Result<()> {
    let app = start_server().await?;
    let rows: Vec<Value> = client()
        .get(format!("{}/wisataPajak", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["id_wisata"], "OP01");
    assert_eq!(rows[0]["id_pajak"], 1);
    assert_eq!(rows[2]["id_pajak"], 3);
    assert!(rows[3]["id_pajak"].is_null());
    assert!(rows[4]["jenis_pajak"].is_null());
    assert_eq!(rows[4]["id_wisata"], "OP05");
    Ok(())
}

#[tokio::test]
async fn e2e_wisata_pajak_by_key() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let rows: Vec<Value> = c.get(format!("{}/wisataPajak/2", app.base_url)).send().await?.json().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id_pajak"], 2);

    let res = c.get(format!("{}/wisataPajak/99", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_upstream_failure_is_relayed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/wisataHotel", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Upstream Error");

    let res = c.get(format!("{}/hotel", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn e2e_bank_reads_nested_payload() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let banks: Vec<Value> = c.get(format!("{}/bank", app.base_url)).send().await?.json().await?;
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0]["nama"], "Budi");

    let rows: Vec<Value> = c.get(format!("{}/wisataBank", app.base_url)).send().await?.json().await?;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["nik"], 3273010101010001i64);
    assert_eq!(rows[0]["kabupaten"], "Bandung");
    Ok(())
}

#[tokio::test]
async fn e2e_remote_single_record_or_null() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let guide: Value = c.get(format!("{}/tourGuide/2", app.base_url)).send().await?.json().await?;
    assert_eq!(guide["nama_guider"], "Rina");

    let missing: Value = c.get(format!("{}/asuransi/1", app.base_url)).send().await?.json().await?;
    assert!(missing.is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_metrics_and_docs() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let _ = c.get(format!("{}/pajak", app.base_url)).send().await?;
    let res = c.get(format!("{}/metrics", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let text = res.text().await?;
    assert!(text.contains("wisata_upstream_fetch_total"));

    let res = c.get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc: Value = res.json().await?;
    assert!(doc["paths"]["/wisata"].is_object());
    Ok(())
}
