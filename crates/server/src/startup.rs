use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::destination::{DestinationStore, MemoryDestinationStore, SeaOrmDestinationStore};
use service::join::JoinService;
use service::upstream::Upstreams;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Build the destination store selected by `store.backend`.
/// The database backend creates its schema if it does not exist yet.
pub async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn DestinationStore>, StartupError> {
    match cfg.store.backend {
        StoreBackend::Memory => {
            let store = if cfg.store.seed_sample_data {
                MemoryDestinationStore::seeded()
            } else {
                MemoryDestinationStore::new()
            };
            info!(seeded = cfg.store.seed_sample_data, "using in-memory destination store");
            Ok(Arc::new(store))
        }
        StoreBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            info!("using database destination store");
            Ok(Arc::new(SeaOrmDestinationStore::new(db)))
        }
    }
}

/// Wire store, upstream adapters and join service into handler state.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let store = build_store(cfg).await?;
    let upstreams = Upstreams::from_config(&cfg.upstreams);
    let joins = JoinService::new(Arc::clone(&store), upstreams, cfg.join);
    Ok(AppState::new(store, joins))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app from an already loaded config and serve it.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    info!(
        backend = ?cfg.store.backend,
        pajak = cfg.join.pajak.as_str(),
        tour_guide = cfg.join.tour_guide.as_str(),
        asuransi = cfg.join.asuransi.as_str(),
        hotel = cfg.join.hotel.as_str(),
        bank = cfg.join.bank.as_str(),
        "configuration loaded"
    );

    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting wisata server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
