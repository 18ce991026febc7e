use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics, types::Health};
use service::join::{AsuransiPair, BankPair, HotelPair, PajakPair, TourGuidePair};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod joins;
pub mod remote;
pub mod wisata;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::successful())
}

async fn metrics_handler() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: destination CRUD, remote proxies,
/// joined views, metrics and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let destinations = Router::new()
        .route("/wisata", get(wisata::list).post(wisata::create))
        .route("/wisata/:id", get(wisata::get).put(wisata::update).delete(wisata::delete));

    let remotes = Router::new()
        .route("/pajak", get(remote::list::<PajakPair>))
        .route("/pajak/:id", get(remote::get::<PajakPair>))
        .route("/tourGuide", get(remote::list::<TourGuidePair>))
        .route("/tourGuide/:id", get(remote::get::<TourGuidePair>))
        .route("/asuransi", get(remote::list::<AsuransiPair>))
        .route("/asuransi/:id", get(remote::get::<AsuransiPair>))
        .route("/hotel", get(remote::list::<HotelPair>))
        .route("/hotel/:id", get(remote::get::<HotelPair>))
        .route("/bank", get(remote::list::<BankPair>))
        .route("/bank/:id", get(remote::get::<BankPair>));

    let joined = Router::new()
        .route("/wisataPajak", get(joins::list::<PajakPair>))
        .route("/wisataPajak/:key", get(joins::by_key::<PajakPair>))
        .route("/wisataTourGuide", get(joins::list::<TourGuidePair>))
        .route("/wisataTourGuide/:key", get(joins::by_key::<TourGuidePair>))
        .route("/wisataAsuransi", get(joins::list::<AsuransiPair>))
        .route("/wisataAsuransi/:key", get(joins::by_key::<AsuransiPair>))
        .route("/wisataHotel", get(joins::list::<HotelPair>))
        .route("/wisataHotel/:key", get(joins::by_key::<HotelPair>))
        .route("/wisataBank", get(joins::list::<BankPair>))
        .route("/wisataBank/:key", get(joins::by_key::<BankPair>));

    Router::new()
        .route("/", get(health))
        .route("/metrics", get(metrics_handler))
        .merge(destinations)
        .merge(remotes)
        .merge(joined)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
