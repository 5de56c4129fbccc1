//! HTTP API: `GET /mkad?address=...` and `GET /health`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::geocoder::{GeocodeError, GeocodeFallbackChain};
use crate::models::DistanceKm;
use crate::ring::{RingPosition, RingService};

pub const INSIDE_MESSAGE: &str = "Given address is inside the MKAD.";
pub const MISSING_ADDRESS_MESSAGE: &str = "address: missing data for required field";
pub const UNPARSEABLE_ADDRESS_MESSAGE: &str = "Could not parse address provided";
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred, try again later!";

/// Application state shared across handlers
pub struct AppState {
    pub geocoder: GeocodeFallbackChain,
    pub ring: RingService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/mkad", get(mkad_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct MkadQueryParams {
    /// Free-form address to geocode
    pub address: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MkadResponse {
    Inside { message: &'static str },
    Outside { distance_km: DistanceKm },
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug)]
pub enum ApiError {
    MissingAddress,
    Geocode(GeocodeError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress => StatusCode::BAD_REQUEST,
            ApiError::Geocode(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Geocode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::MissingAddress => MISSING_ADDRESS_MESSAGE,
            ApiError::Geocode(e) if e.is_client_error() => UNPARSEABLE_ADDRESS_MESSAGE,
            ApiError::Geocode(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Geocode the address, then report containment or distance.
pub async fn mkad_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MkadQueryParams>,
) -> Result<Json<MkadResponse>, ApiError> {
    let address = params
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| {
            error!("Request without address");
            ApiError::MissingAddress
        })?;

    let coordinate = state.geocoder.resolve(address).await.map_err(|e| {
        error!("Geocoding failed for {:?}: {}", address, e);
        ApiError::Geocode(e)
    })?;

    let response = match state.ring.locate(coordinate) {
        RingPosition::Inside => {
            info!("{} is inside of the MKAD", address);
            MkadResponse::Inside {
                message: INSIDE_MESSAGE,
            }
        }
        RingPosition::Outside { distance } => {
            info!("Distance to {}: {}", address, distance);
            MkadResponse::Outside {
                distance_km: distance,
            }
        }
    };

    Ok(Json(response))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    vertices: usize,
    strategy: &'static str,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        vertices: state.ring.curve().len(),
        strategy: state.ring.strategy_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YandexConfig;
    use crate::geocoder::test_support::{serve, StubGeocoder};
    use crate::geocoder::{Geocoder, YandexGeocoder};
    use crate::ring::{BoundaryCurve, StrategyKind};
    use serde_json::json;

    fn state(primary: impl Geocoder + 'static, fallback: impl Geocoder + 'static) -> Arc<AppState> {
        Arc::new(AppState {
            geocoder: GeocodeFallbackChain::new(Box::new(primary), Box::new(fallback)),
            ring: RingService::new(
                Arc::new(BoundaryCurve::mkad().unwrap()),
                StrategyKind::LinearScan,
            ),
        })
    }

    async fn call(state: Arc<AppState>, address: Option<&str>) -> Result<MkadResponse, ApiError> {
        let params = MkadQueryParams {
            address: address.map(String::from),
        };
        mkad_handler(State(state), Query(params))
            .await
            .map(|Json(r)| r)
    }

    #[tokio::test]
    async fn test_missing_address() {
        let s = state(StubGeocoder::ok(0.0, 0.0), StubGeocoder::ok(0.0, 0.0));
        for address in [None, Some(""), Some("  ")] {
            let err = call(s.clone(), address).await.unwrap_err();
            assert!(matches!(err, ApiError::MissingAddress));
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_inside_has_no_distance() {
        let s = state(
            StubGeocoder::ok(55.715423, 37.646013),
            StubGeocoder::ok(0.0, 0.0),
        );
        let response = call(s, Some("Paveletskaya Naberezhnaya, Moscow"))
            .await
            .unwrap();

        assert_eq!(
            response,
            MkadResponse::Inside {
                message: INSIDE_MESSAGE
            }
        );
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body, json!({ "message": "Given address is inside the MKAD." }));
        assert!(body.get("distance_km").is_none());
    }

    #[tokio::test]
    async fn test_outside_reports_distance() {
        let s = state(
            StubGeocoder::ok(38.889865, -77.033039),
            StubGeocoder::ok(0.0, 0.0),
        );
        let response = call(s, Some("2 15th St NW, Washington, DC 20024"))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "distance_km": 7825 })
        );
    }

    #[tokio::test]
    async fn test_fallback_geocoder_used() {
        let s = state(
            StubGeocoder::err(GeocodeError::ServiceUnavailable("down".into())),
            StubGeocoder::ok(38.889865, -77.033039),
        );
        let response = call(s, Some("2 15th St NW")).await.unwrap();
        assert_eq!(
            response,
            MkadResponse::Outside {
                distance_km: DistanceKm(7825)
            }
        );
    }

    #[tokio::test]
    async fn test_both_geocoders_failing_is_bad_request() {
        let s = state(
            StubGeocoder::err(GeocodeError::InvalidAddress),
            StubGeocoder::err(GeocodeError::NoResults),
        );
        let err = call(s, Some("?")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), UNPARSEABLE_ADDRESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_primary_response_is_bad_request() {
        let s = state(
            StubGeocoder::err(GeocodeError::MalformedResponse("featureMember".into())),
            StubGeocoder::ok(0.0, 0.0),
        );
        let err = call(s, Some("?")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_geocoder_outage_is_server_error() {
        let s = state(
            StubGeocoder::err(GeocodeError::InvalidCredentials),
            StubGeocoder::err(GeocodeError::ServiceUnavailable("timeout".into())),
        );
        let err = call(s, Some("Red Square")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);
    }

    /// Fake Yandex answering `"30 50"` (lon lat) for every address.
    async fn fake_yandex_base() -> String {
        let body = json!({
            "response": { "GeoObjectCollection": { "featureMember": [
                { "GeoObject": { "Point": { "pos": "30 50" } } }
            ] } }
        });
        let app = Router::new().route(
            "/1.x/",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        serve(app).await
    }

    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let yandex_base = fake_yandex_base().await;
        let yandex = YandexGeocoder::new(
            &YandexConfig {
                base_url: format!("{}/1.x/", yandex_base),
                api_key: Some("key".to_string()),
            },
            reqwest::Client::new(),
        )
        .unwrap();
        let s = state(yandex, StubGeocoder::ok(0.0, 0.0));
        let base = serve(router(s)).await;
        let client = reqwest::Client::new();

        // (50, 30) after reordering: central Ukraine
        let url = url::Url::parse_with_params(&format!("{}/mkad", base), &[("address", "Kyiv")])
            .unwrap();
        let response = client.get(url).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "distance_km": 801 }));

        let response = client.get(format!("{}/mkad", base)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": MISSING_ADDRESS_MESSAGE }));

        let response = client.get(format!("{}/health", base)).send().await.unwrap();
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "status": "ok", "vertices": 108, "strategy": "linear_scan" })
        );
    }
}
