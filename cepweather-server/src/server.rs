//! HTTP surface: one route, `GET /weather?cep=<8 digits>`.
//!
//! Success responses are JSON; every failure is a single-line plain-text
//! message with the status from [`WeatherError::http_status`]. Non-GET
//! methods are rejected before the pipeline runs.

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use cepweather_core::{
    Config, TemperatureResponse, ViaCepClient, WeatherApiClient, WeatherError, WeatherPipeline,
};
use serde::Deserialize;
use std::sync::Arc;

pub type Pipeline = WeatherPipeline<ViaCepClient, WeatherApiClient>;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

/// Wire both upstream clients from config. One reqwest client carries the
/// configured timeout for both calls.
pub fn build_state(config: &Config) -> Result<AppState> {
    let api_key = config.weather_api_key()?.to_string();

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let resolver = ViaCepClient::new(config.viacep.base_url.clone(), http.clone());
    let weather = WeatherApiClient::new(config.weatherapi.base_url.clone(), api_key, http);

    Ok(AppState { pipeline: Arc::new(WeatherPipeline::new(resolver, weather)) })
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/weather", any(get_weather)).with_state(state)
}

/// Bind the listener and serve until Ctrl-C.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    tracing::info!(addr = %listener.local_addr().context("listener has no local addr")?, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    cep: Option<String>,
}

// Only GET runs the pipeline. axum's `get` router would also serve HEAD,
// so the method check is explicit.
async fn get_weather(
    method: Method,
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "method not allowed\n").into_response();
    }

    let raw = query.cep.as_deref().unwrap_or_default();

    match state.pipeline.current_by_cep(raw).await {
        Ok(temps) => json_response(&temps),
        Err(err) => error_response(&err),
    }
}

fn json_response(temps: &TemperatureResponse) -> Response {
    match serde_json::to_vec(temps) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => error_response(&WeatherError::EncodeFailed(e)),
    }
}

fn error_response(err: &WeatherError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::warn!(%status, error = ?err, "request failed");
    } else {
        tracing::debug!(%status, error = %err, "request rejected");
    }

    (status, format!("{err}\n")).into_response()
}
