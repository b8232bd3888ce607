//! CEP geocoding against the ViaCEP API.
//!
//! Maps a validated CEP to a locality name. Single attempt, no retries; the
//! caller turns any failure into a terminal HTTP response.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;

use crate::{error::WeatherError, model::Cep};

#[async_trait]
pub trait CepResolver: Send + Sync + Debug {
    async fn resolve(&self, cep: &Cep) -> Result<String, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct ViaCepClient {
    base_url: String,
    http: Client,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), http }
    }
}

/// ViaCEP reports an unknown CEP as `200 {"erro": true}` rather than a 404,
/// and omits `localidade` in that case. Decode both fields as optional.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    localidade: Option<String>,
    erro: Option<bool>,
}

#[async_trait]
impl CepResolver for ViaCepClient {
    async fn resolve(&self, cep: &Cep) -> Result<String, WeatherError> {
        let url = format!("{}/{}/json/", self.base_url, cep);

        let res =
            self.http.get(&url).send().await.map_err(WeatherError::CepServiceUnreachable)?;

        let status = res.status();
        match status {
            StatusCode::NOT_FOUND => return Err(WeatherError::CepNotFound),
            StatusCode::OK => {}
            _ => {
                tracing::warn!(%status, cep = %cep, "unexpected CEP service status");
                return Err(WeatherError::CepServiceFailed(status.as_u16()));
            }
        }

        let body = res.text().await.map_err(WeatherError::CepServiceUnreachable)?;

        let parsed: ViaCepResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(body = %crate::truncate_body(&body), "malformed CEP payload");
            WeatherError::InvalidCepPayload(e)
        })?;

        if parsed.erro.unwrap_or(false) {
            return Err(WeatherError::CepNotFound);
        }

        match parsed.localidade {
            Some(locality) if !locality.is_empty() => Ok(locality),
            _ => Err(WeatherError::InvalidCepPayload(missing_field_error("localidade"))),
        }
    }
}

fn missing_field_error(field: &str) -> serde_json::Error {
    serde::de::Error::custom(format!("missing field `{field}`"))
}
