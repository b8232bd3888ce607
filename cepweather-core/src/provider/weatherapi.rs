use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::WeatherError, model::WeatherReading, truncate_body};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, locality: &str) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", locality), ("aqi", "no")])
            .send()
            .await
            .map_err(WeatherError::WeatherServiceUnreachable)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::WeatherServiceUnreachable)?;

        if !status.is_success() {
            tracing::warn!(%status, body = %truncate_body(&body), "weather request failed");
            return Err(WeatherError::WeatherServiceFailed(status.as_u16()));
        }

        let parsed: WaResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(body = %truncate_body(&body), "malformed weather payload");
            WeatherError::InvalidWeatherPayload(e)
        })?;

        Ok(WeatherReading { temp_c: parsed.current.temp_c, temp_f: parsed.current.temp_f })
    }
}
