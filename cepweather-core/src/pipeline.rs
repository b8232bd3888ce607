//! Request orchestration: validate → resolve locality → fetch weather →
//! compose the temperature response.
//!
//! The pipeline is stateless and holds no per-request data, so one value is
//! shared across all inbound requests. The two upstream calls are the only
//! await points; dropping the future (client disconnect) aborts whichever
//! call is in flight.

use crate::{
    error::WeatherError,
    geocode::CepResolver,
    model::{Cep, TemperatureResponse},
    provider::WeatherProvider,
};

#[derive(Debug)]
pub struct WeatherPipeline<R, W> {
    resolver: R,
    weather: W,
}

impl<R: CepResolver, W: WeatherProvider> WeatherPipeline<R, W> {
    pub fn new(resolver: R, weather: W) -> Self {
        Self { resolver, weather }
    }

    /// Run the full pipeline for a raw `cep` query value. Every stage
    /// failure is terminal; nothing is retried or partially returned.
    pub async fn current_by_cep(&self, raw: &str) -> Result<TemperatureResponse, WeatherError> {
        let cep = Cep::parse(raw)?;

        let locality = self.resolver.resolve(&cep).await?;
        tracing::debug!(cep = %cep, locality = %locality, "resolved locality");

        let reading = self.weather.current(&locality).await?;

        Ok(TemperatureResponse::from_reading(reading))
    }
}
