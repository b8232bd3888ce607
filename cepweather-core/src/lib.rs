//! Core library for the CEP weather service.
//!
//! This crate defines:
//! - Configuration handling (upstream endpoints, credentials, timeouts)
//! - CEP validation and the shared domain models
//! - The ViaCEP geocoding client and the WeatherAPI.com client
//! - The request pipeline that chains validation, geocoding and weather
//!
//! It is used by `cepweather-server`, but can also be reused by other
//! binaries or services.

pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use geocode::{CepResolver, ViaCepClient};
pub use model::{Cep, TemperatureResponse, WeatherReading, is_valid_cep};
pub use pipeline::WeatherPipeline;
pub use provider::{WeatherProvider, weatherapi::WeatherApiClient};

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Walk back to a char boundary so the slice never splits a multi-byte
    // character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
