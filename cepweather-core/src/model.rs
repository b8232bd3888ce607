use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Validated Brazilian postal code (CEP): exactly 8 decimal digits, no
/// dashes or spaces. Construct through [`Cep::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

impl Cep {
    pub fn parse(raw: &str) -> Result<Self, WeatherError> {
        if is_valid_cep(raw) { Ok(Self(raw.to_string())) } else { Err(WeatherError::InvalidCep) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digit check is Unicode-aware; the length check is in bytes, so a
/// multi-byte digit sequence only passes while it still fits in 8 bytes.
pub fn is_valid_cep(raw: &str) -> bool {
    raw.len() == 8 && raw.chars().all(char::is_numeric)
}

/// Current temperature as reported by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temp_c: f64,
    pub temp_f: f64,
}

/// The one entity returned to clients. Built fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResponse {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl TemperatureResponse {
    pub fn from_reading(reading: WeatherReading) -> Self {
        Self {
            temp_c: reading.temp_c,
            temp_f: reading.temp_f,
            temp_k: reading.temp_c + 273.15,
        }
    }
}
