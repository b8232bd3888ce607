//! Error taxonomy for the request pipeline.
//!
//! Each variant carries the exact single-line message the HTTP layer sends
//! to clients; upstream detail stays in the error source and the logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("cep must have exactly 8 digits")]
    InvalidCep,

    #[error("cep not found")]
    CepNotFound,

    #[error("failed to reach CEP service")]
    CepServiceUnreachable(#[source] reqwest::Error),

    #[error("cep service error")]
    CepServiceFailed(u16),

    #[error("invalid cep response")]
    InvalidCepPayload(#[source] serde_json::Error),

    #[error("failed to reach weather service")]
    WeatherServiceUnreachable(#[source] reqwest::Error),

    // Message kept verbatim from the previous service for client
    // compatibility, even though the failure is at the weather stage.
    #[error("can not find zipcode")]
    WeatherServiceFailed(u16),

    #[error("invalid weather response")]
    InvalidWeatherPayload(#[source] serde_json::Error),

    #[error("failed to encode response")]
    EncodeFailed(#[source] serde_json::Error),
}

impl WeatherError {
    /// HTTP status the handler responds with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidCep => 422,
            Self::CepNotFound => 404,
            Self::CepServiceUnreachable(_)
            | Self::CepServiceFailed(_)
            | Self::InvalidCepPayload(_)
            | Self::WeatherServiceUnreachable(_)
            | Self::WeatherServiceFailed(_)
            | Self::InvalidWeatherPayload(_) => 502,
            Self::EncodeFailed(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json")
    }

    #[test]
    fn client_faults_map_to_4xx() {
        assert_eq!(WeatherError::InvalidCep.http_status(), 422);
        assert_eq!(WeatherError::CepNotFound.http_status(), 404);
    }

    #[test]
    fn upstream_faults_map_to_bad_gateway() {
        assert_eq!(WeatherError::CepServiceFailed(500).http_status(), 502);
        assert_eq!(WeatherError::WeatherServiceFailed(403).http_status(), 502);
        assert_eq!(WeatherError::InvalidCepPayload(json_error()).http_status(), 502);
        assert_eq!(WeatherError::InvalidWeatherPayload(json_error()).http_status(), 502);
    }

    #[test]
    fn encode_failure_is_a_server_fault() {
        assert_eq!(WeatherError::EncodeFailed(json_error()).http_status(), 500);
    }

    #[test]
    fn messages_are_single_line() {
        let errors = [
            WeatherError::InvalidCep,
            WeatherError::CepNotFound,
            WeatherError::CepServiceFailed(500),
            WeatherError::WeatherServiceFailed(500),
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'));
        }
    }

    #[test]
    fn weather_failure_keeps_legacy_message() {
        assert_eq!(WeatherError::WeatherServiceFailed(500).to_string(), "can not find zipcode");
    }
}
