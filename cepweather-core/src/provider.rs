use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::WeatherError, model::WeatherReading};

pub mod weatherapi;

/// Current-conditions lookup for a locality name.
///
/// The locality is treated as an opaque query term; the implementation is
/// responsible for URL-encoding it.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, locality: &str) -> Result<WeatherReading, WeatherError>;
}
