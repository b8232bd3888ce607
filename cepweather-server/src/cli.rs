use clap::Parser;
use std::path::PathBuf;

use cepweather_core::Config;

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cepweather-server", version, about = "CEP weather HTTP service")]
pub struct Cli {
    /// Path to the TOML config file; defaults to the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen port, overriding the config file.
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let port = self.port.unwrap_or(config.server.port);
        let state = server::build_state(&config)?;

        server::serve(state, port).await
    }
}
