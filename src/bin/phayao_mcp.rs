use std::path::PathBuf;

use phayao_hub::PhayaoConfig;
use phayao_hub::mcp::run_server;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the stdio transport
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new("warn")
                .add_directive("phayao_hub=info".parse().expect("static directive"))
        });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = std::env::var_os("PHAYAO_CONFIG").map(PathBuf::from);
    let config = PhayaoConfig::load(config_path.as_deref())?;

    run_server(config).await
}
