mod configuration;

use crate::configuration::Configuration;
use clap::Parser;
use tokenpair::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let configuration = Configuration::parse();

    let server = Server::from_configuration(&configuration.server_configuration)?;

    server.serve().await?;

    Ok(())
}
