use gram_net::config::ServerConfig;
use gram_net::server::build_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    build_server(config).await?;

    Ok(())
}
