use dubrovnik_tours::config::get_configuration;
use dubrovnik_tours::startup::AppServer;
use dubrovnik_tours::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "dubrovnik_tours".into(),
        "info".into(),
        std::io::stdout,
    ))?;

    let configuration = get_configuration()?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
