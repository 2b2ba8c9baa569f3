use nationality_guesser::{server, settings::Settings, skill::Skill};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_file();
    let client = guess_api::Client::new(settings.endpoints()?, settings.connection_policy())?;
    let router = server::router(Skill::new(client), settings.application_id.clone());

    let listener = TcpListener::bind(&settings.listen_address).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    server::serve(listener, router).await?;

    Ok(())
}
