use drive_index_trigger::{TriggerClient, TriggerConfig, TriggerError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the verbatim response body.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(body) => println!("{body}"),
        Err(error) => {
            tracing::error!("drive index trigger failed: {error}");
            std::process::exit(error.exit_code());
        }
    }
}

/// Loads configuration, then performs the single trigger request.
///
/// The environment is read before the HTTP client exists, so a missing
/// variable never produces network traffic.
async fn run() -> Result<String, TriggerError> {
    let config = TriggerConfig::from_env()?;
    let client = TriggerClient::builder(config.cron_secret().to_string()).build();
    client.trigger(config.site_url()).await
}
