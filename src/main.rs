mod api;
mod xbooker;

use crate::xbooker::{Config, Credentials, Endpoints, RemoteRequestError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr, keeping stdout for the result itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A .env file is optional; real environment variables work just as well.
    if let Err(error) = dotenvy::dotenv() {
        tracing::debug!(%error, "no .env file loaded");
    }

    let config = Config {
        credentials: Credentials::from_env(),
        endpoints: Endpoints::from_env(),
    };
    tracing::debug!(?config, "starting token exchange");

    // Failures are reported, not propagated: the process always exits normally.
    match xbooker::run(&config).await {
        Ok(organization) => println!("Organization found {}", describe(&organization)),
        Err(error) => println!("{}", report(&error)),
    }
}

/// Renders an envelope as pretty JSON, falling back to its debug form.
fn describe(organization: &xbooker::ApiResponse) -> String {
    serde_json::to_string_pretty(organization).unwrap_or_else(|_| format!("{organization:?}"))
}

fn report(error: &RemoteRequestError) -> String {
    format!("Error: {error}")
}
