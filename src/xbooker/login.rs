use super::tokens::{fetch_access_token, fetch_refresh_token};
use super::{ApiResponse, Config, RemoteRequestError};
use crate::api::ApiClient;

/// Exchanges the app credentials for an access token, and wraps it in an ``ApiClient``.
///
/// Neither token outlives this process: every run starts from the credentials.
pub async fn login(
    client: reqwest::Client,
    config: &Config,
) -> Result<ApiClient, RemoteRequestError> {
    let refresh_token = fetch_refresh_token(&client, config).await?;
    tracing::debug!("obtained refresh token");

    let access_token = fetch_access_token(&client, config, &refresh_token).await?;
    tracing::debug!("obtained access token");

    Ok(ApiClient::new(client, config.clone(), access_token))
}

/// The whole flow: log in, then look up our organization.
pub async fn run(config: &Config) -> Result<ApiResponse, RemoteRequestError> {
    let api_client = login(reqwest::Client::new(), config).await?;
    api_client.fetch_organization().await
}
