use super::http_client::{fetch_envelope, identified_get, CLIENT_SECRET_HEADER};
use super::{Config, RemoteRequestError};

/// Requests a refresh token using the app's static client credentials.
pub async fn fetch_refresh_token(
    client: &reqwest::Client,
    config: &Config,
) -> Result<String, RemoteRequestError> {
    let url = config.endpoints.auth_url("/tokens/refresh");
    tracing::debug!(%url, "requesting refresh token");

    let request = identified_get(client, &url, &config.credentials)
        .header(CLIENT_SECRET_HEADER, &config.credentials.client_secret);
    fetch_envelope(request).await?.into_token("refreshToken")
}

/// Exchanges a refresh token for a short-lived access token.
/// The refresh token is presented as a bearer token; the secret isn't sent again.
pub async fn fetch_access_token(
    client: &reqwest::Client,
    config: &Config,
    refresh_token: &str,
) -> Result<String, RemoteRequestError> {
    let url = config.endpoints.auth_url("/tokens/access");
    tracing::debug!(%url, "requesting access token");

    let request = identified_get(client, &url, &config.credentials).bearer_auth(refresh_token);
    fetch_envelope(request).await?.into_token("accessToken")
}
