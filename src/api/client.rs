use crate::xbooker::http_client::{fetch_envelope, identified_get};
use crate::xbooker::{ApiResponse, Config, RemoteRequestError};

/// Calls the delegated API on behalf of the organization.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    /// The access token presented on every request.
    access_token: String,
}

impl ApiClient {
    /// Creates a new API client around the given access token.
    pub fn new(http: reqwest::Client, config: Config, access_token: String) -> Self {
        Self {
            http,
            config,
            access_token,
        }
    }

    /// Performs an authenticated GET against `path` under the delegated API.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, RemoteRequestError> {
        let url = self.config.endpoints.api_url(path);
        tracing::debug!(%url, "calling delegated API");

        let request = identified_get(&self.http, &url, &self.config.credentials)
            .bearer_auth(&self.access_token);
        fetch_envelope(request).await?.ensure_success()
    }

    /// Retrieves the organization this app is delegated for.
    pub async fn fetch_organization(&self) -> Result<ApiResponse, RemoteRequestError> {
        self.get("/organization").await
    }
}
