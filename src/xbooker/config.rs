use std::{env, fmt};
use url::Url;

/// The production X-Booker host.
pub const DEFAULT_HOST: &str = "https://x-booker.app";

/// Environment variable allowing the host to be swapped out, e.g. for a local server.
const HOST_OVERRIDE_VAR: &str = "XBOOKER_HOST";

/// The delegated app's static client credentials.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub organization_id: String,
}

impl Credentials {
    /// Reads credentials from `CLIENT_ID`, `CLIENT_SECRET` and `ORGANIZATION_ID`.
    ///
    /// Missing variables are not an error here: they become empty strings and are
    /// forwarded as-is, leaving the server to reject them.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("CLIENT_SECRET").unwrap_or_default(),
            organization_id: env::var("ORGANIZATION_ID").unwrap_or_default(),
        }
    }
}

// Keep the secret out of any debug output or log line.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

/// Base URLs for the authentication and delegated API surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    auth_base: String,
    api_base: String,
}

impl Endpoints {
    /// Builds both bases from a host such as `https://x-booker.app`.
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            auth_base: format!("{host}/auth/v1"),
            api_base: format!("{host}/delegated/v1"),
        }
    }

    /// Uses `XBOOKER_HOST` if it holds a valid URL, otherwise the production host.
    pub fn from_env() -> Self {
        match env::var(HOST_OVERRIDE_VAR) {
            Ok(host) => match Url::parse(&host) {
                Ok(_) => Self::with_host(&host),
                Err(error) => {
                    tracing::warn!(%host, %error, "ignoring invalid XBOOKER_HOST");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// URL for a path under the authentication API.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}{path}", self.auth_base)
    }

    /// URL for a path under the delegated API.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_host(DEFAULT_HOST)
    }
}

/// Everything the exchange needs, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
}
