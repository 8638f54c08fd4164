use super::{ApiResponse, Credentials, RemoteRequestError};
use reqwest::RequestBuilder;

/// Header names shared by every X-Booker request.
pub const CLIENT_ID_HEADER: &str = "client-id";
pub const CLIENT_SECRET_HEADER: &str = "client-secret";
pub const ORGANIZATION_ID_HEADER: &str = "organization-id";

/// Starts a GET carrying the client and organization identifiers.
/// Callers add whichever secret or bearer token their endpoint expects.
pub fn identified_get(
    client: &reqwest::Client,
    url: &str,
    credentials: &Credentials,
) -> RequestBuilder {
    client
        .get(url)
        .header(CLIENT_ID_HEADER, &credentials.client_id)
        .header(ORGANIZATION_ID_HEADER, &credentials.organization_id)
}

/// Sends the request and parses its body as an envelope.
///
/// We don't judge the HTTP status here: the service reports failures within
/// the envelope itself, so its `success` flag is what counts.
pub async fn fetch_envelope(request: RequestBuilder) -> Result<ApiResponse, RemoteRequestError> {
    let result = request.send().await?;
    let status = result.status();
    tracing::debug!(url = %result.url(), %status, "received response");

    let response_text = result.text().await?;
    match serde_json::from_str(&response_text) {
        Ok(envelope) => Ok(envelope),
        Err(error) => {
            tracing::debug!(%status, %error, "response body was not an envelope");
            Err(RemoteRequestError::Parse(error))
        }
    }
}
