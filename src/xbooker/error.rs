use serde_json::Value;
use thiserror::Error;

/// Used when a failing envelope carries no `message` of its own.
const NO_MESSAGE: &str = "request was rejected without a message";

/// The one error kind for the whole exchange.
///
/// Every failure aborts the flow, so callers only ever print it;
/// the variants exist to give that message a useful shape.
#[derive(Debug, Error)]
pub enum RemoteRequestError {
    /// The server answered, but its envelope signalled failure or carried no data.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a readable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body wasn't a JSON envelope.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
    /// A token envelope succeeded, but its data wasn't a token.
    #[error("unexpected token payload: {0}")]
    UnexpectedPayload(serde_json::Value),
}

impl RemoteRequestError {
    /// Builds a rejection from an envelope's `message`, whatever JSON it holds.
    pub fn rejected(message: Option<Value>) -> Self {
        let message = match message {
            None | Some(Value::Null) => NO_MESSAGE.to_string(),
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
        };
        Self::Rejected(message)
    }
}
