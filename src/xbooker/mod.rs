mod config;
mod envelope;
mod error;
pub(crate) mod http_client;
mod login;
mod tokens;

pub use config::{Config, Credentials, Endpoints};
pub use envelope::ApiResponse;
pub use error::RemoteRequestError;
pub use login::run;
