use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the remote validation probes. `Rejected` means the API
/// answered and said no; `Transport` covers everything that kept an answer
/// from arriving, timeouts included.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("could not reach the API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("the API rejected the request with status {0}")]
    Rejected(StatusCode),
}
