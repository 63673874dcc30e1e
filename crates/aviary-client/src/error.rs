use thiserror::Error;

/// Failure of a single gateway round trip.
///
/// `Transport` preserves the underlying reqwest error unmodified; `Api`
/// carries the status and server-provided message of a non-2xx response.
/// Callers can therefore tell "not found" apart from "network unreachable".
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (connect failure, timeout, bad URL).
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server responded {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl GatewayError {
    /// True when the server reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GatewayError::Api { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}
