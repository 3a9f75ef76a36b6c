//! Error taxonomy for the audit engine.
//!
//! Only a transport-level failure of the *primary* fetch aborts an audit
//! run. Non-2xx HTTP responses are data (captured as the status code in a
//! valid `FetchResult`), auxiliary probe failures degrade their own check,
//! malformed HTML degrades silently during parsing, and enrichment failures
//! are dropped per check.

use thiserror::Error;

/// Fatal errors for an audit run.
///
/// Produced only by the primary fetch (or client construction); everything
/// downstream of a successful fetch degrades in place instead of erroring.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input could not be normalized into an http(s) URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The input as given by the caller.
        url: String,
        /// Why normalization rejected it.
        reason: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Connection-level failure: refused, DNS failure, unreachable network.
    #[error("could not reach {url}: {source}")]
    Unreachable {
        /// The URL that could not be reached.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// Any other transport-level failure (protocol error, body read failure).
    #[error("transport error for {url}: {source}")]
    Transport {
        /// The URL being fetched.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

impl FetchError {
    /// Classifies a `reqwest` transport error into the audit taxonomy.
    pub(crate) fn classify(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            FetchError::Unreachable {
                url: url.to_string(),
                source: err,
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Failure of the optional generative-text enrichment collaborator.
///
/// Never fatal: the fixed issue/recommendation texts stand alone when
/// elaboration fails.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// The collaborator is not configured or cannot be reached.
    #[error("elaboration provider unavailable: {0}")]
    Unavailable(String),

    /// The collaborator was reached but the request failed.
    #[error("elaboration request failed: {0}")]
    Failed(String),
}
