//! Errors raised while talking to a routing provider.
//!
//! These stay inside the crate boundary: the estimation service turns every
//! one of them into a failed [`RouteResult`](crate::service::RouteResult).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Provider answered but reported a non-`Ok` code (e.g. `NoRoute`, `InvalidQuery`).
    #[error("provider status {code}: {message}")]
    Provider { code: String, message: String },

    #[error("provider returned no routes")]
    NoRoute,

    #[error("malformed provider response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to start route workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl RouteError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            RouteError::Transport(_) => true,
            RouteError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            RouteError::Provider { .. }
            | RouteError::NoRoute
            | RouteError::Malformed(_)
            | RouteError::ThreadPool(_) => false,
        }
    }
}
