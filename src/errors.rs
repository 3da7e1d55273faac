use reqwest::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status(endpoint: &'static str, status: StatusCode) -> Self {
        Self::Status { endpoint, status }
    }

    pub fn transport(endpoint: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { endpoint, source }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { endpoint, status } => {
                write!(f, "{endpoint} returned {status}")
            }
            Self::Transport { endpoint, source } => {
                write!(f, "{endpoint} request failed: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Status { .. } => None,
            Self::Transport { source, .. } => Some(source),
        }
    }
}
