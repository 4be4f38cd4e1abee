use std::error::Error as _;

use reqwest::StatusCode;
use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "Error fetching news";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Network(String), // connect, DNS, TLS, timeout
    #[error("Request failed with status code {}", .0.as_u16())]
    Status(StatusCode),
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    // What the screen shows; never empty.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            msg
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status(status);
        }
        let text = chain(&err);
        if err.is_decode() {
            FetchError::Decode(text)
        } else {
            FetchError::Network(text)
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

// reqwest's Display stops at the outermost layer ("error sending request").
fn chain(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_reads_like_http_client() {
        let err = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Request failed with status code 500");
    }

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(FetchError::Network(String::new()).message(), FALLBACK_MESSAGE);
        assert_eq!(FetchError::Decode("  ".into()).message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn network_text_is_kept() {
        let err = FetchError::Network("operation timed out".into());
        assert_eq!(err.message(), "operation timed out");
    }

    #[test]
    fn serde_errors_are_decode_errors() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.message().is_empty());
    }
}
