// crates/carousel-app/src/error.rs
// Catalog load failure

use thiserror::Error;

/// Why the product list could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("Cannot get products (HTTP {0})")]
    Status(u16),

    #[error("invalid catalog response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

impl From<gloo_net::Error> for LoadError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => LoadError::Parse(e.to_string()),
            other => LoadError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(LoadError::Status(503).to_string(), "Cannot get products (HTTP 503)");
    }

    #[test]
    fn test_from_serde_error_is_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Parse(_)));
    }
}
