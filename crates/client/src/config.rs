//! Classifier endpoint configuration.
//!
//! The endpoint should be resolved once at process startup and then passed
//! into the client, rather than read from the environment during request
//! handling.

use crate::error::{ClientError, ClientResult};
use reqwest::Url;

/// Endpoint used when no override is configured.
pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:8000/predict";

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    endpoint: Url,
}

impl ClassifierConfig {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Parse the classifier endpoint from an optional env value.
///
/// If `value` is `None` or empty/whitespace, returns the default endpoint.
///
/// # Errors
///
/// Returns `ClientError::InvalidEndpoint` if the value does not parse as an
/// absolute URL.
pub fn classifier_url_from_env_value(value: Option<String>) -> ClientResult<Url> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let raw = value.unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.to_owned());

    Url::parse(&raw).map_err(|e| ClientError::InvalidEndpoint {
        url: raw,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        let unset = classifier_url_from_env_value(None).expect("default endpoint");
        let blank = classifier_url_from_env_value(Some("   ".into())).expect("default endpoint");
        assert_eq!(unset.as_str(), DEFAULT_CLASSIFIER_URL);
        assert_eq!(blank, unset);
    }

    #[test]
    fn accepts_an_override() {
        let url = classifier_url_from_env_value(Some("https://inference.local/v2/predict".into()))
            .expect("valid override");
        assert_eq!(url.as_str(), "https://inference.local/v2/predict");
    }

    #[test]
    fn rejects_a_relative_value() {
        let err = classifier_url_from_env_value(Some("predict".into()))
            .expect_err("expected endpoint error");
        assert!(matches!(err, ClientError::InvalidEndpoint { ref url, .. } if url == "predict"));
    }
}
