//! HTTP client for the remote classifier.

use crate::config::ClassifierConfig;
use crate::error::ClientResult;
use heartguard_core::{PatientRecord, Prediction};

/// Issues prediction calls against one configured endpoint.
///
/// The client is cheap to clone and holds no per-call state; callers that
/// need at-most-one-outstanding-request semantics get them from the
/// lifecycle controller's epoch check, not from this type.
#[derive(Clone, Debug)]
pub struct ClassifierClient {
    http: reqwest::Client,
    config: ClassifierConfig,
}

impl ClassifierClient {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// POSTs the record to the classifier and parses the response.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` for connection failures and non-2xx
    /// statuses, and `ClientError::MalformedBody` when a 2xx body does not
    /// match the expected shape.
    pub async fn predict(&self, record: &PatientRecord) -> ClientResult<Prediction> {
        let response = self
            .http
            .post(self.config.endpoint().clone())
            .json(record)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        parse_prediction(&body)
    }
}

/// Strict parse of a classifier response body, keeping the path to the
/// offending key in the diagnostic.
fn parse_prediction(body: &[u8]) -> ClientResult<Prediction> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let prediction = serde_path_to_error::deserialize(&mut deserializer)?;
    Ok(prediction)
}
