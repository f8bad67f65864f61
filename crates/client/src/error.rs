#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid classifier endpoint '{url}': {detail}")]
    InvalidEndpoint { url: String, detail: String },
    #[error("classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("classifier response did not match the expected shape: {0}")]
    MalformedBody(#[from] serde_path_to_error::Error<serde_json::Error>),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
