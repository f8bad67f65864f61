//! # HeartGuard Client
//!
//! Transport layer for the remote heart disease classifier.
//!
//! This crate owns everything between a record snapshot and a lifecycle
//! resolution:
//! - Endpoint configuration resolved once at startup
//! - The HTTP client that POSTs the record and parses the response
//! - The non-blocking dispatcher that tags each call with its submission
//!   epoch and feeds resolutions back over a channel

pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod error;

pub use classifier::ClassifierClient;
pub use config::{classifier_url_from_env_value, ClassifierConfig, DEFAULT_CLASSIFIER_URL};
pub use dispatch::{Dispatcher, Resolution};
pub use error::{ClientError, ClientResult};
