//! # HeartGuard Core
//!
//! Client-side state for the heart disease classifier form.
//!
//! This crate contains pure state operations and no transport concerns:
//! - The fixed thirteen-field clinical schema and its preset profiles
//! - The live patient record with coercing field mutation and snapshots
//! - The submission lifecycle state machine (idle / pending / succeeded /
//!   failed) with epoch tagging so stale resolutions from superseded
//!   submissions are discarded
//!
//! **No transport concerns**: issuing the HTTP call to the classifier and
//! feeding resolutions back belongs in `heartguard-client`.

pub mod error;
pub mod lifecycle;
pub mod prediction;
pub mod preset;
pub mod record;
pub mod schema;
pub mod session;

// Re-export the value primitives so downstream crates need only one import.
pub use heartguard_types::{CoercionError, FieldValue};

pub use error::{CoreError, CoreResult};
pub use lifecycle::{
    LifecycleState, SubmissionController, SubmissionEpoch, SubmissionOutcome,
    BACKEND_FAILURE_MESSAGE,
};
pub use prediction::{ClassLabel, ClassProbabilities, Prediction};
pub use preset::Preset;
pub use record::PatientRecord;
pub use schema::{Choice, FieldDescriptor, FieldKind, FIELDS};
pub use session::FormSession;
