//! Form session facade: one patient record plus one lifecycle controller.
//!
//! The session is the single owner of both pieces of mutable state. All
//! inbound operations (field edits, preset loads, submissions, resolutions)
//! are synchronous calls on `&mut self`; callers serialise them through
//! whatever event loop they run.

use crate::error::CoreResult;
use crate::lifecycle::{
    LifecycleState, SubmissionController, SubmissionEpoch, SubmissionOutcome,
};
use crate::preset::Preset;
use crate::record::PatientRecord;

/// One live form: the patient record and the submission lifecycle.
#[derive(Debug, Default)]
pub struct FormSession {
    record: PatientRecord,
    controller: SubmissionController,
}

impl FormSession {
    /// A fresh session: default patient profile, idle lifecycle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    pub fn state(&self) -> &LifecycleState {
        self.controller.state()
    }

    /// Edits one field; see [`PatientRecord::set_field`].
    pub fn set_field(&mut self, name: &str, raw: &str) -> CoreResult<()> {
        self.record.set_field(name, raw)
    }

    /// Replaces the whole record with a preset profile and returns the
    /// lifecycle to idle, discarding any previous result or error.
    pub fn load_preset(&mut self, preset: Preset) {
        self.record = preset.record();
        self.controller.reset();
    }

    /// Value copy of the current record. Later edits to the live record do
    /// not affect a snapshot already taken.
    pub fn snapshot(&self) -> PatientRecord {
        self.record.clone()
    }

    /// Starts a submission: moves the lifecycle to pending and hands back
    /// the epoch plus the record snapshot to send.
    pub fn begin_submission(&mut self) -> (SubmissionEpoch, PatientRecord) {
        let epoch = self.controller.begin();
        (epoch, self.record.clone())
    }

    /// Applies a call resolution; stale epochs are dropped. Returns whether
    /// the presentation state changed.
    pub fn resolve(&mut self, epoch: SubmissionEpoch, outcome: SubmissionOutcome) -> bool {
        self.controller.resolve(epoch, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::{ClassLabel, Prediction};

    fn disease_prediction() -> Prediction {
        Prediction {
            prediction: ClassLabel::Disease,
            status: "Heart Disease Detected".to_owned(),
            probabilities: None,
        }
    }

    #[test]
    fn snapshot_reflects_latest_edit() {
        let mut session = FormSession::new();
        session.set_field("thalach", "162").expect("valid edit");
        assert_eq!(session.snapshot().thalach, 162);
    }

    #[test]
    fn snapshot_is_idempotent() {
        let session = FormSession::new();
        assert_eq!(session.snapshot(), session.snapshot());
    }

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut session = FormSession::new();
        let (_, sent) = session.begin_submission();
        session.set_field("age", "99").expect("valid edit");
        assert_eq!(sent.age, 57);
        assert_eq!(session.record().age, 99);
    }

    #[test]
    fn load_preset_replaces_record_and_clears_result() {
        let mut session = FormSession::new();
        let (epoch, _) = session.begin_submission();
        session.resolve(epoch, SubmissionOutcome::Success(disease_prediction()));
        assert!(matches!(session.state(), LifecycleState::Succeeded(_)));

        session.load_preset(Preset::Healthy);

        assert_eq!(session.state(), &LifecycleState::Idle);
        assert_eq!(session.snapshot(), Preset::Healthy.record());
    }

    #[test]
    fn load_preset_clears_error_too() {
        let mut session = FormSession::new();
        let (epoch, _) = session.begin_submission();
        session.resolve(epoch, SubmissionOutcome::Failure("no route to host".to_owned()));
        assert!(matches!(session.state(), LifecycleState::Failed(_)));

        session.load_preset(Preset::AtRisk);
        assert_eq!(session.state(), &LifecycleState::Idle);
    }

    #[test]
    fn submission_is_pending_before_resolution() {
        let mut session = FormSession::new();
        let (epoch, _) = session.begin_submission();
        assert!(session.state().is_pending());

        session.resolve(epoch, SubmissionOutcome::Success(disease_prediction()));
        assert!(matches!(session.state(), LifecycleState::Succeeded(_)));
    }
}
