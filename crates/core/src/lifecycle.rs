//! Submission lifecycle state machine.
//!
//! One controller owns the presentation state of the single outstanding
//! classifier call. The states are mutually exclusive: exactly one of idle,
//! pending, succeeded or failed is current at any time.
//!
//! Every submission is tagged with a monotonically increasing epoch. A
//! resolution is applied only if its epoch matches the controller's current
//! epoch, so when two submissions overlap, the last-issued one determines the
//! terminal state regardless of which network response arrives first. A
//! reset also advances the epoch, which abandons any in-flight call: its
//! eventual resolution no longer matches and is dropped.
//!
//! There is no timeout and no cancellation primitive; a call that never
//! resolves leaves the controller pending.

use crate::prediction::Prediction;

/// Fixed user-facing message for any failed submission. The underlying
/// diagnostic is logged, never shown.
pub const BACKEND_FAILURE_MESSAGE: &str = "Backend connection failed.";

/// Monotonic tag identifying one outbound classifier call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionEpoch(u64);

impl std::fmt::Display for SubmissionEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation state of the current submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LifecycleState {
    /// No submission has been made since the last reset.
    #[default]
    Idle,
    /// A call is outstanding.
    Pending,
    /// The latest call resolved with a prediction.
    Succeeded(Prediction),
    /// The latest call failed; the payload is the fixed user-facing message.
    Failed(String),
}

impl LifecycleState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LifecycleState::Pending)
    }
}

/// How one outbound call resolved, before the epoch check.
///
/// A failure carries the transport diagnostic for the log line, not the
/// user-facing message; the controller substitutes
/// [`BACKEND_FAILURE_MESSAGE`] when it applies the transition.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    Success(Prediction),
    Failure(String),
}

/// Owns the lifecycle state and the submission epoch counter.
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: LifecycleState,
    epoch: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// Starts a new submission: discards any previous payload, moves to
    /// pending synchronously and returns the epoch to tag the outbound call
    /// with. Allowed from any state, including pending.
    pub fn begin(&mut self) -> SubmissionEpoch {
        self.epoch += 1;
        self.state = LifecycleState::Pending;
        tracing::info!(epoch = self.epoch, "submission started");
        SubmissionEpoch(self.epoch)
    }

    /// Applies a call resolution.
    ///
    /// Returns `true` if the resolution was current and the state changed,
    /// `false` if it belonged to a superseded submission and was dropped.
    pub fn resolve(&mut self, epoch: SubmissionEpoch, outcome: SubmissionOutcome) -> bool {
        if epoch.0 != self.epoch {
            tracing::debug!(
                stale = epoch.0,
                current = self.epoch,
                "dropping resolution from superseded submission"
            );
            return false;
        }

        match outcome {
            SubmissionOutcome::Success(prediction) => {
                tracing::info!(epoch = epoch.0, "submission succeeded");
                self.state = LifecycleState::Succeeded(prediction);
            }
            SubmissionOutcome::Failure(diagnostic) => {
                tracing::warn!(epoch = epoch.0, %diagnostic, "submission failed");
                self.state = LifecycleState::Failed(BACKEND_FAILURE_MESSAGE.to_owned());
            }
        }
        true
    }

    /// Returns to idle, discarding any result or error. Advances the epoch
    /// so a resolution from a call in flight at reset time is dropped.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = LifecycleState::Idle;
    }
}
