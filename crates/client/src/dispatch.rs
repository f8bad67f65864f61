//! Non-blocking dispatch of classifier calls.
//!
//! `dispatch` spawns the call and returns immediately; the caller's event
//! loop stays responsive while the request is in flight. Each resolution
//! carries the epoch its call was tagged with, and resolutions are delivered
//! in the order the calls complete, not the order they were issued. The
//! lifecycle controller's epoch check is what turns that into "last issued
//! submission wins".

use crate::classifier::ClassifierClient;
use heartguard_core::{PatientRecord, SubmissionEpoch, SubmissionOutcome};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One completed call, ready to feed back into the lifecycle controller.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub epoch: SubmissionEpoch,
    pub outcome: SubmissionOutcome,
}

/// Fans classifier calls out to tasks and resolutions back into a channel.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    client: Arc<ClassifierClient>,
    tx: mpsc::UnboundedSender<Resolution>,
}

impl Dispatcher {
    /// Wraps a client; the returned receiver yields resolutions as calls
    /// complete.
    pub fn new(client: ClassifierClient) -> (Self, mpsc::UnboundedReceiver<Resolution>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client: Arc::new(client),
                tx,
            },
            rx,
        )
    }

    /// Issues one call for the snapshot, tagged with its epoch. Returns
    /// without waiting for the call to resolve.
    pub fn dispatch(&self, epoch: SubmissionEpoch, record: PatientRecord) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = match client.predict(&record).await {
                Ok(prediction) => SubmissionOutcome::Success(prediction),
                Err(error) => SubmissionOutcome::Failure(error.to_string()),
            };

            if tx.send(Resolution { epoch, outcome }).is_err() {
                tracing::debug!(%epoch, "resolution receiver dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use heartguard_core::FormSession;

    // Nothing listens on this port, so calls resolve quickly with a
    // connection failure.
    fn unreachable_client() -> ClassifierClient {
        let url = reqwest::Url::parse("http://127.0.0.1:9/predict").expect("static url");
        ClassifierClient::new(ClassifierConfig::new(url))
    }

    #[tokio::test]
    async fn failed_call_resolves_as_failure_with_matching_epoch() {
        let (dispatcher, mut resolutions) = Dispatcher::new(unreachable_client());
        let mut session = FormSession::new();

        let (epoch, record) = session.begin_submission();
        dispatcher.dispatch(epoch, record);

        let resolution = resolutions.recv().await.expect("resolution delivered");
        assert_eq!(resolution.epoch, epoch);
        assert!(matches!(resolution.outcome, SubmissionOutcome::Failure(_)));

        assert!(session.resolve(resolution.epoch, resolution.outcome));
        assert!(matches!(
            session.state(),
            heartguard_core::LifecycleState::Failed(_)
        ));
    }

    #[tokio::test]
    async fn stale_resolution_is_dropped_by_the_session() {
        let (dispatcher, mut resolutions) = Dispatcher::new(unreachable_client());
        let mut session = FormSession::new();

        let (first, record) = session.begin_submission();
        dispatcher.dispatch(first, record);

        // Supersede the first submission before its resolution is applied.
        let (second, record) = session.begin_submission();
        dispatcher.dispatch(second, record);

        let mut applied = 0;
        for _ in 0..2 {
            let resolution = resolutions.recv().await.expect("resolution delivered");
            if session.resolve(resolution.epoch, resolution.outcome) {
                applied += 1;
            }
        }

        assert_eq!(applied, 1);
    }
}
