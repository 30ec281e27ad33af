//! Cancelable periodic tick driving the live preview

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owner of a running preview tick
///
/// The tick stops when the handle is stopped or dropped. `stop().await` also
/// waits for the task, so no callback runs once it returns. Dropping only
/// cancels: on a multi-thread runtime a tick already in progress may still
/// finish after `drop` returns.
#[must_use = "dropping the handle stops the preview tick"]
pub struct PreviewHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PreviewHandle {
    /// Run `on_tick` immediately and then every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => on_tick(),
                }
            }
            tracing::debug!("preview tick stopped");
        });

        tracing::debug!(?period, "preview tick started");
        Self {
            cancel,
            task: Some(task),
        }
    }

    /// Whether the tick has not been stopped yet
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Stop the tick and wait for its task to finish
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "preview tick task ended abnormally");
            }
        }
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
