//! Cancellable timer tasks.
//!
//! Every task runs under a child of one root [`CancellationToken`];
//! [`TaskScheduler::shutdown`] cancels them all and waits for them to exit.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Shortest period accepted for repeating tasks (`tokio` rejects zero).
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to one scheduled task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    name: &'static str,
    token: CancellationToken,
}

impl TaskHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cancel this task only. A one-shot task that already fired is unaffected.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    root: CancellationToken,
    tracker: TaskTracker,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once after `delay`, unless cancelled first.
    pub fn spawn_after<F, Fut>(&self, name: &'static str, delay: Duration, task: F) -> TaskHandle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let handle = TaskHandle {
            name,
            token: token.clone(),
        };

        self.tracker.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(task = name, "scheduled task cancelled before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    task().await;
                }
            }
        });

        handle
    }

    /// Run `tick` every `period` (first run after one period) until it returns
    /// `ControlFlow::Break` or the task is cancelled.
    pub fn spawn_every<F, Fut>(&self, name: &'static str, period: Duration, mut tick: F) -> TaskHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let token = self.root.child_token();
        let handle = TaskHandle {
            name,
            token: token.clone(),
        };

        self.tracker.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!(task = name, "repeating task cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if tick().await.is_break() {
                            tracing::debug!(task = name, "repeating task finished");
                            break;
                        }
                    }
                }
            }
        });

        handle
    }

    /// Tasks spawned and not yet exited.
    pub fn active_tasks(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Cancel every task and wait until all of them have exited.
    pub async fn shutdown(&self) {
        tracing::info!(active = self.active_tasks(), "shutting down scheduled tasks");
        self.root.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}
