//! A running dashboard: shared state plus its timer tasks.

use std::ops::ControlFlow;
use std::sync::Arc;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

use stockboard_core::{DomainResult, NotificationId};
use stockboard_inventory::InventorySummary;

use crate::actions::{ActionOutcome, DashboardAction, WELCOME_MESSAGE};
use crate::activity::ActivityEntry;
use crate::card::ProductCard;
use crate::config::{DashboardConfig, Timings};
use crate::counter::{CounterAnimation, CounterKind};
use crate::dashboard::Dashboard;
use crate::render;
use crate::scheduler::TaskScheduler;

/// Handle to a running dashboard. Cheap to clone; all clones share state and tasks.
///
/// Must be started inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    state: Arc<Mutex<Dashboard>>,
    scheduler: TaskScheduler,
    timings: Timings,
}

impl DashboardSession {
    /// Start counters, the activity feed and the welcome banner.
    pub fn start(dashboard: Dashboard, config: &DashboardConfig) -> Self {
        let rng = match config.activity_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let summary = dashboard.summary();
        let session = Self {
            state: Arc::new(Mutex::new(dashboard)),
            scheduler: TaskScheduler::new(),
            timings: config.timings,
        };

        session.animate_counters(summary);
        session.start_activity_feed(rng);
        session.schedule_welcome();

        tracing::info!(
            activity_interval_ms = session.timings.activity_interval.as_millis() as u64,
            "dashboard session started"
        );
        session
    }

    pub fn state(&self) -> Arc<Mutex<Dashboard>> {
        self.state.clone()
    }

    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    fn animate_counters(&self, summary: InventorySummary) {
        for kind in CounterKind::ALL {
            let mut animation = CounterAnimation::new(
                kind.target(&summary),
                self.timings.counter_duration,
                self.timings.counter_frame,
            );
            let state = self.state.clone();

            self.scheduler
                .spawn_every("counter.animate", self.timings.counter_frame, move || {
                    let frame = animation.step();
                    let state = state.clone();
                    async move {
                        state.lock().await.counters_mut().set(kind, frame.value);
                        if frame.finished {
                            tracing::debug!(counter = kind.as_str(), value = frame.value, "counter settled");
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(())
                        }
                    }
                });
        }
    }

    fn start_activity_feed(&self, mut rng: StdRng) {
        let state = self.state.clone();
        self.scheduler
            .spawn_every("activity.feed", self.timings.activity_interval, move || {
                let entry = ActivityEntry::random(&mut rng, Utc::now());
                let state = state.clone();
                async move {
                    state.lock().await.record_activity(entry);
                    ControlFlow::Continue(())
                }
            });
    }

    fn schedule_welcome(&self) {
        let session = self.clone();
        self.scheduler
            .spawn_after("notification.welcome", self.timings.welcome_delay, move || async move {
                session.notify(WELCOME_MESSAGE).await;
            });
    }

    /// Show a banner now and schedule its dismissal.
    pub async fn notify(&self, message: impl Into<String>) -> NotificationId {
        let id = self
            .state
            .lock()
            .await
            .notifications_mut()
            .show(message, Utc::now());

        let state = self.state.clone();
        self.scheduler.spawn_after(
            "notification.dismiss",
            self.timings.notification_duration,
            move || async move {
                state.lock().await.notifications_mut().dismiss(id);
            },
        );
        id
    }

    /// Update the search query and return the cards now visible.
    pub async fn search(&self, query: impl Into<String>) -> Vec<ProductCard> {
        let mut dashboard = self.state.lock().await;
        dashboard.set_query(query);
        dashboard.visible_cards()
    }

    /// Run a toolbar/card action. A failed lookup is shown as a banner and returned.
    pub async fn perform(&self, action: DashboardAction) -> DomainResult<()> {
        let resolved = {
            let dashboard = self.state.lock().await;
            action.resolve(&dashboard)
        };

        let ActionOutcome { message, follow_up } = match resolved {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(action = action.name(), error = %err, "action failed");
                self.notify(format!("⚠️ {err}")).await;
                return Err(err);
            }
        };

        tracing::info!(action = action.name(), "action performed");
        self.notify(message).await;

        if let Some(follow_up) = follow_up {
            let session = self.clone();
            self.scheduler
                .spawn_after("notification.follow_up", follow_up.delay, move || async move {
                    session.notify(follow_up.message).await;
                });
        }
        Ok(())
    }

    pub async fn render(&self) -> String {
        render::render(&*self.state.lock().await)
    }

    /// Cancel every timer (activity feed included) and wait for them to stop.
    pub async fn shutdown(&self) {
        self.scheduler.shutdown().await;
        tracing::info!("dashboard session stopped");
    }
}
