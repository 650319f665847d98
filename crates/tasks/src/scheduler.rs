//! Scheduled jobs for periodic maintenance tasks.

use std::sync::Arc;
use std::time::Duration;

use quizhive_common::AppResult;
use quizhive_core::QuizService;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Interval of the quiz-availability reminder scan (default: 24 hours).
    pub quiz_reminder_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quiz_reminder_interval: Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl From<&quizhive_common::config::SchedulerConfig> for SchedulerConfig {
    fn from(config: &quizhive_common::config::SchedulerConfig) -> Self {
        Self {
            quiz_reminder_interval: Duration::from_secs(config.quiz_reminder_interval_secs),
        }
    }
}

/// Job executor trait for scheduled jobs.
#[async_trait::async_trait]
pub trait JobExecutor: Send + Sync {
    /// Run the quiz-availability reminder scan; returns how many reminders
    /// went out.
    async fn quiz_reminder_scan(&self) -> AppResult<u64>;
}

#[async_trait::async_trait]
impl JobExecutor for QuizService {
    async fn quiz_reminder_scan(&self) -> AppResult<u64> {
        Self::quiz_reminder_scan(self).await
    }
}

/// Run the scheduler with the given configuration and executor.
///
/// Spawns one detached task per job; each tick outlives any single failure
/// (a failed scan is logged and retried on the next interval).
pub fn run_scheduler<E: JobExecutor + 'static>(config: &SchedulerConfig, executor: Arc<E>) {
    let reminder_interval = config.quiz_reminder_interval;

    tokio::spawn(async move {
        let mut interval = interval(reminder_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; skip it so the scan runs on the
        // configured cadence from process start.
        interval.tick().await;

        loop {
            interval.tick().await;
            match executor.quiz_reminder_scan().await {
                Ok(count) => {
                    if count > 0 {
                        info!(count, "sent quiz retake reminders");
                    }
                }
                Err(error) => {
                    error!(%error, "quiz reminder scan failed");
                }
            }
        }
    });
}
