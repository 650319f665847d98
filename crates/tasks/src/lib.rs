//! Background scheduled jobs for quizhive.
//!
//! One periodic task: the quiz-availability reminder scan, which nudges
//! members whose last attempt is older than a day to retake the quiz.

pub mod scheduler;

pub use scheduler::{JobExecutor, SchedulerConfig, run_scheduler};
