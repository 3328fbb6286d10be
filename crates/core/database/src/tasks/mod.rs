//! Semi-important background task management

use crate::Database;

use std::time::{Duration, Instant};

const WORKER_COUNT: usize = 5;

pub mod attendance;
pub mod geocode;
pub mod send_email;

/// Spawn background workers
pub fn start_workers(db: Database) {
    tokio::spawn(geocode::worker(db.clone()));
    tokio::spawn(attendance::worker(db.clone()));

    for _ in 0..WORKER_COUNT {
        tokio::spawn(send_email::worker());
    }
}

/// Task with additional information on when it should run
pub struct DelayedTask<T> {
    pub data: T,
    run_now: bool,
    last_updated: Instant,
    first_seen: Instant,
}

/// Commit to database every 30 seconds if the task is particularly active.
static EXPIRE_CONSTANT: u64 = 30;

/// Otherwise, commit to database after 5 seconds.
static SAVE_CONSTANT: u64 = 5;

impl<T> DelayedTask<T> {
    /// Create a new delayed task
    pub fn new(data: T) -> Self {
        DelayedTask {
            data,
            run_now: false,
            last_updated: Instant::now(),
            first_seen: Instant::now(),
        }
    }

    /// Push a task further back in time
    pub fn delay(&mut self) {
        self.last_updated = Instant::now()
    }

    /// Flag the task to run right away, regardless of the time
    pub fn run_immediately(&mut self) {
        self.run_now = true
    }

    /// Check if a task should run yet
    pub fn should_run(&self) -> bool {
        self.run_now
            || self.first_seen.elapsed().as_secs() > EXPIRE_CONSTANT
            || self.last_updated.elapsed().as_secs() > SAVE_CONSTANT
    }

    /// Check if the task has gone unchanged for the given quiet window
    pub fn quiet_for(&self, window: Duration) -> bool {
        self.run_now || self.last_updated.elapsed() >= window
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::DelayedTask;

    #[test]
    fn delay_restarts_the_quiet_window() {
        let mut task = DelayedTask::new(());
        assert!(!task.quiet_for(Duration::from_secs(60)));

        std::thread::sleep(Duration::from_millis(20));
        assert!(task.quiet_for(Duration::from_millis(10)));

        task.delay();
        assert!(!task.quiet_for(Duration::from_millis(10)));
    }

    #[test]
    fn run_immediately_overrides_the_window() {
        let mut task = DelayedTask::new(());
        task.run_immediately();
        assert!(task.quiet_for(Duration::from_secs(60)));
        assert!(task.should_run());
    }
}
