use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Fixed-period tick source that can be stopped and restarted.
///
/// The engine never drives this; whoever owns both decides when to stop it
/// (on game over) and start it again (after a reset).
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    /// A stopped ticker with the given period
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// (Re)start ticking; the first tick fires one full period from now.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Wait for the next tick. Never completes while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
