use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

/// The single periodic timer that drives game ticks.
///
/// Rescheduling drops the old timer before the new one exists, so two
/// timers never run side by side.
#[derive(Debug, Default)]
pub struct TickScheduler {
    timer: Option<Interval>,
    period: Option<Duration>,
}

impl TickScheduler {
    /// A scheduler with no timer installed
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the current timer and install one firing every `period`,
    /// first after a full period
    pub fn reschedule(&mut self, period: Duration) {
        self.cancel();
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
        self.period = Some(period);
        debug!(period_ms = period.as_millis() as u64, "tick timer scheduled");
    }

    pub fn reschedule_ms(&mut self, period_ms: u64) {
        self.reschedule(Duration::from_millis(period_ms));
    }

    pub fn cancel(&mut self) {
        self.timer = None;
        self.period = None;
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Wait for the next tick. Never completes while cancelled.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
