//! One-shot, re-armable tick deadline.
//!
//! At most one tick is pending at a time. The runner arms it after every
//! tick while the engine is running and cancels it on pause or reset.
//! Each deadline is measured from when it was armed, so scheduler delay
//! accumulates and is not corrected.

use tokio::time::{sleep_until, Duration, Instant};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Schedules the next tick one period from now, replacing any pending one.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.period);
    }

    /// Drops the pending tick. Returns false if nothing was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Resolves at `deadline`, or never when there is none.
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_new_is_disarmed() {
        let ticker = Ticker::default();
        assert!(!ticker.is_armed());
        assert!(ticker.deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_arm_sets_deadline_one_period_out() {
        let mut ticker = Ticker::default();
        let before = Instant::now();
        ticker.arm();
        assert_eq!(ticker.deadline(), Some(before + TICK_PERIOD));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_without_pending_is_noop() {
        let mut ticker = Ticker::default();
        assert!(!ticker.cancel());
        ticker.arm();
        assert!(ticker.cancel());
        assert!(!ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_fires_after_period() {
        let mut ticker = Ticker::default();
        ticker.arm();

        let early = timeout(Duration::from_millis(999), wait_for(ticker.deadline())).await;
        assert!(early.is_err());

        let fired = timeout(Duration::from_millis(10), wait_for(ticker.deadline())).await;
        assert!(fired.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_without_deadline_never_fires() {
        let result = timeout(Duration::from_secs(3600), wait_for(None)).await;
        assert!(result.is_err());
    }
}
