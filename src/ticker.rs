use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

const BASE_INTERVAL_MS: u64 = 400;
const INTERVAL_SCALE_MS: u64 = 3;
const DIFFICULTY_STEP: u8 = 5;

/// Game speed from 1 (slowest) to 100 (fastest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Difficulty(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn raise(self) -> Self {
        Difficulty(self.0.saturating_add(DIFFICULTY_STEP).min(Self::MAX))
    }

    pub fn lower(self) -> Self {
        Difficulty(self.0.saturating_sub(DIFFICULTY_STEP).max(Self::MIN))
    }

    /// Pause between two ticks: 397ms at difficulty 1 down to 100ms at 100.
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(BASE_INTERVAL_MS - self.0 as u64 * INTERVAL_SCALE_MS)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(50)
    }
}

/// Cancels the tick loop it was handed out by. Clones share the flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Deadline bookkeeping for the tick loop. The loop waits for input until
/// [`Ticker::time_until_tick`] runs out, runs one tick, then reschedules with
/// whatever interval the difficulty gives at that moment.
#[derive(Debug)]
pub struct Ticker {
    next_tick: Instant,
    stop: StopHandle,
}

impl Ticker {
    /// The first tick is due right away.
    pub fn new(now: Instant) -> Self {
        Ticker {
            next_tick: now,
            stop: StopHandle::default(),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.is_stopped() && now >= self.next_tick
    }

    pub fn reschedule(&mut self, now: Instant, interval: Duration) {
        self.next_tick = now + interval;
    }
}
