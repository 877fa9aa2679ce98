//! Cyclic presentation state: a wrapping index or a flag that advances on
//! a fixed interval while its section is on screen.
//!
//! The interval is driven by the host: every event-loop tick hands the
//! elapsed time to [`IntervalTimer::advance`].  There is exactly one timer
//! slot per instance, so arming is idempotent by construction.

use std::time::Duration;

/// Lower bound on a timer period; a zero period would fire every tick.
const MIN_PERIOD: Duration = Duration::from_millis(1);

// ───────────────────────────────────────── state ─────────────

/// A single-variable state machine with a "next" transition.
pub trait Cycle {
    fn tick(&mut self);
}

/// Index into a fixed-length list, wrapping at `len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicIndex {
    index: usize,
    len: usize,
}

impl CyclicIndex {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn get(&self) -> usize {
        self.index
    }
}

impl Cycle for CyclicIndex {
    fn tick(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// Boolean flag negated on every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn get(&self) -> bool {
        self.on
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }
}

impl Cycle for Toggle {
    fn tick(&mut self) {
        self.on = !self.on;
    }
}

// ───────────────────────────────────────── timer ─────────────

/// Host-driven repeating interval.
///
/// `elapsed` is `None` while disarmed; that `Option` is the single timer
/// slot, so a second `arm` cannot create a second interval.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    elapsed: Option<Duration>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            elapsed: None,
        }
    }

    /// Start counting from zero.  No-op when already armed.
    pub fn arm(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(Duration::ZERO);
        }
    }

    /// Cancel.  Any partial interval is discarded.
    pub fn disarm(&mut self) {
        self.elapsed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Time accumulated toward the next boundary, if armed.
    #[cfg(test)]
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feed elapsed host time.  Returns `true` when at least one boundary
    /// was crossed; several missed boundaries still fire only once.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed < self.period {
            return false;
        }
        let rem = elapsed.as_nanos() % self.period.as_nanos();
        // `rem < period`, which itself fits in a u64 of nanoseconds.
        *elapsed = Duration::from_nanos(rem as u64);
        true
    }
}

// ───────────────────────────────────────── presentation ──────

/// A [`Cycle`] advanced by an [`IntervalTimer`] that is armed only while
/// the owning section is visible.
#[derive(Debug, Clone)]
pub struct CyclicPresentation<C> {
    state: C,
    timer: IntervalTimer,
    torn_down: bool,
}

impl<C: Cycle> CyclicPresentation<C> {
    pub fn new(state: C, period: Duration) -> Self {
        Self {
            state,
            timer: IntervalTimer::new(period),
            torn_down: false,
        }
    }

    /// Visibility input: arms on `true`, disarms on `false`.
    pub fn set_visible(&mut self, visible: bool) {
        if self.torn_down {
            return;
        }
        if visible {
            self.timer.arm();
        } else {
            self.timer.disarm();
        }
    }

    /// Feed host time; returns `true` if the state advanced.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.timer.advance(dt) {
            self.state.tick();
            tracing::trace!(period_ms = self.timer.period().as_millis() as u64, "cycle tick");
            true
        } else {
            false
        }
    }

    /// Stop the timer for good.  Later visibility changes are ignored.
    pub fn teardown(&mut self) {
        self.timer.disarm();
        self.torn_down = true;
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Direct access for manual overrides.  Does not touch the timer.
    pub fn state_mut(&mut self) -> &mut C {
        &mut self.state
    }

    /// Disarm without tearing down (e.g. a manual override took control).
    pub fn pause(&mut self) {
        self.timer.disarm();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }
}
