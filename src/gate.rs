//! Trailing-edge debounce gate between change events and pipeline runs.

use std::time::{Duration, Instant};

/// Delay between the last change event of a burst and the pipeline run.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Idle,
    Pending { deadline: Instant },
}

/// Coalesces bursts of change events into a single pipeline invocation.
///
/// The gate owns no timer thread; the event loop feeds it `Instant`s and
/// asks for the current deadline, which keeps it deterministic under test.
/// Classic trailing-edge debounce: every `arm` pushes the deadline out, so
/// only the last event of a burst inside the window survives.
#[derive(Debug)]
pub struct ChangeGate {
    state: GateState,
    delay: Duration,
    enabled: bool,
}

impl ChangeGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: GateState::Idle,
            delay,
            enabled: true,
        }
    }

    /// Records a change event: starts the window when idle, resets it when
    /// already pending. Ignored while disabled.
    pub fn arm(&mut self, now: Instant) {
        if self.enabled {
            self.state = GateState::Pending {
                deadline: now + self.delay,
            };
        }
    }

    /// The instant the pending window elapses, if one is open.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            GateState::Idle => None,
            GateState::Pending { deadline } => Some(deadline),
        }
    }

    /// Returns true exactly when the pending window has elapsed, resetting
    /// the gate to idle. The caller runs the pipeline on a true return.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.state {
            GateState::Pending { deadline } if now >= deadline => {
                self.state = GateState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Stops future triggers and drops any pending window. A pipeline run
    /// already started by an earlier `fire` is unaffected.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.state = GateState::Idle;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, GateState::Pending { .. })
    }
}
