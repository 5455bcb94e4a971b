//! The two-phase scan sequence as a cancellable value.
//!
//! The overlay pacing could be driven by detached one-shot timers, but
//! those keep running after the screen is dismissed. Instead the deadlines
//! are plain data owned by the screen state and advanced by the event-loop
//! tick: dropping the sequence is cancellation, so no completion can fire
//! against disposed state.

use std::time::{Duration, Instant};

/// Internal phase of a running sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for the scan deadline
    Scanning,
    /// Scan done, waiting for the transition deadline
    Transition,
    /// Both deadlines elapsed; the sequence is spent
    Complete,
}

/// Event produced by advancing the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// The simulated scan finished; the success overlay should appear
    ScanComplete,
    /// The transition finished; the completion callback may fire
    TransitionComplete,
}

/// A running scan sequence: two strictly ordered one-shot deadlines
#[derive(Debug, Clone)]
pub struct ScanSequence {
    phase: Phase,
    /// When the current phase was armed
    armed_at: Instant,
    /// Deadline of the current phase
    deadline: Instant,
    transition_delay: Duration,
}

impl ScanSequence {
    /// Arm the scan deadline. The transition deadline is armed only when
    /// the scan deadline fires, so the two effects can never overlap.
    pub fn start(now: Instant, scan_delay: Duration, transition_delay: Duration) -> Self {
        Self {
            phase: Phase::Scanning,
            armed_at: now,
            deadline: now + scan_delay,
            transition_delay,
        }
    }

    /// Advance the sequence. Returns at most one event per call; a spent
    /// sequence returns None forever.
    pub fn tick(&mut self, now: Instant) -> Option<SequenceEvent> {
        if now < self.deadline {
            return None;
        }
        match self.phase {
            Phase::Scanning => {
                self.phase = Phase::Transition;
                self.armed_at = now;
                self.deadline = now + self.transition_delay;
                Some(SequenceEvent::ScanComplete)
            }
            Phase::Transition => {
                self.phase = Phase::Complete;
                Some(SequenceEvent::TransitionComplete)
            }
            Phase::Complete => None,
        }
    }

    /// Fraction of the current phase that has elapsed, for overlay
    /// animation (clamped to 1.0)
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.deadline.saturating_duration_since(self.armed_at);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.armed_at);
        (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
    }

    /// Whether both deadlines have elapsed
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}
