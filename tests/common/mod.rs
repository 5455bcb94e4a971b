//! Shared helpers for the workflow tests.

use polaris_login::auth::SimulatedAuthenticator;
use polaris_login::ui::{LoginEvent, LoginState};
use std::time::{Duration, Instant};

/// Scan delay used by the fast authenticator (milliseconds)
pub const SCAN_MS: u64 = 35;
/// Transition delay used by the fast authenticator (milliseconds)
pub const TRANSITION_MS: u64 = 20;

/// An authenticator with short synthetic delays so tests never sleep
pub fn fast_authenticator() -> SimulatedAuthenticator {
    SimulatedAuthenticator::new(
        Duration::from_millis(SCAN_MS),
        Duration::from_millis(TRANSITION_MS),
    )
}

/// Tick the state with synthetic instants until well past both deadlines,
/// collecting every event it emits
pub fn run_to_completion(state: &mut LoginState, start: Instant) -> Vec<LoginEvent> {
    let mut events = Vec::new();
    let step = Duration::from_millis(5);
    let mut now = start;
    let end = start + Duration::from_millis((SCAN_MS + TRANSITION_MS) * 4);
    while now <= end {
        if let Some(event) = state.tick(now) {
            events.push(event);
        }
        now += step;
    }
    events
}
