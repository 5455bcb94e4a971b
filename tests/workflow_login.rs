//! Integration tests for the complete login workflows.
//!
//! Tests the full chain of operations for:
//! - Terminal-access login with a professional ID
//! - Enrollment with a blank ID
//! - Blocked input and retry
//! - Abort and exactly-once delivery guarantees

mod common;

use common::{fast_authenticator, run_to_completion};
use polaris_login::auth::{ScanKind, FALLBACK_ID, PLACEHOLDER_NAME, PLACEHOLDER_ROLE};
use polaris_login::ui::{AuthPhase, LoginEvent, LoginState, Mode, MISSING_ID_WARNING};
use polaris_login::utils::TextInput;
use std::time::Instant;

// ============================================================================
// TERMINAL ACCESS - HAPPY PATH
// ============================================================================

#[test]
fn terminal_access_fingerprint_delivers_typed_id() {
    // Given: an operator who typed an ID
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");

    // When: the fingerprint scan runs to completion
    let start = Instant::now();
    assert!(state.start_scan(ScanKind::Fingerprint, &fast_authenticator(), start));
    assert_eq!(state.phase, AuthPhase::Scanning(ScanKind::Fingerprint));
    let events = run_to_completion(&mut state, start);

    // Then: both phases fire in order and the payload carries the ID
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], LoginEvent::ScanComplete);
    match &events[1] {
        LoginEvent::Authenticated(payload) => {
            assert_eq!(payload.id, "ID-0001");
            assert_eq!(payload.name, PLACEHOLDER_NAME);
            assert_eq!(payload.role, PLACEHOLDER_ROLE);
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

#[test]
fn surrounding_whitespace_is_trimmed_from_the_id() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("  ID-0001  ");

    let start = Instant::now();
    assert!(state.start_scan(ScanKind::Face, &fast_authenticator(), start));
    let events = run_to_completion(&mut state, start);

    match events.last() {
        Some(LoginEvent::Authenticated(payload)) => assert_eq!(payload.id, "ID-0001"),
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

#[test]
fn passphrase_is_decorative_and_never_reaches_the_payload() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");
    state.passphrase = TextInput::with_text("hunter2");

    let start = Instant::now();
    assert!(state.start_scan(ScanKind::Face, &fast_authenticator(), start));
    let events = run_to_completion(&mut state, start);

    match events.last() {
        Some(LoginEvent::Authenticated(payload)) => {
            assert_eq!(payload.id, "ID-0001");
            assert_eq!(payload.name, PLACEHOLDER_NAME);
            assert_eq!(payload.role, PLACEHOLDER_ROLE);
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

// ============================================================================
// TERMINAL ACCESS - BLOCKED INPUT
// ============================================================================

#[test]
fn blank_id_raises_warning_and_retry_succeeds_after_dismissal() {
    // Given: a blank ID field
    let mut state = LoginState::new();

    // When: the operator triggers a scan
    let start = Instant::now();
    assert!(!state.start_scan(ScanKind::Face, &fast_authenticator(), start));

    // Then: the warning blocks, nothing was armed
    assert_eq!(state.warning, Some(MISSING_ID_WARNING));
    assert_eq!(state.phase, AuthPhase::Idle);
    assert!(run_to_completion(&mut state, start).is_empty());

    // When: the warning is dismissed and an ID is entered
    state.dismiss_warning();
    state.identifier = TextInput::with_text("ID-0002");
    let retry = Instant::now();
    assert!(state.start_scan(ScanKind::Face, &fast_authenticator(), retry));

    // Then: the retry completes normally
    let events = run_to_completion(&mut state, retry);
    assert!(matches!(events.last(), Some(LoginEvent::Authenticated(_))));
}

#[test]
fn whitespace_only_id_is_treated_as_blank() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("   ");

    assert!(!state.start_scan(ScanKind::Fingerprint, &fast_authenticator(), Instant::now()));
    assert_eq!(state.warning, Some(MISSING_ID_WARNING));
}

// ============================================================================
// ENROLLMENT
// ============================================================================

#[test]
fn enrollment_with_blank_id_reports_the_fallback_clinician() {
    // Given: enrollment mode, nothing typed
    let mut state = LoginState::new();
    state.toggle_mode();
    assert_eq!(state.mode, Mode::Enrollment);

    // When: the face scan runs to completion
    let start = Instant::now();
    assert!(state.start_scan(ScanKind::Face, &fast_authenticator(), start));
    let events = run_to_completion(&mut state, start);

    // Then: the payload uses the fallback identifier
    match events.last() {
        Some(LoginEvent::Authenticated(payload)) => {
            assert_eq!(payload.id, FALLBACK_ID);
            assert_eq!(payload.role, PLACEHOLDER_ROLE);
        }
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

#[test]
fn enrollment_keeps_a_typed_id() {
    let mut state = LoginState::new();
    state.toggle_mode();
    state.identifier = TextInput::with_text("ID-0003");

    let start = Instant::now();
    assert!(state.start_scan(ScanKind::Fingerprint, &fast_authenticator(), start));
    let events = run_to_completion(&mut state, start);

    match events.last() {
        Some(LoginEvent::Authenticated(payload)) => assert_eq!(payload.id, "ID-0003"),
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

#[test]
fn mode_toggle_round_trip_restores_terminal_access() {
    let mut state = LoginState::new();
    state.toggle_mode();
    state.toggle_mode();
    assert_eq!(state.mode, Mode::TerminalAccess);
}

#[test]
fn mode_is_locked_while_a_sequence_runs() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");
    state.start_scan(ScanKind::Face, &fast_authenticator(), Instant::now());

    state.toggle_mode();
    assert_eq!(state.mode, Mode::TerminalAccess);
}

// ============================================================================
// ABORT AND DELIVERY GUARANTEES
// ============================================================================

#[test]
fn abort_mid_scan_never_delivers_a_payload() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");

    let start = Instant::now();
    state.start_scan(ScanKind::Face, &fast_authenticator(), start);
    state.reset();

    // Ticking far past both deadlines yields nothing.
    assert!(run_to_completion(&mut state, start).is_empty());
    assert_eq!(state.phase, AuthPhase::Idle);
}

#[test]
fn abort_during_transition_never_delivers_a_payload() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");

    let start = Instant::now();
    state.start_scan(ScanKind::Face, &fast_authenticator(), start);

    // Let the scan phase fire, then abort during the transition.
    let scan_done = start + std::time::Duration::from_millis(common::SCAN_MS);
    assert_eq!(state.tick(scan_done), Some(LoginEvent::ScanComplete));
    state.reset();

    assert!(run_to_completion(&mut state, scan_done).is_empty());
}

#[test]
fn payload_is_delivered_exactly_once() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");

    let start = Instant::now();
    state.start_scan(ScanKind::Fingerprint, &fast_authenticator(), start);
    let events = run_to_completion(&mut state, start);

    let deliveries = events
        .iter()
        .filter(|e| matches!(e, LoginEvent::Authenticated(_)))
        .count();
    assert_eq!(deliveries, 1);

    // A fresh sequence delivers again; the guarantee is per sequence.
    state.reset();
    let again = Instant::now();
    assert!(state.start_scan(ScanKind::Face, &fast_authenticator(), again));
    let events = run_to_completion(&mut state, again);
    assert!(matches!(events.last(), Some(LoginEvent::Authenticated(_))));
}

#[test]
fn concurrent_triggers_start_only_one_sequence() {
    let mut state = LoginState::new();
    state.identifier = TextInput::with_text("ID-0001");

    let start = Instant::now();
    assert!(state.start_scan(ScanKind::Face, &fast_authenticator(), start));
    assert!(!state.start_scan(ScanKind::Fingerprint, &fast_authenticator(), start));
    assert!(!state.start_scan(ScanKind::Face, &fast_authenticator(), start));

    let events = run_to_completion(&mut state, start);
    assert_eq!(events.len(), 2);
    assert_eq!(state.phase, AuthPhase::Succeeded);
}
