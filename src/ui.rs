//! Entrance screen state.
//!
//! Everything observable about the screen lives here, free of any
//! rendering concern, so the whole login flow can be exercised in tests by
//! driving these methods directly. The state machine is deliberately
//! small: `Idle -> Scanning(kind) -> Succeeded -> payload delivered`, with
//! no path back except an explicit reset.

use std::time::Instant;

use crate::auth::{AuthPayload, Authenticator, ScanKind, ScanRequest};
use crate::scan::{ScanSequence, SequenceEvent};
use crate::utils::TextInput;

/// Warning surfaced when a scan is requested without a professional ID
pub const MISSING_ID_WARNING: &str = "Please enter your Professional ID";

/// Form presentation: existing-operator login or new-operator enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    TerminalAccess,
    Enrollment,
}

impl Mode {
    /// Label of the primary action button in this mode
    pub fn primary_action_label(&self) -> &'static str {
        match self {
            Mode::TerminalAccess => "Request Access",
            Mode::Enrollment => "Enroll Bio-Identity",
        }
    }

    /// Label of the mode-toggle line in this mode
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Mode::TerminalAccess => "New Clinician? Bio-Enrollment",
            Mode::Enrollment => "Back to Terminal Access",
        }
    }
}

/// Which overlay is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Idle,
    Scanning(ScanKind),
    Succeeded,
}

/// Focusable elements of the credential form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Identifier,
    /// Shown (and focusable) only in TerminalAccess mode
    Passphrase,
    FaceScan,
    TouchScan,
    ModeToggle,
}

/// Event produced by advancing the screen's clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// The scanning overlay finished; the success overlay is now visible
    ScanComplete,
    /// The transition finished; deliver this payload to the caller
    Authenticated(AuthPayload),
}

/// Complete state of the entrance screen
#[derive(Debug, Default)]
pub struct LoginState {
    pub mode: Mode,
    pub phase: AuthPhase,
    /// Professional terminal ID input
    pub identifier: TextInput,
    /// "Encryption Key" input; write-only decoration, never read or
    /// validated
    pub passphrase: TextInput,
    pub focused_field: FormField,
    /// Blocking warning popup content, if any
    pub warning: Option<&'static str>,
    sequence: Option<ScanSequence>,
    pending: Option<AuthPayload>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between TerminalAccess and Enrollment. A no-op while a scan
    /// sequence is running.
    pub fn toggle_mode(&mut self) {
        if self.phase != AuthPhase::Idle {
            return;
        }
        self.mode = match self.mode {
            Mode::TerminalAccess => Mode::Enrollment,
            Mode::Enrollment => Mode::TerminalAccess,
        };
        // The passphrase field disappears in enrollment mode; move focus off it.
        if self.mode == Mode::Enrollment && self.focused_field == FormField::Passphrase {
            self.focused_field = FormField::Identifier;
        }
    }

    /// Begin a scan sequence. In TerminalAccess mode the professional ID
    /// is required; a blank ID raises the blocking warning instead and the
    /// state stays Idle. A second trigger while a sequence is running is a
    /// no-op.
    ///
    /// Returns true when a sequence actually began.
    pub fn start_scan(
        &mut self,
        kind: ScanKind,
        authenticator: &dyn Authenticator,
        now: Instant,
    ) -> bool {
        if self.phase != AuthPhase::Idle {
            return false;
        }
        let identifier = self.identifier.text_trimmed();
        if self.mode == Mode::TerminalAccess && identifier.is_empty() {
            self.warning = Some(MISSING_ID_WARNING);
            return false;
        }

        let outcome = authenticator.authenticate(ScanRequest { kind, identifier });
        self.sequence = Some(ScanSequence::start(
            now,
            outcome.scan_delay,
            outcome.transition_delay,
        ));
        self.pending = Some(outcome.payload);
        self.phase = AuthPhase::Scanning(kind);
        true
    }

    /// Advance the screen's clock. Returns at most one event per call; the
    /// payload is delivered exactly once.
    pub fn tick(&mut self, now: Instant) -> Option<LoginEvent> {
        let sequence = self.sequence.as_mut()?;
        match sequence.tick(now)? {
            SequenceEvent::ScanComplete => {
                self.phase = AuthPhase::Succeeded;
                Some(LoginEvent::ScanComplete)
            }
            SequenceEvent::TransitionComplete => {
                self.sequence = None;
                self.pending.take().map(LoginEvent::Authenticated)
            }
        }
    }

    /// Abort any running sequence and return to the idle form. Pending
    /// deadlines are discarded, so no payload will ever be delivered for
    /// the aborted sequence.
    pub fn reset(&mut self) {
        self.sequence = None;
        self.pending = None;
        self.phase = AuthPhase::Idle;
        self.warning = None;
    }

    /// Clear the blocking warning so the operator can retry
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Animation progress of the active overlay phase, 0.0..=1.0
    pub fn scan_progress(&self, now: Instant) -> f64 {
        self.sequence.as_ref().map_or(0.0, |s| s.progress(now))
    }

    /// Whether a scan sequence is currently running
    pub fn sequence_running(&self) -> bool {
        self.sequence.is_some()
    }

    /// Fields focusable in the current mode, in tab order
    fn focus_order(&self) -> &'static [FormField] {
        match self.mode {
            Mode::TerminalAccess => &[
                FormField::Identifier,
                FormField::Passphrase,
                FormField::FaceScan,
                FormField::TouchScan,
                FormField::ModeToggle,
            ],
            Mode::Enrollment => &[
                FormField::Identifier,
                FormField::FaceScan,
                FormField::TouchScan,
                FormField::ModeToggle,
            ],
        }
    }

    /// Move focus to the next field (Tab)
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = order[(idx + 1) % order.len()];
    }

    /// Move focus to the previous field (Shift+Tab)
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = order[(idx + order.len() - 1) % order.len()];
    }

    /// The text input currently focused, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Identifier => Some(&mut self.identifier),
            FormField::Passphrase if self.mode == Mode::TerminalAccess => {
                Some(&mut self.passphrase)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SimulatedAuthenticator;
    use std::time::Duration;

    fn fast_auth() -> SimulatedAuthenticator {
        SimulatedAuthenticator::new(Duration::from_millis(35), Duration::from_millis(20))
    }

    #[test]
    fn test_blank_id_in_terminal_access_is_blocked() {
        let mut state = LoginState::new();
        let now = Instant::now();
        assert!(!state.start_scan(ScanKind::Face, &fast_auth(), now));
        assert_eq!(state.phase, AuthPhase::Idle);
        assert_eq!(state.warning, Some(MISSING_ID_WARNING));
        assert!(!state.sequence_running());
    }

    #[test]
    fn test_enrollment_allows_blank_id() {
        let mut state = LoginState::new();
        state.toggle_mode();
        let now = Instant::now();
        assert!(state.start_scan(ScanKind::Face, &fast_auth(), now));
        assert_eq!(state.phase, AuthPhase::Scanning(ScanKind::Face));
        assert!(state.warning.is_none());
    }

    #[test]
    fn test_second_trigger_while_scanning_is_a_no_op() {
        let mut state = LoginState::new();
        state.identifier = TextInput::with_text("ID-0001");
        let now = Instant::now();
        assert!(state.start_scan(ScanKind::Face, &fast_auth(), now));
        assert!(!state.start_scan(ScanKind::Fingerprint, &fast_auth(), now));
        assert_eq!(state.phase, AuthPhase::Scanning(ScanKind::Face));
    }

    #[test]
    fn test_toggle_mode_is_idempotent_under_double_application() {
        let mut state = LoginState::new();
        state.toggle_mode();
        state.toggle_mode();
        assert_eq!(state.mode, Mode::TerminalAccess);
        assert_eq!(state.phase, AuthPhase::Idle);
    }

    #[test]
    fn test_toggle_mode_moves_focus_off_passphrase() {
        let mut state = LoginState::new();
        state.focused_field = FormField::Passphrase;
        state.toggle_mode();
        assert_eq!(state.focused_field, FormField::Identifier);
    }

    #[test]
    fn test_full_sequence_delivers_payload_once() {
        let mut state = LoginState::new();
        state.identifier = TextInput::with_text("ID-0001");
        let start = Instant::now();
        assert!(state.start_scan(ScanKind::Fingerprint, &fast_auth(), start));

        // Before the scan delay nothing happens.
        assert_eq!(state.tick(start + Duration::from_millis(10)), None);
        assert_eq!(state.phase, AuthPhase::Scanning(ScanKind::Fingerprint));

        let scan_done = start + Duration::from_millis(35);
        assert_eq!(state.tick(scan_done), Some(LoginEvent::ScanComplete));
        assert_eq!(state.phase, AuthPhase::Succeeded);

        let transition_done = scan_done + Duration::from_millis(20);
        match state.tick(transition_done) {
            Some(LoginEvent::Authenticated(payload)) => {
                assert_eq!(payload.id, "ID-0001");
                assert_eq!(payload.role, "AUTHORIZED_PERSONNEL");
            }
            other => panic!("expected Authenticated, got {other:?}"),
        }

        // Spent: no further events, ever.
        assert_eq!(state.tick(transition_done + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_reset_mid_sequence_cancels_delivery() {
        let mut state = LoginState::new();
        state.identifier = TextInput::with_text("ID-0001");
        let start = Instant::now();
        state.start_scan(ScanKind::Face, &fast_auth(), start);
        state.reset();

        assert_eq!(state.phase, AuthPhase::Idle);
        assert_eq!(state.tick(start + Duration::from_secs(60)), None);
    }

    #[test]
    fn test_focus_order_skips_passphrase_in_enrollment() {
        let mut state = LoginState::new();
        state.toggle_mode();
        assert_eq!(state.focused_field, FormField::Identifier);
        state.focus_next();
        assert_eq!(state.focused_field, FormField::FaceScan);
        state.focus_prev();
        assert_eq!(state.focused_field, FormField::Identifier);
    }

    #[test]
    fn test_warning_dismiss_allows_retry() {
        let mut state = LoginState::new();
        let now = Instant::now();
        state.start_scan(ScanKind::Face, &fast_auth(), now);
        assert!(state.warning.is_some());
        state.dismiss_warning();
        assert!(state.warning.is_none());
        state.identifier = TextInput::with_text("ID-0001");
        assert!(state.start_scan(ScanKind::Face, &fast_auth(), now));
    }
}
