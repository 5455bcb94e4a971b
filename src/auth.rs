//! The authenticator boundary behind the biometric affordances.
//!
//! No real verification exists in this crate; the entrance is decorative.
//! The boundary is still an explicit trait so a deployment can swap in a
//! real verifier without touching the UI state machine. The shipped
//! [`SimulatedAuthenticator`] always succeeds after its configured delays
//! and fabricates the fixed placeholder payload.

use std::time::Duration;

/// Identifier reported when the operator left the ID field blank
pub const FALLBACK_ID: &str = "CLINICIAN-001";

/// Display name reported for every simulated login
pub const PLACEHOLDER_NAME: &str = "User Access";

/// Role tag reported for every simulated login
pub const PLACEHOLDER_ROLE: &str = "AUTHORIZED_PERSONNEL";

/// Which biometric affordance triggered the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    Face,
    Fingerprint,
}

impl ScanKind {
    /// Status line shown in the scanning overlay
    pub fn status_line(&self) -> &'static str {
        match self {
            ScanKind::Face => "ANALYZING FACIAL MAP...",
            ScanKind::Fingerprint => "CAPTURING DERMAL PATTERN...",
        }
    }

    /// Short label for the affordance tile
    pub fn label(&self) -> &'static str {
        match self {
            ScanKind::Face => "Face ID",
            ScanKind::Fingerprint => "Touch ID",
        }
    }
}

/// Completion payload handed to the caller on simulated success.
///
/// The shape is fixed: only `id` ever derives from operator input, and it
/// falls back to [`FALLBACK_ID`] when the ID field was blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// A scan request handed to the authenticator
#[derive(Debug, Clone, Copy)]
pub struct ScanRequest<'a> {
    pub kind: ScanKind,
    /// Trimmed professional ID; may be empty in enrollment mode
    pub identifier: &'a str,
}

/// What a scan will do: how long each phase takes and what the caller
/// receives when both phases have elapsed.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub scan_delay: Duration,
    pub transition_delay: Duration,
    pub payload: AuthPayload,
}

/// Capability that resolves a biometric scan request.
///
/// Implementations decide the pacing of the two-phase sequence and the
/// payload delivered at the end. There is no failure channel: the entrance
/// surfaces only success.
pub trait Authenticator {
    fn authenticate(&self, request: ScanRequest<'_>) -> ScanOutcome;
}

/// The always-successful simulation shipped with the entrance
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    scan_delay: Duration,
    transition_delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(scan_delay: Duration, transition_delay: Duration) -> Self {
        Self {
            scan_delay,
            transition_delay,
        }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Duration::from_millis(3500), Duration::from_millis(2000))
    }
}

impl Authenticator for SimulatedAuthenticator {
    fn authenticate(&self, request: ScanRequest<'_>) -> ScanOutcome {
        let id = if request.identifier.is_empty() {
            FALLBACK_ID.to_string()
        } else {
            request.identifier.to_string()
        };

        ScanOutcome {
            scan_delay: self.scan_delay,
            transition_delay: self.transition_delay,
            payload: AuthPayload {
                id,
                name: PLACEHOLDER_NAME.to_string(),
                role: PLACEHOLDER_ROLE.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_carried_through() {
        let auth = SimulatedAuthenticator::default();
        let outcome = auth.authenticate(ScanRequest {
            kind: ScanKind::Fingerprint,
            identifier: "ID-0001",
        });
        assert_eq!(outcome.payload.id, "ID-0001");
        assert_eq!(outcome.payload.name, PLACEHOLDER_NAME);
        assert_eq!(outcome.payload.role, PLACEHOLDER_ROLE);
    }

    #[test]
    fn test_blank_identifier_uses_fallback() {
        let auth = SimulatedAuthenticator::default();
        let outcome = auth.authenticate(ScanRequest {
            kind: ScanKind::Face,
            identifier: "",
        });
        assert_eq!(outcome.payload.id, FALLBACK_ID);
    }

    #[test]
    fn test_configured_delays_are_reported() {
        let auth = SimulatedAuthenticator::new(
            Duration::from_millis(10),
            Duration::from_millis(20),
        );
        let outcome = auth.authenticate(ScanRequest {
            kind: ScanKind::Face,
            identifier: "x",
        });
        assert_eq!(outcome.scan_delay, Duration::from_millis(10));
        assert_eq!(outcome.transition_delay, Duration::from_millis(20));
    }
}
