//! Branded terminal entrance screen for the Polaris Medico suite.
//!
//! Renders a full-screen login form with a simulated biometric
//! verification flow: the operator enters a professional ID, triggers a
//! face or fingerprint scan, and after a fixed scan-and-transition
//! sequence the screen hands off a hard-coded clinician payload to its
//! completion callback. No real authentication takes place anywhere in
//! this crate.

pub mod app;
pub mod assets;
pub mod auth;
pub mod cli;
pub mod components;
pub mod config;
pub mod icons;
pub mod scan;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

pub use app::{App, LoginCallback};
pub use auth::{AuthPayload, Authenticator, ScanKind, SimulatedAuthenticator};
pub use config::Config;
pub use scan::{ScanSequence, SequenceEvent};
pub use ui::{AuthPhase, FormField, LoginEvent, LoginState, Mode};
