// Component-based rendering for the entrance screen.
//
// Components are render-only: they draw one region of the screen from the
// shared state. Event handling is done in app.rs due to the state
// dependencies between the form, the overlays, and the scan sequence.

pub mod branding;
pub mod endorsements;
pub mod footer;
pub mod header;
pub mod input_field;
pub mod login_form;
pub mod scan_overlay;
pub mod transition_overlay;

pub use branding::BrandingBlock;
pub use endorsements::EndorsementStrip;
pub use footer::Footer;
pub use header::EcosystemHeader;
pub use input_field::InputField;
pub use login_form::LoginForm;
pub use scan_overlay::ScanOverlay;
pub use transition_overlay::TransitionOverlay;
