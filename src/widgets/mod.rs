// Reusable UI widgets

pub mod dialog;
pub mod logo;

pub use dialog::{Dialog, DialogVariant};
pub use logo::{PolarisLogo, Size};
