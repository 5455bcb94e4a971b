//! Logo asset resolution.
//!
//! The entrance can be pointed at deployment-specific logo assets. The core
//! logo always resolves to something displayable: a configured reference
//! that exists on disk wins, an unset or unreadable reference falls back to
//! the documented defaults. The investor logo deliberately has no fallback;
//! placeholder slots render instead.

use std::path::Path;

/// Bundled default core logo reference
pub const DEFAULT_CORE_LOGO: &str = "polaris_medico_logo.png";

/// External default icon used when a configured core logo cannot be loaded
pub const FALLBACK_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/3063/3063176.png";

/// Where a resolved logo reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoOrigin {
    /// The operator-configured reference, verified present
    Configured,
    /// The bundled default (nothing configured)
    Default,
    /// The external fallback icon (configured reference failed to load)
    Fallback,
}

/// A resolved core logo reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreLogo {
    pub source: String,
    pub origin: LogoOrigin,
}

impl CoreLogo {
    /// Resolve the core logo from an optional configured reference.
    ///
    /// URLs are taken at face value; local paths are checked for presence,
    /// which is this renderer's analogue of an image load failure.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            None => Self {
                source: DEFAULT_CORE_LOGO.to_string(),
                origin: LogoOrigin::Default,
            },
            Some(reference) if is_remote(reference) || Path::new(reference).exists() => Self {
                source: reference.to_string(),
                origin: LogoOrigin::Configured,
            },
            Some(_) => Self {
                source: FALLBACK_ICON_URL.to_string(),
                origin: LogoOrigin::Fallback,
            },
        }
    }
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}
