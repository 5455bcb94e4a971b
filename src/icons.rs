//! Icon provider system for the application.
//!
//! Supports multiple icon sets: NerdFonts, Unicode emojis, and ASCII
//! fallback. Auto-detects terminal capabilities and allows user override
//! via environment variable.

use std::env;

/// Available icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// NerdFonts icons (requires NerdFont-patched font)
    NerdFonts,
    /// Unicode emoji icons (works in most modern terminals)
    Unicode,
    /// ASCII-only fallback (maximum compatibility)
    Ascii,
}

impl IconSet {
    /// Detect the best icon set for the current terminal
    pub fn detect() -> Self {
        // Check for explicit user override
        if let Ok(icons) = env::var("POLARIS_ICONS") {
            return Self::from_name(&icons);
        }

        if Self::likely_supports_nerd_fonts() {
            IconSet::NerdFonts
        } else {
            IconSet::Unicode // Safe default
        }
    }

    /// Parse an icon set name ("nerd", "unicode", "ascii")
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => IconSet::NerdFonts,
            "ascii" | "plain" => IconSet::Ascii,
            _ => IconSet::Unicode, // Default fallback
        }
    }

    /// Heuristic to detect if terminal likely supports NerdFonts
    fn likely_supports_nerd_fonts() -> bool {
        // Check TERM_PROGRAM for known terminals with good font support
        if let Ok(term_program) = env::var("TERM_PROGRAM") {
            matches!(
                term_program.as_str(),
                "iTerm.app" | "WezTerm" | "Alacritty" | "kitty" | "Ghostty"
            )
        } else {
            false
        }
    }

    /// Get the name of this icon set
    pub fn name(&self) -> &'static str {
        match self {
            IconSet::NerdFonts => "NerdFonts",
            IconSet::Unicode => "Unicode",
            IconSet::Ascii => "ASCII",
        }
    }
}

/// Icon provider that returns appropriate glyphs based on the selected set
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    icon_set: IconSet,
}

impl Icons {
    /// Create a new icon provider with auto-detection
    pub fn new() -> Self {
        Self {
            icon_set: IconSet::detect(),
        }
    }

    /// Create an icon provider with a specific icon set
    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    /// The active icon set
    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    /// Face-scan affordance glyph
    pub fn face(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f2bd}",
            IconSet::Unicode => "👤",
            IconSet::Ascii => "[o]",
        }
    }

    /// Fingerprint affordance glyph
    pub fn fingerprint(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f0c85}",
            IconSet::Unicode => "☝",
            IconSet::Ascii => "(@)",
        }
    }

    /// Lock glyph for the secured-by line
    pub fn lock(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f023}",
            IconSet::Unicode => "🔒",
            IconSet::Ascii => "[#]",
        }
    }

    /// Verified/checkmark glyph for the access-granted overlay
    pub fn verified(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f05e0}",
            IconSet::Unicode => "✔",
            IconSet::Ascii => "OK",
        }
    }

    /// Warning glyph for blocked input
    pub fn warning(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f071}",
            IconSet::Unicode => "⚠",
            IconSet::Ascii => "!",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_from_name() {
        assert_eq!(IconSet::from_name("nerd"), IconSet::NerdFonts);
        assert_eq!(IconSet::from_name("ascii"), IconSet::Ascii);
        assert_eq!(IconSet::from_name("emoji"), IconSet::Unicode);
        assert_eq!(IconSet::from_name("anything"), IconSet::Unicode);
    }

    #[test]
    fn test_ascii_set_is_ascii_only() {
        let icons = Icons::with_icon_set(IconSet::Ascii);
        for glyph in [
            icons.face(),
            icons.fingerprint(),
            icons.lock(),
            icons.verified(),
            icons.warning(),
        ] {
            assert!(glyph.is_ascii(), "non-ascii glyph in ascii set: {glyph}");
        }
    }
}
