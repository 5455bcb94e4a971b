//! The [`PolarisLogo`] widget renders the Polaris Medico logo art.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// A widget that renders the Polaris logo
///
/// The logo comes in two sizes: `Small` (2 lines) and `Regular` (3 lines).
/// The branding block uses the regular size, dropping to the small size
/// when the terminal is too cramped for the full block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PolarisLogo {
    size: Size,
}

/// The size of the logo
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Size {
    /// A small logo (2 lines, braille characters)
    #[default]
    Small,
    /// A regular logo (3 lines, box drawing characters)
    Regular,
}

impl PolarisLogo {
    /// Create a new logo widget
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    /// Create a new logo widget with a small size (2 lines)
    pub const fn small() -> Self {
        Self::new(Size::Small)
    }

    /// Create a new logo widget with a regular size (3 lines)
    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    fn small_art() -> &'static str {
        indoc! {"
            ⣰⡀ ⢀⡀ ⡇ ⢀⡀ ⡀⣀ ⠄ ⢀⣀
            ⠘⠤ ⠣⠜ ⠧ ⠣⠼ ⠏  ⠇ ⠭⠕
        "}
    }

    fn regular_art() -> &'static str {
        indoc! {"
            ┏━┓┏━┓╻  ┏━┓┏━┓╻┏━┓
            ┣━┛┃ ┃┃  ┣━┫┣┳┛┃┗━┓
            ╹  ┗━┛┗━╸╹ ╹╹┗╸╹┗━┛
        "}
    }
}

impl Widget for PolarisLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let art = match self.size {
            Size::Small => Self::small_art(),
            Size::Regular => Self::regular_art(),
        };
        Text::styled(art, t.title_style()).render(area, buf);
    }
}
