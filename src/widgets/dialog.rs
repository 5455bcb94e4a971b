//! Dialog widget for blocking warnings.
//!
//! Self-contained widget implementing the Widget trait. Handles centering,
//! background dimming, borders, and content rendering. The entrance uses
//! it for the single blocking warning it can raise (missing professional
//! ID).

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default)]
pub enum DialogVariant {
    #[default]
    Default,
    Warning,
    Error,
}

impl DialogVariant {
    /// Get the prefix text for the variant
    fn prefix(&self) -> &'static str {
        match self {
            DialogVariant::Default => "",
            DialogVariant::Warning => "Warning",
            DialogVariant::Error => "Error",
        }
    }
}

/// Dialog widget - a self-contained warning/error dialog
pub struct Dialog<'a> {
    /// Title shown in the title block
    pub title: &'a str,
    /// Content text to display
    pub content: &'a str,
    /// Minimum width in columns
    pub min_width: u16,
    /// Maximum width in columns
    pub max_width: u16,
    /// Visual variant (affects colors and title prefix)
    pub variant: DialogVariant,
    /// Whether to dim the background behind the dialog
    pub dim_background: bool,
    /// Footer hint shown inside the dialog (optional)
    pub footer: Option<&'a str>,
}

impl<'a> Dialog<'a> {
    /// Create a new dialog with title and content.
    ///
    /// Width is calculated from the content, clamped between 40-70 columns
    /// by default.
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            min_width: 40,
            max_width: 70,
            variant: DialogVariant::Default,
            dim_background: true,
            footer: None,
        }
    }

    /// Set the visual variant (affects border color and title prefix)
    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set footer hint text shown inside the dialog
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    fn render_impl(&self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        // Build title with variant prefix first (needed for width calculation)
        let prefix = self.variant.prefix();
        let title_text = if prefix.is_empty() {
            self.title.to_string()
        } else {
            format!("{}: {}", prefix, self.title)
        };

        let content_width = self
            .content
            .lines()
            .map(str::len)
            .max()
            .unwrap_or(0)
            .max(title_text.len()) as u16;
        let dialog_width = (content_width + 8).clamp(
            self.min_width,
            self.max_width.min(area.width.saturating_sub(4)),
        );

        let content_lines = self.content.lines().count().max(1) as u16;
        let footer_lines = u16::from(self.footer.is_some()) * 2;
        let dialog_height =
            (content_lines + footer_lines + 4).min(area.height.saturating_sub(2));

        let popup_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
        let popup_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;
        let popup_area = Rect::new(popup_x, popup_y, dialog_width, dialog_height);

        // Optionally dim the background
        if self.dim_background {
            let dim = Block::default().style(t.dim_style());
            Widget::render(dim, area, buf);
        }

        // Always clear the dialog area for clean rendering
        Widget::render(Clear, popup_area, buf);

        let border_style = match self.variant {
            DialogVariant::Default => Style::default().fg(t.border_focused),
            DialogVariant::Warning => Style::default().fg(t.warning),
            DialogVariant::Error => Style::default().fg(t.error),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title_text)
            .title_alignment(Alignment::Center)
            .title_style(t.text_style().add_modifier(Modifier::BOLD))
            .padding(Padding::new(2, 2, 1, 0))
            .style(t.background_style());

        let inner = block.inner(popup_area);
        Widget::render(block, popup_area, buf);

        let constraints = if self.footer.is_some() {
            vec![Constraint::Min(1), Constraint::Length(1)]
        } else {
            vec![Constraint::Min(1)]
        };
        let chunks = Layout::vertical(constraints).split(inner);

        let content_para = Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(t.text_style());
        Widget::render(content_para, chunks[0], buf);

        if let Some(footer_text) = self.footer {
            let footer_para = Paragraph::new(footer_text)
                .alignment(Alignment::Center)
                .style(t.muted_style());
            Widget::render(footer_para, chunks[1], buf);
        }
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_impl(area, buf);
    }
}
