use crate::config::Config;
use crate::icons::Icons;
use crate::styles::{theme, CoreVariant};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

/// Full-screen access-granted overlay shown between scan completion and
/// the handoff to the destination core
pub struct TransitionOverlay;

impl TransitionOverlay {
    /// Render the overlay. `progress` is the elapsed fraction of the
    /// transition phase and drives the connection bar.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        config: &Config,
        progress: f64,
        icons: &Icons,
    ) -> Result<()> {
        let t = theme();
        let variant = CoreVariant::for_core(&config.core_name);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(variant.background())),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // Verified glyph
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Access granted
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Connection caption
                Constraint::Length(1), // Connection bar
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Entering core
                Constraint::Length(1), // Core role
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(icons.verified())
                .style(t.success_style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let granted = Line::from(vec![
            Span::styled("ACCESS ", t.text_style().add_modifier(Modifier::BOLD)),
            Span::styled(
                "GRANTED",
                Style::default()
                    .fg(variant.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(granted).alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new("INITIALIZING NEURAL CONNECTION...")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[5],
        );

        Self::render_connection_bar(frame, chunks[6], progress, variant);

        let entering = Line::from(vec![
            Span::styled("ENTERING ", t.text_style()),
            Span::styled(
                config.core_name.to_uppercase(),
                t.text_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" CORE", Style::default().fg(variant.accent())),
        ]);
        frame.render_widget(
            Paragraph::new(entering).alignment(Alignment::Center),
            chunks[8],
        );

        frame.render_widget(
            Paragraph::new(config.core_role.to_uppercase())
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[9],
        );

        Ok(())
    }

    /// Thin bar with a bright segment travelling left to right
    fn render_connection_bar(frame: &mut Frame, area: Rect, progress: f64, variant: CoreVariant) {
        let t = theme();
        let bar_width = area.width.min(48);
        let x = area.x + (area.width.saturating_sub(bar_width)) / 2;

        let mut spans = Vec::with_capacity(bar_width as usize);
        let head = (f64::from(bar_width) * progress.fract()) as u16;
        for i in 0..bar_width {
            let style = if i.abs_diff(head) <= 2 {
                Style::default().fg(variant.accent())
            } else {
                t.muted_style()
            };
            spans.push(Span::styled("─", style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x, area.y, bar_width, 1),
        );
    }
}
