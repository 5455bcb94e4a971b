use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Ecosystem badge text shown on the left of the header strip
const ECOSYSTEM_BADGE: &str = "D_AI";
const ECOSYSTEM_NAME: &str = "DANIEL AI ECOSYSTEM";
/// Protocol tag shown on the right of the header strip
const PROTOCOL_TAG: &str = "Global Protocol v2.6";

/// Top branding strip: ecosystem badge on the left, protocol tag on the
/// right
pub struct EcosystemHeader;

impl EcosystemHeader {
    pub fn render(frame: &mut Frame, area: Rect) -> Result<()> {
        let t = theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(24)])
            .split(area);

        let badge = Line::from(vec![
            Span::styled(
                format!("[{}]", ECOSYSTEM_BADGE),
                t.text_style().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(ECOSYSTEM_NAME, t.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(badge), chunks[0]);

        let tag = Paragraph::new(PROTOCOL_TAG)
            .style(t.emphasis_style())
            .alignment(Alignment::Right);
        frame.render_widget(tag, chunks[1]);

        Ok(())
    }
}
