use crate::icons::Icons;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Institutional footer strip: endorsement slots and the secured-by line.
///
/// When an investor logo reference is configured it is shown as-is; there
/// is no fallback for it, so placeholder slots render instead when unset.
pub struct EndorsementStrip;

impl EndorsementStrip {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        investor_logo: Option<&str>,
        icons: &Icons,
    ) -> Result<()> {
        let t = theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let endorsement = match investor_logo {
            Some(reference) => Line::from(vec![
                Span::styled("ENDORSED BY  ", t.muted_style()),
                Span::styled(reference.to_string(), t.text_style()),
            ]),
            None => Line::from(vec![
                Span::styled("ENDORSED BY  ", t.muted_style()),
                Span::styled("[ INVESTOR_1 ]", t.muted_style()),
                Span::raw("  "),
                Span::styled("[ PARTNER_A ]", t.muted_style()),
            ]),
        };
        frame.render_widget(
            Paragraph::new(endorsement).alignment(Alignment::Center),
            chunks[0],
        );

        let secured = Line::from(vec![
            Span::styled(icons.lock(), t.emphasis_style()),
            Span::styled(" SECURED BY POLARIS CORE PROTOCOL", t.muted_style()),
        ]);
        frame.render_widget(
            Paragraph::new(secured).alignment(Alignment::Center),
            chunks[1],
        );

        Ok(())
    }
}
