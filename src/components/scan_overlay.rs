use crate::auth::ScanKind;
use crate::icons::Icons;
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Spinner frames for the scanning status line
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Full-screen scanning overlay with the animated sweep line
pub struct ScanOverlay;

impl ScanOverlay {
    /// Render the overlay.
    ///
    /// `progress` is the elapsed fraction of the scan phase and drives the
    /// sweep line and spinner.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        kind: ScanKind,
        progress: f64,
        icons: &Icons,
    ) -> Result<()> {
        let t = theme();

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(t.background_style()), area);

        let popup = center_popup(area, 50, 60);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(7),    // Scan frame
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Encryption caption
            ])
            .split(popup);

        Self::render_scan_frame(frame, chunks[0], kind, progress, icons);

        let spinner_idx = ((progress * 12.0) as usize) % SPINNER.len();
        let status = Line::from(vec![
            Span::styled(SPINNER[spinner_idx], t.emphasis_style()),
            Span::raw(" "),
            Span::styled(kind.status_line(), t.text_style()),
        ]);
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new("ENCRYPTION LAYER: ACTIVE")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[3],
        );

        Ok(())
    }

    /// The bordered frame holding the biometric glyph and the sweep line
    fn render_scan_frame(
        frame: &mut Frame,
        area: Rect,
        kind: ScanKind,
        progress: f64,
        icons: &Icons,
    ) {
        let t = theme();

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let inner = frame_block.inner(area);
        frame.render_widget(frame_block, area);

        let glyph = match kind {
            ScanKind::Face => icons.face(),
            ScanKind::Fingerprint => icons.fingerprint(),
        };
        let glyph_para = Paragraph::new(glyph)
            .style(t.emphasis_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        let glyph_y = inner.y + inner.height / 2;
        if glyph_y < inner.y + inner.height {
            frame.render_widget(glyph_para, Rect::new(inner.x, glyph_y, inner.width, 1));
        }

        // Sweep line: loops top-to-bottom over the scan phase.
        if inner.height > 0 {
            let sweep = (progress * 3.0).fract();
            let sweep_y = inner.y + ((f64::from(inner.height) * sweep) as u16).min(inner.height - 1);
            let line = Paragraph::new("─".repeat(inner.width as usize))
                .style(t.emphasis_style());
            frame.render_widget(line, Rect::new(inner.x, sweep_y, inner.width, 1));
        }
    }
}
