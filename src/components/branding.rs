use crate::assets::CoreLogo;
use crate::config::Config;
use crate::styles::theme;
use crate::widgets::PolarisLogo;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Minimum height for the full branding block; below this the compact
/// rendering with the small logo is used
const COMPACT_THRESHOLD: u16 = 6;

/// Core branding block: logo art, suite name, strapline, and the resolved
/// logo reference caption
pub struct BrandingBlock;

impl BrandingBlock {
    pub fn render(frame: &mut Frame, area: Rect, config: &Config, logo: &CoreLogo) -> Result<()> {
        let t = theme();

        // Cramped terminals get the two-line logo so the name and
        // strapline still fit.
        let compact = area.height < COMPACT_THRESHOLD;
        let (logo_widget, logo_height, logo_width) = if compact {
            (PolarisLogo::small(), 2, 26)
        } else {
            (PolarisLogo::regular(), 3, 20)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(logo_height), // Logo art
                Constraint::Length(1),           // Suite name
                Constraint::Length(1),           // Strapline
                Constraint::Length(1),           // Logo reference caption
            ])
            .split(area);

        let logo_area = center_line(chunks[0], logo_width);
        frame.render_widget(logo_widget, logo_area);

        // The suite name renders light/bold around the first space
        // ("POLARIS" / "MEDICO"). A single-word name falls back to the
        // core name for the bold half.
        let (light, bold) = match config.system_name.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.to_string()),
            None => (config.system_name.clone(), config.core_name.clone()),
        };
        let name_line = Line::from(vec![
            Span::styled(light.to_uppercase(), t.text_style()),
            Span::raw(" "),
            Span::styled(
                bold.to_uppercase(),
                t.emphasis_style().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(name_line).alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(config.portal_description.to_uppercase())
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(format!("asset: {}", logo.source))
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[3],
        );

        Ok(())
    }
}

/// Center a fixed-width region horizontally inside an area
fn center_line(area: Rect, width: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width.min(area.width), area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_symbols(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let config = Config::default();
        let logo = CoreLogo::resolve(None);
        terminal
            .draw(|frame| {
                BrandingBlock::render(frame, frame.area(), &config, &logo).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_tall_area_uses_the_regular_logo() {
        let symbols = rendered_symbols(60, 8);
        assert!(symbols.contains('┏'));
        assert!(!symbols.contains('⣰'));
    }

    #[test]
    fn test_cramped_area_uses_the_small_logo() {
        let symbols = rendered_symbols(60, 5);
        assert!(symbols.contains('⣰'));
        assert!(!symbols.contains('┏'));
    }
}
