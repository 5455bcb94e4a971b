use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common input field component
pub struct InputField;

impl InputField {
    /// Render an input field with cursor positioning
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the input in
    /// * `text` - The current text value
    /// * `cursor_pos` - The cursor position (in characters)
    /// * `focused` - Whether the input is focused
    /// * `title` - The title/label for the input
    /// * `placeholder` - Placeholder text when input is empty
    /// * `masked` - Whether to mask the value (passphrase fields)
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        text: &str,
        cursor_pos: usize,
        focused: bool,
        title: &str,
        placeholder: Option<&str>,
        masked: bool,
    ) -> Result<()> {
        let t = theme();

        let masked_text;
        let display_text = if text.is_empty() {
            placeholder.unwrap_or("")
        } else if masked {
            masked_text = "•".repeat(text.chars().count());
            &masked_text
        } else {
            text
        };

        let border_style = if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        let text_style = if text.is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Left)
            .border_style(border_style);

        let input_inner = input_block.inner(area);

        let input_paragraph = Paragraph::new(display_text)
            .block(input_block)
            .style(text_style);

        frame.render_widget(input_paragraph, area);

        // Set cursor position if focused
        if focused {
            let clamped_cursor = cursor_pos.min(text.chars().count());
            let x = input_inner.x + clamped_cursor.min(input_inner.width as usize) as u16;
            let y = input_inner.y;
            frame.set_cursor_position((x, y));
        }

        Ok(())
    }
}
