use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create the standard screen layout: header, content, footer.
///
/// # Arguments
/// * `area` - The full area to split
/// * `header_height` - Height of the header chunk in lines
/// * `footer_height` - Height of the footer chunk in lines
pub fn create_standard_layout(
    area: Rect,
    header_height: u16,
    footer_height: u16,
) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Calculate a centered popup area as a percentage of the parent area
pub fn center_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let popup_width = (u32::from(area.width) * u32::from(width_percent) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(height_percent) / 100) as u16;
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}
