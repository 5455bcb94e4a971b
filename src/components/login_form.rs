use crate::auth::ScanKind;
use crate::icons::Icons;
use crate::styles::theme;
use crate::ui::{FormField, LoginState, Mode};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::input_field::InputField;

/// The credential form panel: inputs, primary action, and the biometric
/// trigger tiles
pub struct LoginForm;

impl LoginForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &LoginState, icons: &Icons) -> Result<()> {
        let t = theme();

        let panel = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(ratatui::widgets::Padding::new(2, 2, 1, 1));
        let inner = panel.inner(area);
        frame.render_widget(panel, area);

        let terminal_access = state.mode == Mode::TerminalAccess;

        let mut constraints = vec![Constraint::Length(3)]; // ID input
        if terminal_access {
            constraints.push(Constraint::Length(3)); // Passphrase input
        }
        constraints.extend([
            Constraint::Length(3), // Primary action
            Constraint::Length(1), // Divider
            Constraint::Length(4), // Trigger tiles
            Constraint::Length(1), // Mode toggle
            Constraint::Min(0),
        ]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);
        let mut row = 0;

        InputField::render(
            frame,
            rows[row],
            state.identifier.text(),
            state.identifier.cursor(),
            state.focused_field == FormField::Identifier,
            "Professional Terminal ID",
            Some("ID-2026-AUTH"),
            false,
        )?;
        row += 1;

        if terminal_access {
            InputField::render(
                frame,
                rows[row],
                state.passphrase.text(),
                state.passphrase.cursor(),
                state.focused_field == FormField::Passphrase,
                "Encryption Key",
                Some("••••••••"),
                true,
            )?;
            row += 1;
        }

        Self::render_primary_action(frame, rows[row], state);
        row += 1;

        let divider = Paragraph::new("── BIOMETRIC VERIFICATION LAYER ──")
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(divider, rows[row]);
        row += 1;

        Self::render_trigger_tiles(frame, rows[row], state, icons);
        row += 1;

        let toggle_style = if state.focused_field == FormField::ModeToggle {
            t.highlight_style()
        } else {
            t.muted_style()
        };
        let toggle = Paragraph::new(state.mode.toggle_label())
            .style(toggle_style)
            .alignment(Alignment::Center);
        frame.render_widget(toggle, rows[row]);

        Ok(())
    }

    /// The primary button. Activating it submits the form as a face scan.
    fn render_primary_action(frame: &mut Frame, area: Rect, state: &LoginState) {
        let t = theme();
        let focused_input = matches!(
            state.focused_field,
            FormField::Identifier | FormField::Passphrase
        );

        let style = if focused_input {
            // Hint that Enter on an input submits the form.
            t.title_style()
        } else {
            t.text_style()
        };

        let button = Paragraph::new(state.mode.primary_action_label().to_uppercase())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_focused_style()),
            );
        frame.render_widget(button, area);
    }

    fn render_trigger_tiles(frame: &mut Frame, area: Rect, state: &LoginState, icons: &Icons) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::render_tile(
            frame,
            columns[0],
            icons.face(),
            ScanKind::Face.label(),
            state.focused_field == FormField::FaceScan,
        );
        Self::render_tile(
            frame,
            columns[1],
            icons.fingerprint(),
            ScanKind::Fingerprint.label(),
            state.focused_field == FormField::TouchScan,
        );
    }

    fn render_tile(frame: &mut Frame, area: Rect, glyph: &str, label: &str, focused: bool) {
        let t = theme();
        let (border_style, text_style) = if focused {
            (t.border_focused_style(), t.highlight_style())
        } else {
            (t.border_style(), t.muted_style())
        };

        let tile = Paragraph::new(format!("{}  {}", glyph, label.to_uppercase()))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        frame.render_widget(tile, area);
    }
}
