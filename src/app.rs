use crate::assets::CoreLogo;
use crate::auth::{AuthPayload, Authenticator, ScanKind};
use crate::components::{
    BrandingBlock, EcosystemHeader, EndorsementStrip, Footer, LoginForm, ScanOverlay,
    TransitionOverlay,
};
use crate::config::Config;
use crate::icons::Icons;
use crate::tui::Tui;
use crate::ui::{AuthPhase, FormField, LoginEvent, LoginState};
use crate::utils::create_standard_layout;
use crate::widgets::{Dialog, DialogVariant};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Callback invoked exactly once on simulated authentication success
pub type LoginCallback = Box<dyn FnOnce(AuthPayload)>;

/// Main application: owns the terminal, the screen state, and the
/// authenticator, and drives them from the event loop
pub struct App {
    config: Config,
    tui: Tui,
    state: LoginState,
    authenticator: Box<dyn Authenticator>,
    icons: Icons,
    core_logo: CoreLogo,
    on_login: Option<LoginCallback>,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        authenticator: Box<dyn Authenticator>,
        on_login: LoginCallback,
    ) -> Result<Self> {
        let tui = Tui::new()?;
        let core_logo = CoreLogo::resolve(config.core_logo.as_deref());
        Ok(Self {
            config,
            tui,
            state: LoginState::new(),
            authenticator,
            icons: Icons::new(),
            core_logo,
            on_login: Some(on_login),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event);
            }

            self.advance_clock();
        }
        Ok(())
    }

    /// Advance the scan sequence and deliver the payload when it completes
    fn advance_clock(&mut self) {
        let now = Instant::now();
        match self.state.tick(now) {
            Some(LoginEvent::ScanComplete) => {
                info!("simulated scan complete, showing transition overlay");
            }
            Some(LoginEvent::Authenticated(payload)) => {
                info!(id = %payload.id, role = %payload.role, "simulated authentication complete");
                if let Some(on_login) = self.on_login.take() {
                    on_login(payload);
                }
                self.should_quit = true;
            }
            None => {}
        }
    }

    fn draw(&mut self) -> Result<()> {
        let now = Instant::now();
        let progress = self.state.scan_progress(now);
        let state = &self.state;
        let config = &self.config;
        let icons = &self.icons;
        let core_logo = &self.core_logo;

        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            match state.phase {
                AuthPhase::Idle => {
                    let _ = Self::draw_entrance(frame, area, state, config, icons, core_logo);
                }
                AuthPhase::Scanning(kind) => {
                    let _ = ScanOverlay::render(frame, area, kind, progress, icons);
                }
                AuthPhase::Succeeded => {
                    let _ = TransitionOverlay::render(frame, area, config, progress, icons);
                }
            }
        })?;
        Ok(())
    }

    /// The idle entrance screen: branding chrome, form, endorsements, and
    /// the warning dialog when raised
    fn draw_entrance(
        frame: &mut Frame,
        area: Rect,
        state: &LoginState,
        config: &Config,
        icons: &Icons,
        core_logo: &CoreLogo,
    ) -> Result<()> {
        let (header_area, content_area, footer_area) = create_standard_layout(area, 1, 2);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacer
                Constraint::Length(6), // Branding block
                Constraint::Min(14),   // Form panel
                Constraint::Length(2), // Endorsement strip
            ])
            .split(content_area);

        EcosystemHeader::render(frame, header_area)?;
        BrandingBlock::render(frame, chunks[1], config, core_logo)?;

        // Keep the form panel a readable width on wide terminals.
        let form_width = chunks[2].width.min(56);
        let form_x = chunks[2].x + (chunks[2].width - form_width) / 2;
        let form_area = Rect::new(form_x, chunks[2].y, form_width, chunks[2].height);
        LoginForm::render(frame, form_area, state, icons)?;

        EndorsementStrip::render(frame, chunks[3], config.investor_logo.as_deref(), icons)?;

        Footer::render(
            frame,
            footer_area,
            "Navigate: Tab | Activate: Enter | Quit: Esc",
        )?;

        if let Some(warning) = state.warning {
            let content = format!("{} {}", icons.warning(), warning);
            let dialog = Dialog::new("Access Blocked", &content)
                .variant(DialogVariant::Warning)
                .footer("Press any key to continue");
            frame.render_widget(dialog, area);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.handle_key(key);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c {
            self.should_quit = true;
            return;
        }

        // The warning dialog is blocking: any key dismisses it.
        if self.state.warning.is_some() {
            self.state.dismiss_warning();
            return;
        }

        if self.state.phase != AuthPhase::Idle {
            // Esc aborts the running sequence instead of letting it
            // complete against a dismissed screen.
            if key.code == KeyCode::Esc {
                info!("scan sequence aborted by operator");
                self.state.reset();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_prev(),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Char(c) => {
                if let Some(input) = self.state.focused_input() {
                    input.insert_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.state.focused_input() {
                    input.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(input) = self.state.focused_input() {
                    input.delete();
                }
            }
            KeyCode::Left => {
                if let Some(input) = self.state.focused_input() {
                    input.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = self.state.focused_input() {
                    input.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(input) = self.state.focused_input() {
                    input.move_home();
                }
            }
            KeyCode::End => {
                if let Some(input) = self.state.focused_input() {
                    input.move_end();
                }
            }
            _ => {}
        }
    }

    /// Enter on the focused element. Inputs and the primary button submit
    /// the form as a face scan.
    fn activate_focused(&mut self) {
        match self.state.focused_field {
            FormField::Identifier | FormField::Passphrase | FormField::FaceScan => {
                self.start_scan(ScanKind::Face);
            }
            FormField::TouchScan => self.start_scan(ScanKind::Fingerprint),
            FormField::ModeToggle => {
                self.state.toggle_mode();
                info!(mode = ?self.state.mode, "form mode toggled");
            }
        }
    }

    fn start_scan(&mut self, kind: ScanKind) {
        let now = Instant::now();
        if self.state.start_scan(kind, self.authenticator.as_ref(), now) {
            info!(?kind, mode = ?self.state.mode, "scan sequence started");
        } else {
            info!(?kind, "scan blocked: professional ID required");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Dropping the state discards any armed deadlines, so an aborted
        // run can never deliver a payload later.
        self.state.reset();
    }
}
