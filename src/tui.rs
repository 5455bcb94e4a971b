//! Terminal lifecycle management.
//!
//! Owns the ratatui terminal and the raw-mode/alternate-screen setup so
//! the rest of the application never touches crossterm directly for
//! lifecycle concerns.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

/// Terminal wrapper handling setup and teardown
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    /// Enter raw mode and the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        crossterm::execute!(std::io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.hide_cursor().ok();
        self.terminal.clear().context("Failed to clear terminal")?;
        Ok(())
    }

    /// Restore the terminal to its normal state
    pub fn exit(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        crossterm::execute!(std::io::stdout(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().ok();
        Ok(())
    }

    /// Poll for an input event, returning None when the timeout elapses
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            let ev = event::read().context("Failed to read event")?;
            Ok(Some(ev))
        } else {
            Ok(None)
        }
    }

    /// Access the underlying terminal for drawing
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}
