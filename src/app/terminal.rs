use crate::app::error::{context, Result, TerminalErrorExt};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};

pub type DashboardTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns the terminal modes. Dropping it restores the terminal, including
/// while a panic unwinds.
#[derive(Debug)]
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<(Self, DashboardTerminal)> {
        tracing::info!("Initializing terminal");

        // Built before any mode change so a failure part-way is undone by Drop
        let mut guard = TerminalGuard {
            raw_mode: false,
            alternate_screen: false,
        };

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(context::terminal_init(format!("cannot enable raw mode: {}", e))
                .with_terminal_context(guard.raw_mode, guard.alternate_screen));
        }
        guard.raw_mode = true;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            return Err(
                context::terminal_init(format!("cannot enter alternate screen: {}", e))
                    .with_terminal_context(guard.raw_mode, guard.alternate_screen),
            );
        }
        guard.alternate_screen = true;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| e.with_terminal_context(guard.raw_mode, guard.alternate_screen))?;
        terminal.clear()?;
        terminal.hide_cursor()?;

        tracing::info!("Terminal initialized successfully");
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        tracing::info!(
            "Cleaning up terminal - raw_mode: {}, alternate_screen: {}",
            self.raw_mode,
            self.alternate_screen
        );

        let mut stdout = io::stdout();
        if self.alternate_screen {
            tracing::debug!("Leaving alternate screen mode");
            if let Err(e) = execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show) {
                tracing::error!("Failed to leave alternate screen during cleanup: {}", e);
            }
        }

        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                tracing::error!("Failed to disable raw mode during cleanup: {}", e);
            }
        }

        if let Err(e) = stdout.flush() {
            tracing::error!("Failed to flush stdout during cleanup: {}", e);
        }

        tracing::info!("Terminal cleanup completed");
    }
}
