//! Host loop: owns the terminal, polls crossterm without blocking, feeds
//! messages through `update`, executes the commands that come back, and
//! redraws on a fixed tick when something changed.
//!
//! The farewell line is drawn in the alternate screen on quit and printed
//! once more to the normal screen after the terminal has been restored.

use crate::app::{
    error::{RecoveryExt, RecoveryStrategy, Result},
    event_msg::{Cmd, CmdOrBatch, Msg},
    event_sync_subscriptions::poll_subscriptions,
    tea_model::Model,
    tea_update::{init, update},
    tea_view::{farewell_text, view},
    terminal::{DashboardTerminal, TerminalGuard},
    tracing_macros::trace_event,
    ui_components::render_text_inline,
};
use eyre::WrapErr;
use std::time::Duration;
use tokio::time::interval;

/// Frame pacing for redraws.
const TICK: Duration = Duration::from_millis(16);

pub struct Program {
    model: Model,
    terminal: Option<DashboardTerminal>,
    guard: Option<TerminalGuard>,
    needs_render: bool,
}

impl Program {
    pub fn new() -> Result<Self> {
        let mut model = Model::new();
        let (guard, terminal) = TerminalGuard::new()?;

        // Initial window-size message, as if the terminal had just resized
        let size = terminal.size().wrap_err("Failed to read terminal size")?;
        update(&mut model, Msg::Resize(size.width, size.height))?;

        Ok(Program {
            model,
            terminal: Some(terminal),
            guard: Some(guard),
            needs_render: true, // Initial render needed
        })
    }

    pub fn run(self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .wrap_err("Failed to build async runtime")?;
        runtime.block_on(self.run_async())
    }

    async fn run_async(mut self) -> Result<()> {
        let mut tick_interval = interval(TICK);

        let cmd = init(&mut self.model)?;
        if self.execute(cmd) {
            return self.shutdown();
        }

        loop {
            match poll_subscriptions(&self.model, Duration::ZERO) {
                Ok(Some(msg)) => {
                    trace_event!("Received {:?}", msg);
                    let cmd = update(&mut self.model, msg)?;
                    self.needs_render = true;
                    if self.execute(cmd) {
                        break;
                    }
                    // Drain pending input before drawing
                    continue;
                }
                Ok(None) => {}
                Err(e) => match e.recovery_strategy() {
                    RecoveryStrategy::Retry => {
                        tracing::warn!("Input polling failed, retrying: {}", e);
                    }
                    RecoveryStrategy::Ignore => {
                        tracing::debug!("Ignoring input polling error: {}", e);
                    }
                    RecoveryStrategy::Exit => return Err(e),
                },
            }

            tick_interval.tick().await;

            if self.needs_render {
                self.render_view()?;
                self.needs_render = false;
            }
        }

        // Draw the farewell before leaving the alternate screen
        self.render_view()?;
        self.shutdown()
    }

    /// Returns true when the program should stop.
    fn execute(&self, cmd: CmdOrBatch<Cmd>) -> bool {
        cmd.into_vec().into_iter().any(|cmd| match cmd {
            Cmd::None => false,
            Cmd::Quit => {
                tracing::info!("Quit command received");
                true
            }
        })
    }

    fn render_view(&mut self) -> Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };

        let mut result = Ok(());
        terminal.draw(|frame| result = view(&self.model, frame))?;
        result
    }

    fn shutdown(mut self) -> Result<()> {
        // Terminal first, then the guard restores the normal screen
        drop(self.terminal.take());
        drop(self.guard.take());

        println!("{}", render_text_inline(&farewell_text(&self.model.palette)));
        Ok(())
    }
}
