use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tui_dashboard::app::{app_program::Program, error::Result, logger};

fn run() -> Result<()> {
    let program = Program::new()?;
    program.run()
}

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Failed to install error reporting: {}", e);
    }

    let _log_guard = match logger::init_or_continue() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error running application: {:?}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Starting tui-dashboard");

    // The terminal guard restores the screen while the panic unwinds
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(())) => {
            tracing::info!("Exited normally");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            tracing::error!("Application error: {:?}", e);
            eprintln!("Error running application: {:?}", e);
            ExitCode::FAILURE
        }
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!("Application crashed: {}", reason);
            eprintln!("Application crashed: {}", reason);
            ExitCode::FAILURE
        }
    }
}
