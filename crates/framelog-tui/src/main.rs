//! framelog entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start with the keymap in the working directory (or the built-in layout)
//! framelog
//!
//! # Flush taps on a 50ms timer and log to a file
//! framelog --flush-on-tick --tick-ms 50 --log-file framelog.log --log-level debug
//!
//! # Write a starter keymap to edit
//! framelog --write-default-keymap framelog-keymap.json
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use framelog_tui::{App, Keymap, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Live 60 fps fighting-game input notation
#[derive(Parser, Debug)]
#[command(name = "framelog")]
#[command(about = "Shows keyboard input as frame-quantized numpad notation")]
#[command(version)]
struct Args {
    /// Keymap file (JSON). The built-in layout is used if it does not exist.
    #[arg(short, long, default_value = "framelog-keymap.json")]
    keymap: PathBuf,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Run the frame boundary check on a timer as well as on key events
    #[arg(long)]
    flush_on_tick: bool,

    /// Timer period in milliseconds for --flush-on-tick
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Write the default keymap to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_keymap: Option<PathBuf>,
}

/// Install the file subscriber. Stdout belongs to the UI.
fn init_logging(args: &Args) -> std::io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    if let Some(path) = &args.write_default_keymap {
        Keymap::default().save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default keymap");
        return Ok(());
    }

    let keymap = Keymap::load_from(&args.keymap)?;
    let tick = args.flush_on_tick.then(|| Duration::from_millis(args.tick_ms));
    let driver = TerminalDriver::new(tick)?;

    let mut app = App::new(keymap).with_flush_on_tick(args.flush_on_tick);
    if !driver.keyboard_enhanced() {
        tracing::warn!("terminal does not report key releases");
        app.set_status("no key release events: buttons stay held");
    }

    tracing::info!(flush_on_tick = args.flush_on_tick, "framelog starting");
    let app = Runtime::new(driver, app).run().await?;
    tracing::info!(frames = app.frame_count(), notation = app.notation(), "session ended");

    Ok(())
}
