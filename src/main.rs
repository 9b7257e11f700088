use clap::{Parser, Subcommand};
use color_eyre::Result;

mod clipboard;
mod config;
mod dispatch;
mod error;
mod probe;
mod selector;

use config::ClipboardBackend;
use dispatch::Mode;
use selector::Selection;

/// Bridge stdin/stdout to the host clipboard
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Bridge stdin/stdout to whatever clipboard the host actually has"
)]
struct Args {
    /// Force a backend instead of the configured one
    #[arg(long, value_enum)]
    backend: Option<ClipboardBackend>,

    /// Target the primary selection where the mechanism has one
    #[arg(long)]
    primary: bool,

    #[command(subcommand)]
    command: Option<ModeCommand>,
}

/// Explicit direction; omitted, it follows stdin
#[derive(Subcommand, Debug)]
enum ModeCommand {
    /// Read stdin and store it in the clipboard
    Copy,
    /// Write the clipboard to stdout
    Paste,
}

fn main() -> Result<()> {
    // Writes to /tmp/cliprelay-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/cliprelay-debug.log")
            .expect("Failed to open /tmp/cliprelay-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== CLIPRELAY DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so a broken file warns before any clipboard work
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }

    let backend = args.backend.unwrap_or(config_result.config.clipboard.backend);
    let selection = if args.primary {
        Selection::Primary
    } else {
        Selection::Clipboard
    };
    let mode = match args.command {
        Some(ModeCommand::Copy) => Mode::Copy,
        Some(ModeCommand::Paste) => Mode::Paste,
        None => dispatch::infer_mode(),
    };

    dispatch::run(mode, backend, selection, config_result.config.osc52.mode)?;

    #[cfg(debug_assertions)]
    log::debug!("=== CLIPRELAY DEBUG SESSION ENDED ===");

    Ok(())
}
