//! tomato - a terminal Pomodoro timer
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - a long break (4x the short break) after every 4 work sessions

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use tomato::cli::control::spawn_stdin_reader;
use tomato::cli::{Cli, Commands, RunArgs};
use tomato::{App, AppConfig, SystemNotifier};

/// How long exit waits for notifications still being delivered.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Main entry point
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
        .and_then(|runtime| {
            let result = runtime.block_on(execute(cli));
            runtime.shutdown_timeout(SHUTDOWN_GRACE);
            result
        });

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with the timer display.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    let loaded = AppConfig::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{} (hint: {})", e, e.suggestion()))?;

    match cli.command {
        Some(Commands::Run(args)) => run(args.apply(loaded)).await?,
        None => run(RunArgs::default().apply(loaded)).await?,
        Some(Commands::Config) => {
            println!("{}", loaded.to_json().context("failed to serialize configuration")?);
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Runs the interactive timer until quit, end of input or Ctrl-C.
async fn run(config: AppConfig) -> Result<()> {
    tracing::info!(?config, "Starting tomato");

    let display = config.style.stdout_adapter();
    let notifier = SystemNotifier::new(config.notifications);
    let mut app = App::new(config.intervals, display, notifier);

    let input = spawn_stdin_reader().context("failed to read control input")?;
    tokio::select! {
        result = app.run(input) => result,
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            tracing::info!("Interrupted");
            println!();
            Ok(())
        }
    }
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
