//! Command definitions for the tomato CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::display::DisplayStyle;
use crate::config::AppConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// tomato - a terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "tomato",
    version,
    about = "Terminal Pomodoro timer",
    long_about = "Work/break Pomodoro cycles in the terminal.\n\
                  Type start, pause, resume, reset, work +N, break -N or quit \
                  followed by Enter while the timer runs.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer
    Run(RunArgs),

    /// Print the effective configuration as JSON
    Config,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command. Unset options fall back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Front-end style
    #[arg(short, long, value_enum)]
    pub style: Option<DisplayStyle>,

    /// Work duration in minutes (1-120)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub work: Option<u32>,

    /// Short break duration in minutes (1-60); the long break is four times this
    #[arg(
        short,
        long = "break",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub break_minutes: Option<u32>,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,
}

impl RunArgs {
    /// Overlays the given options on a loaded configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(work) = self.work {
            config.intervals.work_minutes = work;
        }
        if let Some(minutes) = self.break_minutes {
            config.intervals.short_break_minutes = minutes;
        }
        if self.no_notify {
            config.notifications = false;
        }
        config
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Cli Tests
    // ------------------------------------------------------------------------

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["tomato"]);
            assert!(cli.command.is_none());
            assert!(cli.config.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["tomato", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_global_config_after_subcommand() {
            let cli = Cli::parse_from(["tomato", "config", "--config", "/tmp/t.json"]);
            assert!(matches!(cli.command, Some(Commands::Config)));
            assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.json")));
        }

        #[test]
        fn test_parse_completions_bash() {
            let cli = Cli::parse_from(["tomato", "completions", "bash"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Bash);
                }
                _ => panic!("Expected Completions command"),
            }
        }

        #[test]
        fn test_parse_unknown_subcommand_fails() {
            assert!(Cli::try_parse_from(["tomato", "snooze"]).is_err());
        }
    }

    // ------------------------------------------------------------------------
    // Run Command Tests
    // ------------------------------------------------------------------------

    mod run_args_tests {
        use super::*;

        fn run_args(args: &[&str]) -> RunArgs {
            let mut argv = vec!["tomato", "run"];
            argv.extend_from_slice(args);
            match Cli::parse_from(argv).command {
                Some(Commands::Run(args)) => args,
                other => panic!("Expected Run command, got {:?}", other),
            }
        }

        #[test]
        fn test_parse_run_defaults() {
            assert_eq!(run_args(&[]), RunArgs::default());
        }

        #[test]
        fn test_parse_run_all_options() {
            let args = run_args(&["--style", "plain", "-w", "50", "--break", "10", "--no-notify"]);
            assert_eq!(args.style, Some(DisplayStyle::Plain));
            assert_eq!(args.work, Some(50));
            assert_eq!(args.break_minutes, Some(10));
            assert!(args.no_notify);
        }

        #[test]
        fn test_parse_work_out_of_range() {
            assert!(Cli::try_parse_from(["tomato", "run", "--work", "0"]).is_err());
            assert!(Cli::try_parse_from(["tomato", "run", "--work", "121"]).is_err());
        }

        #[test]
        fn test_parse_break_out_of_range() {
            assert!(Cli::try_parse_from(["tomato", "run", "-b", "61"]).is_err());
        }

        #[test]
        fn test_apply_overrides() {
            let args = run_args(&["--work", "40", "--no-notify"]);
            let config = args.apply(AppConfig::default());

            assert_eq!(config.intervals.work_minutes, 40);
            assert_eq!(config.intervals.short_break_minutes, 5);
            assert!(!config.notifications);
            assert_eq!(config.style, DisplayStyle::Styled);
        }

        #[test]
        fn test_apply_without_options_keeps_config() {
            let mut loaded = AppConfig::default();
            loaded.style = DisplayStyle::Plain;
            loaded.intervals.short_break_minutes = 8;

            assert_eq!(RunArgs::default().apply(loaded.clone()), loaded);
        }
    }
}
