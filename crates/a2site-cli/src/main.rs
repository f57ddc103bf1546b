//! a2site CLI - enable and disable Apache2 sites

use a2site_core::{ConfigError, ConfigManager, SiteError, SiteRequest, SiteState};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod output;

use commands::*;

/// Exit codes for the CLI
#[derive(Debug, Clone, Copy)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    BinaryNotFound = 20,
    CommandFailed = 21,
    ConfigError = 30,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Pick the exit code for an error bubbled up from a command
    fn for_error(err: &anyhow::Error) -> Self {
        if let Some(site_err) = err.downcast_ref::<SiteError>() {
            return match site_err {
                SiteError::BinaryNotFound(_) => ExitCode::BinaryNotFound,
                SiteError::CommandFailed { .. } => ExitCode::CommandFailed,
                SiteError::Config(_) => ExitCode::ConfigError,
                _ => ExitCode::GeneralError,
            };
        }

        if err.downcast_ref::<ConfigError>().is_some() {
            return ExitCode::ConfigError;
        }

        ExitCode::GeneralError
    }
}

/// a2site - Enable and disable Apache2 sites, reporting whether anything changed
#[derive(Parser)]
#[command(name = "a2site", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bring a site into the desired state
    Apply {
        /// Site name
        name: String,

        /// Desired state (present or absent)
        #[arg(short, long, default_value = "present")]
        state: SiteState,
    },

    /// Enable a site (same as `apply --state present`)
    Enable {
        /// Site name
        name: String,
    },

    /// Disable a site (same as `apply --state absent`)
    Disable {
        /// Site name
        name: String,
    },

    /// Run as an orchestration module: JSON arguments in, JSON result out
    Module {
        /// Arguments file, or `-` for stdin
        #[arg(default_value = "-")]
        args: String,
    },

    /// Check that the management binaries can be found
    Doctor,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show effective settings
    Show,
}

fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let ctx = output::OutputContext::new(cli.json, cli.no_color, cli.quiet);

    let result = run_command(cli.command, &ctx);

    match result {
        Ok(code) => std::process::exit(code.into()),
        Err(e) => {
            ctx.error(&format!("{:#}", e));
            std::process::exit(ExitCode::for_error(&e).into());
        }
    }
}

fn run_command(command: Commands, ctx: &output::OutputContext) -> Result<ExitCode> {
    let config = ConfigManager::with_defaults;

    match command {
        Commands::Apply { name, state } => {
            apply::run(&config()?, SiteRequest::new(name, state), ctx)
        }

        Commands::Enable { name } => apply::run(&config()?, SiteRequest::present(name), ctx),

        Commands::Disable { name } => apply::run(&config()?, SiteRequest::absent(name), ctx),

        // Looks up its own config so that failure is reported as JSON too
        Commands::Module { args } => module::run(&args),

        Commands::Doctor => doctor::run(&config()?, ctx),

        Commands::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(&config()?, ctx),
        },

        Commands::Completions { shell } => {
            completions::run(shell);
            Ok(ExitCode::Success)
        }
    }
}
