use std::process::ExitCode;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod commands;

use commands::bump::{BumpArgs, bump};
use commands::canonical::{CanonicalArgs, canonical};
use commands::compare::{CompareArgs, compare};
use commands::contains::{ContainsArgs, contains};
use commands::ensure::{EnsureArgs, ensure};
use commands::sort::{SortArgs, sort};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// When to use colors in output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn write_global(self) {
        let choice = match self {
            Self::Auto => anstream::ColorChoice::Auto,
            Self::Always => anstream::ColorChoice::Always,
            Self::Never => anstream::ColorChoice::Never,
        };
        choice.write_global();
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compare two versions")]
    Compare(CompareArgs),
    #[command(
        about = "Check whether a version range contains a version",
        long_about = "Check whether a version range contains a version.\n\nExits with 0 when it does, 1 when it does not, and 2 on invalid input."
    )]
    Contains(ContainsArgs),
    #[command(about = "Require a version to be at least a minimum version")]
    Ensure(EnsureArgs),
    #[command(about = "Increment one field of a version")]
    Bump(BumpArgs),
    #[command(about = "Sort versions from oldest to newest")]
    Sort(SortArgs),
    #[command(about = "Print the canonical form of a version or version range")]
    Canonical(CanonicalArgs),
}

/// Status for invalid input, kept apart from `contains`'s "not contained".
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    cli.color.write_global();
    init_tracing(&cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            anstream::eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(command: Commands) -> commands::Result<ExitCode> {
    match command {
        Commands::Compare(args) => compare(&args).map(|_| ExitCode::SUCCESS),
        Commands::Contains(args) => contains(&args).map(|inside| {
            if inside {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
        Commands::Ensure(args) => ensure(&args).map(|_| ExitCode::SUCCESS),
        Commands::Bump(args) => bump(&args).map(|_| ExitCode::SUCCESS),
        Commands::Sort(args) => sort(&args).map(|_| ExitCode::SUCCESS),
        Commands::Canonical(args) => canonical(&args).map(|_| ExitCode::SUCCESS),
    }
}
