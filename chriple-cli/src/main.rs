mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level (useful diagnostics)
    //   default  → "off" (clean terminal)
    //   RUST_LOG → honoured only under --verbose, so developer env vars
    //              don't leak log lines into the user-facing output.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Build {
            input,
            nouns,
            predicates,
            delimiter,
            on_malformed,
            force,
        } => commands::build::run(
            &input,
            &nouns,
            &predicates,
            delimiter.into(),
            on_malformed.into(),
            force,
            cli.quiet,
        ),

        Commands::Encode {
            input,
            nouns,
            predicates,
            output,
            delimiter,
            on_malformed,
        } => commands::encode::run(
            &input,
            &nouns,
            &predicates,
            output.as_deref(),
            delimiter.into(),
            on_malformed.into(),
            cli.quiet,
        ),
    }
}
