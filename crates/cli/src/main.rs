//! wirestub CLI entrypoint.
//!
//! Parses command-line arguments and dispatches to the core generator.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Debug, Parser)]
#[command(
    name = "wirestub",
    version,
    about = "Generate typed remote clients from service contracts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate client sources from contract documents
    Generate(generate::GenerateArgs),
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Generate(args) => generate::run(args),
    };
    std::process::exit(code);
}

/// WIRESTUB_LOG controls the log level: a plain level ("debug") or a full
/// tracing filter spec ("wirestub_core=debug,wirestub_cli=info").
fn init_tracing() {
    let filter = match std::env::var("WIRESTUB_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("wirestub_core={level},wirestub_cli={level}")
        }
        Ok(spec) => spec,
        Err(_) => "wirestub_core=warn,wirestub_cli=info".to_owned(),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(EnvFilter::new(filter))
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
