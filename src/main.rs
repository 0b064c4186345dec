//! # VSTACK
//!
//! Command line runner for VSTACK programs.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vstack::term::{self, Options};

#[derive(Parser, Debug)]
#[command(name = "vstack")]
#[command(about = "Scan and run a VSTACK program")]
struct Cli {
    /// Program source file
    file: PathBuf,

    /// Print the constant, name and vector tables
    #[arg(long)]
    tables: bool,

    /// Print every lexeme with its class code
    #[arg(long)]
    lexemes: bool,

    /// Run the program rebuilt from the lexeme stream
    #[arg(long)]
    from_lexemes: bool,

    /// Skip the stack and variable dump after the run
    #[arg(long)]
    no_dump: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let options = Options {
        tables: cli.tables,
        lexemes: cli.lexemes,
        from_lexemes: cli.from_lexemes,
        dump: !cli.no_dump,
    };
    if !term::main(&cli.file, &options) {
        std::process::exit(1);
    }
}
