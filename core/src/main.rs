use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use rootpoly_core::{Config, InputSource, OutputFormat};
use tracing::error;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Expand the monic polynomial whose roots are given as base-N literals"
)]
struct Cli {
    /// Root description document; `-` or omitted reads stdin.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Report layout: `text` or `json`.
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Increase log verbosity (repeatable). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(InputSource::from(self.input.clone()), self.format)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let config = cli.config();
    match rootpoly_core::run(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(phase = err.phase(), "{err}");
            ExitCode::FAILURE
        }
    }
}
