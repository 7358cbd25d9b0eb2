//! Smoke test for the deque crate

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use deque::DequeConfig;
use deque_smoke::{LogLevel, Result, load_config, load_script, run_scenario, run_script, setup_logs};

#[derive(Debug, Parser)]
#[command(name = "deque-smoke", about = "Exercise the deque and check what it reports")]
struct Cli {
    /// JSON array of operations to run instead of the built-in scenario
    #[arg(long)]
    script: Option<PathBuf>,

    /// JSON deque config
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, env = "DEQUE_LOG", value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logs(cli.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Smoke test failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DequeConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.script {
        Some(path) => run_script(load_script(path)?, config, &mut out)?,
        None => run_scenario(&config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
