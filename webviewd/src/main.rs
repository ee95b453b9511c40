//! # Web Viewer Host Daemon
//!
//! Main entry point for the web viewer host runtime.

use clap::{Parser, ValueEnum};
use sim_clock::Duration;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use webviewd::config::load_dataset;
use webviewd::{ConfigFile, HostMode, HostRuntime, HostRuntimeConfig, TimeMode};

/// Simulated web viewer host with a mock script bridge
#[derive(Debug, Parser)]
#[command(name = "webviewd", version, about)]
struct Cli {
    /// Host mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Input script file; without one, commands are read from stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file replacing the sample datasets
    #[arg(long)]
    data: Option<PathBuf>,

    /// Delay before a mock response is delivered, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Maximum steps to run (0 = unlimited)
    #[arg(long)]
    max_steps: Option<usize>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Dev,
    Production,
}

impl From<ModeArg> for HostMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Dev => HostMode::Dev,
            ModeArg::Production => HostMode::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let interactive = config.time_mode == TimeMode::Realtime;

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    let result = if interactive {
        runtime.run_interactive(io::BufReader::new(io::stdin()))
    } else {
        runtime.run()
    };

    if let Err(e) = result {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

/// Layers defaults, the config file and command-line flags, in that order
fn build_config(cli: &Cli) -> Result<HostRuntimeConfig, String> {
    let mut config = HostRuntimeConfig::default();

    if let Some(path) = &cli.config {
        ConfigFile::load(path)
            .and_then(|file| file.apply(&mut config))
            .map_err(|e| e.to_string())?;
    }

    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(path) = &cli.data {
        config.dataset = Some(load_dataset(path).map_err(|e| e.to_string())?);
    }
    if let Some(delay) = cli.delay_ms {
        config.response_delay = Duration::from_millis(delay);
    }
    if let Some(max_steps) = cli.max_steps {
        config.max_steps = max_steps;
    }

    match &cli.script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read script file: {}", e))?;
            config.script = Some(text);
            config.time_mode = TimeMode::Simulated;
        }
        None => config.time_mode = TimeMode::Realtime,
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
