use anyhow::Result;
use clap::{Parser, Subcommand};
use murmuration_core::config::SimulationConfig;
use murmuration_core::metrics::init_logging;
use murmuration_lib::app::{App, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the simulation headless
    Run(RunArgs),
    /// Print the effective configuration as TOML
    PrintConfig,
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// RNG seed, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Release predators into the flock
    #[arg(long)]
    predators: bool,

    /// Disable target seeking
    #[arg(long)]
    no_target: bool,

    /// Move the target around the centre of the space every tick
    #[arg(long)]
    orbit_target: bool,

    /// Write one JSON frame per tick to this file
    #[arg(long)]
    snapshots: Option<PathBuf>,
}

impl From<RunArgs> for RunOptions {
    fn from(args: RunArgs) -> Self {
        Self {
            ticks: args.ticks,
            seed: args.seed,
            predators: args.predators,
            no_target: args.no_target,
            orbit_target: args.orbit_target,
            snapshots: args.snapshots,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config: SimulationConfig = App::load_config(&args.config)?;

    match args.command {
        Some(Command::PrintConfig) => {
            print!("{}", config.to_toml()?);
        }
        Some(Command::Run(run)) => run_headless(config, run.into())?,
        None => {
            let run = RunArgs {
                ticks: 1000,
                ..Default::default()
            };
            run_headless(config, run.into())?;
        }
    }

    Ok(())
}

fn run_headless(config: SimulationConfig, options: RunOptions) -> Result<()> {
    let mut app = App::new(config, options)?;
    let summary = app.run()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
