use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;

use elevator_sim::simulation::{
    BuildingConfig, ConsolePrompt, DemandSource, Dispatcher, Fleet, RandomWorkload,
    DEFAULT_CAPACITY, DEFAULT_FLOORS, DEFAULT_MAX_GENERATED_GUESTS, DEFAULT_TICK_DELAY_MS,
};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Elevator dispatch simulation")]
struct Cli {
    /// Number of floors in the building
    #[arg(long, default_value_t = DEFAULT_FLOORS)]
    floors: u32,

    /// Guests each car can carry
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: u32,

    /// Maximum guests per generated hall call
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATED_GUESTS)]
    max_guests: u32,

    /// Number of ticks to run (0 runs until interrupted)
    #[arg(long, default_value = "0")]
    ticks: u64,

    /// Pause between ticks in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_DELAY_MS)]
    delay_ms: u64,

    /// Seed for the random workload
    #[arg(long)]
    seed: Option<u64>,

    /// Type requests at the console instead of generating them
    #[arg(long)]
    interactive: bool,

    /// Don't print car state after every tick
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = BuildingConfig {
        floors: cli.floors,
        capacity: cli.capacity,
        max_generated_guests: cli.max_guests,
    };
    config.validate()?;

    let mut source: Box<dyn DemandSource> = if cli.interactive {
        Box::new(ConsolePrompt::stdio())
    } else {
        match cli.seed {
            Some(seed) => Box::new(RandomWorkload::with_seed(seed)),
            None => Box::new(RandomWorkload::new()),
        }
    };

    run(config, source.as_mut(), cli.ticks, cli.delay_ms, cli.quiet)
}

/// Drive the dispatcher tick by tick
fn run(
    config: BuildingConfig,
    source: &mut dyn DemandSource,
    ticks: u64,
    delay_ms: u64,
    quiet: bool,
) -> Result<()> {
    let fleet = Fleet::new(&config);
    info!(
        "Running elevator simulation: {} floors, {} cars, capacity {}",
        config.floors,
        fleet.len(),
        config.capacity
    );

    let mut dispatcher = Dispatcher::new(fleet, config);
    let delay = Duration::from_millis(delay_ms);

    loop {
        let report = dispatcher.tick(source)?;

        if !quiet {
            println!("--- Tick {} ---", report.tick);
            print!("{}", dispatcher);
            println!();
        }

        if ticks > 0 && report.tick >= ticks {
            break;
        }
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    dispatcher.stats().log_summary(dispatcher.pending_guests());
    Ok(())
}
