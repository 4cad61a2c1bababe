use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

use mm1_sim::report::charts::render_svg;
use mm1_sim::report::csv_logger::export_csv;
use mm1_sim::{simulate, ReportError, SimConfig, Statistics};

#[derive(Parser, Debug)]
#[command(name = "mm1-sim", about = "M/M/1 queuing model simulator", long_about = None)]
struct Args {
    /// Scenario YAML file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mean customer arrival rate (λ).
    #[arg(long)]
    arrival_rate: Option<f64>,

    /// Mean service rate (μ).
    #[arg(long)]
    service_rate: Option<f64>,

    /// Number of customers simulated.
    #[arg(long)]
    customers: Option<usize>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the four charts to this SVG file.
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Export per-customer rows to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<SimConfig, ReportError> {
    let mut config = match args.config {
        Some(ref path) => SimConfig::from_yaml_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(rate) = args.arrival_rate {
        config.arrival_rate = rate;
    }
    if let Some(rate) = args.service_rate {
        config.service_rate = rate;
    }
    if let Some(count) = args.customers {
        config.sample_count = count;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), ReportError> {
    let config = load_config(args)?;
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("λ = {}  μ = {}  customers = {}  seed = {}",
          config.arrival_rate, config.service_rate, config.sample_count, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let result = simulate(&config, &mut rng)?;

    println!("{}", result.summary());
    println!("{}", Statistics::compute(&result, &config));

    if let Some(ref path) = args.chart {
        render_svg(&result, path)?;
    }
    if let Some(ref path) = args.csv {
        export_csv(&result, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    SimpleLogger::new().with_level(level).env().init().unwrap();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
