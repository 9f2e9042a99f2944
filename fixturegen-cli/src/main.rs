use std::error::Error;

use chrono::Utc;
use clap::Parser;
use csv::WriterBuilder;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fixturegen::dataset::{self, DatasetConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Destination path for the generated CSV
    #[clap(default_value = "large_dataset.csv")]
    pub(crate) output_file: String,
    /// Number of data rows to generate
    #[clap(long, default_value_t = dataset::DEFAULT_ROW_COUNT)]
    pub(crate) rows: u64,
    /// Probability in [0, 1] that a row gets one malformed field
    #[clap(long, default_value_t = dataset::DEFAULT_ERROR_RATE)]
    pub(crate) error_rate: f64,
    /// Seed for the random generator; rerunning with the same seed
    /// reproduces the same dataset
    #[clap(long, default_value_t = 42)]
    pub(crate) seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let cli = Cli::parse();
    let config = DatasetConfig::new(cli.rows, cli.error_rate)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);

    info!(
        "generating {} rows into {} ({}% with injected errors)",
        cli.rows,
        cli.output_file,
        cli.error_rate * 100.0
    );

    let mut writer = WriterBuilder::new().from_path(&cli.output_file)?;
    dataset::write_dataset(&mut writer, config, &mut rng, Utc::now())?;

    info!("done, file written to {}", cli.output_file);

    Ok(())
}
