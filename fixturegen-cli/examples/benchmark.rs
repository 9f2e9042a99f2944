use std::error::Error;
use std::io;
use std::time::Instant;

use chrono::Utc;
use csv::WriterBuilder;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fixturegen::dataset::{self, DatasetConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = DatasetConfig::new(100_000, dataset::DEFAULT_ERROR_RATE)?;
    let mut rng = StdRng::seed_from_u64(42);
    let mut writer = WriterBuilder::new().from_writer(io::sink());

    let start = Instant::now();
    dataset::write_dataset(&mut writer, config, &mut rng, Utc::now())?;
    warn!("Generating 100k rows took: {:.2?}", start.elapsed());

    Ok(())
}
