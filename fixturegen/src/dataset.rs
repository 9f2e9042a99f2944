use std::io::Write;

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;

use crate::corruption::Malformation;
use crate::error::GenError;
use crate::record::Record;

pub const DEFAULT_ROW_COUNT: u64 = 1_000_000;
pub const DEFAULT_ERROR_RATE: f64 = 0.05;
/// Rows between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Run-level knobs: how many rows to emit and how dirty they are.
#[derive(Debug, Clone, Copy)]
pub struct DatasetConfig {
    pub row_count: u64,
    pub error_rate: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            row_count: DEFAULT_ROW_COUNT,
            error_rate: DEFAULT_ERROR_RATE,
        }
    }
}

impl DatasetConfig {
    /// # Errors
    /// Errors when `error_rate` is not a probability in `[0.0, 1.0]`.
    pub fn new(row_count: u64, error_rate: f64) -> Result<Self, GenError> {
        if (0.0..=1.0).contains(&error_rate) {
            Ok(DatasetConfig {
                row_count,
                error_rate,
            })
        } else {
            Err(GenError::InvalidErrorRate(error_rate))
        }
    }
}

/// Writes the header row and `config.row_count` data rows to `writer`.
///
/// Each row is generated, passed through the injector, and serialized as a
/// single line. The csv writer emits the header from the record's field
/// names on the first row. Progress is logged every [`PROGRESS_INTERVAL`]
/// rows and the underlying writer is flushed before returning.
///
/// # Errors
/// Errors when serializing or flushing a row fails; the run stops at the
/// first failure, nothing is retried.
pub fn write_dataset<W, R>(
    writer: &mut csv::Writer<W>,
    config: DatasetConfig,
    rng: &mut R,
    generated_at: DateTime<Utc>,
) -> Result<(), GenError>
where
    W: Write,
    R: Rng + ?Sized,
{
    for row in 1..=config.row_count {
        let mut record = Record::generate(rng, generated_at);
        if let Some(malformation) = Malformation::draw(rng, config.error_rate) {
            malformation.apply(&mut record, generated_at);
        }
        writer.serialize(&record)?;

        if row % PROGRESS_INTERVAL == 0 {
            info!("{row} rows written");
        }
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_config_rejects_bad_rates() {
        assert!(DatasetConfig::new(10, -0.1).is_err());
        assert!(DatasetConfig::new(10, 1.5).is_err());
        assert!(DatasetConfig::new(10, f64::NAN).is_err());
        assert!(DatasetConfig::new(10, 0.0).is_ok());
        assert!(DatasetConfig::new(10, 1.0).is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = DatasetConfig::default();
        assert_eq!(config.row_count, DEFAULT_ROW_COUNT);
        assert!((config.error_rate - DEFAULT_ERROR_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_write_dataset_emits_header_plus_rows() {
        let config = DatasetConfig::new(25, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut writer = csv::WriterBuilder::new().from_writer(vec![]);
        write_dataset(&mut writer, config, &mut rng, Utc::now()).unwrap();

        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 26);
        assert!(text.starts_with("ID,First Name,Last Name,Email (Work)"));
    }
}
