use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Error rate must lie within [0.0, 1.0], got {0}")]
    InvalidErrorRate(f64),
    #[error("Monthly revenue must lie within [10.00, 5000.00]")]
    RevenueOutOfRange,
}
