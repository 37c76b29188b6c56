//! Error types for mazer
//!
//! Uses `thiserror` for library errors; the CLI wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mazer operations
pub type MazerResult<T> = Result<T, MazerError>;

/// Main error type for mazer operations
#[derive(Error, Debug)]
pub enum MazerError {
    /// Batch volume was zero, negative, or not a finite number
    #[error("invalid batch volume {value} - volume must be greater than zero")]
    InvalidVolume { value: f64 },

    /// Target ABV outside the supported range
    #[error("invalid target ABV {value}% - supported range is 5% to 25%")]
    InvalidAbv { value: u8 },

    /// Sweetness token not among the recognized labels
    #[error("invalid sweetness level '{input}' - use Dry, Semi-Sweet, Sweet, or Dessert")]
    InvalidSweetness { input: String },

    /// Unit system token not among the recognized labels
    #[error("invalid unit system '{input}' - use 'us' or 'metric'")]
    InvalidUnits { input: String },

    /// Resolved original gravity above the tolerance of most mead yeasts
    #[error("calculated original gravity {og:.3} exceeds the practical ceiling of 1.225")]
    ImpracticalGravity { og: f64 },

    /// Invalid configuration file
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
