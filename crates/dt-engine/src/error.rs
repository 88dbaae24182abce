//! Error types for the dice engine.

use std::path::PathBuf;

/// Rejections produced while turning user input into a roll.
///
/// The display texts are shown verbatim in the UI message box.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Quantity text is not an integer, or is below 1.
    #[error("Quantity must be an integer ≥ 1.")]
    InvalidQuantity,

    /// Quantity is larger than the engine will roll at once.
    #[error("Quantity must be at most {limit}.")]
    QuantityTooLarge {
        /// The largest accepted quantity.
        limit: u32,
    },

    /// Modifier text is present but not an integer.
    #[error("Modifier must be an integer.")]
    InvalidModifier,

    /// Forced mode was selected with an empty value list.
    #[error("No forced values provided.")]
    NoForcedValues,

    /// A forced-value token is not an integer.
    #[error("Only integers are allowed.")]
    NonIntegerValue,

    /// The number of forced values is neither 1 nor the quantity.
    #[error("Enter one or exactly {expected} numbers (got {got}).")]
    CountMismatch {
        /// The requested quantity.
        expected: u32,
        /// How many values were supplied.
        got: usize,
    },

    /// Forced values outside `1..=sides`, in input order.
    #[error("Values {values:?} are out of range 1–{sides}.")]
    OutOfRange {
        /// Every offending value.
        values: Vec<i64>,
        /// Number of sides on the die.
        sides: u32,
    },
}

/// Geometry construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Fewer than three vertices cannot form a polygon.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    Degenerate(u32),
}

/// Sound playback failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SoundError {
    /// The sound file does not exist.
    #[error("Sound file not found:\n{}", .0.display())]
    FileNotFound(PathBuf),

    /// No audio backend is available on this platform.
    #[error("Sound not supported.")]
    Unavailable,
}

impl SoundError {
    /// Warning category used to report this failure at most once.
    pub fn warning_key(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "no_file",
            Self::Unavailable => "no_sound",
        }
    }
}

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid JSON for an engine config.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience result type for roll validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_lists_all_values() {
        let err = ValidationError::OutOfRange {
            values: vec![9, 0],
            sides: 6,
        };
        assert_eq!(err.to_string(), "Values [9, 0] are out of range 1–6.");
    }

    #[test]
    fn count_mismatch_message() {
        let err = ValidationError::CountMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Enter one or exactly 3 numbers (got 2).");
    }

    #[test]
    fn sound_warning_keys() {
        assert_eq!(
            SoundError::FileNotFound(PathBuf::from("x.wav")).warning_key(),
            "no_file"
        );
        assert_eq!(SoundError::Unavailable.warning_key(), "no_sound");
    }
}
