use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PadError {
    #[error("Invalid sample #{index}: '{sample}' - must contain only digits 0-9")]
    InvalidSample { index: usize, sample: String },

    #[error("Number does not fit in 64 bits: {sample}")]
    ValueOutOfRange { sample: String },

    #[error("Directory does not exist: {path}")]
    DirNotFound { path: PathBuf },

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, PadError>;

impl PadError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSample { .. } | Self::ValueOutOfRange { .. } => 2,
            Self::DirNotFound { .. } => 3,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let invalid = PadError::InvalidSample {
            index: 0,
            sample: "x1".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);

        let missing = PadError::DirNotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(missing.exit_code(), 3);

        let key = PadError::ConfigKeyNotFound {
            key: "scan.depth".to_string(),
        };
        assert_eq!(key.exit_code(), 4);

        let io = PadError::Io(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_invalid_sample_message() {
        let err = PadError::InvalidSample {
            index: 3,
            sample: "12a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid sample #3: '12a' - must contain only digits 0-9"
        );
    }
}
