pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod padding;
pub mod scan;

pub use config::{Config, FormatConfig, ScanConfig};
pub use error::{PadError, Result};
pub use extract::{extract_number, extract_numbers, NumberPosition};
pub use format::{next_numbers, InconclusivePolicy, NumberFormatter};
pub use padding::{
    check_number_padding, classify, try_classify, validate_sample, SampleStats, Verdict,
};
pub use scan::{scan_dir, ScanOptions, ScanResult, ScannedFile};
