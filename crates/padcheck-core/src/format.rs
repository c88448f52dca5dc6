//! Generating new numbers in an existing convention.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PadError, Result};
use crate::padding::{try_classify, Verdict};

/// Width to use when the samples leave the convention undecided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InconclusivePolicy {
    /// Write numbers without padding
    #[default]
    Unpadded,
    /// Pad to the shortest sample seen
    MinLength,
}

impl InconclusivePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpadded => "unpadded",
            Self::MinLength => "min-length",
        }
    }
}

impl fmt::Display for InconclusivePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InconclusivePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unpadded" => Ok(Self::Unpadded),
            "min-length" | "min_length" => Ok(Self::MinLength),
            other => Err(format!(
                "expected 'unpadded' or 'min-length', got '{}'",
                other
            )),
        }
    }
}

/// Formats numbers to a resolved pad width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    width: Option<usize>,
}

impl NumberFormatter {
    pub fn new(width: Option<usize>) -> Self {
        Self { width }
    }

    pub fn from_verdict(verdict: Verdict, policy: InconclusivePolicy) -> Self {
        let width = match verdict {
            Verdict::Consistent { width } => Some(width),
            Verdict::Inconclusive { min_length } if policy == InconclusivePolicy::MinLength => {
                Some(min_length)
            }
            _ => None,
        };
        Self { width }
    }

    /// Pad width, `None` when numbers are written bare
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Zero-pad `value`; values wider than the pad width are never cut
    pub fn format(&self, value: u64) -> String {
        match self.width {
            Some(width) => format!("{:0width$}", value, width = width),
            None => value.to_string(),
        }
    }
}

fn parse_value(sample: &str) -> Result<u64> {
    sample.parse().map_err(|_| PadError::ValueOutOfRange {
        sample: sample.to_string(),
    })
}

/// The `count` numbers after the largest sample, in the samples' convention.
///
/// With no samples the sequence starts at 0, unpadded.
pub fn next_numbers<S: AsRef<str>>(
    samples: &[S],
    count: usize,
    policy: InconclusivePolicy,
) -> Result<Vec<String>> {
    let verdict = try_classify(samples)?;
    let formatter = NumberFormatter::from_verdict(verdict, policy);

    let mut max: Option<u64> = None;
    for sample in samples {
        let value = parse_value(sample.as_ref())?;
        max = Some(max.map_or(value, |m| m.max(value)));
    }

    let start = match max {
        Some(m) => m.checked_add(1).ok_or_else(|| PadError::ValueOutOfRange {
            sample: m.to_string(),
        })?,
        None => 0,
    };

    (0..count as u64)
        .map(|offset| {
            start
                .checked_add(offset)
                .map(|value| formatter.format(value))
                .ok_or_else(|| PadError::ValueOutOfRange {
                    sample: format!("{}+{}", start, offset),
                })
        })
        .collect()
}
