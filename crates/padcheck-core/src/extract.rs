//! Pulls the sequence number out of a name such as `shot_v2.0042`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which digit run of a name holds the sequence number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberPosition {
    First,
    /// Frame counters usually sit right before the extension
    #[default]
    Last,
}

impl NumberPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for NumberPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => Err(format!("expected 'first' or 'last', got '{}'", other)),
        }
    }
}

/// Maximal runs of ASCII digits in `name`, left to right
fn digit_runs(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

/// Digit run of `name` at `position`, with its zeros intact.
///
/// Pass the file stem: extensions such as `.mp4` contain digits too.
pub fn extract_number(name: &str, position: NumberPosition) -> Option<&str> {
    let mut runs = digit_runs(name);
    match position {
        NumberPosition::First => runs.next(),
        NumberPosition::Last => runs.last(),
    }
}

/// Numbers of all `names` that contain one; others are skipped
pub fn extract_numbers<I, S>(names: I, position: NumberPosition) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| extract_number(name.as_ref(), position).map(str::to_string))
        .collect()
}
