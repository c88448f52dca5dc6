use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Outcome of classifying a set of numeric strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No samples
    Empty,
    /// Fixed-width zero padding (width is always > 1)
    Consistent { width: usize },
    /// No padding in use
    Unpadded,
    /// Same-magnitude numbers carry different amounts of padding
    Inconsistent,
    /// Undecided; `min_length` is the shortest raw string observed
    Inconclusive { min_length: usize },
}

impl Verdict {
    /// Legacy integer encoding.
    ///
    /// `0` empty, `1` unpadded, `> 1` pad width, `-1` inconsistent,
    /// `< -1` inconclusive with the negated minimum string length.
    /// `Inconclusive { min_length: 1 }` also encodes to `-1`.
    pub fn code(&self) -> i64 {
        match *self {
            Self::Empty => 0,
            Self::Consistent { width } => width as i64,
            Self::Unpadded => 1,
            Self::Inconsistent => -1,
            Self::Inconclusive { min_length } => -(min_length as i64),
        }
    }

    /// Decode a legacy integer. `-1` always decodes to `Inconsistent`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Empty,
            1 => Self::Unpadded,
            -1 => Self::Inconsistent,
            c if c > 1 => Self::Consistent { width: c as usize },
            c => Self::Inconclusive {
                min_length: c.unsigned_abs() as usize,
            },
        }
    }

    /// Width new numbers should be padded to, when the convention is known
    pub fn pad_width(&self) -> Option<usize> {
        match *self {
            Self::Consistent { width } => Some(width),
            Self::Unpadded => Some(1),
            _ => None,
        }
    }

    pub fn is_conclusive(&self) -> bool {
        matches!(self, Self::Consistent { .. } | Self::Unpadded)
    }

    /// Short machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Consistent { .. } => "consistent",
            Self::Unpadded => "unpadded",
            Self::Inconsistent => "inconsistent",
            Self::Inconclusive { .. } => "inconclusive",
        }
    }
}

impl From<Verdict> for i64 {
    fn from(verdict: Verdict) -> Self {
        verdict.code()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no samples"),
            Self::Consistent { width } => write!(f, "zero-padded to width {}", width),
            Self::Unpadded => write!(f, "unpadded"),
            Self::Inconsistent => write!(f, "inconsistent padding"),
            Self::Inconclusive { min_length } => {
                write!(f, "inconclusive (shortest sample is {} chars)", min_length)
            }
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let extra = match self {
            Self::Consistent { width } => Some(("width", *width)),
            Self::Inconclusive { min_length } => Some(("min_length", *min_length)),
            _ => None,
        };

        let mut state = serializer.serialize_struct("Verdict", 2 + usize::from(extra.is_some()))?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("code", &self.code())?;
        if let Some((key, value)) = extra {
            state.serialize_field(key, &value)?;
        }
        state.end()
    }
}
