//! Padding classifier
//!
//! Decision procedure over [`SampleStats`]. The steps run in a fixed order and
//! the first one that matches decides the verdict.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PadError, Result};

use super::stats::SampleStats;
use super::verdict::Verdict;

/// Classify the padding convention of `samples`.
///
/// Samples are expected to be decimal digit strings. Other input still yields
/// a verdict, but which one is unspecified; use [`try_classify`] to reject it.
pub fn classify<I, S>(samples: I) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stats: Vec<SampleStats> = samples
        .into_iter()
        .map(|s| SampleStats::of(s.as_ref()))
        .collect();

    classify_stats(&stats)
}

/// Like [`classify`], but fails on the first sample that is not a digit string
pub fn try_classify<I, S>(samples: I) -> Result<Verdict>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let samples: Vec<S> = samples.into_iter().collect();
    for (index, sample) in samples.iter().enumerate() {
        validate_sample(index, sample.as_ref())?;
    }

    Ok(classify(&samples))
}

/// Legacy integer form of [`classify`] (see [`Verdict::code`])
pub fn check_number_padding<I, S>(samples: I) -> i64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classify(samples).code()
}

/// Reject empty strings and anything outside 0-9
pub fn validate_sample(index: usize, sample: &str) -> Result<()> {
    if sample.is_empty() || !sample.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PadError::InvalidSample {
            index,
            sample: sample.to_string(),
        });
    }
    Ok(())
}

fn classify_stats(stats: &[SampleStats]) -> Verdict {
    let Some(min_value_length) = stats.iter().map(|s| s.value_length).min() else {
        return Verdict::Empty;
    };

    if let Some(width) = fixed_width(stats, min_value_length) {
        return Verdict::Consistent { width };
    }

    // value_length -> distinct leading-zero counts / distinct string lengths
    let mut zero_counts: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    let mut string_lengths: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for s in stats {
        zero_counts
            .entry(s.value_length)
            .or_default()
            .insert(s.leading_zeros);
        string_lengths
            .entry(s.value_length)
            .or_default()
            .insert(s.string_length);
    }

    if zero_counts.values().any(|counts| counts.len() > 1) {
        return Verdict::Inconsistent;
    }

    // A bare single digit at the smallest magnitude rules out any pad width
    let has_bare_digit = stats
        .iter()
        .any(|s| s.value_length == min_value_length && s.string_length == 1);

    let all_unpadded = has_bare_digit
        && stats.iter().all(|s| {
            s.leading_zeros == 0
                && s.string_length == s.value_length
                && string_lengths[&s.value_length].len() == 1
        });

    if all_unpadded {
        return Verdict::Unpadded;
    }

    let min_length = stats.iter().map(|s| s.string_length).min().unwrap_or(0);
    Verdict::Inconclusive { min_length }
}

/// Pad width shared by the smallest-magnitude samples, provided every larger
/// sample is a plain unpadded overflow of that width.
fn fixed_width(stats: &[SampleStats], min_value_length: usize) -> Option<usize> {
    let short: Vec<&SampleStats> = stats
        .iter()
        .filter(|s| s.value_length == min_value_length)
        .collect();
    let width = short.first()?.string_length;

    let short_consistent = short.iter().all(|s| {
        s.string_length == width && (s.string_length <= min_value_length || s.leading_zeros > 0)
    });
    if !short_consistent || width <= min_value_length {
        return None;
    }

    let overflow_valid = stats.iter().all(|s| {
        if s.value_length == min_value_length {
            s.string_length == width
        } else {
            s.leading_zeros == 0 && s.string_length == s.value_length
        }
    });

    overflow_valid.then_some(width)
}
