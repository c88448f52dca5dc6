//! # Padding Module
//!
//! Infers the zero-padding convention used by a set of numeric strings, so
//! that new numbers can be generated in the same style.
//!
//! ## Verdicts
//!
//! - **Consistent**: every number is padded to a fixed width; numbers that
//!   outgrow the width appear unpadded (`0998`, `0999`, `10000`)
//! - **Unpadded**: a bare single-digit number proves no padding is in effect
//! - **Inconsistent**: numbers of the same magnitude are padded differently
//! - **Inconclusive**: nothing contradicts padding, nothing proves it
//! - **Empty**: no samples
//!
//! Each verdict has a legacy signed-integer code (see [`Verdict::code`]).
//!
//! ## Module layout
//!
//! - `stats`: per-sample derived facts
//! - `verdict`: the verdict type and its integer encoding
//! - `classifier`: the decision procedure
//!
//! ## Example
//!
//! ```rust
//! use padcheck_core::padding::{check_number_padding, classify, Verdict};
//!
//! assert_eq!(classify(["001", "002"]), Verdict::Consistent { width: 3 });
//! assert_eq!(classify(["1", "2", "999"]), Verdict::Unpadded);
//! assert_eq!(check_number_padding(["999", "9999"]), -3);
//! ```

mod classifier;
mod stats;
mod verdict;

pub use classifier::{check_number_padding, classify, try_classify, validate_sample};
pub use stats::SampleStats;
pub use verdict::Verdict;
