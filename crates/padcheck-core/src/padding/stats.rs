//! Per-sample facts the classifier decides on.

/// Derived facts for one numeric string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleStats {
    /// Character length of the raw string
    pub string_length: usize,
    /// Consecutive '0' characters at the start
    pub leading_zeros: usize,
    /// Digit count of the value written without padding ("000" -> 1)
    pub value_length: usize,
}

impl SampleStats {
    pub fn of(sample: &str) -> Self {
        let string_length = sample.chars().count();
        let leading_zeros = sample.chars().take_while(|&c| c == '0').count();
        // An all-zero string still has the one-digit value "0"
        let value_length = (string_length - leading_zeros).max(1);

        Self {
            string_length,
            leading_zeros,
            value_length,
        }
    }

    /// String is longer than its value requires
    pub fn is_padded(&self) -> bool {
        self.string_length > self.value_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_plain_number() {
        let stats = SampleStats::of("123");
        assert_eq!(stats.string_length, 3);
        assert_eq!(stats.leading_zeros, 0);
        assert_eq!(stats.value_length, 3);
        assert!(!stats.is_padded());
    }

    #[test]
    fn test_stats_padded_number() {
        let stats = SampleStats::of("0042");
        assert_eq!(stats.string_length, 4);
        assert_eq!(stats.leading_zeros, 2);
        assert_eq!(stats.value_length, 2);
        assert!(stats.is_padded());
    }

    #[test]
    fn test_stats_zero() {
        let single = SampleStats::of("0");
        assert_eq!(single.leading_zeros, 1);
        assert_eq!(single.value_length, 1);
        assert!(!single.is_padded());

        let padded = SampleStats::of("000");
        assert_eq!(padded.leading_zeros, 3);
        assert_eq!(padded.value_length, 1);
        assert!(padded.is_padded());
    }

    #[test]
    fn test_stats_inner_zeros_not_counted() {
        let stats = SampleStats::of("1000");
        assert_eq!(stats.leading_zeros, 0);
        assert_eq!(stats.value_length, 4);
    }
}
