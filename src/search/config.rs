//! Configuration types for the randomized search

/// Smallest digit range drawn from when a puzzle has few letters
pub const DEFAULT_MIN_DIGITS: usize = 9;

/// What the evaluator does with an addend whose numeral starts with `0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingZeroPolicy {
    /// Drop the addend from the sum (it contributes zero)
    #[default]
    Skip,
    /// Treat the whole draw as unsatisfied
    Reject,
}

impl std::fmt::Display for LeadingZeroPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadingZeroPolicy::Skip => write!(f, "skip"),
            LeadingZeroPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for LeadingZeroPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" | "drop" => Ok(LeadingZeroPolicy::Skip),
            "reject" | "strict" => Ok(LeadingZeroPolicy::Reject),
            _ => Err(format!(
                "Unknown leading-zero policy: '{}'. Valid options: skip, reject",
                s
            )),
        }
    }
}

/// Configuration for a single search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Floor of the digit range; the assigner draws from `0..max(min_digits, letters)`
    pub min_digits: usize,
    /// Handling of addends that evaluate with a leading zero
    pub leading_zero: LeadingZeroPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_digits: DEFAULT_MIN_DIGITS,
            leading_zero: LeadingZeroPolicy::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits.max(1);
        self
    }

    pub fn with_leading_zero(mut self, policy: LeadingZeroPolicy) -> Self {
        self.leading_zero = policy;
        self
    }

    /// Number of digit values to draw from for `letter_count` letters
    pub fn digit_range(&self, letter_count: usize) -> usize {
        self.min_digits.max(letter_count)
    }
}
