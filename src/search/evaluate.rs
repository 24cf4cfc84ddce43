//! Arithmetic check of a candidate mapping
//!
//! Each word becomes the concatenation of its letters' digits, read as a
//! base-10 integer. An addend whose numeral starts with `0` is handled by the
//! configured [`LeadingZeroPolicy`]: `Skip` leaves it out of the sum, `Reject`
//! fails the whole candidate. A word whose value does not fit in a `u128`
//! fails the candidate under either policy.

use crate::puzzle::{Mapping, Puzzle};
use crate::search::config::LeadingZeroPolicy;

/// Values computed while checking one mapping against a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Value of each addend in order; `None` when it was left out of the sum
    pub addends: Vec<Option<u128>>,
    /// Sum of the included addends (`None` on overflow)
    pub sum: Option<u128>,
    /// Value of the target word (`None` if it could not be parsed)
    pub target: Option<u128>,
    /// Number of addends whose numeral started with `0`
    pub leading_zero_addends: usize,
    /// Whether every word was fully covered by the mapping
    pub complete: bool,
    /// Whether any word or the sum was too large for a `u128`
    pub overflowed: bool,
    policy: LeadingZeroPolicy,
}

impl Evaluation {
    /// True when the included addends sum exactly to the target
    pub fn is_satisfied(&self) -> bool {
        if !self.complete || self.overflowed {
            return false;
        }
        if self.policy == LeadingZeroPolicy::Reject && self.leading_zero_addends > 0 {
            return false;
        }
        match (self.sum, self.target) {
            (Some(sum), Some(target)) => sum == target,
            _ => false,
        }
    }
}

/// Evaluate `mapping` against `puzzle`.
pub fn evaluate(puzzle: &Puzzle, mapping: &Mapping, policy: LeadingZeroPolicy) -> Evaluation {
    let mut complete = true;
    let mut leading_zero_addends = 0;
    let mut overflowed = false;

    let addends: Vec<Option<u128>> = puzzle
        .words()
        .iter()
        .map(|word| match mapping.numeral(word) {
            None => {
                complete = false;
                None
            }
            Some(numeral) if numeral.starts_with('0') => {
                leading_zero_addends += 1;
                None
            }
            Some(numeral) => match numeral.parse::<u128>() {
                Ok(value) => Some(value),
                Err(_) => {
                    overflowed = true;
                    None
                }
            },
        })
        .collect();

    let sum = if overflowed {
        None
    } else {
        addends
            .iter()
            .flatten()
            .try_fold(0u128, |acc, &value| acc.checked_add(value))
    };
    if sum.is_none() {
        overflowed = true;
    }

    let target = match mapping.numeral(puzzle.target()) {
        Some(numeral) => match numeral.parse::<u128>() {
            Ok(value) => Some(value),
            Err(_) => {
                overflowed = true;
                None
            }
        },
        None => {
            complete = false;
            None
        }
    };

    Evaluation {
        addends,
        sum,
        target,
        leading_zero_addends,
        complete,
        overflowed,
        policy,
    }
}

/// Shorthand for `evaluate(..).is_satisfied()`
pub fn is_satisfied(puzzle: &Puzzle, mapping: &Mapping, policy: LeadingZeroPolicy) -> bool {
    evaluate(puzzle, mapping, policy).is_satisfied()
}
