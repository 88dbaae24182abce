//! Roll requests and their resolved outcomes.

use serde::{Deserialize, Serialize};

use super::DieKind;
use super::resolver::{parse_forced_values, parse_modifier, parse_quantity};
use crate::error::ValidationResult;

/// How the face values of a roll are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollMode {
    /// Uniform random draws.
    Random,
    /// Values supplied by the game master, in order.
    Forced(Vec<i64>),
}

/// A validated request for one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    die: DieKind,
    quantity: u32,
    modifier: i64,
    mode: RollMode,
}

impl RollRequest {
    /// Build a request from already-parsed parts.
    pub fn new(die: DieKind, quantity: u32, modifier: i64, mode: RollMode) -> Self {
        Self {
            die,
            quantity,
            modifier,
            mode,
        }
    }

    /// Build a request from the raw text of the control panel fields.
    ///
    /// `forced` is only read when `forced_mode` is set.
    pub fn from_input(
        die: DieKind,
        quantity: &str,
        modifier: &str,
        forced_mode: bool,
        forced: &str,
    ) -> ValidationResult<Self> {
        let quantity = parse_quantity(quantity)?;
        let modifier = parse_modifier(modifier)?;
        let mode = if forced_mode {
            RollMode::Forced(parse_forced_values(forced)?)
        } else {
            RollMode::Random
        };
        Ok(Self::new(die, quantity, modifier, mode))
    }

    /// The die being rolled.
    pub fn die(&self) -> DieKind {
        self.die
    }

    /// Number of dice.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Flat modifier added to the sum.
    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Random or forced.
    pub fn mode(&self) -> &RollMode {
        &self.mode
    }
}

/// The resolved result of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    die: DieKind,
    results: Vec<u32>,
    modifier: i64,
    total: i64,
}

impl RollOutcome {
    /// Build an outcome; the total is derived from the results and modifier.
    pub(crate) fn new(die: DieKind, results: Vec<u32>, modifier: i64) -> Self {
        let total = results.iter().map(|&v| i64::from(v)).sum::<i64>() + modifier;
        Self {
            die,
            results,
            modifier,
            total,
        }
    }

    /// The die that was rolled.
    pub fn die(&self) -> DieKind {
        self.die
    }

    /// Face values in roll order.
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    /// Number of dice rolled.
    pub fn quantity(&self) -> usize {
        self.results.len()
    }

    /// Flat modifier.
    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Sum of the faces plus the modifier.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of terms in the sum: one per die, plus one for a nonzero modifier.
    pub fn term_count(&self) -> usize {
        self.results.len() + usize::from(self.modifier != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn total_includes_modifier() {
        let outcome = RollOutcome::new(DieKind::D20, vec![15, 8], -3);
        assert_eq!(outcome.total(), 20);
        assert_eq!(outcome.quantity(), 2);
        assert_eq!(outcome.term_count(), 3);
    }

    #[test]
    fn single_die_has_one_term() {
        let outcome = RollOutcome::new(DieKind::D20, vec![17], 0);
        assert_eq!(outcome.term_count(), 1);
    }

    #[test]
    fn from_input_random() {
        let req = RollRequest::from_input(DieKind::D20, "3", "+2", false, "garbage").unwrap();
        assert_eq!(req.quantity(), 3);
        assert_eq!(req.modifier(), 2);
        assert_eq!(req.mode(), &RollMode::Random);
    }

    #[test]
    fn from_input_forced() {
        let req = RollRequest::from_input(DieKind::D6, "2", "", true, "1, 9").unwrap();
        assert_eq!(req.mode(), &RollMode::Forced(vec![1, 9]));
        assert_eq!(req.modifier(), 0);
    }

    #[test]
    fn from_input_checks_quantity_first() {
        let err = RollRequest::from_input(DieKind::D6, "x", "y", true, "").unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);
    }
}
