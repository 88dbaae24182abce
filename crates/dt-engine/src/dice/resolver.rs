//! Input parsing and roll resolution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::roll::{RollMode, RollOutcome, RollRequest};
use crate::config::DEFAULT_QUANTITY_LIMIT;
use crate::error::{ValidationError, ValidationResult};

/// Parse the quantity field: an integer of at least 1.
pub fn parse_quantity(text: &str) -> ValidationResult<u32> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity)?;
    if value < 1 {
        return Err(ValidationError::InvalidQuantity);
    }
    u32::try_from(value).map_err(|_| ValidationError::InvalidQuantity)
}

/// Parse the modifier field: empty means 0, otherwise a signed integer.
pub fn parse_modifier(text: &str) -> ValidationResult<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| ValidationError::InvalidModifier)
}

/// Parse a comma-separated list of forced values.
///
/// Blank tokens are skipped, so `"5,,6"` reads as `[5, 6]`.
pub fn parse_forced_values(text: &str) -> ValidationResult<Vec<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::NoForcedValues);
    }
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ValidationError::NonIntegerValue)
        })
        .collect()
}

/// Turns roll requests into outcomes.
///
/// Random draws come from a `StdRng`, which is a CSPRNG seeded from the
/// operating system unless a fixed seed is requested.
#[derive(Debug)]
pub struct RollResolver {
    rng: StdRng,
    quantity_limit: u32,
}

impl Default for RollResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RollResolver {
    /// Create a resolver seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            quantity_limit: DEFAULT_QUANTITY_LIMIT,
        }
    }

    /// Create a resolver with a fixed seed for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            quantity_limit: DEFAULT_QUANTITY_LIMIT,
        }
    }

    /// Reject requests for more than `limit` dice.
    pub fn with_quantity_limit(mut self, limit: u32) -> Self {
        self.quantity_limit = limit;
        self
    }

    /// Resolve a request into validated face values and a total.
    pub fn resolve(&mut self, request: &RollRequest) -> ValidationResult<RollOutcome> {
        if request.quantity() > self.quantity_limit {
            return Err(ValidationError::QuantityTooLarge {
                limit: self.quantity_limit,
            });
        }
        let die = request.die();
        let sides = die.sides();
        let results = match request.mode() {
            RollMode::Random => (0..request.quantity())
                .map(|_| self.rng.random_range(1..=sides))
                .collect(),
            RollMode::Forced(values) => forced_results(values, request.quantity(), sides)?,
        };
        let outcome = RollOutcome::new(die, results, request.modifier());
        log::debug!(
            "resolved {}x{} {:?} -> {:?} total {}",
            request.quantity(),
            die,
            request.mode(),
            outcome.results(),
            outcome.total()
        );
        Ok(outcome)
    }
}

/// Expand and range-check forced values.
fn forced_results(values: &[i64], quantity: u32, sides: u32) -> ValidationResult<Vec<u32>> {
    let expanded: Vec<i64> = if values.len() == 1 {
        vec![values[0]; quantity as usize]
    } else if values.len() == quantity as usize {
        values.to_vec()
    } else {
        return Err(ValidationError::CountMismatch {
            expected: quantity,
            got: values.len(),
        });
    };

    let bad: Vec<i64> = expanded
        .iter()
        .copied()
        .filter(|&v| !(1..=i64::from(sides)).contains(&v))
        .collect();
    if !bad.is_empty() {
        return Err(ValidationError::OutOfRange { values: bad, sides });
    }

    Ok(expanded.into_iter().map(|v| v as u32).collect())
}
