//! Numeric progressions behind the scale families.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// A geometric progression: `value(n) = base * multiplier^(n - 1)`.
///
/// ```rust
/// use stylecls::scale::Progression;
///
/// let spacing = Progression::new(4.0, 2.0);
/// assert_eq!(spacing.value(1), 4.0);
/// assert_eq!(spacing.value(3), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub base: f64,
    pub multiplier: f64,
}

impl Progression {
    pub const fn new(base: f64, multiplier: f64) -> Self {
        Self { base, multiplier }
    }

    /// Value at 1-based index `n`. Index 0 is not part of the progression.
    pub fn value(&self, n: u32) -> f64 {
        let exponent = i32::try_from(n).unwrap_or(i32::MAX).saturating_sub(1);
        self.base * self.multiplier.powi(exponent)
    }

    /// Values for indices `1..=steps`, paired with their index.
    pub fn values(&self, steps: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        (1..=steps).map(move |n| (n, self.value(n)))
    }

    /// Checks that every value up to `steps` is a finite number.
    pub fn validate(&self, family: &'static str, steps: u32) -> Result<(), BuildError> {
        if !self.base.is_finite() {
            return Err(BuildError::InvalidScale {
                family,
                message: format!("base {} is not finite", self.base),
            });
        }
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(BuildError::InvalidScale {
                family,
                message: format!("multiplier {} must be a positive number", self.multiplier),
            });
        }
        if let Some((n, v)) = self.values(steps).find(|(_, v)| !v.is_finite()) {
            return Err(BuildError::InvalidScale {
                family,
                message: format!("step {} overflows to {}", n, v),
            });
        }
        Ok(())
    }
}

/// Decodes the digits of an opacity token as a decimal fraction.
///
/// The suffix is read as the digits after a leading `0.`, so `"025"` is
/// `0.025` and `"5"` is `0.5`. Returns `None` unless the suffix is a
/// non-empty run of ASCII digits.
///
/// ```rust
/// use stylecls::scale::parse_opacity;
///
/// assert_eq!(parse_opacity("025"), Some(0.025));
/// assert_eq!(parse_opacity("90"), Some(0.9));
/// assert_eq!(parse_opacity("x"), None);
/// ```
pub fn parse_opacity(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("0.{}", digits).parse().ok()
}
