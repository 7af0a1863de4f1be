//! Fare amounts.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A fare in minor currency units (pence).
///
/// Integer units keep fare arithmetic exact: there is never any rounding.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Fare;
///
/// let fare = Fare::from_pence(250);
/// assert_eq!(fare.to_string(), "£2.50");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fare(u32);

impl Fare {
    pub const ZERO: Fare = Fare(0);

    pub const fn from_pence(pence: u32) -> Self {
        Fare(pence)
    }

    pub const fn pence(self) -> u32 {
        self.0
    }

    /// Multiply by a hop count, saturating at the largest representable fare.
    pub fn saturating_mul(self, count: usize) -> Self {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Fare(self.0.saturating_mul(count))
    }

    pub fn saturating_add(self, other: Fare) -> Self {
        Fare(self.0.saturating_add(other.0))
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, other: Fare) -> Fare {
        self.saturating_add(other)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
