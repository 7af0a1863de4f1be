//! Fare calculation.

use serde::{Deserialize, Serialize};

use crate::domain::Fare;

/// Fare parameters.
///
/// The price of a trip is `base_fare + hops * fare_per_station`. There are
/// no zones, caps or discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareConfig {
    /// Flat charge applied regardless of distance.
    pub base_fare: Fare,

    /// Marginal charge per hop crossed.
    pub fare_per_station: Fare,
}

impl FareConfig {
    /// Create a new fare configuration.
    pub fn new(base_fare: Fare, fare_per_station: Fare) -> Self {
        Self {
            base_fare,
            fare_per_station,
        }
    }

    /// Price a trip of `hops` stations.
    ///
    /// Total for every hop count; saturates rather than overflowing.
    pub fn price(&self, hops: usize) -> Fare {
        self.base_fare + self.fare_per_station.saturating_mul(hops)
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: Fare::from_pence(150),
            fare_per_station: Fare::from_pence(30),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// price(n + 1) - price(n) is always the per-station fare.
        #[test]
        fn linear(base in 0u32..10_000, per in 0u32..1_000, hops in 0usize..1_000) {
            let config = FareConfig::new(Fare::from_pence(base), Fare::from_pence(per));
            let step = config.price(hops + 1).pence() - config.price(hops).pence();
            prop_assert_eq!(step, per);
            prop_assert_eq!(config.price(hops).pence(), base + per * hops as u32);
        }

        /// More hops never cost less, even at saturation.
        #[test]
        fn non_decreasing(base in any::<u32>(), per in any::<u32>(), hops in 0usize..100_000) {
            let config = FareConfig::new(Fare::from_pence(base), Fare::from_pence(per));
            prop_assert!(config.price(hops + 1) >= config.price(hops));
        }
    }
}
