//! # Weight Budget
//!
//! First derivation stage: all-up weight and the force the wing has to carry.

use serde::{Deserialize, Serialize};

use crate::constants::STANDARD_GRAVITY_M_S2;
use crate::units::{Grams, Kilograms};

/// Weight stage output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightBudget {
    /// Empty weight plus payload (g)
    pub total_weight_g: f64,
    /// Weight force at standard gravity (N)
    pub weight_force_n: f64,
}

/// Sum the weight budget and convert it to a force.
pub fn calculate(empty_weight_g: f64, payload_weight_g: f64) -> WeightBudget {
    let total = Grams(empty_weight_g) + Grams(payload_weight_g);
    let mass: Kilograms = total.into();

    WeightBudget {
        total_weight_g: total.value(),
        weight_force_n: mass.value() * STANDARD_GRAVITY_M_S2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_weight() {
        let budget = calculate(800.0, 0.0);
        assert_eq!(budget.total_weight_g, 800.0);
        // 0.8 kg * 9.81 = 7.848 N
        assert!((budget.weight_force_n - 7.848).abs() < 1e-9);
    }

    #[test]
    fn test_payload_adds_up() {
        let budget = calculate(1200.0, 500.0);
        assert_eq!(budget.total_weight_g, 1700.0);
        assert!((budget.weight_force_n - 16.677).abs() < 1e-9);
    }

    #[test]
    fn test_negative_weight_is_not_rejected() {
        let budget = calculate(-100.0, 0.0);
        assert!(budget.weight_force_n < 0.0);
    }
}
