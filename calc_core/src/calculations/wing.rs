//! # Wing Sizing
//!
//! Sizes a rectangular wing so that it carries the weight at cruise speed and
//! the mode's design lift coefficient:
//!
//! ```text
//! S = 2W / (ρ V² Cl)        chord = S / b        loading = m / S
//! ```
//!
//! ## Guards
//!
//! - A cruise speed that is not positive (no motor, no pitch) is replaced by
//!   1 m/s inside this stage only; the propulsion result is left untouched.
//! - A non-positive span gives a zero chord.
//! - A non-positive area gives a zero wing loading.

use serde::{Deserialize, Serialize};

use crate::constants::{AIR_DENSITY_KG_M3, FALLBACK_CRUISE_SPEED_M_S};
use crate::mission::CompetitionMode;
use crate::units::{Meters, Millimeters, SquareDecimeters, SquareMeters};

/// Wing stage output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WingSizing {
    /// Planform area needed at cruise (m²)
    pub required_area_m2: f64,
    /// Constant chord of a rectangular wing spanning the full limit (mm)
    pub root_chord_mm: f64,
    /// Weight per unit area (g/dm²)
    pub wing_loading_g_dm2: f64,
}

/// Size the wing.
///
/// # Arguments
///
/// * `weight_force_n` - Weight force from the weight stage (N)
/// * `total_weight_g` - All-up weight (g)
/// * `cruise_speed_m_s` - Cruise speed from the propulsion stage (m/s)
/// * `max_wingspan_mm` - Span limit (mm)
/// * `mode` - Competition mode supplying the target lift coefficient
pub fn calculate(
    weight_force_n: f64,
    total_weight_g: f64,
    cruise_speed_m_s: f64,
    max_wingspan_mm: f64,
    mode: CompetitionMode,
) -> WingSizing {
    let speed = effective_cruise_speed(cruise_speed_m_s);
    let cl = mode.coefficients().target_lift_coefficient;

    let area = SquareMeters((2.0 * weight_force_n) / (AIR_DENSITY_KG_M3 * speed.powi(2) * cl));

    let span: Meters = Millimeters(max_wingspan_mm).into();
    let root_chord_mm = if span.value() > 0.0 {
        Millimeters::from(Meters(area.value() / span.value())).value()
    } else {
        0.0
    };

    let wing_loading_g_dm2 = if area.value() > 0.0 {
        total_weight_g / SquareDecimeters::from(area).value()
    } else {
        0.0
    };

    WingSizing {
        required_area_m2: area.value(),
        root_chord_mm,
        wing_loading_g_dm2,
    }
}

/// Speed used for sizing: the cruise speed, or 1 m/s when it is not positive.
pub fn effective_cruise_speed(cruise_speed_m_s: f64) -> f64 {
    if cruise_speed_m_s > 0.0 {
        cruise_speed_m_s
    } else {
        FALLBACK_CRUISE_SPEED_M_S
    }
}
