//! # Propulsion Estimate
//!
//! Loaded RPM, pitch speed, cruise speed and static thrust for a small
//! electric motor/prop combination.
//!
//! ## Assumptions
//!
//! - Loaded RPM is 85% of the no-load `Kv x V` figure
//! - Cruise is 75% of pitch speed (no-slip advance per revolution)
//! - Static thrust from an empirical regression for hobby props:
//!   `T[oz] = 3e-10 * RPM² * D³ * sqrt(P)`, reported here in grams-force
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::propulsion::calculate;
//! use calc_core::mission::CompetitionMode;
//!
//! // 920 Kv on 3S, 10x6 prop, 800 g trainer
//! let estimate = calculate(920.0, 11.1, 6.0, 10.0, 800.0, CompetitionMode::Trainer);
//! assert!((estimate.rpm - 8680.2).abs() < 0.01);
//! assert!(!estimate.is_underpowered);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    CRUISE_PITCH_SPEED_RATIO, GRAMS_PER_OUNCE, MOTOR_LOAD_FACTOR, SECONDS_PER_MINUTE,
    STATIC_THRUST_COEFFICIENT,
};
use crate::mission::CompetitionMode;
use crate::units::{Inches, Meters};

/// Propulsion stage output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PropulsionEstimate {
    /// Loaded prop speed (RPM)
    pub rpm: f64,
    /// No-slip forward speed (m/s)
    pub pitch_speed_m_s: f64,
    /// Expected cruise speed (m/s)
    pub cruise_speed_m_s: f64,
    /// Static thrust (grams-force)
    pub static_thrust_g: f64,
    /// Thrust below weight, outside Trainer mode
    pub is_underpowered: bool,
}

/// Estimate propulsion figures.
///
/// # Arguments
///
/// * `motor_kv` - Motor speed constant (RPM/V)
/// * `battery_voltage_v` - Pack voltage (V)
/// * `prop_pitch_in` - Prop pitch (in)
/// * `prop_diameter_in` - Prop diameter (in)
/// * `total_weight_g` - All-up weight from the weight stage (g)
/// * `mode` - Competition mode (Trainer skips the power warning)
pub fn calculate(
    motor_kv: f64,
    battery_voltage_v: f64,
    prop_pitch_in: f64,
    prop_diameter_in: f64,
    total_weight_g: f64,
    mode: CompetitionMode,
) -> PropulsionEstimate {
    let rpm = motor_kv * battery_voltage_v * MOTOR_LOAD_FACTOR;

    let pitch: Meters = Inches(prop_pitch_in).into();
    let pitch_speed_m_s = rpm * pitch.value() / SECONDS_PER_MINUTE;
    let cruise_speed_m_s = pitch_speed_m_s * CRUISE_PITCH_SPEED_RATIO;

    let static_thrust_oz = STATIC_THRUST_COEFFICIENT
        * rpm.powi(2)
        * prop_diameter_in.powi(3)
        * prop_pitch_in.sqrt();
    let static_thrust_g = static_thrust_oz * GRAMS_PER_OUNCE;

    let is_underpowered = static_thrust_g < total_weight_g && !mode.is_exempt_from_power_warning();

    PropulsionEstimate {
        rpm,
        pitch_speed_m_s,
        cruise_speed_m_s,
        static_thrust_g,
        is_underpowered,
    }
}
