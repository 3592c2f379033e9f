//! # Mission Parameters
//!
//! Competition modes and wing configurations picked on the first wizard step.
//!
//! Each [`CompetitionMode`] carries two aerodynamic constants from a fixed
//! table: the target lift coefficient used to size the wing, and the
//! horizontal tail volume coefficient used to size the stabilizer. Nothing
//! else varies by mode.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::mission::{recommend_wing_configuration, CompetitionMode, WingConfiguration};
//!
//! let racing = CompetitionMode::Racing;
//! assert_eq!(racing.coefficients().target_lift_coefficient, 0.2);
//! assert_eq!(recommend_wing_configuration(racing), WingConfiguration::LowWing);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Aerodynamic constants attached to a competition mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeCoefficients {
    /// Design lift coefficient at cruise (dimensionless)
    pub target_lift_coefficient: f64,
    /// Horizontal tail volume coefficient (dimensionless)
    pub tail_volume_coefficient_h: f64,
}

/// What the airplane is being built to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionMode {
    /// Heavy-lift: slow, high-Cl wing
    Payload,
    /// Speed: thin, low-Cl wing
    Racing,
    /// Docile first airplane
    #[default]
    Trainer,
    /// Aerobatic: responsive, symmetric-ish wing
    Aerobatics,
}

impl CompetitionMode {
    /// All modes in UI order
    pub const ALL: [CompetitionMode; 4] = [
        CompetitionMode::Payload,
        CompetitionMode::Racing,
        CompetitionMode::Trainer,
        CompetitionMode::Aerobatics,
    ];

    /// Look up the constant table entry for this mode
    pub const fn coefficients(self) -> ModeCoefficients {
        match self {
            CompetitionMode::Payload => ModeCoefficients {
                target_lift_coefficient: 0.8,
                tail_volume_coefficient_h: 0.6,
            },
            CompetitionMode::Racing => ModeCoefficients {
                target_lift_coefficient: 0.2,
                tail_volume_coefficient_h: 0.35,
            },
            CompetitionMode::Trainer => ModeCoefficients {
                target_lift_coefficient: 0.5,
                tail_volume_coefficient_h: 0.45,
            },
            CompetitionMode::Aerobatics => ModeCoefficients {
                target_lift_coefficient: 0.3,
                tail_volume_coefficient_h: 0.50,
            },
        }
    }

    /// Trainers tolerate a thin power margin, so they never get the
    /// underpowered warning.
    pub fn is_exempt_from_power_warning(self) -> bool {
        self == CompetitionMode::Trainer
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CompetitionMode::Payload => "Payload",
            CompetitionMode::Racing => "Racing",
            CompetitionMode::Trainer => "Trainer",
            CompetitionMode::Aerobatics => "Aerobatics",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match normalize_option(s).as_str() {
            "PAYLOAD" => Ok(CompetitionMode::Payload),
            "RACING" | "RACE" | "RACER" => Ok(CompetitionMode::Racing),
            "TRAINER" => Ok(CompetitionMode::Trainer),
            "AEROBATICS" | "AEROBATIC" | "3D" => Ok(CompetitionMode::Aerobatics),
            _ => Err(CalcError::invalid_input(
                "mode",
                s,
                "Unknown competition mode (expected payload, racing, trainer or aerobatics)",
            )),
        }
    }
}

impl std::fmt::Display for CompetitionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CompetitionMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Where the wing attaches to the fuselage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WingConfiguration {
    /// Wing on top of the fuselage
    #[default]
    HighWing,
    /// Wing through the fuselage center line
    MidWing,
    /// Wing under the fuselage
    LowWing,
}

impl WingConfiguration {
    /// All configurations in UI order
    pub const ALL: [WingConfiguration; 3] = [
        WingConfiguration::HighWing,
        WingConfiguration::MidWing,
        WingConfiguration::LowWing,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WingConfiguration::HighWing => "High Wing",
            WingConfiguration::MidWing => "Mid Wing",
            WingConfiguration::LowWing => "Low Wing",
        }
    }

    /// Build advice shown on the layout step
    pub fn advice(&self) -> &'static str {
        match self {
            WingConfiguration::HighWing => {
                "Mount wing on TOP of fuselage. This provides natural pendulum stability. \
                 Ensure landing gear is tall enough to prevent prop strikes."
            }
            WingConfiguration::MidWing => {
                "Wing must pass THROUGH the fuselage center line. Ensure your internal spars \
                 carry through the fuselage box for strength."
            }
            WingConfiguration::LowWing => {
                "Mount wing to BOTTOM of fuselage. You must add 'Dihedral' (upward angle) to \
                 the wings for stability, otherwise the plane will be hard to control."
            }
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match normalize_option(s).as_str() {
            "HIGH-WING" | "HIGHWING" | "HIGH" => Ok(WingConfiguration::HighWing),
            "MID-WING" | "MIDWING" | "MID" => Ok(WingConfiguration::MidWing),
            "LOW-WING" | "LOWWING" | "LOW" => Ok(WingConfiguration::LowWing),
            _ => Err(CalcError::invalid_input(
                "wing_configuration",
                s,
                "Unknown wing configuration (expected high-wing, mid-wing or low-wing)",
            )),
        }
    }
}

impl std::fmt::Display for WingConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WingConfiguration {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Suggest a wing configuration for a newly selected mode.
///
/// Only applied when the mode changes; an explicit wing pick afterwards wins.
pub fn recommend_wing_configuration(mode: CompetitionMode) -> WingConfiguration {
    match mode {
        CompetitionMode::Payload | CompetitionMode::Trainer => WingConfiguration::HighWing,
        CompetitionMode::Aerobatics => WingConfiguration::MidWing,
        CompetitionMode::Racing => WingConfiguration::LowWing,
    }
}

fn normalize_option(s: &str) -> String {
    s.trim().to_uppercase().replace([' ', '_'], "-")
}
