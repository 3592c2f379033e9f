//! # Tail Sizing
//!
//! Sizes both stabilizers from the classic tail volume coefficient equations:
//!
//! ```text
//! S_h = V_h * S * c / l_t        S_v = V_v * S * b / l_t
//! ```
//!
//! with the moment arm `l_t` fixed at 2.5 root chords. `V_h` comes from the
//! competition mode; `V_v` is 0.04 for every mode. Both results are zero when
//! the moment arm is not positive.

use serde::{Deserialize, Serialize};

use crate::constants::{TAIL_ARM_CHORD_RATIO, TAIL_AREA_SCALE, VERTICAL_TAIL_VOLUME_COEFFICIENT};
use crate::mission::CompetitionMode;
use crate::units::{Meters, Millimeters};

use super::wing::WingSizing;

/// Tail stage output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TailSizing {
    /// Wing quarter-chord to tail distance (mm)
    pub moment_arm_mm: f64,
    /// Horizontal stabilizer area (cm²)
    pub h_stab_area_cm2: f64,
    /// Vertical stabilizer area (cm²)
    pub v_stab_area_cm2: f64,
}

/// Size the tail surfaces from the wing stage output.
pub fn calculate(wing: &WingSizing, max_wingspan_mm: f64, mode: CompetitionMode) -> TailSizing {
    let moment_arm_mm = TAIL_ARM_CHORD_RATIO * wing.root_chord_mm;

    let chord: Meters = Millimeters(wing.root_chord_mm).into();
    let arm: Meters = Millimeters(moment_arm_mm).into();
    let span: Meters = Millimeters(max_wingspan_mm).into();
    let vh = mode.coefficients().tail_volume_coefficient_h;

    let (h_stab_area_cm2, v_stab_area_cm2) = if arm.value() > 0.0 {
        (
            vh * wing.required_area_m2 * chord.value() / arm.value() * TAIL_AREA_SCALE,
            VERTICAL_TAIL_VOLUME_COEFFICIENT * wing.required_area_m2 * span.value() / arm.value()
                * TAIL_AREA_SCALE,
        )
    } else {
        (0.0, 0.0)
    };

    TailSizing {
        moment_arm_mm,
        h_stab_area_cm2,
        v_stab_area_cm2,
    }
}
