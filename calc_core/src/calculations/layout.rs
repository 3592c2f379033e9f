//! # Fuselage Layout
//!
//! Places the wing one chord aft of the nose and sets the CG target at 30% of
//! the chord behind the leading edge.

use serde::{Deserialize, Serialize};

use crate::constants::{CG_CHORD_FRACTION, LEADING_EDGE_CHORDS_FROM_NOSE};

use super::wing::WingSizing;

/// Layout stage output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Wing leading edge, measured from the nose (mm)
    pub wing_leading_edge_mm: f64,
    /// Balance point, measured from the wing leading edge (mm)
    pub cg_position_mm: f64,
}

pub fn calculate(wing: &WingSizing) -> LayoutPlan {
    LayoutPlan {
        wing_leading_edge_mm: wing.root_chord_mm * LEADING_EDGE_CHORDS_FROM_NOSE,
        cg_position_mm: wing.root_chord_mm * CG_CHORD_FRACTION,
    }
}
