//! # Sizing Calculations
//!
//! The derivation engine. [`derive`] runs the five stages in dependency order
//! and flattens their outputs into one [`DerivedQuantities`] record:
//!
//! ```text
//! weight ──► propulsion ──► wing ──► tail
//!   │            ▲            │
//!   └────────────┘            └────► layout
//! ```
//!
//! The mission mode feeds propulsion (power warning), wing (lift coefficient)
//! and tail (tail volume coefficient).
//!
//! Every stage follows the same pattern:
//!
//! - `*` stage result struct (JSON-serializable)
//! - `calculate(..) -> *` pure function, total over all `f64` inputs
//!
//! ## Available Stages
//!
//! - [`weight`] - All-up weight and weight force
//! - [`propulsion`] - RPM, pitch/cruise speed, static thrust
//! - [`wing`] - Wing area, chord, loading
//! - [`tail`] - Stabilizer areas and moment arm
//! - [`layout`] - Wing and CG placement

pub mod layout;
pub mod propulsion;
pub mod tail;
pub mod weight;
pub mod wing;

use serde::{Deserialize, Serialize};

use crate::inputs::RawInputs;

// Re-export stage result types
pub use layout::LayoutPlan;
pub use propulsion::PropulsionEstimate;
pub use tail::TailSizing;
pub use weight::WeightBudget;
pub use wing::WingSizing;

/// Every quantity the wizard shows, recomputed from scratch on each pass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_weight_g": 800.0,
///   "weight_force_n": 7.848,
///   "rpm": 8680.2,
///   "pitch_speed_m_s": 22.05,
///   "cruise_speed_m_s": 16.54,
///   "static_thrust_g": 1569.7,
///   "is_underpowered": false,
///   "required_wing_area_m2": 0.0937,
///   "root_chord_mm": 78.1,
///   "wing_loading_g_dm2": 85.4,
///   "tail_moment_arm_mm": 195.2,
///   "h_stab_area_cm2": 1.69,
///   "v_stab_area_cm2": 2.30,
///   "wing_leading_edge_mm": 78.1,
///   "cg_position_mm": 23.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedQuantities {
    // Weight
    pub total_weight_g: f64,
    pub weight_force_n: f64,

    // Propulsion
    pub rpm: f64,
    pub pitch_speed_m_s: f64,
    pub cruise_speed_m_s: f64,
    pub static_thrust_g: f64,
    pub is_underpowered: bool,

    // Wing
    pub required_wing_area_m2: f64,
    pub root_chord_mm: f64,
    pub wing_loading_g_dm2: f64,

    // Tail
    pub tail_moment_arm_mm: f64,
    pub h_stab_area_cm2: f64,
    pub v_stab_area_cm2: f64,

    // Layout
    pub wing_leading_edge_mm: f64,
    pub cg_position_mm: f64,
}

impl DerivedQuantities {
    /// Assemble the flat record from the stage results
    pub fn from_stages(
        weight: WeightBudget,
        propulsion: PropulsionEstimate,
        wing: WingSizing,
        tail: TailSizing,
        layout: LayoutPlan,
    ) -> Self {
        DerivedQuantities {
            total_weight_g: weight.total_weight_g,
            weight_force_n: weight.weight_force_n,
            rpm: propulsion.rpm,
            pitch_speed_m_s: propulsion.pitch_speed_m_s,
            cruise_speed_m_s: propulsion.cruise_speed_m_s,
            static_thrust_g: propulsion.static_thrust_g,
            is_underpowered: propulsion.is_underpowered,
            required_wing_area_m2: wing.required_area_m2,
            root_chord_mm: wing.root_chord_mm,
            wing_loading_g_dm2: wing.wing_loading_g_dm2,
            tail_moment_arm_mm: tail.moment_arm_mm,
            h_stab_area_cm2: tail.h_stab_area_cm2,
            v_stab_area_cm2: tail.v_stab_area_cm2,
            wing_leading_edge_mm: layout.wing_leading_edge_mm,
            cg_position_mm: layout.cg_position_mm,
        }
    }
}

/// Run the full derivation pipeline.
///
/// Pure and total: no state, no side effects, no failure path. Odd inputs
/// (negative weights, zero span, stalled motor) flow through the guarded
/// arithmetic and come out as zero, negative or guarded values.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::derive;
/// use calc_core::inputs::RawInputs;
///
/// let derived = derive(&RawInputs::default());
/// assert_eq!(derived.total_weight_g, 800.0);
/// assert!(!derived.is_underpowered);
/// ```
pub fn derive(raw: &RawInputs) -> DerivedQuantities {
    let weight = weight::calculate(raw.empty_weight_g, raw.payload_weight_g);

    let propulsion = propulsion::calculate(
        raw.motor_kv,
        raw.battery_voltage_v,
        raw.prop_pitch_in,
        raw.prop_diameter_in,
        weight.total_weight_g,
        raw.mode,
    );

    let wing = wing::calculate(
        weight.weight_force_n,
        weight.total_weight_g,
        propulsion.cruise_speed_m_s,
        raw.max_wingspan_mm,
        raw.mode,
    );

    let tail = tail::calculate(&wing, raw.max_wingspan_mm, raw.mode);
    let layout = layout::calculate(&wing);

    DerivedQuantities::from_stages(weight, propulsion, wing, tail, layout)
}
