//! # Wizard State
//!
//! The form-state record a front-end owns for one sizing session: the text
//! inputs as typed, plus the derived quantities from the last engine pass.
//!
//! Every mutating method edits the inputs and then re-runs [`derive`] over the
//! complete input set, replacing `derived` wholesale. Nothing from a previous
//! pass survives a recomputation.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::mission::{CompetitionMode, WingConfiguration};
//! use calc_core::wizard::WizardState;
//!
//! let mut state = WizardState::new();
//! let wing = state.select_competition_mode(CompetitionMode::Racing);
//! assert_eq!(wing, WingConfiguration::LowWing);
//!
//! state.update_weight("650", "0");
//! assert_eq!(state.derived().total_weight_g, 650.0);
//! ```

use serde::Serialize;

use crate::calculations::{derive, DerivedQuantities};
use crate::inputs::{FormInputs, InputField, RawInputs};
use crate::mission::{recommend_wing_configuration, CompetitionMode, WingConfiguration};

/// Inputs plus the derivation they produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    inputs: FormInputs,
    derived: DerivedQuantities,
}

impl WizardState {
    /// Start a session from the default trainer inputs
    pub fn new() -> Self {
        Self::with_inputs(FormInputs::default())
    }

    /// Start a session from the given inputs, derived already computed
    pub fn with_inputs(inputs: FormInputs) -> Self {
        let derived = derive(&inputs.resolve());
        WizardState { inputs, derived }
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    /// Result of the last derivation pass
    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// Resolved snapshot of the current inputs
    pub fn raw(&self) -> RawInputs {
        self.inputs.resolve()
    }

    /// Edit every mission-step value at once
    pub fn update_mission(
        &mut self,
        mode: CompetitionMode,
        wing_configuration: WingConfiguration,
        max_wingspan_mm: impl Into<String>,
        max_prop_in: impl Into<String>,
    ) {
        self.inputs.mode = mode;
        self.inputs.wing_configuration = wing_configuration;
        self.inputs.max_wingspan_mm = max_wingspan_mm.into();
        self.inputs.max_prop_in = max_prop_in.into();
        self.recalculate();
    }

    pub fn update_weight(&mut self, empty_weight_g: impl Into<String>, payload_weight_g: impl Into<String>) {
        self.inputs.empty_weight_g = empty_weight_g.into();
        self.inputs.payload_weight_g = payload_weight_g.into();
        self.recalculate();
    }

    pub fn update_propulsion(
        &mut self,
        motor_kv: impl Into<String>,
        battery_voltage_v: impl Into<String>,
        prop_pitch_in: impl Into<String>,
        prop_diameter_in: impl Into<String>,
    ) {
        self.inputs.motor_kv = motor_kv.into();
        self.inputs.battery_voltage_v = battery_voltage_v.into();
        self.inputs.prop_pitch_in = prop_pitch_in.into();
        self.inputs.prop_diameter_in = prop_diameter_in.into();
        self.recalculate();
    }

    /// Select a mode and apply its recommended wing configuration.
    ///
    /// Returns the recommendation so the caller can show it.
    pub fn select_competition_mode(&mut self, mode: CompetitionMode) -> WingConfiguration {
        let recommended = recommend_wing_configuration(mode);
        self.inputs.mode = mode;
        self.inputs.wing_configuration = recommended;
        self.recalculate();
        recommended
    }

    /// Explicit wing pick; overrides any earlier recommendation
    pub fn set_wing_configuration(&mut self, wing_configuration: WingConfiguration) {
        self.inputs.wing_configuration = wing_configuration;
        self.recalculate();
    }

    /// Edit a single numeric field
    pub fn set_field(&mut self, field: InputField, text: impl Into<String>) {
        self.inputs.set_field(field, text);
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.derived = derive(&self.inputs.resolve());
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
