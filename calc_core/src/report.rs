//! # Step Summaries
//!
//! Formats the wizard state into the label/value lines each step shows, with
//! the rounding and units the step screens use. Front-ends render a
//! [`StepSummary`] however they like; `Display` gives a plain-text block.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::report::summarize;
//! use calc_core::steps::WizardStep;
//! use calc_core::wizard::WizardState;
//!
//! let state = WizardState::new();
//! let summary = summarize(WizardStep::Weight, &state);
//! assert_eq!(summary.lines[0].value, "800.0 g");
//! ```

use serde::Serialize;

use crate::steps::WizardStep;
use crate::units::{SquareDecimeters, SquareMeters};
use crate::wizard::WizardState;

/// Shown on the power step when static thrust is below weight
pub const UNDERPOWERED_WARNING: &str = "UNDERPOWERED! Thrust < Weight";

/// One formatted result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl SummaryLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        SummaryLine {
            label,
            value: value.into(),
        }
    }
}

/// Everything a step displays below its inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSummary {
    pub step: WizardStep,
    pub lines: Vec<SummaryLine>,
    pub warnings: Vec<&'static str>,
    pub advice: Option<&'static str>,
}

/// Build the summary for one step from the current state.
pub fn summarize(step: WizardStep, state: &WizardState) -> StepSummary {
    let d = state.derived();
    let mut warnings = Vec::new();
    let mut advice = None;

    let lines = match step {
        WizardStep::Mission => {
            let raw = state.raw();
            vec![
                SummaryLine::new("Mode", raw.mode.display_name()),
                SummaryLine::new("Wing Config", raw.wing_configuration.display_name()),
                SummaryLine::new("Max Wingspan", format!("{:.0} mm", raw.max_wingspan_mm)),
                SummaryLine::new("Max Prop", format!("{:.1} in", raw.max_prop_in)),
            ]
        }
        WizardStep::Weight => vec![
            SummaryLine::new("Total", format!("{:.1} g", d.total_weight_g)),
            SummaryLine::new("Force", format!("{:.2} N", d.weight_force_n)),
        ],
        WizardStep::Propulsion => {
            if d.is_underpowered {
                warnings.push(UNDERPOWERED_WARNING);
            }
            vec![
                SummaryLine::new("RPM", format!("{:.0}", d.rpm)),
                SummaryLine::new("Pitch Speed", format!("{:.1} m/s", d.pitch_speed_m_s)),
                SummaryLine::new("Static Thrust", format!("{:.0} g", d.static_thrust_g)),
            ]
        }
        WizardStep::Wing => {
            let area: SquareDecimeters = SquareMeters(d.required_wing_area_m2).into();
            vec![
                SummaryLine::new("Required Area", format!("{:.2} dm²", area.value())),
                SummaryLine::new("Root Chord", format!("{:.0} mm", d.root_chord_mm)),
                SummaryLine::new("Wing Loading", format!("{:.1} g/dm²", d.wing_loading_g_dm2)),
            ]
        }
        WizardStep::Tail => vec![
            SummaryLine::new("H-Stab Area", format!("{:.1} cm²", d.h_stab_area_cm2)),
            SummaryLine::new("V-Stab Area", format!("{:.1} cm²", d.v_stab_area_cm2)),
            SummaryLine::new("Moment Arm", format!("{:.0} mm", d.tail_moment_arm_mm)),
        ],
        WizardStep::Layout => {
            advice = Some(state.inputs().wing_configuration.advice());
            vec![
                SummaryLine::new(
                    "Wing LE Position",
                    format!("{:.0} mm from nose", d.wing_leading_edge_mm),
                ),
                SummaryLine::new("CG Position", format!("{:.0} mm from LE", d.cg_position_mm)),
            ]
        }
    };

    StepSummary {
        step,
        lines,
        warnings,
        advice,
    }
}

/// Summaries for every step, in wizard order
pub fn summarize_all(state: &WizardState) -> Vec<StepSummary> {
    WizardStep::ALL
        .iter()
        .map(|step| summarize(*step, state))
        .collect()
}

impl std::fmt::Display for StepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
        for line in &self.lines {
            writeln!(f, "  {:<width$}  {}", line.label, line.value, width = width)?;
        }
        for warning in &self.warnings {
            writeln!(f, "  WARNING: {}", warning)?;
        }
        if let Some(advice) = self.advice {
            writeln!(f)?;
            writeln!(f, "  CONFIGURATION ADVICE")?;
            writeln!(f, "  {}", advice)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::InputField;
    use crate::mission::{CompetitionMode, WingConfiguration};

    fn value_of<'a>(summary: &'a StepSummary, label: &str) -> &'a str {
        summary
            .lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_default_summaries() {
        let state = WizardState::new();

        let weight = summarize(WizardStep::Weight, &state);
        assert_eq!(value_of(&weight, "Force"), "7.85 N");

        let power = summarize(WizardStep::Propulsion, &state);
        assert_eq!(value_of(&power, "RPM"), "8680");
        assert_eq!(value_of(&power, "Pitch Speed"), "22.0 m/s");
        assert!(power.warnings.is_empty());

        let wing = summarize(WizardStep::Wing, &state);
        assert_eq!(value_of(&wing, "Required Area"), "9.37 dm²");
        assert_eq!(value_of(&wing, "Root Chord"), "78 mm");

        let layout = summarize(WizardStep::Layout, &state);
        assert_eq!(value_of(&layout, "CG Position"), "23 mm from LE");
    }

    #[test]
    fn test_underpowered_warning() {
        let mut state = WizardState::new();
        state.select_competition_mode(CompetitionMode::Payload);
        state.set_field(InputField::BatteryVoltage, "3.7");

        let power = summarize(WizardStep::Propulsion, &state);
        assert_eq!(power.warnings, vec![UNDERPOWERED_WARNING]);
        assert!(power.to_string().contains("WARNING: UNDERPOWERED"));
    }

    #[test]
    fn test_layout_advice_follows_wing() {
        let mut state = WizardState::new();
        state.set_wing_configuration(WingConfiguration::LowWing);
        let layout = summarize(WizardStep::Layout, &state);
        assert_eq!(layout.advice, Some(WingConfiguration::LowWing.advice()));
        assert!(layout.to_string().contains("Dihedral"));
    }

    #[test]
    fn test_mission_echoes_resolved_inputs() {
        let mut state = WizardState::new();
        state.set_field(InputField::MaxWingspan, "oops");
        let mission = summarize(WizardStep::Mission, &state);
        assert_eq!(value_of(&mission, "Max Wingspan"), "1000 mm");
        assert_eq!(value_of(&mission, "Mode"), "Trainer");
    }

    #[test]
    fn test_summarize_all_covers_every_step() {
        let summaries = summarize_all(&WizardState::new());
        let steps: Vec<_> = summaries.iter().map(|s| s.step).collect();
        assert_eq!(steps, WizardStep::ALL.to_vec());
    }
}
