//! Linear step sequence of the sizing wizard.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::inputs::InputField;

/// One screen of the wizard, in the order the user walks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Mission,
    Weight,
    Propulsion,
    Wing,
    Tail,
    Layout,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Mission,
        WizardStep::Weight,
        WizardStep::Propulsion,
        WizardStep::Wing,
        WizardStep::Tail,
        WizardStep::Layout,
    ];

    pub fn first() -> Self {
        WizardStep::Mission
    }

    /// 1-based position in the sequence
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Mission => "Mission",
            WizardStep::Weight => "Weight",
            WizardStep::Propulsion => "Power",
            WizardStep::Wing => "Wing",
            WizardStep::Tail => "Tail",
            WizardStep::Layout => "Layout",
        }
    }

    /// Lowercase step name, accepted back by `FromStr`
    pub fn route(&self) -> &'static str {
        match self {
            WizardStep::Mission => "mission",
            WizardStep::Weight => "weight",
            WizardStep::Propulsion => "propulsion",
            WizardStep::Wing => "wing",
            WizardStep::Tail => "tail",
            WizardStep::Layout => "layout",
        }
    }

    /// Numeric fields edited on this step. Result-only steps have none.
    pub fn fields(&self) -> &'static [InputField] {
        match self {
            WizardStep::Mission => &[InputField::MaxWingspan, InputField::MaxProp],
            WizardStep::Weight => &[InputField::EmptyWeight, InputField::PayloadWeight],
            WizardStep::Propulsion => &[
                InputField::MotorKv,
                InputField::BatteryVoltage,
                InputField::PropDiameter,
                InputField::PropPitch,
            ],
            WizardStep::Wing | WizardStep::Tail | WizardStep::Layout => &[],
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    fn index(&self) -> usize {
        match self {
            WizardStep::Mission => 0,
            WizardStep::Weight => 1,
            WizardStep::Propulsion => 2,
            WizardStep::Wing => 3,
            WizardStep::Tail => 4,
            WizardStep::Layout => 5,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "STEP {:02} - {}", self.number(), self.title().to_uppercase())
    }
}

impl FromStr for WizardStep {
    type Err = CalcError;

    /// Accepts a route (`"propulsion"`) or a title (`"Power"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        WizardStep::ALL
            .into_iter()
            .find(|step| step.route() == name || step.title().to_lowercase() == name)
            .ok_or_else(|| {
                let known: Vec<_> = WizardStep::ALL.iter().map(|step| step.route()).collect();
                CalcError::invalid_input(
                    "step",
                    s,
                    format!("Unknown wizard step (expected one of: {})", known.join(", ")),
                )
            })
    }
}
