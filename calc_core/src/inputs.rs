//! # Wizard Inputs
//!
//! Two views of the same user-editable fields:
//!
//! - [`FormInputs`] - what the presentation layer binds to text boxes. Numeric
//!   fields are raw strings and may hold anything the user typed.
//! - [`RawInputs`] - the same fields resolved to `f64`. This is the only thing
//!   the derivation engine sees.
//!
//! [`FormInputs::resolve`] is the adapter between them: every numeric field is
//! trimmed and parsed, and anything that does not parse takes the field's
//! fallback (1000 mm for the wingspan, 0 for everything else). A parse failure
//! never reaches the engine.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::inputs::{FormInputs, InputField};
//!
//! let mut form = FormInputs::default();
//! form.set_field(InputField::MaxWingspan, "wide");
//! form.set_field(InputField::PayloadWeight, " 150 ");
//!
//! let raw = form.resolve();
//! assert_eq!(raw.max_wingspan_mm, 1000.0);
//! assert_eq!(raw.payload_weight_g, 150.0);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::mission::{CompetitionMode, WingConfiguration};
use crate::steps::WizardStep;

/// Wingspan substituted for unparsable text; keeps the chord division finite
pub const WINGSPAN_FALLBACK_MM: f64 = 1000.0;

/// Fallback for every other numeric field
pub const NUMERIC_FALLBACK: f64 = 0.0;

/// The eight numeric fields a user can type into.
///
/// Serialized under the same names as the matching [`FormInputs`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    #[serde(rename = "max_wingspan_mm")]
    MaxWingspan,
    #[serde(rename = "max_prop_in")]
    MaxProp,
    #[serde(rename = "empty_weight_g")]
    EmptyWeight,
    #[serde(rename = "payload_weight_g")]
    PayloadWeight,
    #[serde(rename = "motor_kv")]
    MotorKv,
    #[serde(rename = "battery_voltage_v")]
    BatteryVoltage,
    #[serde(rename = "prop_pitch_in")]
    PropPitch,
    #[serde(rename = "prop_diameter_in")]
    PropDiameter,
}

impl InputField {
    /// All fields in wizard order
    pub const ALL: [InputField; 8] = [
        InputField::MaxWingspan,
        InputField::MaxProp,
        InputField::EmptyWeight,
        InputField::PayloadWeight,
        InputField::MotorKv,
        InputField::BatteryVoltage,
        InputField::PropPitch,
        InputField::PropDiameter,
    ];

    /// Stable key, identical to the [`FormInputs`] field name a config file uses
    pub fn key(&self) -> &'static str {
        match self {
            InputField::MaxWingspan => "max_wingspan_mm",
            InputField::MaxProp => "max_prop_in",
            InputField::EmptyWeight => "empty_weight_g",
            InputField::PayloadWeight => "payload_weight_g",
            InputField::MotorKv => "motor_kv",
            InputField::BatteryVoltage => "battery_voltage_v",
            InputField::PropPitch => "prop_pitch_in",
            InputField::PropDiameter => "prop_diameter_in",
        }
    }

    /// Key without its unit suffix, accepted as a shorthand
    fn short_key(&self) -> &'static str {
        match self {
            InputField::MaxWingspan => "max_wingspan",
            InputField::MaxProp => "max_prop",
            InputField::EmptyWeight => "empty_weight",
            InputField::PayloadWeight => "payload_weight",
            InputField::MotorKv => "motor_kv",
            InputField::BatteryVoltage => "battery_voltage",
            InputField::PropPitch => "prop_pitch",
            InputField::PropDiameter => "prop_diameter",
        }
    }

    /// Form label, units included
    pub fn label(&self) -> &'static str {
        match self {
            InputField::MaxWingspan => "Max Wingspan (mm)",
            InputField::MaxProp => "Max Prop (in)",
            InputField::EmptyWeight => "Empty Weight (g)",
            InputField::PayloadWeight => "Payload (g)",
            InputField::MotorKv => "Motor Kv",
            InputField::BatteryVoltage => "Voltage (V)",
            InputField::PropPitch => "Prop Pitch (in)",
            InputField::PropDiameter => "Prop Diameter (in)",
        }
    }

    /// Help text shown under the field, where there is any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InputField::EmptyWeight => Some(
                "Weigh your battery, motor, ESC, servos, and receiver together, \
                 then add estimated foam/balsa weight.",
            ),
            InputField::MotorKv => Some(
                "This is the RPM per Volt, usually printed on the motor casing \
                 (e.g., 920KV, 2300KV).",
            ),
            InputField::PropDiameter => Some(
                "Look for raised numbers on the front of your propeller. \
                 Example: '10x6' means 10-inch diameter.",
            ),
            InputField::PropPitch => Some("Example: '10x6' means 6-inch pitch."),
            _ => None,
        }
    }

    /// Wizard step that edits this field
    pub fn step(&self) -> WizardStep {
        match self {
            InputField::MaxWingspan | InputField::MaxProp => WizardStep::Mission,
            InputField::EmptyWeight | InputField::PayloadWeight => WizardStep::Weight,
            InputField::MotorKv
            | InputField::BatteryVoltage
            | InputField::PropPitch
            | InputField::PropDiameter => WizardStep::Propulsion,
        }
    }

    /// Value substituted when the field's text does not parse
    pub fn fallback(&self) -> f64 {
        match self {
            InputField::MaxWingspan => WINGSPAN_FALLBACK_MM,
            _ => NUMERIC_FALLBACK,
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for InputField {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        InputField::ALL
            .into_iter()
            .find(|field| field.key() == key || field.short_key() == key)
            .ok_or_else(|| {
                let known: Vec<_> = InputField::ALL.iter().map(|f| f.key()).collect();
                CalcError::invalid_input(
                    "field",
                    s,
                    format!("Unknown input field (expected one of: {})", known.join(", ")),
                )
            })
    }
}

/// Parse a text field, substituting `fallback` when it is not a finite number.
///
/// A single trailing `f`/`d` type suffix is tolerated (`"10f"` reads as 10).
/// Spellings of infinity and NaN fall back like any other unparsable text.
pub fn parse_or(text: &str, fallback: f64) -> f64 {
    let text = text.trim();
    let number = text.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(text);
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Split a `key=value` assignment into its field and (trimmed) text.
pub fn parse_assignment(assignment: &str) -> CalcResult<(InputField, &str)> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| CalcError::invalid_input("assignment", assignment, "Expected key=value"))?;
    Ok((key.parse()?, value.trim()))
}

/// Accept both `"1200"` and `1200` for a text field in config files.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(x) => x.to_string(),
    })
}

/// Form state as typed by the user.
///
/// ## TOML Example
///
/// ```toml
/// mode = "racing"
/// wing_configuration = "low_wing"
/// max_wingspan_mm = "900"
/// motor_kv = 2300
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInputs {
    pub mode: CompetitionMode,
    pub wing_configuration: WingConfiguration,

    // Mission
    #[serde(deserialize_with = "text_or_number")]
    pub max_wingspan_mm: String,
    #[serde(deserialize_with = "text_or_number")]
    pub max_prop_in: String,

    // Weight
    #[serde(deserialize_with = "text_or_number")]
    pub empty_weight_g: String,
    #[serde(deserialize_with = "text_or_number")]
    pub payload_weight_g: String,

    // Propulsion
    #[serde(deserialize_with = "text_or_number")]
    pub motor_kv: String,
    #[serde(deserialize_with = "text_or_number")]
    pub battery_voltage_v: String,
    #[serde(deserialize_with = "text_or_number")]
    pub prop_pitch_in: String,
    #[serde(deserialize_with = "text_or_number")]
    pub prop_diameter_in: String,
}

impl Default for FormInputs {
    /// A 1.2 m trainer on a 3S pack with a 10x6 prop
    fn default() -> Self {
        FormInputs {
            mode: CompetitionMode::Trainer,
            wing_configuration: WingConfiguration::HighWing,
            max_wingspan_mm: "1200".to_string(),
            max_prop_in: "10".to_string(),
            empty_weight_g: "800".to_string(),
            payload_weight_g: "0".to_string(),
            motor_kv: "920".to_string(),
            battery_voltage_v: "11.1".to_string(),
            prop_pitch_in: "6".to_string(),
            prop_diameter_in: "10".to_string(),
        }
    }
}

impl FormInputs {
    /// Current text of a numeric field
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::MaxWingspan => &self.max_wingspan_mm,
            InputField::MaxProp => &self.max_prop_in,
            InputField::EmptyWeight => &self.empty_weight_g,
            InputField::PayloadWeight => &self.payload_weight_g,
            InputField::MotorKv => &self.motor_kv,
            InputField::BatteryVoltage => &self.battery_voltage_v,
            InputField::PropPitch => &self.prop_pitch_in,
            InputField::PropDiameter => &self.prop_diameter_in,
        }
    }

    /// Replace the text of a numeric field
    pub fn set_field(&mut self, field: InputField, text: impl Into<String>) {
        let slot = match field {
            InputField::MaxWingspan => &mut self.max_wingspan_mm,
            InputField::MaxProp => &mut self.max_prop_in,
            InputField::EmptyWeight => &mut self.empty_weight_g,
            InputField::PayloadWeight => &mut self.payload_weight_g,
            InputField::MotorKv => &mut self.motor_kv,
            InputField::BatteryVoltage => &mut self.battery_voltage_v,
            InputField::PropPitch => &mut self.prop_pitch_in,
            InputField::PropDiameter => &mut self.prop_diameter_in,
        };
        *slot = text.into();
    }

    /// Apply a `key=value` assignment (e.g. `motor_kv=1400`)
    pub fn apply_assignment(&mut self, assignment: &str) -> CalcResult<InputField> {
        let (field, value) = parse_assignment(assignment)?;
        self.set_field(field, value);
        Ok(field)
    }

    /// Resolve every numeric field, applying per-field fallbacks
    pub fn resolve(&self) -> RawInputs {
        let value = |field: InputField| parse_or(self.field(field), field.fallback());
        RawInputs {
            mode: self.mode,
            wing_configuration: self.wing_configuration,
            max_wingspan_mm: value(InputField::MaxWingspan),
            max_prop_in: value(InputField::MaxProp),
            empty_weight_g: value(InputField::EmptyWeight),
            payload_weight_g: value(InputField::PayloadWeight),
            motor_kv: value(InputField::MotorKv),
            battery_voltage_v: value(InputField::BatteryVoltage),
            prop_pitch_in: value(InputField::PropPitch),
            prop_diameter_in: value(InputField::PropDiameter),
        }
    }
}

/// Fully resolved engine input. No field can fail to parse at this point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub mode: CompetitionMode,
    pub wing_configuration: WingConfiguration,

    /// Maximum wingspan allowed by the rules (mm)
    pub max_wingspan_mm: f64,
    /// Maximum prop diameter allowed by the rules (in). Informational only.
    pub max_prop_in: f64,

    /// Airframe plus electronics (g)
    pub empty_weight_g: f64,
    /// Carried payload (g)
    pub payload_weight_g: f64,

    /// Motor speed constant (RPM/V)
    pub motor_kv: f64,
    /// Pack voltage (V)
    pub battery_voltage_v: f64,
    /// Prop pitch (in)
    pub prop_pitch_in: f64,
    /// Prop diameter (in)
    pub prop_diameter_in: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        FormInputs::default().resolve()
    }
}

impl From<&FormInputs> for RawInputs {
    fn from(form: &FormInputs) -> Self {
        form.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let raw = RawInputs::default();
        assert_eq!(raw.mode, CompetitionMode::Trainer);
        assert_eq!(raw.max_wingspan_mm, 1200.0);
        assert_eq!(raw.empty_weight_g, 800.0);
        assert_eq!(raw.battery_voltage_v, 11.1);
        assert_eq!(raw.prop_diameter_in, 10.0);
    }

    #[test]
    fn test_fallbacks() {
        let mut form = FormInputs::default();
        for field in InputField::ALL {
            form.set_field(field, "n/a");
        }
        let raw = form.resolve();
        assert_eq!(raw.max_wingspan_mm, 1000.0);
        assert_eq!(raw.max_prop_in, 0.0);
        assert_eq!(raw.empty_weight_g, 0.0);
        assert_eq!(raw.payload_weight_g, 0.0);
        assert_eq!(raw.motor_kv, 0.0);
        assert_eq!(raw.battery_voltage_v, 0.0);
        assert_eq!(raw.prop_pitch_in, 0.0);
        assert_eq!(raw.prop_diameter_in, 0.0);
    }

    #[test]
    fn test_empty_text_takes_fallback() {
        assert_eq!(parse_or("", 1000.0), 1000.0);
        assert_eq!(parse_or("  ", 0.0), 0.0);
        assert_eq!(parse_or("12.5", 0.0), 12.5);
        assert_eq!(parse_or(" -3 ", 0.0), -3.0);
    }

    #[test]
    fn test_type_suffix_and_non_finite_text() {
        assert_eq!(parse_or("10f", 0.0), 10.0);
        assert_eq!(parse_or("6d", 0.0), 6.0);
        assert_eq!(parse_or("11.1F", 0.0), 11.1);
        assert_eq!(parse_or("d", 0.0), 0.0);
        assert_eq!(parse_or("10ff", 0.0), 0.0);
        for text in ["inf", "-inf", "infinity", "Infinity", "NaN", "nan", "1e400"] {
            assert_eq!(parse_or(text, 1000.0), 1000.0, "{text:?}");
        }
    }

    #[test]
    fn test_field_roundtrip() {
        let mut form = FormInputs::default();
        for field in InputField::ALL {
            form.set_field(field, "42");
            assert_eq!(form.field(field), "42");
        }
    }

    #[test]
    fn test_field_keys_parse() {
        for field in InputField::ALL {
            assert_eq!(field.key().parse::<InputField>().unwrap(), field);
        }
        assert_eq!("Motor-KV".parse::<InputField>().unwrap(), InputField::MotorKv);
        assert_eq!("empty_weight".parse::<InputField>().unwrap(), InputField::EmptyWeight);
        assert_eq!("Max-Wingspan-MM".parse::<InputField>().unwrap(), InputField::MaxWingspan);
        assert!("throttle".parse::<InputField>().is_err());
    }

    #[test]
    fn test_assignment_keys_match_config_keys() {
        for field in InputField::ALL {
            let mut assigned = FormInputs::default();
            assert_eq!(assigned.apply_assignment(&format!("{}=42", field.key())).unwrap(), field);

            let configured: FormInputs = toml::from_str(&format!("{} = \"42\"", field.key())).unwrap();
            assert_eq!(configured.field(field), "42");
            assert_eq!(configured, assigned);

            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }

    #[test]
    fn test_unit_suffixed_assignment() {
        let mut form = FormInputs::default();
        assert_eq!(form.apply_assignment("empty_weight_g=2000").unwrap(), InputField::EmptyWeight);
        assert_eq!(form.empty_weight_g, "2000");
        assert_eq!(form.apply_assignment("prop_pitch=7").unwrap(), InputField::PropPitch);
        assert_eq!(form.prop_pitch_in, "7");
    }

    #[test]
    fn test_apply_assignment() {
        let mut form = FormInputs::default();
        let field = form.apply_assignment("motor_kv = 1400").unwrap();
        assert_eq!(field, InputField::MotorKv);
        assert_eq!(form.motor_kv, "1400");

        assert!(form.apply_assignment("motor_kv").is_err());
        assert!(form.apply_assignment("rudder=5").is_err());
    }

    #[test]
    fn test_fields_belong_to_input_steps() {
        for field in InputField::ALL {
            assert!(field.step().fields().contains(&field));
        }
    }

    #[test]
    fn test_partial_toml() {
        let form: FormInputs = toml::from_str("mode = \"racing\"\nmotor_kv = \"2300\"").unwrap();
        assert_eq!(form.mode, CompetitionMode::Racing);
        assert_eq!(form.motor_kv, "2300");
        assert_eq!(form.max_wingspan_mm, "1200");
    }

    #[test]
    fn test_numbers_accepted_for_text_fields() {
        let form: FormInputs = toml::from_str("motor_kv = 2300\nbattery_voltage_v = 14.8").unwrap();
        assert_eq!(form.motor_kv, "2300");
        assert_eq!(form.battery_voltage_v, "14.8");
    }
}
