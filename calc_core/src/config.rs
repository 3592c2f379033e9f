//! # Wizard Configuration
//!
//! Optional session defaults read from a TOML or YAML file, picked by
//! extension. Every key is optional; anything missing keeps the built-in
//! trainer default.
//!
//! ## TOML Example
//!
//! ```toml
//! [defaults]
//! mode = "payload"
//! wing_configuration = "high_wing"
//! max_wingspan_mm = "1500"
//! empty_weight_g = "1100"
//! payload_weight_g = "400"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::FormInputs;
use crate::wizard::WizardState;

/// Contents of a wizard config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Inputs a new session starts from
    pub defaults: FormInputs,
}

impl WizardConfig {
    /// Start a session from the configured defaults
    pub fn into_state(self) -> WizardState {
        WizardState::with_inputs(self.defaults)
    }
}

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> CalcResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(CalcError::invalid_input(
                "config",
                path.display().to_string(),
                "Config file must end in .toml, .yaml or .yml",
            )),
        }
    }
}

/// Load a config file.
///
/// # Errors
///
/// - `InvalidInput` for an unsupported extension
/// - `FileError` when the file cannot be read
/// - `SerializationError` when the contents do not parse
pub fn load_config<P: AsRef<Path>>(path: P) -> CalcResult<WizardConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    let contents = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    parse_config(&contents, format)
}

fn parse_config(contents: &str, format: ConfigFormat) -> CalcResult<WizardConfig> {
    match format {
        ConfigFormat::Toml => toml::from_str(contents).map_err(|e| CalcError::serialization(e.to_string())),
        ConfigFormat::Yaml => {
            // An empty YAML document is `null`, not an empty mapping
            if contents.trim().is_empty() {
                return Ok(WizardConfig::default());
            }
            serde_yaml::from_str(contents).map_err(|e| CalcError::serialization(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::{CompetitionMode, WingConfiguration};
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(
            ".toml",
            "[defaults]\nmode = \"racing\"\nwing_configuration = \"low_wing\"\nmotor_kv = \"2300\"\n",
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.defaults.mode, CompetitionMode::Racing);
        assert_eq!(config.defaults.wing_configuration, WingConfiguration::LowWing);
        assert_eq!(config.defaults.motor_kv, "2300");
        // Untouched keys keep the built-in defaults
        assert_eq!(config.defaults.empty_weight_g, "800");
    }

    #[test]
    fn test_load_yaml() {
        let file = write_temp(".yml", "defaults:\n  mode: payload\n  payload_weight_g: \"400\"\n");
        let state = load_config(file.path()).unwrap().into_state();
        assert_eq!(state.inputs().mode, CompetitionMode::Payload);
        assert_eq!(state.derived().total_weight_g, 1200.0);
    }

    #[test]
    fn test_empty_files_use_defaults() {
        let toml_file = write_temp(".toml", "");
        assert_eq!(load_config(toml_file.path()).unwrap(), WizardConfig::default());

        let yaml_file = write_temp(".yaml", "");
        assert_eq!(load_config(yaml_file.path()).unwrap(), WizardConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".json", "{}");
        let err = load_config(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_bad_contents() {
        let file = write_temp(".toml", "[defaults]\nmode = \"glider\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
