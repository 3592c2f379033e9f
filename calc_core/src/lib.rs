//! # calc_core - RC Airframe Sizing Engine
//!
//! `calc_core` is the computational heart of Wingwright, a step-by-step
//! wizard that sizes a radio-controlled model airplane: mission, weight,
//! propulsion, wing, tail and fuselage layout.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`derive`] is a pure, total function of the inputs
//! - **Forgiving**: unparsable text falls back to a fixed value before any math
//! - **JSON-First**: all data types implement Serialize
//! - **Thin state holder**: [`WizardState`] owns the inputs and re-derives on every edit
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::mission::CompetitionMode;
//! use calc_core::wizard::WizardState;
//!
//! let mut state = WizardState::new();
//! state.select_competition_mode(CompetitionMode::Payload);
//! state.update_weight("1100", "400");
//!
//! let derived = state.derived();
//! println!("Wing area: {:.2} dm²", derived.required_wing_area_m2 * 100.0);
//! println!("Root chord: {:.0} mm", derived.root_chord_mm);
//! ```
//!
//! ## Modules
//!
//! - [`mission`] - Competition modes, wing configurations, recommendation rule
//! - [`inputs`] - Text form inputs and their resolved numeric snapshot
//! - [`calculations`] - The derivation engine, one module per stage
//! - [`wizard`] - Session state holder
//! - [`steps`] - Wizard step sequence
//! - [`report`] - Per-step formatted summaries
//! - [`config`] - TOML/YAML session defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`constants`] - Physical constants and empirical factors
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod constants;
pub mod errors;
pub mod inputs;
pub mod mission;
pub mod report;
pub mod steps;
pub mod units;
pub mod wizard;

// Re-export commonly used types at crate root for convenience
pub use calculations::{derive, DerivedQuantities};
pub use config::{load_config, WizardConfig};
pub use errors::{CalcError, CalcResult};
pub use inputs::{FormInputs, InputField, RawInputs};
pub use mission::{recommend_wing_configuration, CompetitionMode, WingConfiguration};
pub use steps::WizardStep;
pub use wizard::WizardState;
