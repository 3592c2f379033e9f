//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the sizing stages convert
//! between. They are plain `f64` newtypes so JSON stays clean (just numbers)
//! and conversions are explicit `From` impls instead of loose factors.
//!
//! ## Units in Play
//!
//! RC hobby specs mix metric and imperial, so the wizard does too:
//! - Length: millimeters (airframe), meters (aero formulas), inches (props)
//! - Mass: grams (weight budget), kilograms (force)
//! - Area: square meters (aero formulas), square decimeters (wing loading)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Meters, Millimeters};
//!
//! let span = Millimeters(1200.0);
//! let span_m: Meters = span.into();
//! assert_eq!(span_m.0, 1.2);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{GRAMS_PER_KILOGRAM, METERS_PER_INCH, MM_PER_METER, SQ_DM_PER_SQ_M};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches (prop diameter and pitch)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_METER)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * MM_PER_METER)
    }
}

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Meters(inches.0 * METERS_PER_INCH)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / GRAMS_PER_KILOGRAM)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * GRAMS_PER_KILOGRAM)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Area in square decimeters (the usual wing-loading denominator)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareDecimeters(pub f64);

impl From<SquareMeters> for SquareDecimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareDecimeters(m2.0 * SQ_DM_PER_SQ_M)
    }
}

impl From<SquareDecimeters> for SquareMeters {
    fn from(dm2: SquareDecimeters) -> Self {
        SquareMeters(dm2.0 / SQ_DM_PER_SQ_M)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(SquareDecimeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let span: Meters = Millimeters(1500.0).into();
        assert_eq!(span.0, 1.5);
        let back: Millimeters = span.into();
        assert_eq!(back.0, 1500.0);
    }

    #[test]
    fn test_inches_to_meters() {
        let pitch: Meters = Inches(10.0).into();
        assert!((pitch.0 - 0.254).abs() < 1e-12);
    }

    #[test]
    fn test_grams_to_kilograms() {
        let mass: Kilograms = Grams(850.0).into();
        assert_eq!(mass.0, 0.85);
    }

    #[test]
    fn test_square_meters_to_decimeters() {
        let area: SquareDecimeters = SquareMeters(0.25).into();
        assert_eq!(area.0, 25.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Grams(800.0);
        let b = Grams(200.0);
        assert_eq!((a + b).0, 1000.0);
        assert_eq!((a - b).0, 600.0);
        assert_eq!((a * 2.0).0, 1600.0);
        assert_eq!((a / 2.0).value(), 400.0);
    }

    #[test]
    fn test_serialization() {
        let span = Millimeters(1200.0);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "1200.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(span, roundtrip);
    }
}
