//! Physical constants and empirical factors used by the sizing stages.

// Physics
pub const STANDARD_GRAVITY_M_S2: f64 = 9.81;
/// Sea-level standard air density (kg/m³)
pub const AIR_DENSITY_KG_M3: f64 = 1.225;

// Unit conversions
pub const MM_PER_METER: f64 = 1000.0;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
pub const SQ_DM_PER_SQ_M: f64 = 100.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const GRAMS_PER_OUNCE: f64 = 28.35;

// Propulsion
/// Loaded RPM as a fraction of the no-load Kv x V figure
pub const MOTOR_LOAD_FACTOR: f64 = 0.85;
/// Cruise speed as a fraction of pitch speed
pub const CRUISE_PITCH_SPEED_RATIO: f64 = 0.75;
/// Static-thrust regression coefficient (ounce-based result)
pub const STATIC_THRUST_COEFFICIENT: f64 = 3.0e-10;

// Wing
/// Stand-in speed for the wing stage when cruise speed is not positive (m/s)
pub const FALLBACK_CRUISE_SPEED_M_S: f64 = 1.0;

// Tail and layout
/// Tail moment arm as a multiple of root chord
pub const TAIL_ARM_CHORD_RATIO: f64 = 2.5;
/// Vertical tail volume coefficient, the same for every mode
pub const VERTICAL_TAIL_VOLUME_COEFFICIENT: f64 = 0.04;
/// Scale applied to the tail volume results. The published tail figures use
/// x100 even though a true m² to cm² conversion is x10_000.
pub const TAIL_AREA_SCALE: f64 = 100.0;
/// Wing leading edge distance from the nose, in chord lengths
pub const LEADING_EDGE_CHORDS_FROM_NOSE: f64 = 1.0;
/// Target CG as a fraction of root chord aft of the leading edge
pub const CG_CHORD_FRACTION: f64 = 0.30;
