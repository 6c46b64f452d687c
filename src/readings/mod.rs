use serde::Serialize;

/// Parse a raw user-supplied value as a number, falling back to `default`
/// when the value is missing, empty, unparseable, or non-finite.
///
/// This is the lenient-form-input contract: the scoring core only ever
/// sees well-defined numbers, and a malformed field scores as zero
/// instead of producing an error.
pub fn parse_numeric_or_default(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// The five inputs as they arrive from the CLI boundary, before numeric
/// coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawReadings {
    pub light: Option<String>,
    pub air: Option<String>,
    pub plants: Option<String>,
    pub materials: Option<String>,
    pub noise: Option<String>,
}

/// A full set of readings for one space.
///
/// Convention: `light`, `air`, `materials`, and `noise` are 0-100 scales,
/// `plants` is a non-negative count. The convention is not enforced here;
/// out-of-range values flow through the score arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readings {
    pub light: f64,
    pub air: f64,
    pub plants: f64,
    pub materials: f64,
    pub noise: f64,
}

impl Readings {
    /// A negative plant count is clamped up to zero; the four scale
    /// readings are taken as given.
    pub fn new(light: f64, air: f64, plants: f64, materials: f64, noise: f64) -> Self {
        Self {
            light,
            air,
            plants: plants.max(0.0),
            materials,
            noise,
        }
    }

    /// Coerce raw boundary values into readings. Missing or malformed
    /// fields become 0.
    pub fn from_raw(raw: &RawReadings) -> Self {
        Self::new(
            parse_numeric_or_default(raw.light.as_deref(), 0.0),
            parse_numeric_or_default(raw.air.as_deref(), 0.0),
            parse_numeric_or_default(raw.plants.as_deref(), 0.0),
            parse_numeric_or_default(raw.materials.as_deref(), 0.0),
            parse_numeric_or_default(raw.noise.as_deref(), 0.0),
        )
    }
}

impl Default for Readings {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0)
    }
}
