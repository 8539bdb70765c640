pub mod store;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub use store::ProfileStore;

/// One point on a fan curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Liquid temperature in °C.
    pub temperature: f64,
    /// Fan duty in percent. Expected in 0-100 but not enforced.
    pub speed: i32,
}

impl std::str::FromStr for CurvePoint {
    type Err = Error;

    /// Parse `TEMP:SPEED`, e.g. `32.5:40`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            Error::Validation(format!(
                "bad curve point '{}', expected TEMP:SPEED",
                s
            ))
        };
        let (temp, speed) = s.split_once(':').ok_or_else(invalid)?;
        let temperature: f64 = temp.trim().parse().map_err(|_| invalid())?;
        if !temperature.is_finite() {
            return Err(invalid());
        }
        Ok(Self {
            temperature,
            speed: speed.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// A named fan curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub points: Vec<CurvePoint>,
}

impl Profile {
    pub fn new(name: impl Into<String>, points: Vec<CurvePoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// First profile named exactly `name`.
pub fn find_profile<'a>(profiles: &'a [Profile], name: &str) -> Result<&'a Profile> {
    profiles
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| Error::NotFound(format!("profile '{}'", name)))
}

/// Replace the profile with the same name in place, or append it.
pub fn upsert_profile(mut profiles: Vec<Profile>, profile: Profile) -> Vec<Profile> {
    match profiles.iter_mut().find(|p| p.name == profile.name) {
        Some(existing) => *existing = profile,
        None => profiles.push(profile),
    }
    profiles
}

/// Drop every profile named `name`.
pub fn delete_profile(mut profiles: Vec<Profile>, name: &str) -> Vec<Profile> {
    profiles.retain(|p| p.name != name);
    profiles
}

/// Something odd about a curve. Curves are still saved and applied as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveWarning {
    /// Speed outside 0-100 at this point index.
    SpeedOutOfRange { point: usize, speed: i32 },
    /// Temperature lower than the one before it.
    TemperatureDecreases { point: usize },
}

impl std::fmt::Display for CurveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveWarning::SpeedOutOfRange { point, speed } => {
                write!(f, "point {}: speed {}% is outside 0-100", point + 1, speed)
            }
            CurveWarning::TemperatureDecreases { point } => write!(
                f,
                "point {}: temperature is lower than the previous point",
                point + 1
            ),
        }
    }
}

pub fn check_curve(points: &[CurvePoint]) -> Vec<CurveWarning> {
    let mut warnings = Vec::new();

    for (i, p) in points.iter().enumerate() {
        if !(0..=100).contains(&p.speed) {
            warnings.push(CurveWarning::SpeedOutOfRange {
                point: i,
                speed: p.speed,
            });
        }
        if i > 0 && p.temperature < points[i - 1].temperature {
            warnings.push(CurveWarning::TemperatureDecreases { point: i });
        }
    }

    warnings
}
