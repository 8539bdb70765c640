use serde::{Deserialize, Serialize};

/// A cooling device as enumerated by `liquidctl list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// liquidctl device index, passed back as `--device <index>`
    pub index: u32,
    pub name: String,
    /// Same as `name` until liquidctl exposes a device class.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Device {
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            index,
            kind: name.clone(),
            name,
        }
    }
}

/// Live telemetry for one device. Missing readings stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Liquid temperature in °C.
    pub temperature: f64,
    #[serde(rename = "fanRpm")]
    pub fan_rpm: u32,
    #[serde(rename = "pumpRpm")]
    pub pump_rpm: u32,
}
