//! Pure parsers for liquidctl's line-oriented output.
//!
//! Parsing is best-effort: lines that match nothing are skipped and numeric
//! fields that cannot be read fall back to zero. Every skipped line and every
//! status field that never showed up is reported alongside the value so the
//! caller can log it.

use crate::device::{Device, Status};
use regex::Regex;
use std::sync::LazyLock;

static DEVICE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Device #(\d+): (.+)").expect("device pattern"));
static FLOAT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9.]+").expect("float pattern"));
static INT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("int pattern"));

/// A parsed value plus the input lines the parser could not use.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Temperature,
    FanSpeed,
    PumpSpeed,
}

impl StatusField {
    const ALL: [StatusField; 3] = [
        StatusField::Temperature,
        StatusField::FanSpeed,
        StatusField::PumpSpeed,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            StatusField::Temperature => "Temperature:",
            StatusField::FanSpeed => "Fan speed:",
            StatusField::PumpSpeed => "Pump speed:",
        }
    }
}

impl std::fmt::Display for StatusField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusField::Temperature => write!(f, "temperature"),
            StatusField::FanSpeed => write!(f, "fan speed"),
            StatusField::PumpSpeed => write!(f, "pump speed"),
        }
    }
}

/// Result of parsing `liquidctl status`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub status: Status,
    pub skipped: Vec<String>,
    /// Fields with no matching line; they were left at zero.
    pub missing: Vec<StatusField>,
}

/// Parse `liquidctl list` output into devices, in input order.
pub fn parse_discovery(text: &str) -> Vec<Device> {
    parse_discovery_report(text).value
}

pub fn parse_discovery_report(text: &str) -> Parsed<Vec<Device>> {
    let mut devices = Vec::new();
    let mut skipped = Vec::new();

    for line in text.lines() {
        let parsed = DEVICE_LINE.captures(line).and_then(|caps| {
            let index = caps[1].parse::<u32>().ok()?;
            Some(Device::new(index, &caps[2]))
        });

        match parsed {
            Some(device) => devices.push(device),
            None if line.trim().is_empty() => {}
            None => skipped.push(line.to_string()),
        }
    }

    Parsed {
        value: devices,
        skipped,
    }
}

/// Parse `liquidctl status` output. Never fails; see [`parse_status_report`].
pub fn parse_status(text: &str) -> Status {
    parse_status_report(text).status
}

pub fn parse_status_report(text: &str) -> StatusReport {
    let mut status = Status::default();
    let mut seen = Vec::new();
    let mut skipped = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let Some(field) = StatusField::ALL
            .into_iter()
            .find(|f| line.starts_with(f.prefix()))
        else {
            if !line.is_empty() {
                skipped.push(line.to_string());
            }
            continue;
        };

        // Later lines overwrite earlier ones.
        match field {
            StatusField::Temperature => status.temperature = first_float(line),
            StatusField::FanSpeed => status.fan_rpm = first_uint(line),
            StatusField::PumpSpeed => status.pump_rpm = first_uint(line),
        }
        if !seen.contains(&field) {
            seen.push(field);
        }
    }

    let missing = StatusField::ALL
        .into_iter()
        .filter(|f| !seen.contains(f))
        .collect();

    StatusReport {
        status,
        skipped,
        missing,
    }
}

/// First signed decimal token in `line`, or 0.0.
pub fn first_float(line: &str) -> f64 {
    FLOAT_TOKEN
        .find(line)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// First run of digits in `line`, or 0.
pub fn first_uint(line: &str) -> u32 {
    INT_TOKEN
        .find(line)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
