use crate::device::{Device, Status};
use crate::profile::{CurveWarning, Profile};
use colored::Colorize;
use serde::Serialize;

const LABEL_W: usize = 14;

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_devices(devices: &[Device]) {
    if devices.is_empty() {
        println!(
            "{}",
            "  No devices found. Is liquidctl installed and the hardware connected?".yellow()
        );
        return;
    }

    let title = format!("Devices ({})", devices.len());
    let divider_w: usize = 48;
    println!(
        "── {} {}",
        title.bold(),
        "─".repeat(divider_w.saturating_sub(2 + title.len()))
    );
    for dev in devices {
        println!("  {} {}", format!("#{:<3}", dev.index).cyan().bold(), dev.name);
    }
    println!("{}", "─".repeat(divider_w));
}

pub fn print_status(index: u32, status: &Status) {
    let rows = [
        ("Temperature", format!("{:.1} °C", status.temperature)),
        ("Fan speed", format!("{} rpm", status.fan_rpm)),
        ("Pump speed", format!("{} rpm", status.pump_rpm)),
    ];

    let inner_w = rows
        .iter()
        .map(|(_, v)| LABEL_W + 2 + v.len())
        .max()
        .unwrap_or(32);

    let title = format!("Device #{}", index);
    let fill = inner_w.saturating_sub(1 + title.len());
    println!("╭─ {} {}╮", title.bold(), "─".repeat(fill));
    for (label, value) in &rows {
        let padded = format!("{:<w$}", label, w = LABEL_W);
        let pad = inner_w.saturating_sub(LABEL_W + 2 + value.len());
        println!("│ {}  {}{} │", padded.dimmed(), value, " ".repeat(pad));
    }
    println!("╰{}╯", "─".repeat(inner_w + 2));
}

pub fn print_profiles(profiles: &[Profile]) {
    if profiles.is_empty() {
        println!(
            "  No profiles saved. Create one with {}.",
            "liquid-ui profiles save <NAME> -p TEMP:SPEED".cyan()
        );
        return;
    }

    for profile in profiles {
        println!(
            "  {} {}",
            profile.name.bold(),
            format!("({} points)", profile.points.len()).dimmed()
        );
        println!("     {}", format_curve(profile).dimmed());
    }
}

pub fn print_profile(profile: &Profile) {
    println!("{}", profile.name.bold().underline());
    for p in &profile.points {
        println!("  {:>6.1} °C  →  {:>3}%", p.temperature, p.speed);
    }
}

pub fn print_curve_warnings(name: &str, warnings: &[CurveWarning]) {
    for w in warnings {
        eprintln!("  {} {}: {}", "WARNING:".yellow().bold(), name, w);
    }
}

/// One-line `temp°C→speed%` rendering of a curve.
pub fn format_curve(profile: &Profile) -> String {
    if profile.points.is_empty() {
        return "(empty)".to_string();
    }
    profile
        .points
        .iter()
        .map(|p| format!("{}°C→{}%", p.temperature, p.speed))
        .collect::<Vec<_>>()
        .join("  ")
}
