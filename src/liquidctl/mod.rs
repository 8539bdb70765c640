pub mod parse;

use crate::device::{Device, Status};
use crate::error::{Error, Result};
use crate::profile::CurvePoint;
use crate::runner::{CommandRunner, Liquidctl};

/// Typed front for the liquidctl command line.
///
/// Every call blocks until the child process exits. There is no timeout and
/// no retry; a hung liquidctl hangs the caller.
#[derive(Debug, Clone)]
pub struct Adapter<R = Liquidctl> {
    runner: R,
}

impl Adapter<Liquidctl> {
    /// Adapter driving the `liquidctl` found on `PATH`.
    pub fn system() -> Self {
        Self::new(Liquidctl::system())
    }
}

impl<R: CommandRunner> Adapter<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Enumerate devices via `liquidctl list`.
    pub fn discover(&self) -> Result<Vec<Device>> {
        let out = self.runner.run(&["list".to_string()])?;
        let report = parse::parse_discovery_report(&out);

        for line in &report.skipped {
            log::debug!("list: ignoring line {:?}", line);
        }
        log::info!("discovered {} device(s)", report.value.len());

        Ok(report.value)
    }

    /// Read temperature, fan and pump speed for one device.
    pub fn query_status(&self, index: u32) -> Result<Status> {
        let args = ["status".to_string(), "--device".to_string(), index.to_string()];
        let out = self.runner.run(&args)?;
        let report = parse::parse_status_report(&out);

        for line in &report.skipped {
            log::debug!("status #{}: ignoring line {:?}", index, line);
        }
        for field in &report.missing {
            log::warn!("status #{}: no {} reported, using 0", index, field);
        }

        Ok(report.status)
    }

    /// Send a temperature/speed curve to a device's fan channel.
    ///
    /// Points go out in the order given. This changes real hardware behavior.
    pub fn apply_fan_curve(&self, index: u32, points: &[CurvePoint]) -> Result<()> {
        let args = fan_curve_args(index, points)?;
        log::info!(
            "applying {}-point fan curve to device #{}",
            points.len(),
            index
        );
        self.runner.run(&args)?;
        Ok(())
    }
}

/// Build `set fan speed --device <index> <t1> <s1> ...`.
///
/// Temperatures are truncated toward zero.
pub fn fan_curve_args(index: u32, points: &[CurvePoint]) -> Result<Vec<String>> {
    if points.is_empty() {
        return Err(Error::Validation("empty curve".to_string()));
    }

    let mut args: Vec<String> = ["set", "fan", "speed", "--device"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.push(index.to_string());

    for point in points {
        args.push((point.temperature.trunc() as i64).to_string());
        args.push(point.speed.to_string());
    }

    Ok(args)
}
