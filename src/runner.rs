use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can run the control tool with a list of arguments and
/// hand back its standard output.
///
/// The real implementation is [`Liquidctl`]. Tests substitute a scripted
/// runner so parsing and argument building can be checked without hardware.
pub trait CommandRunner: Send + Sync {
    fn run(&self, args: &[String]) -> Result<String>;
}

/// Runs the `liquidctl` executable (or a configured replacement).
#[derive(Debug, Clone)]
pub struct Liquidctl {
    program: PathBuf,
}

impl Default for Liquidctl {
    fn default() -> Self {
        Self {
            program: PathBuf::from("liquidctl"),
        }
    }
}

impl Liquidctl {
    /// Use `liquidctl` from `PATH`.
    pub fn system() -> Self {
        Self::default()
    }

    /// Use a specific program, e.g. a wrapper script or a test stand-in.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn describe(&self, args: &[String]) -> String {
        let mut command = self.program.display().to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl CommandRunner for Liquidctl {
    fn run(&self, args: &[String]) -> Result<String> {
        let command = self.describe(args);
        log::debug!("running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| Error::Adapter {
                command: command.clone(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::debug!("{} exited with {}", command, output.status);
            return Err(Error::Adapter {
                command,
                detail: stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
