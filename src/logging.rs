//! Logging setup for the command line front end.

use crate::config::LogLevel;
use fern::Dispatch;

/// Route `log` records to stderr at `level`, keeping stdout free for output.
pub fn setup(level: LogLevel) -> Result<(), fern::InitError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level.into())
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
