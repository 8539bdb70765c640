pub mod apply;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod liquidctl;
pub mod logging;
pub mod output;
pub mod profile;
pub mod runner;
