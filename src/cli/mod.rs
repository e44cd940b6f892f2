//! Line-oriented shell over a single in-memory [`ParkingLedger`](crate::parking::ParkingLedger).

pub mod commands;
pub mod context;
pub mod demo;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
