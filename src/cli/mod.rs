//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod run;

pub use args::{Cli, Commands, IoArgs};
