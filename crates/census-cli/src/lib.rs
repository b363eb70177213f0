//! Command-line front end for the census converter.
//!
//! The `census` binary wires [`commands`] to clap arguments; the same
//! functions are usable directly, which is how the tests drive them.

#![deny(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
