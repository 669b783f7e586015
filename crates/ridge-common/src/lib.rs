//! Common utilities for the ridge parser crates.
//!
//! This crate provides shared infrastructure used by the parser, the
//! formatters and the command-line front end:
//! - **Warning System** - deduplicated, colored terminal output for recoveries

pub mod warning;
