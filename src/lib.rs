//! Shape model with change notification and metadata inspection.
//!
//! Layers, innermost first:
//! - `domain`: `Point`, `Shape` and the static metadata tables
//! - `application`: `ChangeNotifier`, `TrackedShape`, `Inspector`, file services
//! - `infrastructure`: I/O traits and service wiring
//! - `cli`: argument parsing and command handlers

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
