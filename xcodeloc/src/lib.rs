#![forbid(unsafe_code)]
//! Localization import/export orchestration for Xcode projects.
//!
//! Drives `xcodebuild -importLocalizations` / `-exportLocalizations` over a
//! configured set of projects and languages, then flattens the exported
//! `.xcloc` bundles into plain `.xliff` files next to each other.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xcodeloc::{Config, Orchestrator, RunReport, Xcodebuild};
//!
//! let config = Config::load("xcodeloc.toml")?;
//! let runner = Xcodebuild::new(&config.tool);
//! let orchestrator = Orchestrator::new(&config, &runner);
//!
//! let mut report = RunReport::default();
//! orchestrator.import_all(&mut report)?;
//! orchestrator.export_all(&mut report)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! External tool failures never abort a run: every configured project,
//! language, and file is visited, and the outcome is only reflected in the
//! [`RunReport`] counters.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod runner;

// Re-export most used types for easy consumption
pub use crate::{
    config::{Config, Project},
    error::Error,
    orchestrator::{Orchestrator, RunReport},
    runner::{ToolOutcome, ToolRunner, Xcodebuild},
};
