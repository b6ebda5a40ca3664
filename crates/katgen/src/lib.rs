//! # KAT Generator
//!
//! Turns known-answer-test vector files into Rust test declarations.
//!
//! A scheme's vectors live in `data/<scheme>.txt`. Each record becomes one
//! `#[test]` function calling a generic `run_tv::<Algorithm>` with the
//! record's fields wrapped in `hex!`. The runner and the `hex!` macro belong
//! to the crate that includes the generated code.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use katgen::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new("ascon128", "AsconAead128", GeneratorConfig::default())?;
//! let mut stdout = std::io::stdout().lock();
//! let report = generator.generate_to(&mut stdout)?;
//! eprintln!("{} declarations", report.records_emitted);
//! # Ok::<(), katgen::GenerateError>(())
//! ```
//!
//! ## Re-exports
//!
//! - `katgen::core` - parser, templates, and records

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;

pub use katgen_core as core;

pub use cli::{CliArgs, USAGE};
pub use config::{GeneratorConfig, DEFAULT_DATA_DIR};
pub use error::{GenerateError, Result};
pub use generator::{GenerateReport, Generator};

pub use katgen_core::{ParserOptions, Record, Template};
