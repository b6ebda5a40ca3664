//! # KAT Generator Testkit
//!
//! Testing utilities for the KAT generator.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: vector files with the exact declarations they must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Builders for vector-file text and temporary data directories
//!
//! ## Golden Vectors
//!
//! ```rust
//! use katgen_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     println!("{}: {} bytes of input", vector.name, vector.input.len());
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use katgen_testkit::generators::{entries, vector_file};
//!
//! proptest! {
//!     #[test]
//!     fn one_block_per_record(list in entries(8)) {
//!         let text = vector_file(&list);
//!         // run the generator over `text` ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use katgen_testkit::fixtures::{sample_entries, TestDataDir, VectorFileBuilder};
//!
//! let entries = sample_entries(2);
//! let text = VectorFileBuilder::new().entry(&entries[0]).entry(&entries[1]).build();
//! let dir = TestDataDir::new().unwrap();
//! dir.write_scheme("ascon128", &text).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_entries, AeadEntry, TestDataDir, VectorFileBuilder};
pub use generators::{entries, vector_file};
pub use vectors::{all_vectors, GoldenVector};
