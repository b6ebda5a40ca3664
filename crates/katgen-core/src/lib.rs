//! # KAT Generator Core
//!
//! Pure logic for turning known-answer-test vector files into Rust test
//! declarations. Everything here works over `BufRead` / `Write`; opening
//! files and choosing paths is left to the `katgen` crate.
//!
//! ## Input format
//!
//! One `Name = Value` assignment per line. Any line without `" = "` (usually a
//! blank line) ends the current [`Record`]:
//!
//! ```text
//! Count = 0
//! Key = 000102
//! Nonce = 0A0B0C
//! PT = AA
//! AD = BB
//! CT = CC03
//!
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use katgen_core::{emit_declarations, ParserOptions, Template};
//!
//! let input = "Count = 0\nKey = 00\nNonce = 01\nPT = \nAD = \nCT = 02\n\n";
//! let mut out = Vec::new();
//! let summary = emit_declarations(
//!     input.as_bytes(),
//!     &mut out,
//!     Template::Aead,
//!     "ascon128",
//!     "AsconAead128",
//!     ParserOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(summary.records, 1);
//! assert!(String::from_utf8(out).unwrap().starts_with("#[test]\nfn test_ascon128_0() {"));
//! ```

pub mod error;
pub mod parser;
pub mod record;
pub mod template;
pub mod vector;

pub use error::{CoreError, Result};
pub use parser::{
    emit_declarations, for_each_record, parse_records, Finished, ParseSummary, ParserOptions,
    RecordParser,
};
pub use record::{fields, Line, Record, DELIMITER};
pub use template::Template;
pub use vector::{AeadVector, HashVector};
