//! Generator configuration.

use std::path::{Path, PathBuf};

use katgen_core::{ParserOptions, Template};

/// Default directory holding `<scheme>.txt` vector files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Extension of vector files.
pub const VECTOR_FILE_EXTENSION: &str = "txt";

/// Configuration for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory the scheme's vector file is resolved against.
    pub data_dir: PathBuf,
    /// Shape of the emitted declarations.
    pub template: Template,
    /// Boundary handling.
    pub parser: ParserOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            template: Template::default(),
            parser: ParserOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Set the data directory.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the template.
    pub fn template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Set the parser options.
    pub fn parser(mut self, options: ParserOptions) -> Self {
        self.parser = options;
        self
    }

    /// Emit a record left open at end of input.
    pub fn flush_trailing(mut self, flush: bool) -> Self {
        self.parser.flush_trailing = flush;
        self
    }

    /// Path of the vector file for `scheme`: `<data_dir>/<scheme>.txt`.
    pub fn vector_path(&self, scheme: &str) -> PathBuf {
        resolve(&self.data_dir, scheme)
    }
}

fn resolve(dir: &Path, scheme: &str) -> PathBuf {
    dir.join(format!("{scheme}.{VECTOR_FILE_EXTENSION}"))
}
