//! The generator: resolve a scheme's vector file and stream declarations.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use katgen_core::{emit_declarations, ParseSummary};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};

/// What one generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// The vector file that was read.
    pub input: PathBuf,
    /// Declarations written.
    pub records_emitted: usize,
    /// Lines read from the input.
    pub lines_read: usize,
    /// A record at end of input was discarded for lack of a boundary line.
    pub trailing_dropped: bool,
}

impl GenerateReport {
    fn new(input: PathBuf, summary: ParseSummary) -> Self {
        Self {
            input,
            records_emitted: summary.records,
            lines_read: summary.lines,
            trailing_dropped: summary.trailing_dropped,
        }
    }
}

/// Generates test declarations for one scheme.
///
/// The scheme names both the input file (`<data_dir>/<scheme>.txt`) and the
/// generated functions (`test_<scheme>_<Count>`); the algorithm is pasted
/// verbatim as the type parameter of `run_tv`.
#[derive(Debug, Clone)]
pub struct Generator {
    scheme: String,
    algorithm: String,
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator. Fails if either name is empty or the scheme
    /// contains a path separator.
    pub fn new(
        scheme: impl Into<String>,
        algorithm: impl Into<String>,
        config: GeneratorConfig,
    ) -> Result<Self> {
        let scheme = scheme.into();
        let algorithm = algorithm.into();

        if scheme.is_empty() {
            return Err(GenerateError::InvalidName {
                name: "scheme",
                reason: "must not be empty".into(),
            });
        }
        if scheme.contains(['/', '\\']) {
            return Err(GenerateError::InvalidName {
                name: "scheme",
                reason: format!("`{scheme}` contains a path separator"),
            });
        }
        if algorithm.is_empty() {
            return Err(GenerateError::InvalidName {
                name: "algorithm",
                reason: "must not be empty".into(),
            });
        }

        Ok(Self {
            scheme,
            algorithm,
            config,
        })
    }

    /// The scheme identifier.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The algorithm type name.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Path of the vector file this generator reads.
    pub fn input_path(&self) -> PathBuf {
        self.config.vector_path(&self.scheme)
    }

    /// Read the vector file and write every declaration to `writer`.
    ///
    /// The file is closed on return, including on error. Declarations
    /// written before an error stay written.
    pub fn generate_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<GenerateReport> {
        let path = self.input_path();
        let file = open(&path)?;
        debug!(path = %path.display(), template = %self.config.template, "reading vectors");

        let summary = emit_declarations(
            BufReader::new(file),
            writer,
            self.config.template,
            &self.scheme,
            &self.algorithm,
            self.config.parser,
        )?;

        let report = GenerateReport::new(path, summary);
        info!(
            scheme = %self.scheme,
            records = report.records_emitted,
            lines = report.lines_read,
            "generated test declarations"
        );
        Ok(report)
    }

    /// Read the vector file and return the declarations as a string.
    pub fn generate(&self) -> Result<String> {
        let mut out = Vec::new();
        self.generate_to(&mut out)?;
        // Output is built from UTF-8 input lines and ASCII template text.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| GenerateError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_names() {
        let err = Generator::new("", "AsconAead128", GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidName { name: "scheme", .. }));

        let err = Generator::new("ascon128", "", GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidName { name: "algorithm", .. }));
    }

    #[test]
    fn test_rejects_path_in_scheme() {
        let err =
            Generator::new("../ascon128", "AsconAead128", GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidName { name: "scheme", .. }));
    }

    #[test]
    fn test_input_path() {
        let generator =
            Generator::new("ascon128", "AsconAead128", GeneratorConfig::default()).unwrap();
        assert_eq!(generator.input_path(), Path::new("data").join("ascon128.txt"));
        assert_eq!(generator.scheme(), "ascon128");
        assert_eq!(generator.algorithm(), "AsconAead128");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let config = GeneratorConfig::default().data_dir("/nonexistent/katgen/data");
        let generator = Generator::new("ascon128", "AsconAead128", config).unwrap();

        let err = generator.generate().unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("ascon128.txt"));
    }
}
