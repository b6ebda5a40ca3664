//! Rendering records as test declarations.
//!
//! Substitution is literal: field values are pasted into the output without
//! escaping or validation.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::record::{fields, Record};

/// Shape of the generated test function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    /// `run_tv::<Alg>(key, nonce, plaintext, associated_data, ciphertext)`.
    #[default]
    Aead,
    /// `run_tv::<Alg>(message, digest)`.
    Hash,
}

impl Template {
    /// Fields passed to `run_tv`, in argument order.
    pub fn arguments(&self) -> &'static [&'static str] {
        match self {
            Template::Aead => &[
                fields::KEY,
                fields::NONCE,
                fields::PLAINTEXT,
                fields::ASSOCIATED_DATA,
                fields::CIPHERTEXT,
            ],
            Template::Hash => &[fields::MESSAGE, fields::DIGEST],
        }
    }

    /// Every field a record needs to be rendered, `Count` first.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut all = vec![fields::COUNT];
        all.extend_from_slice(self.arguments());
        all
    }

    /// Render one record.
    ///
    /// `scheme` names the generated function, `algorithm` is the type
    /// parameter of `run_tv`. Fails on the first absent field.
    pub fn render(&self, scheme: &str, algorithm: &str, record: &Record) -> Result<String> {
        let count = record.require(fields::COUNT)?;
        let args = self
            .arguments()
            .iter()
            .map(|field| record.require(field))
            .collect::<Result<Vec<_>>>()?;

        let mut out = String::new();
        out.push_str("#[test]\n");
        out.push_str(&format!("fn test_{scheme}_{count}() {{\n"));
        out.push_str(&format!("  run_tv::<{algorithm}>(\n"));
        for arg in args {
            out.push_str(&format!("    &hex!(\"{arg}\"),\n"));
        }
        out.push_str("  )\n");
        out.push_str("}\n");
        Ok(out)
    }

    /// Name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Template::Aead => "aead",
            Template::Hash => "hash",
        }
    }
}

impl FromStr for Template {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aead" => Ok(Template::Aead),
            "hash" => Ok(Template::Hash),
            _ => Err(CoreError::UnknownTemplate(s.to_string())),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
