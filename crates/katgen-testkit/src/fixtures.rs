//! Test fixtures and helpers.
//!
//! Builders for vector-file text and throwaway data directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use katgen_core::{fields, Record};
use tempfile::TempDir;

/// One AEAD vector as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AeadEntry {
    pub count: u32,
    pub key: String,
    pub nonce: String,
    pub plaintext: String,
    pub associated_data: String,
    pub ciphertext: String,
}

impl AeadEntry {
    /// Build an entry from raw bytes, hex-encoded in upper case like the
    /// reference vector files.
    pub fn from_bytes(
        count: u32,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
        ciphertext: &[u8],
    ) -> Self {
        Self {
            count,
            key: hex::encode_upper(key),
            nonce: hex::encode_upper(nonce),
            plaintext: hex::encode_upper(plaintext),
            associated_data: hex::encode_upper(associated_data),
            ciphertext: hex::encode_upper(ciphertext),
        }
    }

    /// The `(field, value)` lines of this entry, in file order.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::COUNT, self.count.to_string()),
            (fields::KEY, self.key.clone()),
            (fields::NONCE, self.nonce.clone()),
            (fields::PLAINTEXT, self.plaintext.clone()),
            (fields::ASSOCIATED_DATA, self.associated_data.clone()),
            (fields::CIPHERTEXT, self.ciphertext.clone()),
        ]
    }

    /// The record the parser should produce for this entry.
    pub fn to_record(&self) -> Record {
        self.lines().into_iter().collect()
    }
}

/// Builds the text of a vector file.
#[derive(Debug, Clone, Default)]
pub struct VectorFileBuilder {
    text: String,
}

impl VectorFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank line.
    pub fn blank(mut self) -> Self {
        self.text.push('\n');
        self
    }

    /// Append a single assignment line.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.text.push_str(name);
        self.text.push_str(" = ");
        self.text.push_str(value);
        self.text.push('\n');
        self
    }

    /// Append an arbitrary raw line.
    pub fn raw(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// Append an AEAD entry's lines, without a trailing boundary.
    pub fn entry_open(mut self, entry: &AeadEntry) -> Self {
        for (name, value) in entry.lines() {
            self = self.field(name, &value);
        }
        self
    }

    /// Append an AEAD entry followed by a blank line.
    pub fn entry(self, entry: &AeadEntry) -> Self {
        self.entry_open(entry).blank()
    }

    /// Append a hash entry followed by a blank line.
    pub fn hash_entry(self, count: u32, message: &[u8], digest: &[u8]) -> Self {
        self.field(fields::COUNT, &count.to_string())
            .field(fields::MESSAGE, &hex::encode_upper(message))
            .field(fields::DIGEST, &hex::encode_upper(digest))
            .blank()
    }

    pub fn build(self) -> String {
        self.text
    }
}

/// A temporary directory laid out as a generator data directory.
pub struct TestDataDir {
    dir: TempDir,
}

impl TestDataDir {
    /// Create an empty data directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Path to pass as the generator's data directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<scheme>.txt` and return its path.
    pub fn write_scheme(&self, scheme: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(format!("{scheme}.txt"));
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// `count` distinct AEAD entries with deterministic contents.
pub fn sample_entries(count: u32) -> Vec<AeadEntry> {
    (0..count)
        .map(|i| {
            let b = i as u8;
            let pt: Vec<u8> = (0..b % 4).collect();
            let ad: Vec<u8> = (0..b % 3).map(|x| x ^ 0x5a).collect();
            let mut ct = pt.iter().map(|x| x ^ 0xa5).collect::<Vec<_>>();
            ct.extend_from_slice(&[b; 16]);
            AeadEntry::from_bytes(i + 1, &[b; 16], &[b.wrapping_add(1); 16], &pt, &ad, &ct)
        })
        .collect()
}
