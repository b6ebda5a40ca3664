//! Typed, hex-decoded views of records.
//!
//! For harnesses that load vector files at run time instead of compiling
//! generated declarations. Decoding is structural only.

use crate::error::{CoreError, Result};
use crate::record::{fields, Record};

/// An AEAD known-answer vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AeadVector {
    pub count: u32,
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub associated_data: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl AeadVector {
    /// Decode from a record carrying `Count`, `Key`, `Nonce`, `PT`, `AD`, `CT`.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            count: decode_count(record)?,
            key: decode_hex(record, fields::KEY)?,
            nonce: decode_hex(record, fields::NONCE)?,
            plaintext: decode_hex(record, fields::PLAINTEXT)?,
            associated_data: decode_hex(record, fields::ASSOCIATED_DATA)?,
            ciphertext: decode_hex(record, fields::CIPHERTEXT)?,
        })
    }
}

/// A hash known-answer vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashVector {
    pub count: u32,
    pub message: Vec<u8>,
    pub digest: Vec<u8>,
}

impl HashVector {
    /// Decode from a record carrying `Count`, `Msg`, `MD`.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            count: decode_count(record)?,
            message: decode_hex(record, fields::MESSAGE)?,
            digest: decode_hex(record, fields::DIGEST)?,
        })
    }
}

fn decode_count(record: &Record) -> Result<u32> {
    let value = record.require(fields::COUNT)?;
    value.parse().map_err(|source| CoreError::InvalidCount {
        value: value.to_string(),
        source,
    })
}

fn decode_hex(record: &Record, field: &str) -> Result<Vec<u8>> {
    hex::decode(record.require(field)?).map_err(|source| CoreError::InvalidHex {
        field: field.to_string(),
        source,
    })
}
