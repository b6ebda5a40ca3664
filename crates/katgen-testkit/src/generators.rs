//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::fixtures::{AeadEntry, VectorFileBuilder};

/// Generate byte strings up to `max_len` long.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate an upper-case hex string up to `max_bytes` bytes long.
pub fn hex_string(max_bytes: usize) -> impl Strategy<Value = String> {
    bytes(max_bytes).prop_map(hex::encode_upper)
}

/// Generate a field name that cannot collide with the delimiter.
pub fn field_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}".prop_map(String::from)
}

/// Generate a line with no `" = "` in it.
pub fn boundary_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "#[ -~]{0,20}".prop_filter("no delimiter", |s| !s.contains(" = ")),
        "\\[[A-Za-z0-9-]{1,12}\\]".prop_map(String::from),
    ]
}

impl Arbitrary for AeadEntry {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<u32>(),
            bytes(32), // key
            bytes(16), // nonce
            bytes(64), // plaintext
            bytes(64), // associated data
            bytes(80), // ciphertext
        )
            .prop_map(|(count, key, nonce, pt, ad, ct)| {
                AeadEntry::from_bytes(count, &key, &nonce, &pt, &ad, &ct)
            })
            .boxed()
    }
}

/// Generate 1..=`max` entries with counts `0..n` in file order.
pub fn entries(max: usize) -> impl Strategy<Value = Vec<AeadEntry>> {
    prop::collection::vec(any::<AeadEntry>(), 1..=max).prop_map(|mut entries| {
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.count = i as u32;
        }
        entries
    })
}

/// Render entries as a well-formed vector file: one blank line after each.
pub fn vector_file(entries: &[AeadEntry]) -> String {
    entries
        .iter()
        .fold(VectorFileBuilder::new(), |builder, entry| builder.entry(entry))
        .build()
}
