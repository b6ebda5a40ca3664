//! End-to-end behaviour of the generator over vector files on disk.

use katgen::core::CoreError;
use katgen::{GenerateError, Generator, GeneratorConfig, ParserOptions, Template};
use katgen_testkit::generators::{entries, vector_file};
use katgen_testkit::{sample_entries, TestDataDir, VectorFileBuilder};
use proptest::prelude::*;

fn generator_for(dir: &TestDataDir, config: GeneratorConfig) -> Generator {
    Generator::new("ascon128", "AsconAead128", config.data_dir(dir.path())).unwrap()
}

fn setup(contents: &str) -> (TestDataDir, Generator) {
    let dir = TestDataDir::new().unwrap();
    dir.write_scheme("ascon128", contents).unwrap();
    let generator = generator_for(&dir, GeneratorConfig::default());
    (dir, generator)
}

fn function_names(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("fn "))
        .filter_map(|rest| rest.strip_suffix("() {"))
        .collect()
}

#[test]
fn test_n_records_in_order() {
    let entries = sample_entries(5);
    let text = entries
        .iter()
        .fold(VectorFileBuilder::new(), |b, e| b.entry(e))
        .build();
    let (_dir, generator) = setup(&text);

    let mut out = Vec::new();
    let report = generator.generate_to(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(report.records_emitted, 5);
    assert!(!report.trailing_dropped);
    assert_eq!(
        function_names(&output),
        vec![
            "test_ascon128_1",
            "test_ascon128_2",
            "test_ascon128_3",
            "test_ascon128_4",
            "test_ascon128_5"
        ]
    );
}

#[test]
fn test_values_pass_through_unchanged() {
    let text = VectorFileBuilder::new()
        .field("Count", "42")
        .field("Key", "deadBEEF")
        .field("Nonce", "not-even-hex")
        .field("PT", "")
        .field("AD", "00")
        .field("CT", "FF")
        .blank()
        .build();
    let (_dir, generator) = setup(&text);

    let output = generator.generate().unwrap();
    assert!(output.contains("fn test_ascon128_42() {"));
    assert!(output.contains("    &hex!(\"deadBEEF\"),\n"));
    assert!(output.contains("    &hex!(\"not-even-hex\"),\n"));
    assert!(output.contains("    &hex!(\"\"),\n"));
}

#[test]
fn test_leading_blank_line_adds_nothing() {
    let entries = sample_entries(2);
    let text = VectorFileBuilder::new()
        .blank()
        .entry(&entries[0])
        .entry(&entries[1])
        .build();
    let (_dir, generator) = setup(&text);

    let output = generator.generate().unwrap();
    assert_eq!(function_names(&output).len(), 2);
}

#[test]
fn test_trailing_record_without_boundary_is_dropped() {
    let entries = sample_entries(3);
    let text = VectorFileBuilder::new()
        .entry(&entries[0])
        .entry(&entries[1])
        .entry_open(&entries[2])
        .build();
    let (_dir, generator) = setup(&text);

    let mut out = Vec::new();
    let report = generator.generate_to(&mut out).unwrap();

    assert_eq!(report.records_emitted, 2);
    assert!(report.trailing_dropped);
    assert!(!String::from_utf8(out).unwrap().contains("test_ascon128_3"));
}

#[test]
fn test_trailing_record_flushed_when_configured() {
    let entries = sample_entries(2);
    let text = VectorFileBuilder::new()
        .entry(&entries[0])
        .entry_open(&entries[1])
        .build();
    let dir = TestDataDir::new().unwrap();
    dir.write_scheme("ascon128", &text).unwrap();
    let generator = generator_for(&dir, GeneratorConfig::default().flush_trailing(true));

    let output = generator.generate().unwrap();
    assert_eq!(
        function_names(&output),
        vec!["test_ascon128_1", "test_ascon128_2"]
    );
}

#[test]
fn test_missing_vector_file() {
    let dir = TestDataDir::new().unwrap();
    let generator = generator_for(&dir, GeneratorConfig::default());

    let err = generator.generate().unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, GenerateError::Open { ref path, .. } if path.ends_with("ascon128.txt")));
}

#[test]
fn test_missing_field_is_fatal() {
    let entries = sample_entries(2);
    let text = VectorFileBuilder::new()
        .entry(&entries[0])
        .field("Count", "99")
        .field("Key", "00")
        .field("Nonce", "01")
        .blank()
        .entry(&entries[1])
        .build();
    let (_dir, generator) = setup(&text);

    let mut out = Vec::new();
    let err = generator.generate_to(&mut out).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Core(CoreError::MissingField { ref field }) if field == "PT"
    ));

    // The first block was already written when the second failed.
    let partial = String::from_utf8(out).unwrap();
    assert_eq!(function_names(&partial), vec!["test_ascon128_1"]);
}

#[test]
fn test_consecutive_blank_lines() {
    let entries = sample_entries(1);
    let text = VectorFileBuilder::new().entry(&entries[0]).blank().build();

    let (_dir, generator) = setup(&text);
    assert!(matches!(
        generator.generate().unwrap_err(),
        GenerateError::Core(CoreError::MissingField { .. })
    ));

    let dir = TestDataDir::new().unwrap();
    dir.write_scheme("ascon128", &text).unwrap();
    let options = ParserOptions {
        keep_boundary_entries: false,
        ..Default::default()
    };
    let generator = generator_for(&dir, GeneratorConfig::default().parser(options));
    assert_eq!(function_names(&generator.generate().unwrap()).len(), 1);
}

#[test]
fn test_hash_template() {
    let text = VectorFileBuilder::new()
        .hash_entry(1, b"", &[0x73, 0x46])
        .hash_entry(2, &[0x00], &[0x8d, 0xd4])
        .build();
    let dir = TestDataDir::new().unwrap();
    dir.write_scheme("asconhash", &text).unwrap();

    let config = GeneratorConfig::default()
        .data_dir(dir.path())
        .template(Template::Hash);
    let generator = Generator::new("asconhash", "AsconHash", config).unwrap();

    let output = generator.generate().unwrap();
    assert_eq!(
        function_names(&output),
        vec!["test_asconhash_1", "test_asconhash_2"]
    );
    assert!(output.contains("  run_tv::<AsconHash>(\n    &hex!(\"00\"),\n    &hex!(\"8DD4\"),\n  )\n"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_one_block_per_record(list in entries(6)) {
        let (_dir, generator) = setup(&vector_file(&list));

        let output = generator.generate().unwrap();
        let expected: Vec<String> = (0..list.len())
            .map(|i| format!("test_ascon128_{i}"))
            .collect();
        prop_assert_eq!(function_names(&output), expected);

        for entry in &list {
            let ciphertext = format!("    &hex!(\"{}\"),\n  )\n", entry.ciphertext);
            prop_assert!(output.contains(&ciphertext));
        }
    }
}
