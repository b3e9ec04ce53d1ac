mod common;

use encoding_rs::WINDOWS_1252;
use pretty_assertions::assert_eq;

use vitae::extract::TextExtractor;

const SAMPLE: &str = "Jörg Müller\nSenior Developer, Zürich";

fn extract(name: &str, bytes: &[u8]) -> String {
    let (_dir, path) = common::write_temp_file(name, bytes);
    TextExtractor::new().extract_text(&path).unwrap()
}

#[test]
fn test_utf8_round_trip() {
    assert_eq!(extract("cv.txt", SAMPLE.as_bytes()), SAMPLE);
}

#[test]
fn test_utf8_bom_is_stripped() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SAMPLE.as_bytes());
    assert_eq!(extract("cv.txt", &bytes), SAMPLE);
}

#[test]
fn test_windows_1252_round_trip() {
    // The same bytes are valid latin-1 and iso-8859-1; one table covers
    // all three legacy names.
    let (bytes, _, had_unmappable) = WINDOWS_1252.encode(SAMPLE);
    assert!(!had_unmappable);
    assert_eq!(extract("cv.txt", &bytes), SAMPLE);
}

#[test]
fn test_utf16_le_round_trip() {
    let text = "Résumé 简历";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    assert_eq!(extract("cv.txt", &bytes), text);
}

#[test]
fn test_utf16_be_round_trip() {
    let text = "Curriculum Vitæ";
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    assert_eq!(extract("cv.txt", &bytes), text);
}

#[test]
fn test_arbitrary_bytes_never_fail() {
    let garbage: Vec<u8> = (0u8..=255).collect();
    let (_dir, path) = common::write_temp_file("cv.txt", &garbage);

    let result = TextExtractor::new().extract_text(&path);
    assert!(result.is_ok(), "txt extraction must not fail: {result:?}");
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_uppercase_extension_dispatches_to_txt() {
    assert_eq!(extract("CV.TXT", SAMPLE.as_bytes()), SAMPLE);
}
