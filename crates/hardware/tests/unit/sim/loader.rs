//! # Program Loading Tests
//!
//! Parsing the LS-8 text format and reading programs from disk.

use std::io::Write;

use ls8_core::sim::LoadError;
use ls8_core::sim::loader;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// Helper function to create a temporary program file for testing.
fn create_temp_program(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const PRINT8: &str = "\
# print8.ls8
10000010 # LDI R0,8
00000000
00001000

01000111 # PRN R0
00000000
00000001 # HLT
";

#[test]
fn test_parse_program_with_comments_and_blanks() {
    let image = loader::parse_program(PRINT8).unwrap();
    assert_eq!(image, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}

#[test]
fn test_parse_program_trims_whitespace() {
    let image = loader::parse_program("  10100010   \r\n\t00000001#x\n").unwrap();
    assert_eq!(image, vec![0xA2, 0x01]);
}

#[test]
fn test_parse_empty_program() {
    assert!(loader::parse_program("").unwrap().is_empty());
    assert!(loader::parse_program("# only comments\n\n   \n").unwrap().is_empty());
}

#[test]
fn test_parse_invalid_literal_reports_line() {
    let err = loader::parse_program("00000001\n# comment\n0000000x\n").unwrap_err();
    match err {
        LoadError::InvalidLiteral { line, text } => {
            assert_eq!(line, 3);
            assert_eq!(text, "0000000x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_rejects_wide_literal() {
    let err = loader::parse_program("100000000\n").unwrap_err();
    assert!(matches!(err, LoadError::InvalidLiteral { line: 1, .. }));
}

#[test]
fn test_parse_program_of_exactly_memory_size() {
    let text = "00000000\n".repeat(256);
    assert_eq!(loader::parse_program(&text).unwrap().len(), 256);
}

#[test]
fn test_parse_program_too_large() {
    let text = "00000000\n".repeat(257);
    let err = loader::parse_program(&text).unwrap_err();
    assert!(matches!(err, LoadError::ProgramTooLarge { len: 257 }));
}

#[test]
fn test_load_program_from_file() {
    let file = create_temp_program(PRINT8);
    let image = loader::load_program(file.path()).unwrap();
    assert_eq!(image, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ls8");

    let err = loader::load_program(&path).unwrap_err();

    assert!(matches!(&err, LoadError::NotFound { path: p } if *p == path));
    assert!(err.to_string().ends_with("missing.ls8 not found"));
}

#[test]
fn test_load_malformed_file() {
    let file = create_temp_program("10000010\nhello\n");
    let err = loader::load_program(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidLiteral { line: 2, .. }));
}
