//! # Program Loader Tests
//!
//! One 8-digit binary byte per line; `#` starts a comment; blank lines are
//! skipped. Bad lines are reported with their 1-based line number.

use std::io::Write;

use ls8_core::common::{Fault, LoadError};
use ls8_core::sim::loader::{load_program, parse_program};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn malformed_line(err: LoadError) -> usize {
    match err {
        LoadError::Malformed(Fault::MalformedImage { line, .. }) => line,
        other => panic!("expected a malformed-image error, got {other:?}"),
    }
}

// ─── Parsing ────────────────────────────────────────────────────────────────

#[test]
fn parses_one_byte_per_line() {
    let image = parse_program("10000010\n00000000\n00001000\n").unwrap();
    assert_eq!(image, vec![0x82, 0x00, 0x08]);
}

#[test]
fn strips_comments_and_blank_lines() {
    let text = "# print8\n\n10000010 # LDI R0,8\n00000000\n   \n00001000\n# trailing\n";
    assert_eq!(parse_program(text).unwrap(), vec![0x82, 0x00, 0x08]);
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(parse_program("  00000001\t\r\n").unwrap(), vec![0x01]);
}

#[test]
fn empty_text_is_an_empty_image() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program("# nothing here\n\n").unwrap().is_empty());
}

#[test]
fn comment_without_space() {
    assert_eq!(parse_program("11111111#max").unwrap(), vec![0xFF]);
}

#[test]
fn short_line_is_rejected_with_line_number() {
    let err = parse_program("10000010\n0000000\n").unwrap_err();
    assert_eq!(malformed_line(err), 2);
}

#[test]
fn long_line_is_rejected() {
    let err = parse_program("# header\n\n100000100\n").unwrap_err();
    assert_eq!(malformed_line(err), 3);
}

#[test]
fn non_binary_digit_is_rejected() {
    let err = parse_program("10000012\n").unwrap_err();
    assert_eq!(malformed_line(err), 1);
}

#[test]
fn sign_is_rejected() {
    let err = parse_program("+1000001\n").unwrap_err();
    assert_eq!(malformed_line(err), 1);
}

#[test]
fn first_bad_line_wins() {
    let err = parse_program("00000001\nxyz\nabc\n").unwrap_err();
    assert_eq!(malformed_line(err), 2);
}

#[test]
fn full_memory_image_is_accepted() {
    let text = "00000000\n".repeat(256);
    assert_eq!(parse_program(&text).unwrap().len(), 256);
}

#[test]
fn oversized_image_is_rejected() {
    let text = "00000000\n".repeat(257);
    let err = parse_program(&text).unwrap_err();
    assert!(matches!(
        err,
        LoadError::TooLarge {
            len: 257,
            capacity: 256
        }
    ));
}

// ─── Files ──────────────────────────────────────────────────────────────────

#[test]
fn loads_program_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "10000010 # LDI R0,8").unwrap();
    writeln!(file, "00000000").unwrap();
    writeln!(file, "00001000").unwrap();
    writeln!(file, "00000001 # HLT").unwrap();

    assert_eq!(
        load_program(file.path()).unwrap(),
        vec![0x82, 0x00, 0x08, 0x01]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ls8");

    let err = load_program(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.ls8"));
}

#[test]
fn malformed_file_reports_line() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "00000001\n\n2\n").unwrap();

    let err = load_program(file.path()).unwrap_err();
    assert_eq!(malformed_line(err), 3);
}
