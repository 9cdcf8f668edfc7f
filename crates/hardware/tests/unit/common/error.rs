//! # Error Formatting Tests
//!
//! Faults surface to the user through their `Display` text, so the exact
//! rendering matters. These tests pin it down and check that execution and
//! load errors keep their cause reachable through `source()`.

use std::error::Error as _;

use ls8_core::common::{ExecutionError, Fault, LoadError};
use pretty_assertions::assert_eq;

#[test]
fn fault_display() {
    assert_eq!(
        Fault::AddressOutOfBounds { addr: 0x100 }.to_string(),
        "AddressOutOfBounds(0x100)"
    );
    assert_eq!(Fault::DivideByZero.to_string(), "DivideByZero");
    assert_eq!(
        Fault::UnsupportedOperation(4).to_string(),
        "UnsupportedOperation(0x04)"
    );
    assert_eq!(
        Fault::MalformedImage {
            line: 3,
            reason: "bad".to_string()
        }
        .to_string(),
        "MalformedImage(line 3: bad)"
    );
}

#[test]
fn execution_error_names_pc() {
    let err = ExecutionError::new(6, Fault::DivideByZero);
    assert_eq!(err.to_string(), "DivideByZero at PC 0x06");
    assert_eq!(err.pc, 6);
    assert_eq!(err.fault, Fault::DivideByZero);
}

#[test]
fn execution_error_source_is_fault() {
    let err = ExecutionError::new(0, Fault::AddressOutOfBounds { addr: 256 });
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "AddressOutOfBounds(0x100)");
}

#[test]
fn load_error_wraps_malformed_fault_transparently() {
    let fault = Fault::MalformedImage {
        line: 2,
        reason: "expected 8 binary digits".to_string(),
    };
    let err = LoadError::from(fault.clone());
    assert_eq!(err.to_string(), fault.to_string());
}

#[test]
fn load_error_too_large_display() {
    let err = LoadError::TooLarge {
        len: 300,
        capacity: 256,
    };
    assert_eq!(err.to_string(), "program is 300 bytes; memory holds 256");
}

#[test]
fn load_error_io_keeps_source() {
    let err = LoadError::Io {
        path: "missing.ls8".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().starts_with("could not read 'missing.ls8'"));
    assert!(err.source().is_some());
}
