//! Program Loader.
//!
//! This module turns the on-disk program format into a memory image. It performs:
//! 1. **File reading:** Reads a `.ls8` text file from disk.
//! 2. **Parsing:** One 8-digit binary byte per line; `#` starts a comment; blank lines are skipped.
//! 3. **Validation:** Rejects malformed lines and images larger than memory before anything runs.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::constants::{IMAGE_COMMENT, IMAGE_WORD_BITS, MEMORY_SIZE};
use crate::common::error::{Fault, LoadError};

/// Parses program text into a memory image.
///
/// # Errors
///
/// [`LoadError::Malformed`] naming the first bad line (1-based), or
/// [`LoadError::TooLarge`] when the program holds more than 256 bytes.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let image = parse_program("10000010 # LDI\n\n00000000\n00001000\n").unwrap();
/// assert_eq!(image, vec![0x82, 0x00, 0x08]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let code = raw
            .split_once(IMAGE_COMMENT)
            .map_or(raw, |(code, _)| code)
            .trim();
        if code.is_empty() {
            continue;
        }
        image.push(parse_byte(code).map_err(|reason| Fault::MalformedImage {
            line: idx + 1,
            reason,
        })?);
    }

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(image)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read, otherwise as [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let image = parse_program(&text)?;
    info!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

fn parse_byte(code: &str) -> Result<u8, String> {
    if code.len() != IMAGE_WORD_BITS {
        return Err(format!(
            "expected {IMAGE_WORD_BITS} binary digits, found {code:?}"
        ));
    }
    if let Some(bad) = code.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(format!("{bad:?} is not a binary digit in {code:?}"));
    }
    u8::from_str_radix(code, 2).map_err(|e| format!("{code:?}: {e}"))
}
