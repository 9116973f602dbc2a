//! Program Loader.
//!
//! This module reads LS-8 programs in their text format. It performs:
//! 1. **Comment stripping:** Everything from `#` to end of line is ignored.
//! 2. **Literal parsing:** Each remaining non-blank line is one byte written in binary (`0`/`1`).
//! 3. **Size checking:** A program must fit in the 256-byte address space.
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
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::CpuError;

/// Errors raised while reading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("{} not found", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The program file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line is not an 8-bit binary literal.
    #[error("line {line}: invalid binary literal {text:?}")]
    InvalidLiteral {
        /// 1-based line number.
        line: usize,
        /// The offending text after comment stripping.
        text: String,
    },

    /// The parsed image could not be placed in memory.
    #[error(transparent)]
    Memory(#[from] CpuError),

    /// The program does not fit in memory.
    #[error("program is {len} bytes but memory holds {}", MEMORY_SIZE)]
    ProgramTooLarge {
        /// Number of bytes in the program.
        len: usize,
    },
}

/// Parses program text into its byte image.
///
/// # Errors
///
/// * `LoadError::InvalidLiteral` for a line that is not 1-8 binary digits.
/// * `LoadError::ProgramTooLarge` for more than 256 bytes.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        image.push(parse_literal(text).ok_or_else(|| LoadError::InvalidLiteral {
            line: idx + 1,
            text: text.to_string(),
        })?);
    }

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge { len: image.len() });
    }
    tracing::debug!(bytes = image.len(), "program parsed");
    Ok(image)
}

/// Reads and parses the program at `path`.
///
/// # Errors
///
/// * `LoadError::NotFound` if the file does not exist.
/// * `LoadError::Io` for any other read failure.
/// * Any error from [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_program(&source)
}

/// Parses one binary literal, rejecting signs and anything wider than a byte.
fn parse_literal(text: &str) -> Option<u8> {
    if !text.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(text, 2).ok()
}
