//! Program Loader.
//!
//! Parses the `.ls8` program format: a text file where each line may carry
//! one instruction byte as a binary literal (up to 8 characters, shorter
//! literals allowed), optionally followed by a `#` comment. Blank and
//! comment-only lines are skipped. Each decoded line yields exactly one
//! byte, written into consecutive memory addresses starting at 0 by
//! [`Cpu::load_program`].
//!
//! [`Cpu::load_program`]: crate::core::Cpu::load_program

use std::fs;
use std::io;
use std::path::Path;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// Parses program source text into its instruction bytes.
///
/// Non-binary content before any `#` is a [`LoadError::MalformedLine`] with
/// the 1-based line number; a program longer than memory is
/// [`LoadError::TooLarge`].
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::MalformedLine {
            line: idx + 1,
            text: text.to_string(),
        })?;
        program.push(byte);
    }
    if program.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            len: program.len(),
            cap: MEMORY_SIZE,
        });
    }
    Ok(program)
}

/// Reads and parses a program file.
///
/// A missing file is reported as [`LoadError::NotFound`] so drivers can map
/// it to the documented exit code; other read failures are [`LoadError::Io`].
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;
    parse_program(&source)
}
