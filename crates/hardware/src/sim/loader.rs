//! Program Loader.
//!
//! This module materializes a directive program into a memory image. It performs:
//! 1. **Sizing:** Resolves the single `.size` directive first, wherever it appears.
//! 2. **Placement:** Applies `.text`, `.byte`, `.long` and `.string` in source order,
//!    bounds-checking every write.
//! 3. **Entry Point:** Records the `.text` address as the initial PC.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;
use crate::common::codec::encode_word;
use crate::config::Config;
use crate::sim::directive::{Directive, ParsedDirective, parse_directives};
use crate::soc::memory::Memory;

/// A program ready to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedProgram {
    /// Memory image with every directive applied.
    pub memory: Memory,
    /// Address of the `.text` block.
    pub entry_point: u32,
    /// Number of bytes in the `.text` block.
    pub text_len: u32,
}

/// Finds the unique `.size` directive.
fn resolve_capacity(directives: &[ParsedDirective], config: &Config) -> Result<u32, LoadError> {
    let mut sizes = directives.iter().filter_map(|d| match d.directive {
        Directive::Size(size) => Some((d.line, size)),
        _ => None,
    });
    let (_, capacity) = sizes.next().ok_or(LoadError::MissingSize)?;
    if let Some((line, _)) = sizes.next() {
        return Err(LoadError::DuplicateSize { line });
    }
    let max = config.memory.max_capacity;
    if capacity > max {
        return Err(LoadError::CapacityTooLarge {
            requested: capacity,
            max,
        });
    }
    Ok(capacity)
}

/// Writes `data` at `addr`, turning a bound violation into a load error.
fn place(
    memory: &mut Memory,
    directive: &'static str,
    line: usize,
    addr: u32,
    data: &[u8],
) -> Result<(), LoadError> {
    memory
        .write_bytes(i64::from(addr), data)
        .map_err(|fault| LoadError::OutOfBounds {
            directive,
            line,
            addr,
            len: data.len(),
            capacity: fault.capacity,
        })
}

/// Loads a program from its text.
///
/// # Arguments
///
/// * `text` - The program source.
/// * `config` - Run configuration (capacity limit).
///
/// # Errors
///
/// Returns a [`LoadError`] describing the first problem found.
///
/// ```
/// use y86_core::config::Config;
/// use y86_core::sim::loader::load_program;
///
/// let prog = load_program(".size 20\n.text 4 10", &Config::default()).unwrap();
/// assert_eq!(prog.entry_point, 4);
/// assert_eq!(prog.memory.capacity(), 0x20);
/// ```
pub fn load_program(text: &str, config: &Config) -> Result<LoadedProgram, LoadError> {
    let directives = parse_directives(text)?;
    let capacity = resolve_capacity(&directives, config)?;
    debug!(capacity, directives = directives.len(), "allocating memory image");

    let mut memory = Memory::new(capacity);
    let mut text_block: Option<(u32, u32)> = None;

    for ParsedDirective { line, directive } in &directives {
        let line = *line;
        let name = directive.name();
        match directive {
            Directive::Size(_) | Directive::Bss => {}
            Directive::Text { addr, bytes } => {
                if text_block.is_some() {
                    return Err(LoadError::DuplicateText { line });
                }
                place(&mut memory, name, line, *addr, bytes)?;
                text_block = Some((*addr, bytes.len() as u32));
            }
            Directive::Byte { addr, value } => place(&mut memory, name, line, *addr, &[*value])?,
            Directive::Long { addr, value } => {
                place(&mut memory, name, line, *addr, &encode_word(*value))?;
            }
            Directive::String { addr, bytes } => place(&mut memory, name, line, *addr, bytes)?,
        }
    }

    let (entry_point, text_len) = text_block.ok_or(LoadError::MissingText)?;
    debug!(entry = %format_args!("{entry_point:#x}"), text_len, "program loaded");
    Ok(LoadedProgram {
        memory,
        entry_point,
        text_len,
    })
}

/// Reads a program file and loads it.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any error of
/// [`load_program`].
pub fn load_program_file(path: impl AsRef<Path>, config: &Config) -> Result<LoadedProgram, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read program file");
    load_program(&text, config)
}
