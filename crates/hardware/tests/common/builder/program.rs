//! `.y86` source builder.

use std::fmt::Write as _;

/// Fluent builder for directive program text.
///
/// Emits `.size` first and `.text` second, followed by data directives in
/// the order they were added.
#[derive(Debug, Clone)]
pub struct ProgramBuilder {
    size: u32,
    text_addr: u32,
    code: Vec<u8>,
    data: Vec<String>,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self {
            size: 0x100,
            text_addr: 0,
            code: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn text_at(mut self, addr: u32) -> Self {
        self.text_addr = addr;
        self
    }

    /// Appends encoded instructions to the `.text` block.
    pub fn code(mut self, bytes: &[u8]) -> Self {
        self.code.extend_from_slice(bytes);
        self
    }

    pub fn byte(mut self, addr: u32, value: u8) -> Self {
        self.data.push(format!(".byte {addr:x} {value:x}"));
        self
    }

    pub fn long(mut self, addr: u32, value: i32) -> Self {
        self.data.push(format!(".long {addr:x} {value}"));
        self
    }

    pub fn string(mut self, addr: u32, text: &str) -> Self {
        self.data.push(format!(".string {addr:x} \"{text}\""));
        self
    }

    pub fn build(&self) -> String {
        let mut out = format!(".size {:x}\n.text {:x} ", self.size, self.text_addr);
        for b in &self.code {
            let _ = write!(out, "{b:02x}");
        }
        out.push('\n');
        for line in &self.data {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
