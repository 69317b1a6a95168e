//! Stream Console.
//!
//! Implements [`Console`] over any buffered reader and writer. The CLI wires it
//! to locked stdin/stdout; tests wire it to byte slices and `Vec<u8>`.
//!
//! Output is flushed before every blocking read so that prompts written by the
//! emulated program are visible before it waits for input.

use std::io::{self, BufRead, Write};

use crate::soc::traits::Console;

/// Console device over a `BufRead` input and a `Write` output.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console and returns the input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.fill_buf()?.first().copied())
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            let buf = self.input.fill_buf()?;
            let available = buf.len();
            let blanks = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            self.input.consume(blanks);
            if available == 0 || blanks < available {
                return Ok(());
            }
        }
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.output.flush()?;
        let byte = self.peek()?;
        if byte.is_some() {
            self.input.consume(1);
        }
        Ok(byte)
    }

    fn read_long(&mut self) -> io::Result<Option<i32>> {
        self.output.flush()?;
        self.skip_whitespace()?;

        let mut negative = false;
        if let Some(sign @ (b'-' | b'+')) = self.peek()? {
            negative = sign == b'-';
            self.input.consume(1);
        }

        let mut value: u32 = 0;
        let mut digits = 0usize;
        while let Some(b) = self.peek()? {
            if !b.is_ascii_digit() {
                break;
            }
            value = value.wrapping_mul(10).wrapping_add(u32::from(b - b'0'));
            digits += 1;
            self.input.consume(1);
        }

        if digits == 0 {
            return Ok(None);
        }
        let value = value as i32;
        Ok(Some(if negative { value.wrapping_neg() } else { value }))
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])
    }

    fn write_long(&mut self, value: i32) -> io::Result<()> {
        write!(self.output, "{value}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
