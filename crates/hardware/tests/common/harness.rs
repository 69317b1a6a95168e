use std::io::Cursor;

use y86_core::common::Register;
use y86_core::core::Cpu;
use y86_core::core::arch::Status;
use y86_core::{Config, Simulator, StopReason, StreamConsole};

use crate::common::builder::ProgramBuilder;

/// Console type used by the harness: scripted stdin, captured stdout.
pub type TestConsole = StreamConsole<Cursor<Vec<u8>>, Vec<u8>>;

pub struct TestContext {
    pub sim: Simulator,
    pub console: TestConsole,
}

impl TestContext {
    /// Loads `src` with the default configuration.
    pub fn from_source(src: &str) -> Self {
        Self::from_source_with(src, &Config::default())
    }

    pub fn from_source_with(src: &str, config: &Config) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let sim = Simulator::from_source(src, config).unwrap();
        Self {
            sim,
            console: StreamConsole::new(Cursor::new(Vec::new()), Vec::new()),
        }
    }

    /// Loads `code` as a `.text` block at 0 in a 256-byte memory.
    pub fn from_code(code: &[u8]) -> Self {
        Self::from_source(&ProgramBuilder::new().code(code).build())
    }

    /// Replaces the console input.
    pub fn with_input(mut self, input: &str) -> Self {
        self.console = StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        self
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    pub fn set_reg(&mut self, reg: Register, val: i32) {
        self.sim.cpu.regs.write(reg, val);
    }

    pub fn reg(&self, reg: Register) -> i32 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn status(&self) -> Status {
        self.sim.status()
    }

    /// Executes one instruction.
    pub fn step(&mut self) -> Status {
        self.sim.step(&mut self.console).unwrap()
    }

    /// Runs to completion.
    pub fn run(&mut self) -> StopReason {
        self.sim.run(&mut self.console).unwrap()
    }

    /// Runs to completion and asserts the program halted.
    pub fn run_to_halt(&mut self) {
        assert_eq!(self.run(), StopReason::Finished(Status::Halted));
    }

    /// Everything the program has written so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.console.output()).into_owned()
    }

    pub fn mem_word(&self, addr: i64) -> i32 {
        self.sim.memory.read_word(addr).unwrap()
    }

    pub fn mem_byte(&self, addr: i64) -> u8 {
        self.sim.memory.read_u8(addr).unwrap()
    }
}
