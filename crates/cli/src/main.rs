//! Y86 emulator CLI.
//!
//! This binary loads a `.y86` directive program and runs it against the host console. It performs:
//! 1. **Validation:** Checks the program extension and reads an optional JSON configuration.
//! 2. **Run:** Executes the program with stdin/stdout wired to READx/WRITEx.
//! 3. **Reporting:** Optional final status line, memory dump, statistics, or a disassembly listing.
//!
//! Diagnostics go to stderr through `tracing` (`RUST_LOG`, default `warn`), so
//! stdout carries only the program's own output and the requested reports.

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use y86_core::core::arch::Status;
use y86_core::isa::disasm::listing;
use y86_core::{Config, LoadedProgram, Simulator, StopReason, StreamConsole, load_program_file};

/// Required extension of program files.
const PROGRAM_EXTENSION: &str = "y86";

#[derive(Parser, Debug)]
#[command(
    name = "y86emul",
    author,
    version,
    about = "Y86 instruction-set emulator",
    long_about = "Load a .y86 directive program and execute it.\n\nREADB/READL read from stdin and WRITEB/WRITEL write to stdout.\n\nExamples:\n  y86emul prog1.y86\n  y86emul --status --stats prog1.y86\n  y86emul --disassemble prog1.y86\n  RUST_LOG=y86_core=trace y86emul --config trace.json prog1.y86"
)]
struct Cli {
    /// Program to run (must end in `.y86`).
    #[arg(value_parser = parse_program_path)]
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final memory image as hex bytes.
    #[arg(long)]
    dump_memory: bool,

    /// Print the final program status.
    #[arg(long)]
    status: bool,

    /// Print execution statistics.
    #[arg(long)]
    stats: bool,

    /// List the `.text` block instead of running it.
    #[arg(long)]
    disassemble: bool,
}

/// Accepts only paths whose extension is `.y86`.
fn parse_program_path(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    match path.extension().and_then(|e| e.to_str()) {
        Some(PROGRAM_EXTENSION) => Ok(path),
        Some(other) => Err(format!(
            "invalid file extension: .{other} (only .{PROGRAM_EXTENSION} files are accepted)"
        )),
        None => Err(format!(
            "missing file extension (only .{PROGRAM_EXTENSION} files are accepted)"
        )),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, String> {
    path.map_or_else(
        || Ok(Config::default()),
        |p| Config::from_file(p).map_err(|e| e.to_string()),
    )
}

/// Prints the `.text` block as a disassembly listing.
fn print_listing(program: &LoadedProgram) {
    for line in listing(&program.memory, program.entry_point, program.text_len) {
        println!("{line}");
    }
}

/// Runs the program to completion against stdin/stdout.
fn run(sim: &mut Simulator) -> Result<StopReason, String> {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let mut console = StreamConsole::new(stdin, stdout);
    sim.run(&mut console).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let program = match load_program_file(&cli.program, &config) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.disassemble {
        print_listing(&program);
        return ExitCode::SUCCESS;
    }

    info!(
        program = %cli.program.display(),
        entry = %format_args!("{:#x}", program.entry_point),
        capacity = program.memory.capacity(),
        "starting run"
    );
    let mut sim = Simulator::new(program, &config);
    let reason = match run(&mut sim) {
        Ok(reason) => reason,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(?reason, retired = sim.cpu.stats.instructions_retired, "run finished");

    if cli.dump_memory {
        println!("{}", sim.memory.dump_hex());
    }
    if cli.status {
        println!("{}", sim.status().description());
    }
    if cli.stats {
        sim.cpu.stats.print();
    }

    match reason {
        StopReason::Finished(Status::Halted) => ExitCode::SUCCESS,
        StopReason::Finished(status) => {
            if let Some(fault) = &sim.cpu.fault {
                eprintln!("{}: {fault}", status.description());
            }
            eprint!("{}", sim.cpu.dump_state());
            ExitCode::FAILURE
        }
        StopReason::StepLimit => {
            eprintln!(
                "stopped after {} instructions (instruction limit)",
                sim.cpu.stats.instructions_retired
            );
            ExitCode::FAILURE
        }
    }
}
