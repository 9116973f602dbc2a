//! LS-8 emulator CLI.
//!
//! This binary loads a program in LS-8 text format and runs it. It performs:
//! 1. **Run:** Execute the program; `PRN` output goes to stdout.
//! 2. **Trace:** With `--trace`, log one `TRACE:` line per instruction to stderr.
//! 3. **Listing:** With `--disasm`, print the disassembled program instead of running it.
//!
//! Exit status: 0 after `HLT`, 1 on any CPU fault, 2 if the program file is missing,
//! 3 if the program or configuration is malformed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ls8_core::config::Config;
use ls8_core::core::RunOutcome;
use ls8_core::isa::disasm::disassemble_program;
use ls8_core::sim::{LoadError, Simulator, loader};
use tracing_subscriber::EnvFilter;

/// Normal completion via `HLT`.
const EXIT_OK: u8 = 0;
/// The program faulted (unknown instruction, bad address, division by zero, ...).
const EXIT_FAULT: u8 = 1;
/// The program file does not exist.
const EXIT_NOT_FOUND: u8 = 2;
/// The program text or configuration file is malformed.
const EXIT_MALFORMED: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit computer emulator",
    long_about = "Run an LS-8 program written as one binary byte per line ('#' starts a comment).\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 --trace programs/call.ls8\n  ls8 --disasm programs/stack.ls8"
)]
struct Cli {
    /// Program file to run.
    program: PathBuf,

    /// Log a trace line for every executed instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(short, long)]
    stats: bool,

    /// Print a disassembly of the program and exit without running it.
    #[arg(short, long)]
    disasm: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.trace);
    ExitCode::from(run(&cli))
}

/// Installs a stderr `fmt` subscriber; `RUST_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "ls8_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Loads, optionally lists, and runs the program; returns the process exit status.
fn run(cli: &Cli) -> u8 {
    let name = cli.program.display();

    let mut config = match cli.config.as_deref().map(read_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(msg) => {
            eprintln!("ls8: {msg}");
            return EXIT_MALFORMED;
        }
    };
    config.general.trace_instructions |= cli.trace;

    let image = match loader::load_program(&cli.program) {
        Ok(image) => image,
        Err(e @ LoadError::NotFound { .. }) => {
            eprintln!("ls8: {e}");
            return EXIT_NOT_FOUND;
        }
        Err(e) => {
            eprintln!("ls8: {name}: {e}");
            return EXIT_MALFORMED;
        }
    };

    if cli.disasm {
        for line in disassemble_program(&image) {
            println!("{line}");
        }
        return EXIT_OK;
    }

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.load(&image) {
        eprintln!("ls8: {name}: {e}");
        return EXIT_MALFORMED;
    }

    let status = match sim.run() {
        Ok(RunOutcome::Halted) => EXIT_OK,
        Ok(RunOutcome::CycleLimit) => {
            eprintln!("ls8: {name}: cycle limit reached at PC {:#04x}", sim.cpu.pc);
            EXIT_FAULT
        }
        Err(fault) => {
            eprintln!("ls8: {name}: {fault}");
            eprintln!("     {}", sim.cpu.regs.dump());
            EXIT_FAULT
        }
    };

    if cli.stats {
        eprint!("{}", sim.cpu.stats.summary());
    }
    status
}

/// Reads and parses a JSON configuration file.
fn read_config(path: &Path) -> Result<Config, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("could not read {}: {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}
