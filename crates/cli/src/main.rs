//! LS-8 simulator CLI.
//!
//! Loads a `.ls8` program file into a fresh CPU and runs it to completion.
//! Exit codes: 0 on `HLT`, 1 on an execution fault (invalid instruction or
//! bounds violation), 2 on a load failure (missing or malformed program
//! file).

use clap::Parser;
use std::process;

use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    version,
    about = "LS-8 stored-program computer simulator",
    long_about = "Load a .ls8 program (one binary instruction byte per line, '#' comments) \
                  and execute it.\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 programs/stack.ls8 --trace --stats"
)]
struct Cli {
    /// Program file in the .ls8 binary-text format.
    program: String,

    /// Print a TRACE line before each executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = Config {
        trace_instructions: cli.trace,
        print_stats: cli.stats,
    };

    let program = match loader::load_program(&cli.program) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("ls8: {err}");
            process::exit(2);
        }
    };

    let mut cpu = Cpu::new(&config);
    if let Err(fault) = cpu.load_program(&program) {
        eprintln!("ls8: {fault}");
        process::exit(2);
    }

    match cpu.run() {
        Ok(()) => {
            if config.print_stats {
                cpu.stats.report();
            }
        }
        Err(fault) => {
            eprintln!("ls8: {fault}");
            cpu.dump_state();
            process::exit(1);
        }
    }
}
