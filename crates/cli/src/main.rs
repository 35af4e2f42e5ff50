//! 8-bit processor simulator CLI.
//!
//! This binary is the outer shell around `iss-core`. It performs:
//! 1. **Run:** Load an assembly file, execute it, and print the statistics report.
//! 2. **Disassemble:** Decode an assembly file and print the normalized listing.
//!
//! `iss <file>` is shorthand for `iss run <file>`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use iss_core::config::{Config, RegisterWidth};
use iss_core::isa::disasm;
use iss_core::sim::loader;
use iss_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "iss",
    author,
    version,
    about = "Cycle-counting simulator for a minimal 8-bit embedded processor",
    long_about = "Execute an assembly program (MOV, ADD, CMP, JE, JMP, LD, ST) and report executed instructions, clock cycles, local memory hits and LD/ST count.\n\nExamples:\n  iss prog.asm\n  iss run prog.asm --max-steps 100000 --json\n  iss disasm prog.asm",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Assembly file to run with default options.
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program and print its statistics.
    Run(RunArgs),

    /// Decode a program and print it back in normalized form.
    Disasm {
        /// Assembly file to decode.
        file: PathBuf,
    },
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// Assembly file to execute.
    file: PathBuf,

    /// JSON configuration file (latencies, register width, step budget).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop with an error after this many executed instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Clamp register writes to the 8-bit signed range.
    #[arg(long)]
    saturate: bool,

    /// Log every executed instruction (implies trace-level logging).
    #[arg(long)]
    trace: bool,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Print final register and flag values after the report.
    #[arg(long)]
    dump_regs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = match (cli.command, cli.file) {
        (Some(command), _) => command,
        (None, Some(file)) => Commands::Run(RunArgs {
            file,
            ..RunArgs::default()
        }),
        (None, None) => {
            eprintln!("usage: iss <file> | iss run <file> [options] | iss disasm <file>");
            eprintln!("       iss --help  for full options");
            return ExitCode::FAILURE;
        }
    };

    let trace = matches!(&command, Commands::Run(args) if args.trace);
    init_logging(cli.verbose, trace);

    let result = match command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Disasm { file } => cmd_disasm(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the `tracing` subscriber writing to stderr.
fn init_logging(verbose: u8, trace: bool) {
    let level = match (verbose, trace) {
        (_, true) | (3.., _) => "trace",
        (2, _) => "debug",
        (1, _) => "info",
        (0, _) => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the run configuration: file first, then command-line overrides.
fn build_config(args: &RunArgs) -> Result<Config, SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if args.max_steps.is_some() {
        config.general.max_steps = args.max_steps;
    }
    if args.saturate {
        config.core.register_width = RegisterWidth::Saturate;
    }
    if args.trace {
        config.general.trace_instructions = true;
    }
    Ok(config)
}

/// Loads and runs a program, printing the report on success.
fn cmd_run(args: &RunArgs) -> Result<(), SimError> {
    let config = build_config(args)?;
    debug!(?config, "effective configuration");

    let program = loader::load_program(&args.file)?;
    let mut sim = Simulator::new(program, &config);
    let outcome = sim.run()?;

    if args.json {
        println!("{}", outcome.to_json());
    } else {
        outcome.stats.print();
        if args.dump_regs {
            println!("{}", sim.cpu.regs);
        }
    }
    Ok(())
}

/// Decodes a program and prints the listing.
fn cmd_disasm(path: &Path) -> Result<(), SimError> {
    let program = loader::load_program(path)?;
    print!("{}", disasm::listing(program.instructions()));
    Ok(())
}
