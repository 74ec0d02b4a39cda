use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use clap::Parser;
use log::warn;
use plotscript::interpreter::{
    kernel::{EXIT, Kernel, RESET, START, STOP},
    session::{Interpreter, PARSE_FAILURE},
};

/// plotscript is a small Scheme-like language for numeric work and plotting.
///
/// With no arguments it starts an interactive prompt backed by a kernel
/// thread. Press Ctrl+C to interrupt a long-running evaluation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the program in this file and prints its value.
    file: Option<PathBuf>,

    /// Evaluates this program and prints its value.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Evaluates the definitions in this file before anything else.
    #[arg(long)]
    startup: Option<PathBuf>,
}

fn read_program(path: &Path) -> Option<String> {
    fs::read_to_string(path).map_or_else(|_| {
                                             eprintln!("Error: Could not open file {} for reading.",
                                                       path.display());
                                             None
                                         },
                                         Some)
}

/// Evaluates one program, after the optional startup file, in a single
/// interpreter.
fn run_once(program: &str, startup: Option<&Path>) -> ExitCode {
    let mut interp = Interpreter::new();

    if let Some(path) = startup {
        let Some(definitions) = read_program(path) else {
            return ExitCode::FAILURE;
        };
        if let Err(e) = interp.run(&definitions) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    if !interp.parse_stream(program) {
        eprintln!("{PARSE_FAILURE}");
        return ExitCode::FAILURE;
    }
    match interp.evaluate() {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn prompt() {
    print!("\nplotscript> ");
    let _ = io::stdout().flush();
}

fn repl(startup: Option<&Path>) -> ExitCode {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        warn!("could not install the Ctrl+C handler: {e}");
    }

    let mut kernel = Kernel::new();
    kernel.start();

    if let Some(path) = startup {
        let Some(definitions) = read_program(path) else {
            return ExitCode::FAILURE;
        };
        kernel.submit(definitions);
        match kernel.wait_result_or_interrupt(&interrupted) {
            Some(envelope) if envelope.is_error() => eprintln!("{envelope}"),
            Some(_) => {},
            None => eprintln!("Error: interpreter kernel interrupted"),
        }
        interrupted.store(false, Ordering::SeqCst);
    }

    prompt();
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };

        match line.trim() {
            "" => {},
            START => kernel.start(),
            STOP => kernel.stop(),
            RESET => kernel.reset(),
            EXIT => break,
            program if kernel.is_running() => {
                kernel.submit(program);
                match kernel.wait_result_or_interrupt(&interrupted) {
                    Some(envelope) if envelope.is_error() => eprintln!("{envelope}"),
                    Some(envelope) => println!("{envelope}"),
                    None => eprintln!("Error: interpreter kernel interrupted"),
                }
            },
            _ => eprintln!("Error: interpreter kernel not running"),
        }
        interrupted.store(false, Ordering::SeqCst);
        prompt();
    }

    kernel.stop();
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if let Some(program) = args.eval {
        return run_once(&program, args.startup.as_deref());
    }
    if let Some(path) = args.file {
        let Some(program) = read_program(&path) else {
            return ExitCode::FAILURE;
        };
        return run_once(&program, args.startup.as_deref());
    }

    repl(args.startup.as_deref())
}
