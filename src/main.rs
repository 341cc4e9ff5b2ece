use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use tally::Interpreter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// tally is a tiny calculator language with persistent variables.
///
/// Every expression or line is evaluated by the same interpreter, so variables
/// assigned on one line can be used on the next.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads lines from a file instead of the command line.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Reports failing lines and keeps going instead of stopping at the first
    /// error.
    #[arg(short, long)]
    keep_going: bool,

    /// Increases log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate in order. Reads standard input when neither
    /// expressions nor a file are given.
    expressions: Vec<String>,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Runs `lines` through one interpreter, printing each value.
///
/// Returns whether every line succeeded.
fn run_lines<I>(interpreter: &mut Interpreter, lines: I, keep_going: bool) -> anyhow::Result<bool>
    where I: IntoIterator<Item = io::Result<String>>
{
    let mut stdout = io::stdout().lock();
    let mut ok = true;

    for (number, line) in lines.into_iter().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match interpreter.run(&line) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => {
                debug!(line = number + 1, source = %line, "line failed");
                eprintln!("error: {e}");
                ok = false;
                if !keep_going {
                    break;
                }
            },
        }
    }

    Ok(ok)
}

fn repl(interpreter: &mut Interpreter, keep_going: bool) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return run_lines(interpreter, stdin.lock().lines(), keep_going);
    }

    let mut ok = true;
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        // Interactive sessions never stop on an error.
        ok &= run_lines(interpreter, [Ok(line.trim_end().to_owned())], true)?;
    }
    Ok(ok)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut interpreter = Interpreter::new();
    let ok = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).with_context(|| {
                                                 format!("failed to read the input file '{}'",
                                                         path.display())
                                             })?;
        run_lines(&mut interpreter, script.lines().map(|l| Ok(l.to_owned())), args.keep_going)?
    } else if args.expressions.is_empty() {
        repl(&mut interpreter, args.keep_going)?
    } else {
        run_lines(&mut interpreter, args.expressions.into_iter().map(Ok), args.keep_going)?
    };

    if !ok {
        warn!("one or more lines failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
