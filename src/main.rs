use std::{fs, process};

use clap::Parser;
use log::LevelFilter;
use rpn_eval::{BinaryRegistry, EvalResult, Evaluator};

/// rpn evaluates arithmetic expressions written in Reverse Polish Notation,
/// such as `2 3 4 * +`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpn to read a file with one expression per line instead of a
    /// single expression.
    #[arg(short, long)]
    file: bool,

    /// Registers `^` (exponentiation) alongside the built-in operators.
    #[arg(long)]
    power: bool,

    /// Together with `--power`, makes `^` the only operator.
    #[arg(long, requires = "power")]
    replace: bool,

    /// Runs the reference demonstrations and exits.
    #[arg(long)]
    demo: bool,

    /// Prints debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[arg(required_unless_present = "demo")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(if args.verbose {
                                                LevelFilter::Debug
                                            } else {
                                                LevelFilter::Warn
                                            })
                              .parse_default_env()
                              .init();

    if args.demo {
        if let Err(e) = run_demo() {
            eprintln!("{e}");
            process::exit(1);
        }
        return;
    }

    let evaluator = if args.power {
        Evaluator::with_operators(BinaryRegistry::new().with("^", f64::powf), args.replace)
    } else {
        Evaluator::new()
    };

    let Some(contents) = args.contents else {
        return;
    };

    if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file \
                                    does not exist?");
                         process::exit(1);
                     });

        match evaluator.evaluate_lines(&script) {
            Ok(results) => {
                for result in results {
                    println!("{:?}", result.value);
                }
            },
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    } else {
        match evaluator.evaluate(&contents) {
            Ok(value) => println!("{value:?}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    }
}

/// Evaluates `2 3 4 * +` with the built-ins, then `2 3 4 * @` with `@` bound
/// to `a + a - b`.
fn run_demo() -> EvalResult<()> {
    let base = Evaluator::new();
    println!("{:?}", base.evaluate("2 3 4 * +")?);

    let extended = Evaluator::with_operators(BinaryRegistry::new().with("@", |a, b| a + a - b),
                                             false);
    println!("{:?}", extended.evaluate("2 3 4 * @")?);

    Ok(())
}
