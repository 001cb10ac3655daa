use std::io::{self, Write};

use clap::Parser;
use crossterm::style::Stylize;
use exprcalc::parse_and_evaluate;

/// The expressions shipped as the pregenerated demonstration, paired with
/// their expected values.
const DEMO_CASES: [(&str, f64); 10] = [("1+2", 3.0),
                                       ("1+2+3", 6.0),
                                       ("1+2+3*2", 9.0),
                                       ("1+2^2-5*2", -5.0),
                                       ("2*(2+3)", 10.0),
                                       ("2/2+3*(1+2*(1+2)^2-5)", 43.0),
                                       ("1.5+2", 3.5),
                                       ("0.5*2", 1.0),
                                       ("10+1254", 1264.0),
                                       ("+0+0.5", 0.5)];

/// exprcalc parses and evaluates arithmetic expressions built from numbers,
/// the operators [+;-;/;*;^] and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the pregenerated demonstration expressions and report each
    /// result.
    #[arg(short, long)]
    demo: bool,

    /// Expression to evaluate, without whitespace (e.g. "2*(2+3)"). When
    /// omitted (and --demo is not given), an interactive session starts.
    expression: Option<String>,

    /// Expected result; when given, a colored pass/fail verdict is printed.
    expected: Option<f64>,
}

fn main() {
    let args = Args::parse();

    if args.demo {
        for (expression, expected) in DEMO_CASES {
            report(expression, expected);
        }
        return;
    }

    match args.expression {
        Some(expression) => match args.expected {
            Some(expected) => report(&expression, expected),
            None => match parse_and_evaluate(&expression) {
                Ok(value) => println!("{value}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                },
            },
        },
        None => run_interactive(),
    }
}

/// Evaluates `expression`, prints it next to `expected`, and renders a
/// colored `OK`/`WRONG` verdict. A failed parse or evaluation counts as
/// `WRONG` and prints the error.
fn report(expression: &str, expected: f64) {
    match parse_and_evaluate(expression) {
        Ok(value) => {
            println!("expression:{expression}={value} expected:{expected}");
            if value == expected {
                println!("Result:{}", "OK".green());
            } else {
                println!("Result:{}", "WRONG".red());
            }
        },
        Err(e) => {
            println!("expression:{expression} expected:{expected}");
            println!("{e}");
            println!("Result:{}", "WRONG".red());
        },
    }
}

/// Prompts for expressions and expected results until the user quits or the
/// input stream ends.
fn run_interactive() {
    loop {
        let Some(expression) = prompt("Input a mathematical expression. You can use the operators \
                                       [+;-;/;*;^], parentheses and any numbers.\nPlease do not \
                                       use whitespace in your expression: ")
        else {
            return;
        };
        if expression == "q" {
            return;
        }

        let Some(expected_text) = prompt("Input the expected result of your expression: ") else {
            return;
        };
        let Ok(expected) = expected_text.parse() else {
            println!("Expected result must be a number, got '{expected_text}'.");
            continue;
        };

        report(&expression, expected);

        match prompt("Press q if you want to stop: ") {
            Some(answer) if answer != "q" => {},
            _ => return,
        }
    }
}

/// Prints `message`, then reads one trimmed line from standard input.
/// Returns `None` when the input stream is closed.
fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok()?;

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_owned()),
    }
}
