//! Command-line entry point.
//!
//! Takes the whole schedule expression as a single argument, prints
//! the expanded field table on success, and reports any failure on
//! stderr with exit code 1.

use std::env;
use std::process;

use cronex::{parse, table, CronexError, Result};

fn main() {
    env_logger::init();

    let input = match collect_input() {
        Ok(input) => input,
        Err(err) => fail(err),
    };

    match parse(&input) {
        Ok(result) => println!("{}", table(&result)),
        Err(err) => fail(err),
    }
}

/// Collects the single expression argument, rejecting any other count.
fn collect_input() -> Result<String> {
    let mut args = env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(input), None) => Ok(input),
        _ => Err(CronexError::Usage),
    }
}

fn fail(err: CronexError) -> ! {
    eprintln!("An error occurred: {}", err);
    process::exit(1);
}
