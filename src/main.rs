//! querycalc CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors have already
//! been reported as JSON on stdout; main repeats them on stderr and exits
//! non-zero.

use querycalc::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
