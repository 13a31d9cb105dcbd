//! Thin binary: everything user-facing lives in `cli/`, everything else in
//! the library. This file only runs the CLI and maps errors to an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
