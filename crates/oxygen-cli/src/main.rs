//! CLI entrypoint for the Oxygen developer tool.
//!
//! # Design
//! Delegates to the library implementation and exits with its status code.

fn main() {
    let code = oxygen_cli::run();
    if code != 0 {
        std::process::exit(code);
    }
}
