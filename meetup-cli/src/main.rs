//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = meetup_cli::run() {
        eprintln!("meetup: {err}");
        std::process::exit(1);
    }
}
