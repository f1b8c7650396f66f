pub mod check;
pub mod functions;
pub mod parse;

use std::io::{self, Read};
use std::path::Path;

/// Read the document at `path`, or stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Print `message` to stderr and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    crate::logging::flush();
    std::process::exit(1);
}
