//! Reading command input from a file or stdin.

use scrivo_core::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input: the file at `path`, or stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
