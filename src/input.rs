use std::io::{self, IsTerminal, Read};

use anyhow::Context;

/// Resolve the bytes to encode. A piped standard input wins over the
/// positional argument; the argument is only consulted on an interactive
/// terminal. `None` means no input is available at all.
pub fn resolve(arg: Option<String>) -> anyhow::Result<Option<Vec<u8>>> {
    let piped = read_piped_stdin().context("failed to read standard input")?;
    Ok(select(piped, arg))
}

/// Full contents of standard input when it is a pipe or redirect, `None` on
/// an interactive terminal. The buffer grows as needed; there is no fixed
/// upper bound on input size.
fn read_piped_stdin() -> io::Result<Option<Vec<u8>>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buf = Vec::new();
    stdin.lock().read_to_end(&mut buf)?;
    Ok(Some(buf))
}

/// Pipe content takes precedence over the argument, even when the pipe is
/// empty (an empty pipe is valid input, not a fallback to the argument).
fn select(piped: Option<Vec<u8>>, arg: Option<String>) -> Option<Vec<u8>> {
    match piped {
        Some(bytes) => Some(bytes),
        None => arg.map(String::into_bytes),
    }
}
