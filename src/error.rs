use thiserror::Error;

/// Failure classes of the command-line surface.
///
/// Each class maps to the exit code callers observe; the mapping is part of
/// the tool's interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// No positional argument and standard input is a terminal.
    #[error("no input string to encode")]
    MissingInput,

    /// `-e` was never supplied.
    #[error("no encode format supplied")]
    MissingFormat,

    /// `-e` named something other than the three known formats.
    #[error("unknown encode format: {0}")]
    UnknownFormat(String),
}

impl CliError {
    /// Exit code for this failure. An unknown format prints the usage text
    /// and still exits 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingInput => 2,
            CliError::MissingFormat => 3,
            CliError::UnknownFormat(_) => 0,
        }
    }
}
