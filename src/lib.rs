pub mod cli;
pub mod encoder;
pub mod error;
pub mod input;

pub use encoder::{encode, EncodeMode};
pub use error::CliError;
