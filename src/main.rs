use std::process;

use clap::Parser;
use strencode::cli::{self, Cli};
use strencode::encoder::{self, EncodeMode};
use strencode::error::CliError;
use strencode::input;

fn main() {
    // Unknown flags and `-e` without a value are clap errors and exit 1;
    // help requests keep clap's stdout/exit-0 convention.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().expect("failed to write parse diagnostics");
            process::exit(code);
        }
    };

    if let Err(err) = run(args) {
        match err.downcast_ref::<CliError>() {
            Some(usage) => {
                cli::print_usage();
                process::exit(usage.exit_code());
            }
            None => {
                eprintln!("{:#}", err);
                process::exit(1);
            }
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    // Input availability is checked before the format, so a bare invocation
    // reports the missing input.
    let bytes = input::resolve(args.input)?.ok_or(CliError::MissingInput)?;
    let mode: EncodeMode = args.format.ok_or(CliError::MissingFormat)?.parse()?;

    println!("{}", encoder::encode(&bytes, mode, args.force));
    Ok(())
}
