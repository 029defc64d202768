use clap::{CommandFactory, Parser};

const FORMAT_HELP: &str = r#"Formats:
    c_backslash           => \x48\x65\x6C\x6C\x6F\x20\x57\x6F\x72\x6C\x64\x21
    percent_encode        => Hello%20World%21
    double_percent_encode => Hello%2520World%2521

Examples:
    $ strencode "Hello World!" -e c_backslash
    $ strencode "Hello World!" -e percent_encode -f
    $ printf "Hello World!" | strencode -e double_percent_encode"#;

/// Command-line surface. The format stays a plain string here so that an
/// unrecognized value can fall through to the usage text instead of a clap
/// parse error.
#[derive(Debug, Parser)]
#[command(
    name = "strencode",
    about = "Encode a string as C backslash escapes, percent-encoding or double percent-encoding",
    override_usage = "strencode <INPUT> -e <FORMAT> [-f]\n       printf <INPUT> | strencode -e <FORMAT> [-f]",
    after_help = FORMAT_HELP
)]
pub struct Cli {
    /// String to encode; ignored when standard input is a pipe
    pub input: Option<String>,

    /// Encode format: c_backslash, percent_encode or double_percent_encode
    #[arg(short = 'e', value_name = "FORMAT")]
    pub format: Option<String>,

    /// Force-encode every character, including unreserved ones
    #[arg(short = 'f')]
    pub force: bool,
}

/// Print the usage text to standard output.
pub fn print_usage() {
    Cli::command()
        .print_help()
        .expect("failed to write usage text");
}
