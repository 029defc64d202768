use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Output encoding selected with `-e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Every byte becomes a `\xHH` token, unconditionally.
    CBackslash,
    /// RFC 3986 percent-encoding: unreserved bytes pass through, the rest
    /// become `%HH` (uppercase hex).
    PercentEncode,
    /// Percent-encoding with the percent sign itself escaped, `%25HH`, for
    /// data that will go through a percent-decoding step twice.
    DoublePercentEncode,
}

impl FromStr for EncodeMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c_backslash" => Ok(EncodeMode::CBackslash),
            "percent_encode" => Ok(EncodeMode::PercentEncode),
            "double_percent_encode" => Ok(EncodeMode::DoublePercentEncode),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for EncodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EncodeMode::CBackslash => "c_backslash",
            EncodeMode::PercentEncode => "percent_encode",
            EncodeMode::DoublePercentEncode => "double_percent_encode",
        })
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Unreserved characters according to RFC 3986
fn is_unreserved(b: u8) -> bool {
    matches!(b,
        b'-' | b'.' | b'_' | b'~'
        | b'0'..=b'9'
        | b'A'..=b'Z'
        | b'a'..=b'z'
    )
}

/// Encode arbitrary bytes into an ASCII string under `mode`.
///
/// `force_all` makes the percent modes encode unreserved bytes too; it has no
/// effect on `CBackslash`, which already encodes every byte. The result
/// carries no trailing newline.
pub fn encode(bytes: &[u8], mode: EncodeMode, force_all: bool) -> String {
    // In the worst case, every byte becomes "%25HH" (5 chars)
    let mut out = String::with_capacity(bytes.len() * 5);

    for &b in bytes {
        match mode {
            EncodeMode::CBackslash => {
                out.push_str("\\x");
                push_hex(&mut out, b);
            }
            EncodeMode::PercentEncode => {
                if is_unreserved(b) && !force_all {
                    out.push(b as char);
                } else {
                    out.push('%');
                    push_hex(&mut out, b);
                }
            }
            EncodeMode::DoublePercentEncode => {
                if is_unreserved(b) && !force_all {
                    out.push(b as char);
                } else {
                    out.push_str("%25");
                    push_hex(&mut out, b);
                }
            }
        }
    }

    out
}

fn push_hex(out: &mut String, b: u8) {
    out.push(HEX[(b >> 4) as usize] as char);
    out.push(HEX[(b & 0x0F) as usize] as char);
}
