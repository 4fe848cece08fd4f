use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the scanview binary.
#[derive(Parser, Debug)]
#[command(
    name = "scanview",
    version,
    about = "Name TypeScript scanner enum values and inspect token lists"
)]
pub struct CliArgs {
    /// Disable colored output.
    #[arg(long = "noColor", alias = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a numeric value as enum member names.
    Format {
        /// Value to format. Accepts decimal, `0x` hex and `0b` binary.
        #[arg(value_parser = parse_value, allow_hyphen_values = true)]
        value: i64,

        #[command(flatten)]
        source: EnumSource,

        /// Decompose the value into flags. Implied for built-in flag enums.
        #[arg(long)]
        flags: bool,
    },

    /// List the members of an enum, sorted by value.
    Members {
        #[command(flatten)]
        source: EnumSource,
    },

    /// Render a token list reported by a scanner.
    Tokens {
        /// JSON file with `[{"kind": .., "end": ..}]`, optionally wrapped as
        /// `{"tokens": [..], "errors": [..]}`.
        #[arg(long, value_name = "FILE")]
        tokens: PathBuf,

        /// Source text the tokens were scanned from.
        #[arg(long, value_name = "FILE")]
        source: PathBuf,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Where an enum definition comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct EnumSource {
    /// JSON object mapping member names to values.
    #[arg(long = "enum", value_name = "FILE")]
    pub enum_file: Option<PathBuf>,

    /// Built-in enum: SyntaxKind, TokenFlags, ModifierFlags or NodeFlags.
    #[arg(long, value_name = "NAME")]
    pub known: Option<String>,
}

/// Parse a decimal, hex (`0x`) or binary (`0b`) integer, optionally negative.
///
/// A single leading `-` is allowed; `i64::MIN` is accepted in every base.
pub fn parse_value(text: &str) -> Result<i64, String> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = digits.replace('_', "");

    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else {
        (10, digits.as_str())
    };
    if digits.starts_with(['-', '+']) {
        return Err(format!("invalid value '{text}': unexpected sign"));
    }

    let magnitude = u64::from_str_radix(digits, radix)
        .map_err(|err| format!("invalid value '{text}': {err}"))?;
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| format!("invalid value '{text}': out of range for i64"))
}
