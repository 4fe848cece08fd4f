//! Subcommand implementations.
//!
//! Each command renders its output to a `String`; the binary prints it.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Deserialize;
use tracing::debug;

use scanview_enums::known::{KNOWN_ENUM_NAMES, known_enum};
use scanview_enums::{EnumDefinition, format_enum};
use scanview_tokens::{ScanError, ScanResults, ScannedToken};

use crate::args::{CliArgs, Command, EnumSource};

/// An enum definition resolved from the command line.
#[derive(Debug)]
pub struct LoadedEnum {
    pub name: String,
    pub definition: Cow<'static, EnumDefinition>,
    pub is_flags: bool,
}

/// Run the selected subcommand and return its rendered output.
pub fn run(args: &CliArgs) -> Result<String> {
    match &args.command {
        Command::Format {
            value,
            source,
            flags,
        } => {
            let loaded = load_enum(source)?;
            let is_flags = *flags || loaded.is_flags;
            debug!(name = %loaded.name, value, is_flags, "formatting value");
            Ok(format!(
                "{}\n",
                format_enum(*value, &loaded.definition, is_flags)
            ))
        }
        Command::Members { source } => {
            let loaded = load_enum(source)?;
            Ok(render_members(&loaded))
        }
        Command::Tokens {
            tokens,
            source,
            json,
        } => {
            let results = load_tokens(tokens)?;
            let source_text = std::fs::read_to_string(source)
                .with_context(|| format!("failed to read source {}", source.display()))?;
            if *json {
                let report = results.report(&source_text);
                let mut output = serde_json::to_string_pretty(&report)?;
                output.push('\n');
                Ok(output)
            } else {
                Ok(render_tokens(&results, &source_text))
            }
        }
    }
}

/// Resolve `--enum FILE` or `--known NAME`.
pub fn load_enum(source: &EnumSource) -> Result<LoadedEnum> {
    if let Some(name) = &source.known {
        let Some(known) = known_enum(name) else {
            bail!(
                "unknown enum '{}' (expected one of: {})",
                name,
                KNOWN_ENUM_NAMES.join(", ")
            );
        };
        return Ok(LoadedEnum {
            name: known.name.to_string(),
            definition: Cow::Borrowed(known.definition),
            is_flags: known.is_flags,
        });
    }

    let Some(path) = &source.enum_file else {
        bail!("either --enum or --known is required");
    };
    let definition = load_definition_file(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(LoadedEnum {
        name,
        definition: Cow::Owned(definition),
        is_flags: false,
    })
}

fn load_definition_file(path: &Path) -> Result<EnumDefinition> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read enum definition {}", path.display()))?;
    let definition = EnumDefinition::from_json_str(&text)
        .with_context(|| format!("failed to load enum definition {}", path.display()))?;
    if definition.is_empty() {
        bail!("enum definition {} has no numeric members", path.display());
    }
    Ok(definition)
}

/// Token files are either a bare array or an object with errors attached.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenFile {
    Bare(Vec<ScannedToken>),
    WithErrors {
        tokens: Vec<ScannedToken>,
        #[serde(default)]
        errors: Vec<ScanError>,
    },
}

fn load_tokens(path: &Path) -> Result<ScanResults> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tokens {}", path.display()))?;
    let file: TokenFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse tokens {}", path.display()))?;

    let results = match file {
        TokenFile::Bare(tokens) => ScanResults::from_scan(tokens),
        TokenFile::WithErrors { tokens, errors } => {
            let mut results = ScanResults::from_scan(tokens);
            for error in errors {
                results.push_error(error.message, error.length);
            }
            results
        }
    };
    Ok(results)
}

fn render_members(loaded: &LoadedEnum) -> String {
    let mut output = String::new();
    let kind = if loaded.is_flags { "flags" } else { "enum" };
    let _ = writeln!(output, "{} ({kind})", loaded.name.bold());
    for member in loaded.definition.sorted_members() {
        let _ = writeln!(output, "{:>12}  {}", member.value, member.name);
    }
    output
}

fn render_tokens(results: &ScanResults, source_text: &str) -> String {
    let report = results.report(source_text);
    let mut output = String::new();
    let _ = writeln!(output, "{}", report.title.bold());
    for error in &report.errors {
        let _ = writeln!(output, "  {}", error.message.red());
    }
    for (index, token) in report.tokens.iter().enumerate() {
        let selection = token.selection;
        let _ = writeln!(
            output,
            "{index:>4}  {:<32} {:>5}..{:<5} {}:{}-{}:{}",
            token.token.cyan(),
            token.start,
            token.end,
            selection.selection_start_line_number,
            selection.selection_start_column,
            selection.position_line_number,
            selection.position_column,
        );
    }
    output
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
