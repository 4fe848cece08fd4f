//! Scan results: the token list shown by the visualizer.
//!
//! Tokens arrive in scan order with only their end offset. A token's span
//! starts where the previous token ended (or at 0 for the first token), so
//! trivia the scanner skipped is part of the following token's span. This is
//! the range highlighted in the editor when a token is hovered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use scanview_common::{LineMap, Selection};
use scanview_enums::known::{self, syntax_kind};
use scanview_enums::{EnumDefinition, format_enum};

/// One token as reported by the host scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedToken {
    pub kind: u16,
    /// UTF-16 offset just past the token.
    pub end: u32,
}

impl ScannedToken {
    pub const fn new(kind: u16, end: u32) -> Self {
        Self { kind, end }
    }
}

/// A scanned token with its formatted kind name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub kind: u16,
    pub token: String,
    pub end: u32,
}

/// An error reported by the host scanner while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanError {
    pub message: String,
    pub length: u32,
}

/// Half-open `[start, end)` range of a token, in UTF-16 offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: u32,
    pub end: u32,
}

/// Token list for one scan of the editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResults {
    tokens: Vec<TokenInfo>,
    errors: Vec<ScanError>,
}

impl ScanResults {
    /// Collect host tokens, naming kinds with the built-in `SyntaxKind`
    /// definition.
    pub fn from_scan<I>(scanned: I) -> Self
    where
        I: IntoIterator<Item = ScannedToken>,
    {
        Self::from_scan_with(scanned, known::syntax_kind())
    }

    /// Collect host tokens, naming kinds with `kinds`.
    ///
    /// Collection stops after the first `EndOfFileToken`, which is kept.
    pub fn from_scan_with<I>(scanned: I, kinds: &EnumDefinition) -> Self
    where
        I: IntoIterator<Item = ScannedToken>,
    {
        let mut results = Self::default();
        for token in scanned {
            if !results.push_with(token, kinds) {
                break;
            }
        }

        debug!(tokens = results.tokens.len(), "collected scan results");
        results
    }

    /// Append one host token. Returns `false` once `EndOfFileToken` has been
    /// recorded; tokens pushed after that are ignored.
    pub fn push(&mut self, token: ScannedToken) -> bool {
        self.push_with(token, known::syntax_kind())
    }

    fn push_with(&mut self, token: ScannedToken, kinds: &EnumDefinition) -> bool {
        if self.is_complete() {
            return false;
        }
        self.tokens.push(TokenInfo {
            kind: token.kind,
            token: format_enum(i64::from(token.kind), kinds, false),
            end: token.end,
        });
        !self.is_complete()
    }

    /// Whether the end of file has been reached.
    pub fn is_complete(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind == syntax_kind::END_OF_FILE_TOKEN)
    }

    /// Parse a JSON array of `{"kind": .., "end": ..}` objects.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let scanned: Vec<ScannedToken> = serde_json::from_str(text)?;
        Ok(Self::from_scan(scanned))
    }

    /// Record an error reported by the scanner. Tokens are kept.
    pub fn push_error(&mut self, message: impl Into<String>, length: u32) {
        self.errors.push(ScanError {
            message: message.into(),
            length,
        });
    }

    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Heading shown above the list.
    pub fn title(&self) -> &'static str {
        if self.has_errors() {
            "Scan failed"
        } else {
            "Scan results"
        }
    }

    /// Span of the token at `index`.
    pub fn token_span(&self, index: usize) -> Option<TokenSpan> {
        let token = self.tokens.get(index)?;
        let start = match index.checked_sub(1) {
            Some(before) => self.tokens[before].end,
            None => 0,
        };
        Some(TokenSpan {
            start,
            end: token.end,
        })
    }

    /// Editor selection for the token at `index`.
    pub fn selection(&self, index: usize, line_map: &LineMap) -> Option<Selection> {
        let span = self.token_span(index)?;
        Some(Selection::from_positions(
            line_map.offset_to_position(span.start),
            line_map.offset_to_position(span.end),
        ))
    }

    /// Everything the visualizer renders, with spans and selections resolved
    /// against `source_text`.
    pub fn report(&self, source_text: &str) -> ScanReport {
        let line_map = LineMap::build(source_text);
        let tokens = (0..self.tokens.len())
            .filter_map(|index| {
                let token = &self.tokens[index];
                let span = self.token_span(index)?;
                let selection = self.selection(index, &line_map)?;
                Some(TokenReport {
                    kind: token.kind,
                    token: token.token.clone(),
                    start: span.start,
                    end: span.end,
                    selection,
                })
            })
            .collect();

        ScanReport {
            title: self.title(),
            tokens,
            errors: self.errors.clone(),
        }
    }
}

/// One row of a `ScanReport`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    pub kind: u16,
    pub token: String,
    pub start: u32,
    pub end: u32,
    pub selection: Selection,
}

/// Serializable view of a scan for the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub title: &'static str,
    pub tokens: Vec<TokenReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ScanError>,
}

#[cfg(test)]
#[path = "tests/scan_results_tests.rs"]
mod tests;
