//! Line/column positions for scanner offsets.
//!
//! Offsets reported by the host scanner are UTF-16 code unit indices (the
//! host is a JavaScript engine), so the line map stores line starts in the
//! same unit. `Position` is 0-based like LSP; `Selection` is the 1-based
//! shape editors expect.

use serde::{Deserialize, Serialize};

/// A 0-based line/character position. `character` counts UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A 1-based editor selection covering one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selection_start_line_number: u32,
    pub selection_start_column: u32,
    pub position_line_number: u32,
    pub position_column: u32,
}

impl Selection {
    /// Build a selection from two 0-based positions.
    #[must_use]
    pub const fn from_positions(start: Position, end: Position) -> Self {
        Self {
            selection_start_line_number: start.line + 1,
            selection_start_column: start.character + 1,
            position_line_number: end.line + 1,
            position_column: end.character + 1,
        }
    }
}

/// Precomputed line starts for a source text.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    /// UTF-16 offset of the first character of each line.
    line_starts: Vec<u32>,
    /// Total length of the text in UTF-16 code units.
    len: u32,
}

impl LineMap {
    /// Build a line map. `\r\n`, `\n` and a lone `\r` each end a line.
    pub fn build(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut offset: u32 = 0;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            offset += ch.len_utf16() as u32;
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        offset += 1;
                    }
                    line_starts.push(offset);
                }
                '\n' => line_starts.push(offset),
                _ => {}
            }
        }

        Self {
            line_starts,
            len: offset,
        }
    }

    /// Number of lines (always at least one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of the mapped text in UTF-16 code units.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert a UTF-16 offset to a position. Offsets past the end clamp to
    /// the end of the text.
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let offset = offset.min(self.len);
        // Index of the last line start <= offset.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line as u32,
            character: offset - self.line_starts[line],
        }
    }

    /// Convert a position back to a UTF-16 offset. Lines past the end clamp
    /// to the end of the text; characters past the end of a line clamp to
    /// the start of the next line.
    pub fn position_to_offset(&self, position: Position) -> u32 {
        let Some(&line_start) = self.line_starts.get(position.line as usize) else {
            return self.len;
        };
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .copied()
            .unwrap_or(self.len);
        line_start.saturating_add(position.character).min(line_end)
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
