use serde::Serialize;

/// Position in a text buffer (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes)
    pub column: usize,
}

/// Byte span in a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Starting byte offset
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
}

impl Span {
    pub fn new(byte_start: usize, byte_end: usize) -> Self {
        Self { byte_start, byte_end }
    }
}

/// Convert a byte offset to line and column position
///
/// Lines are split on `\n` only, so a `\r\n` file reports the `\r` as the
/// last column of its line.
///
/// # Returns
/// * `Position` with line and column (both 1-indexed)
/// * Offsets past the end land on the last line
pub fn byte_to_position(content: &str, byte_offset: usize) -> Position {
    let offset = byte_offset.min(content.len());
    let before = &content.as_bytes()[..offset];

    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    Position { line, column: byte_offset - line_start + 1 }
}

/// Convert a byte span to start and end positions
pub fn span_to_positions(content: &str, span: Span) -> (Position, Position) {
    let start = byte_to_position(content, span.byte_start);
    let end = byte_to_position(content, span.byte_end);
    (start, end)
}
