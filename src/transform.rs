use regex::{Captures, Regex};
use serde::Serialize;

use crate::position::{Position, Span, span_to_positions};

/// A single substitution made by a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    /// Byte span of the replaced text in the input buffer
    pub span: Span,
    /// Where the changed token starts in the input buffer
    pub position: Position,
    /// Where the span ends in the input buffer
    pub end_position: Position,
    /// Text that was matched
    pub original: String,
    /// Text written in its place
    pub replacement: String,
}

/// Output of a pass over one text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    /// Transformed buffer
    pub content: String,
    /// Substitutions in input order
    pub changes: Vec<Change>,
}

impl Transform {
    /// Wrap a buffer that the pass left alone
    pub fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            changes: Vec::new(),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}

/// Replace every non-overlapping match of `pattern` in `content`
///
/// Text outside the matches is copied through untouched. `replace` builds
/// the substitution from the match's capture groups. A group named `at`
/// marks where the change is reported; otherwise the whole match is used.
pub(crate) fn rewrite<F>(content: &str, pattern: &Regex, mut replace: F) -> Transform
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut output = String::with_capacity(content.len());
    let mut changes = Vec::new();
    let mut last_end = 0;

    for caps in pattern.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        let replacement = replace(&caps);

        output.push_str(&content[last_end..whole.start()]);
        output.push_str(&replacement);
        last_end = whole.end();

        let at = caps.name("at").unwrap_or(whole);
        let (position, end_position) = span_to_positions(content, Span::new(at.start(), whole.end()));

        changes.push(Change {
            span: Span::new(whole.start(), whole.end()),
            position,
            end_position,
            original: whole.as_str().to_string(),
            replacement,
        });
    }

    if changes.is_empty() {
        return Transform::unchanged(content);
    }

    output.push_str(&content[last_end..]);
    Transform { content: output, changes }
}
