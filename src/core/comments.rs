//! Comment groups as handed to the linter by the parsing front end.

use std::fmt;

/// Location of a comment in a source file. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

/// A run of adjacent comments treated as one logical comment.
///
/// `lines` holds one entry per comment with its markers intact (`// text`,
/// `/* text */`). `text` is the normalized form used to detect directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    lines: Vec<String>,
    text: String,
    position: Position,
}

impl CommentGroup {
    pub fn new(lines: Vec<String>, position: Position) -> Self {
        let text = normalize_comment_text(&lines);
        Self {
            lines,
            text,
            position,
        }
    }

    /// Raw comment texts, markers included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Comment text with markers stripped and lines joined by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
}

/// Comment groups of a single source file, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceComments {
    pub file_path: String,
    pub groups: Vec<CommentGroup>,
}

/// Strip comment markers and tidy up blank lines.
///
/// - `//` is removed together with one following space
/// - `/*` and `*/` are removed
/// - trailing whitespace is trimmed from every line
/// - leading and trailing blank lines are dropped, inner runs collapse to one
///
/// Non-empty results always end with `\n`.
fn normalize_comment_text(lines: &[String]) -> String {
    let mut stripped: Vec<&str> = Vec::new();
    for raw in lines {
        let body = if let Some(rest) = raw.strip_prefix("//") {
            rest.strip_prefix(' ').unwrap_or(rest)
        } else if let Some(rest) = raw.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            raw.as_str()
        };
        stripped.extend(body.split('\n').map(str::trim_end));
    }

    let mut text = String::new();
    let mut pending_blank = false;
    for line in stripped {
        if line.is_empty() {
            pending_blank = !text.is_empty();
            continue;
        }
        if pending_blank {
            text.push('\n');
            pending_blank = false;
        }
        text.push_str(line);
        text.push('\n');
    }
    text
}
