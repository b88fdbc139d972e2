//! Header line recognition
//!
//! A header names the document that the following warning lines belong to.
//! It is recognized only when the exact literal decoration surrounds a
//! `docs/<anything>.md` path; escape sequences are never stripped or normalized.

use serde::{Deserialize, Serialize};

/// Underline + yellow foreground, as it appears in the log with the escape byte removed.
pub const DEFAULT_HEADER_PREFIX: &str = "[4m[33m";
/// Default foreground + underline off.
pub const DEFAULT_HEADER_SUFFIX: &str = "[39m[24m";

const DOCUMENT_DIR: &str = "docs/";
const DOCUMENT_EXT: &str = ".md";

/// Literal wrapping that marks a header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDecoration {
    pub prefix: String,
    pub suffix: String,
}

impl Default for HeaderDecoration {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_HEADER_PREFIX.to_string(),
            suffix: DEFAULT_HEADER_SUFFIX.to_string(),
        }
    }
}

impl HeaderDecoration {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Return the document path if `line` is a header line
    ///
    /// # Arguments
    /// * `line` - A single log line, without its newline
    ///
    /// # Returns
    /// The wrapped path, borrowed from `line`, or `None`
    pub fn match_header<'a>(&self, line: &'a str) -> Option<&'a str> {
        let path = line
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;

        if is_document_path(path) {
            Some(path)
        } else {
            None
        }
    }
}

/// `docs/` followed by anything (possibly nothing) and ending in `.md`
fn is_document_path(path: &str) -> bool {
    path.strip_prefix(DOCUMENT_DIR)
        .map_or(false, |rest| rest.ends_with(DOCUMENT_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(path: &str) -> String {
        format!("{}{}{}", DEFAULT_HEADER_PREFIX, path, DEFAULT_HEADER_SUFFIX)
    }

    #[test]
    fn test_match_decorated_path() {
        let decoration = HeaderDecoration::default();
        let line = header("docs/guide/intro.md");
        assert_eq!(decoration.match_header(&line), Some("docs/guide/intro.md"));
    }

    #[test]
    fn test_bare_path_is_not_a_header() {
        let decoration = HeaderDecoration::default();
        assert_eq!(decoration.match_header("docs/guide/intro.md"), None);
        assert_eq!(decoration.match_header("see docs/a.md for details"), None);
    }

    #[test]
    fn test_extra_text_around_decoration_is_rejected() {
        let decoration = HeaderDecoration::default();
        assert_eq!(decoration.match_header(&format!(" {}", header("docs/a.md"))), None);
        assert_eq!(decoration.match_header(&format!("{} ", header("docs/a.md"))), None);
        assert_eq!(decoration.match_header(&format!("{}\r", header("docs/a.md"))), None);
    }

    #[test]
    fn test_real_escape_byte_does_not_match_literal_prefix() {
        let decoration = HeaderDecoration::default();
        let line = "\u{1b}[4m\u{1b}[33mdocs/a.md\u{1b}[39m\u{1b}[24m";
        assert_eq!(decoration.match_header(line), None);
    }

    #[test]
    fn test_path_must_be_markdown_under_docs() {
        let decoration = HeaderDecoration::default();
        assert_eq!(decoration.match_header(&header("src/a.md")), None);
        assert_eq!(decoration.match_header(&header("docs/a.txt")), None);
        assert_eq!(decoration.match_header(&header("docs/md")), None);
        assert_eq!(decoration.match_header(&header("docs/.md")), Some("docs/.md"));
    }

    #[test]
    fn test_custom_decoration() {
        let decoration = HeaderDecoration::new("<<", ">>");
        assert_eq!(decoration.match_header("<<docs/x.md>>"), Some("docs/x.md"));
        assert_eq!(decoration.match_header(&header("docs/x.md")), None);
    }
}
