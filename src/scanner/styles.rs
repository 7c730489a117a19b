//! Comment styles recognized by the scanner
//!
//! Styles are tried in table order and the first one found anywhere in the
//! line wins. Nothing here knows about string literals, so `"http://x"` in
//! code reads as a `//` comment.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token that closes a block comment
pub const BLOCK_CLOSE: &str = "*/";

/// One entry of the comment style table
#[derive(Debug)]
pub struct CommentStyle {
    pub name: &'static str,
    pattern: Regex,
    /// Whether an unterminated match continues onto following lines
    pub spans_lines: bool,
}

/// Ordered comment style table: `//`, then `#`, then `/* */`
///
/// The block pattern prefers the shortest closed `/* ... */` span and falls
/// back to `/*` through end of line when the comment is left open. Group 1
/// is present only when the span is closed.
pub static COMMENT_STYLES: Lazy<Vec<CommentStyle>> = Lazy::new(|| {
    vec![
        CommentStyle {
            name: "line-slash",
            pattern: Regex::new(r"//.*").expect("Invalid line-slash regex"),
            spans_lines: false,
        },
        CommentStyle {
            name: "line-hash",
            pattern: Regex::new(r"#.*").expect("Invalid line-hash regex"),
            spans_lines: false,
        },
        CommentStyle {
            name: "block",
            pattern: Regex::new(r"/\*(?:.*?(\*/)|.*)").expect("Invalid block regex"),
            spans_lines: true,
        },
    ]
});

/// A comment found on a single line
#[derive(Debug, Clone, Copy)]
pub struct CommentMatch<'a> {
    pub style: &'static CommentStyle,
    /// Matched text, delimiters included
    pub text: &'a str,
    /// False for a block comment still open at end of line
    pub closed: bool,
}

impl<'a> CommentMatch<'a> {
    /// Whether this match opens a block comment that continues past the line
    pub fn opens_block(&self) -> bool {
        self.style.spans_lines && !self.closed
    }

    /// Text searched for markers: the closing token is not part of it
    pub fn body(&self) -> &'a str {
        if self.style.spans_lines {
            self.text.strip_suffix(BLOCK_CLOSE).unwrap_or(self.text)
        } else {
            self.text
        }
    }
}

/// Find the comment on a line using the first style that matches
pub fn match_comment(line: &str) -> Option<CommentMatch<'_>> {
    let styles: &'static [CommentStyle] = COMMENT_STYLES.as_slice();
    for style in styles {
        if let Some(caps) = style.pattern.captures(line) {
            let whole = caps.get(0)?;
            let closed = !style.spans_lines || caps.get(1).is_some();
            return Some(CommentMatch {
                style,
                text: whole.as_str(),
                closed,
            });
        }
    }
    None
}

/// Whether a line inside a block comment closes it
pub fn closes_block(line: &str) -> bool {
    line.trim().ends_with(BLOCK_CLOSE)
}
