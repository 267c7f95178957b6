//! Splicing sub-expressions into a host builder.
//!
//! `either`/`or` accept either a literal string or another builder. A
//! builder argument is read as a value snapshot of its compiled text at
//! splice time; mutating it afterwards does not affect the host. Numbered
//! back-references inside the snapshot are shifted by the host's capturing
//! group count so they keep pointing at the sub-builder's own groups.

use crate::builder::PatternBuilder;
use crate::error::Error;
use crate::escape::escape_literal;

/// A snapshot ready to be inserted into a host pattern.
#[derive(Debug, Clone)]
pub struct Spliced {
    /// Pattern text, back-references already renumbered for the host.
    pub text: String,
    /// Capturing groups the text contains; the host adds these to its count.
    pub groups: usize,
    /// Construction error carried over from the spliced builder, if any.
    pub defect: Option<Error>,
}

/// An argument that can stand as one sub-expression of a host builder.
pub trait Splice {
    /// Snapshot this value for a host whose capturing-group count is
    /// `group_offset`.
    fn splice(&self, group_offset: usize) -> Spliced;
}

impl Splice for &str {
    fn splice(&self, _group_offset: usize) -> Spliced {
        Spliced {
            text: escape_literal(self),
            groups: 0,
            defect: None,
        }
    }
}

impl Splice for String {
    fn splice(&self, group_offset: usize) -> Spliced {
        self.as_str().splice(group_offset)
    }
}

impl Splice for PatternBuilder {
    fn splice(&self, group_offset: usize) -> Spliced {
        Spliced {
            text: renumber_backrefs(&self.pattern_text(), group_offset),
            groups: self.group_count(),
            defect: self.first_defect().cloned(),
        }
    }
}

impl Splice for &PatternBuilder {
    fn splice(&self, group_offset: usize) -> Spliced {
        (*self).splice(group_offset)
    }
}

/// Shift every numbered back-reference in assembled pattern text by
/// `offset`. Every `\` in assembled text starts an escape sequence, so a
/// backslash followed by digits is always a back-reference.
fn renumber_backrefs(text: &str, offset: usize) -> String {
    if offset == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        if chars.peek().is_some_and(char::is_ascii_digit) {
            let mut reference = 0usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                reference = reference * 10 + digit as usize;
                chars.next();
            }
            out.push('\\');
            out.push_str(&(reference + offset).to_string());
        } else {
            out.push('\\');
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        }
    }
    out
}
