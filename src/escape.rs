//! Metacharacter escaping for pattern assembly.
//!
//! Two distinct escape sets apply: one for text spliced into the pattern
//! body (`of`, string alternatives) and one for characters placed inside a
//! character class (`from` / `not_from`), where only `^`, `-`, `]`, `[` and
//! `\` carry meaning.

/// Metacharacters that must be escaped outside a character class.
const OUTSIDE_CLASS: &[char] = &[
    '.', '^', '$', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '\\',
];

/// Metacharacters that must be escaped inside a character class.
const INSIDE_CLASS: &[char] = &['^', '-', ']', '[', '\\'];

/// Escape `text` so it matches itself when spliced into a pattern body.
pub fn escape_literal(text: &str) -> String {
    escape_with(text.chars(), OUTSIDE_CLASS)
}

/// Escape a character set for use as the body of a character class.
pub fn escape_class(chars: &[char]) -> String {
    escape_with(chars.iter().copied(), INSIDE_CLASS)
}

fn escape_with(chars: impl Iterator<Item = char>, special: &[char]) -> String {
    let mut out = String::new();
    for ch in chars {
        if special.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// True when an escaped literal is already a single quantifiable unit:
/// one character, or one backslash escape. Such atoms take a quantifier
/// directly without a `(?:...)` wrapper.
pub fn is_single_token(escaped: &str) -> bool {
    let mut chars = escaped.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => true,
        (Some('\\'), Some(_)) => chars.next().is_none(),
        _ => false,
    }
}
