//! Shared helpers for builder tests.

use crate::builder::PatternBuilder;

/// Compile `builder` and test `input` against it. Panics on a construction
/// error; tests for error cases call `compile()` directly.
pub fn is_match(builder: &PatternBuilder, input: &str) -> bool {
    let regex = builder.compile().expect("pattern should compile");
    regex.is_match(input).expect("matching should not error")
}

/// Compile `builder` and return the span of the first match in `input`.
pub fn found_span(builder: &PatternBuilder, input: &str) -> Option<(usize, usize)> {
    let regex = builder.compile().expect("pattern should compile");
    regex
        .find(input)
        .expect("matching should not error")
        .map(|m| (m.start(), m.end()))
}
