//! Fluent builder for regular expressions.
//!
//! Describes a text pattern through readable chained vocabulary — anchors,
//! repetition counts, literals, character classes, alternation, capturing
//! groups, lookahead, greediness control — and compiles the accumulated
//! description into a [`fancy_regex::Regex`]. The builder only produces
//! pattern text and flags; all matching is done by the compiled regex.
//!
//! ```
//! use fluent_regex::PatternBuilder;
//!
//! let regex = PatternBuilder::new()
//!     .start_of_input()
//!     .exactly(3).of("p")
//!     .end_of_input()
//!     .compile()?;
//! assert!(regex.is_match("ppp")?);
//! assert!(!regex.is_match("pp")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Builders compose: one builder can be spliced into another as an
//! alternation arm, a quantified sub-expression, or a lookahead body.
//!
//! ```
//! use fluent_regex::PatternBuilder;
//!
//! let scheme = PatternBuilder::new().either("http").or("ftp");
//! let regex = PatternBuilder::new()
//!     .start_of_input()
//!     .like(&scheme)
//!     .of("://")
//!     .min(1).of_any()
//!     .compile()?;
//! assert!(regex.is_match("http://example.com")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod escape;
pub mod quantity;
pub mod splice;

#[cfg(test)]
pub mod testutil;

pub use builder::PatternBuilder;
pub use error::Error;
pub use quantity::Quantity;
pub use splice::{Splice, Spliced};
