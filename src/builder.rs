//! The fluent pattern builder.
//!
//! A `PatternBuilder` accumulates finalized pattern fragments through a
//! chain of calls and compiles them into a `fancy_regex::Regex`. Repetition
//! setters (`exactly`/`min`/`max`) park a pending quantifier that the next
//! atom-producing call consumes; alternation (`either`/`or`) stays open
//! until the chain moves on; `as_group` retroactively promotes the last
//! fragment to a capturing group.

use fancy_regex::Regex;

use crate::error::Error;
use crate::escape::{escape_class, escape_literal, is_single_token};
use crate::quantity::Quantity;
use crate::splice::Splice;

#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    /// Finalized fragments, immutable once appended (except promotion by
    /// `as_group` and the reluctance suffix, both of which target the last
    /// fragment only).
    fragments: Vec<String>,
    /// Quantifier parked by `exactly`/`min`/`max`, consumed by the next atom.
    pending: Option<Quantity>,
    /// Alternatives accumulated by `either`/`or`, closed on the next
    /// non-`or` call.
    alternation: Option<Vec<String>>,
    /// Capturing groups opened so far, including groups inside spliced
    /// sub-builders.
    groups_used: usize,
    ignore_case: bool,
    multi_line: bool,
    /// Whether the last fragment ended in a quantifier `reluctantly` may
    /// modify.
    last_quantified: bool,
    /// First construction error recorded by an eagerly-validated call.
    defect: Option<Error>,
}

impl PatternBuilder {
    pub fn new() -> PatternBuilder {
        PatternBuilder::default()
    }

    // Flags

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn multi_line(mut self) -> Self {
        self.multi_line = true;
        self
    }

    // Anchors

    pub fn start_of_input(mut self) -> Self {
        self.push_anchor("^");
        self
    }

    pub fn start_of_line(self) -> Self {
        self.multi_line().start_of_input()
    }

    pub fn end_of_input(mut self) -> Self {
        self.push_anchor("$");
        self
    }

    pub fn end_of_line(self) -> Self {
        self.multi_line().end_of_input()
    }

    // Quantifier setters

    /// Require exactly `n` repetitions of the next atom. `n = 1` still
    /// quantifies explicitly (`{1}`).
    pub fn exactly(mut self, n: usize) -> Self {
        self.close_alternation();
        self.pending = Some(Quantity::Exactly(n));
        self
    }

    /// Require at least `n` repetitions of the next atom. Composes with a
    /// prior `max` into a bounded range.
    pub fn min(mut self, n: usize) -> Self {
        self.close_alternation();
        self.pending = match self.pending.take() {
            Some(Quantity::AtMost(max)) => self.checked_range(n, max),
            _ => Some(Quantity::AtLeast(n)),
        };
        self
    }

    /// Require at most `n` repetitions of the next atom. Composes with a
    /// prior `min` into a bounded range.
    pub fn max(mut self, n: usize) -> Self {
        self.close_alternation();
        self.pending = match self.pending.take() {
            Some(Quantity::AtLeast(min)) => self.checked_range(min, n),
            _ => Some(Quantity::AtMost(n)),
        };
        self
    }

    // Atom producers

    /// Match the literal `text`, metacharacters escaped. A pending
    /// quantifier applies to the whole literal as a unit.
    pub fn of(mut self, text: &str) -> Self {
        let escaped = escape_literal(text);
        let single = is_single_token(&escaped);
        self.push_atom(escaped, single);
        self
    }

    /// Match any single character.
    pub fn of_any(mut self) -> Self {
        self.push_atom(".".to_string(), true);
        self
    }

    /// Match any one character in `chars`.
    pub fn from(mut self, chars: &[char]) -> Self {
        let class = format!("[{}]", escape_class(chars));
        self.push_atom(class, true);
        self
    }

    /// Match any one character not in `chars`.
    pub fn not_from(mut self, chars: &[char]) -> Self {
        let class = format!("[^{}]", escape_class(chars));
        self.push_atom(class, true);
        self
    }

    /// Splice another builder as a non-capturing group; a pending quantifier
    /// applies to the whole group. The other builder is snapshotted at this
    /// point and may be mutated afterwards without affecting this one.
    pub fn like(mut self, other: &PatternBuilder) -> Self {
        self.close_alternation();
        let text = self.adopt(other);
        self.push_atom(format!("(?:{text})"), true);
        self
    }

    /// Back-reference to capturing group `n`, 1-indexed in the order groups
    /// were opened in this chain. Referencing a group not yet opened is a
    /// construction error.
    pub fn of_group(mut self, n: usize) -> Self {
        if n == 0 || n > self.groups_used {
            self.record(Error::UnresolvedGroupReference {
                reference: n,
                available: self.groups_used,
            });
            return self;
        }
        self.push_atom(format!("\\{n}"), true);
        self
    }

    /// Promote the most recently appended fragment to a capturing group.
    /// Does not consume a pending quantifier.
    pub fn as_group(mut self) -> Self {
        self.close_alternation();
        if let Some(last) = self.fragments.last_mut() {
            *last = format!("({last})");
            self.groups_used += 1;
        }
        self.last_quantified = false;
        self
    }

    // Alternation

    /// Open an alternation group with `alt` (a literal string or another
    /// builder) as its first alternative. The group closes when the chain
    /// moves on to any non-`or` call or compilation.
    pub fn either(mut self, alt: impl Splice) -> Self {
        self.close_alternation();
        let text = self.adopt(alt);
        self.alternation = Some(vec![text]);
        self.last_quantified = false;
        self
    }

    /// Add one more alternative to the open alternation group. With no open
    /// group, the most recently appended fragment becomes the first
    /// alternative.
    pub fn or(mut self, alt: impl Splice) -> Self {
        let text = self.adopt(alt);
        if let Some(alts) = &mut self.alternation {
            alts.push(text);
        } else if let Some(first) = self.fragments.pop() {
            self.alternation = Some(vec![first, text]);
        } else {
            self.alternation = Some(vec![text]);
        }
        self.last_quantified = false;
        self
    }

    // Lookaround

    /// Positive lookahead: require `other` to match at this position
    /// without consuming input.
    pub fn ahead(mut self, other: &PatternBuilder) -> Self {
        self.close_alternation();
        let text = self.adopt(other);
        self.fragments.push(format!("(?={text})"));
        self.last_quantified = false;
        self
    }

    /// Negative lookahead: require `other` not to match at this position.
    pub fn not_ahead(mut self, other: &PatternBuilder) -> Self {
        self.close_alternation();
        let text = self.adopt(other);
        self.fragments.push(format!("(?!{text})"));
        self.last_quantified = false;
        self
    }

    // Greediness

    /// Make the quantifier just emitted non-greedy. Must immediately follow
    /// an atom-producing call that emitted a quantified repetition.
    pub fn reluctantly(mut self) -> Self {
        if !self.last_quantified {
            self.record(Error::MisplacedReluctance);
            return self;
        }
        if let Some(last) = self.fragments.last_mut() {
            last.push('?');
        }
        self.last_quantified = false;
        self
    }

    // Convenience vocabulary

    pub fn then(self, text: &str) -> Self {
        self.exactly(1).of(text)
    }

    pub fn find(self, text: &str) -> Self {
        self.then(text)
    }

    pub fn maybe(self, text: &str) -> Self {
        self.max(1).of(text)
    }

    pub fn some(self, chars: &[char]) -> Self {
        self.min(1).from(chars)
    }

    pub fn maybe_some(self, chars: &[char]) -> Self {
        self.min(0).from(chars)
    }

    pub fn any(self) -> Self {
        self.exactly(1).of_any()
    }

    pub fn anything(self) -> Self {
        self.min(0).of_any()
    }

    /// Any run of one or more characters that is not `text`.
    pub fn something_but(self, text: &str) -> Self {
        match single_char(text) {
            Some(ch) => self.exactly(1).not_from(&[ch]),
            None => {
                let literal = PatternBuilder::new().exactly(1).of(text);
                self.not_ahead(&literal).min(1).of_any()
            }
        }
    }

    pub fn something(self) -> Self {
        self.min(1).of_any()
    }

    /// Any run of zero or more characters that is not `text`.
    pub fn anything_but(self, text: &str) -> Self {
        match single_char(text) {
            Some(ch) => self.max(1).not_from(&[ch]),
            None => {
                let literal = PatternBuilder::new().exactly(1).of(text);
                self.not_ahead(&literal).min(0).of_any()
            }
        }
    }

    pub fn line_break(mut self) -> Self {
        self.push_atom("(?:\\r\\n|\\r|\\n)".to_string(), true);
        self
    }

    pub fn tab(mut self) -> Self {
        self.push_atom("\\t".to_string(), true);
        self
    }

    pub fn whitespace(mut self) -> Self {
        self.push_atom("\\s".to_string(), true);
        self
    }

    pub fn not_whitespace(mut self) -> Self {
        self.push_atom("\\S".to_string(), true);
        self
    }

    pub fn digit(mut self) -> Self {
        self.push_atom("\\d".to_string(), true);
        self
    }

    pub fn not_digit(mut self) -> Self {
        self.push_atom("\\D".to_string(), true);
        self
    }

    /// Exactly one ASCII letter.
    pub fn letter(self) -> Self {
        self.exactly(1).letters()
    }

    pub fn not_letter(self) -> Self {
        self.exactly(1).not_letters()
    }

    /// ASCII letters, taking the caller's pending quantifier.
    pub fn letters(mut self) -> Self {
        self.push_atom("[A-Za-z]".to_string(), true);
        self
    }

    pub fn not_letters(mut self) -> Self {
        self.push_atom("[^A-Za-z]".to_string(), true);
        self
    }

    pub fn lower_case_letter(self) -> Self {
        self.exactly(1).lower_case_letters()
    }

    pub fn lower_case_letters(mut self) -> Self {
        self.push_atom("[a-z]".to_string(), true);
        self
    }

    pub fn upper_case_letter(self) -> Self {
        self.exactly(1).upper_case_letters()
    }

    pub fn upper_case_letters(mut self) -> Self {
        self.push_atom("[A-Z]".to_string(), true);
        self
    }

    /// Splice `other` exactly once.
    pub fn append(self, other: &PatternBuilder) -> Self {
        self.exactly(1).like(other)
    }

    /// Splice `other` zero or one times.
    pub fn optional(self, other: &PatternBuilder) -> Self {
        self.max(1).like(other)
    }

    // Compilation

    /// The assembled pattern text: fragments in order, with any open
    /// alternation closed. Non-mutating; flags are not included.
    pub fn pattern_text(&self) -> String {
        let mut text = self.fragments.concat();
        if let Some(alts) = &self.alternation {
            text.push_str("(?:");
            text.push_str(&alts.join("|"));
            text.push(')');
        }
        text
    }

    /// Capturing groups opened so far in this chain.
    pub fn group_count(&self) -> usize {
        self.groups_used
    }

    /// Compile the accumulated pattern through the external matcher.
    /// Idempotent with respect to the accumulated state; the first recorded
    /// construction error, if any, is returned instead.
    pub fn compile(&self) -> Result<Regex, Error> {
        if let Some(defect) = &self.defect {
            return Err(defect.clone());
        }
        let text = self.pattern_text();
        let pattern = match (self.ignore_case, self.multi_line) {
            (false, false) => text,
            (true, false) => format!("(?i){text}"),
            (false, true) => format!("(?m){text}"),
            (true, true) => format!("(?im){text}"),
        };
        Regex::new(&pattern).map_err(Error::matcher)
    }

    pub(crate) fn first_defect(&self) -> Option<&Error> {
        self.defect.as_ref()
    }

    // Internals

    fn record(&mut self, err: Error) {
        if self.defect.is_none() {
            self.defect = Some(err);
        }
    }

    fn checked_range(&mut self, min: usize, max: usize) -> Option<Quantity> {
        match Quantity::range(min, max) {
            Ok(quantity) => Some(quantity),
            Err(err) => {
                self.record(err);
                None
            }
        }
    }

    /// Append one atom fragment, consuming the pending quantifier. `single`
    /// marks atoms that are already one quantifiable unit and need no
    /// `(?:...)` wrapper.
    fn push_atom(&mut self, atom: String, single: bool) {
        self.close_alternation();
        match self.pending.take() {
            Some(quantity) => {
                let unit = if single { atom } else { format!("(?:{atom})") };
                self.fragments.push(format!("{unit}{}", quantity.suffix()));
                self.last_quantified = true;
            }
            None => {
                self.fragments.push(atom);
                self.last_quantified = false;
            }
        }
    }

    /// Anchors are zero-width: they neither consume nor clear the pending
    /// quantifier, which stays parked for the next atom.
    fn push_anchor(&mut self, anchor: &str) {
        self.close_alternation();
        self.fragments.push(anchor.to_string());
        self.last_quantified = false;
    }

    fn close_alternation(&mut self) {
        if let Some(alts) = self.alternation.take() {
            self.fragments.push(format!("(?:{})", alts.join("|")));
            self.last_quantified = false;
        }
    }

    /// Snapshot a spliceable value for this chain, adopting its groups and
    /// any recorded defect.
    fn adopt(&mut self, alt: impl Splice) -> String {
        let spliced = alt.splice(self.groups_used);
        if let Some(defect) = spliced.defect {
            self.record(defect);
        }
        self.groups_used += spliced.groups;
        spliced.text
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
