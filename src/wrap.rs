//! Text wrapping policies.
//!
//! A wrapping policy splits text into the fragments a line builder is allowed
//! to break between. Policies only *split*: joining the fragments must give
//! back the input exactly, otherwise line assembly corrupts the text.

use std::fmt;

/// Splits text into ordered, non-empty fragments.
///
/// Implementations must return a partition of `text`: concatenating the
/// fragments reproduces `text`, and no fragment is empty. Empty input yields
/// no fragments.
pub trait WrappingPolicy: fmt::Debug + Send + Sync {
    fn wrap<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Split `text` after every run of chars matching `is_break`, keeping the
/// run at the end of the preceding fragment.
///
/// A break never falls between two break chars, so `"a, b"` splits into
/// `["a, ", "b"]` rather than leaving a lone space fragment.
pub fn split_after<'a>(text: &'a str, is_break: impl Fn(char) -> bool) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut after_break = false;

    for (idx, ch) in text.char_indices() {
        let breaks = is_break(ch);
        if after_break && !breaks {
            if let Some(fragment) = text.get(start..idx) {
                fragments.push(fragment);
            }
            start = idx;
        }
        after_break = breaks;
    }

    if let Some(rest) = text.get(start..) {
        if !rest.is_empty() {
            fragments.push(rest);
        }
    }

    fragments
}

/// Breaks after whitespace, `-`, `@`, `,`, `.`, `:` and `;`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultWrap;

impl DefaultWrap {
    #[must_use]
    pub fn is_break(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '-' | '@' | ',' | '.' | ':' | ';')
    }
}

impl WrappingPolicy for DefaultWrap {
    fn wrap<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_after(text, Self::is_break)
    }
}

/// Breaks after whitespace only, so hyphenated words and e-mail addresses
/// stay whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceWrap;

impl WrappingPolicy for WhitespaceWrap {
    fn wrap<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_after(text, char::is_whitespace)
    }
}

/// Breaks after any of a caller-chosen set of chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitAfter {
    pub breaks: Vec<char>,
}

impl SplitAfter {
    pub fn new(breaks: impl IntoIterator<Item = char>) -> Self {
        Self {
            breaks: breaks.into_iter().collect(),
        }
    }
}

impl WrappingPolicy for SplitAfter {
    fn wrap<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_after(text, |ch| self.breaks.contains(&ch))
    }
}

/// Adapts a plain function into a policy: `FnWrap(split_graphemes)`.
#[derive(Clone, Copy)]
pub struct FnWrap<F>(pub F);

impl<F> fmt::Debug for FnWrap<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnWrap(..)")
    }
}

impl<F> WrappingPolicy for FnWrap<F>
where
    F: for<'a> Fn(&'a str) -> Vec<&'a str> + Send + Sync,
{
    fn wrap<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (self.0)(text)
    }
}
