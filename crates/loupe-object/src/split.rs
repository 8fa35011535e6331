use regex::Regex;

use crate::error::ParseResult;

/// A separator for [`Separator::split`]: either a literal substring or a
/// compiled regular expression.
///
/// The two variants dispatch to distinct matching strategies. Literals use
/// first-occurrence substring search; patterns find non-overlapping regex
/// matches left to right.
#[derive(Clone, Debug)]
pub enum Separator {
    /// Match an exact substring.
    Literal(String),
    /// Match a regular expression.
    Pattern(Regex),
}

impl Separator {
    /// Literal separator from a substring.
    pub fn literal(sep: impl Into<String>) -> Self {
        Self::Literal(sep.into())
    }

    /// Pattern separator from a regex source string.
    pub fn pattern(pattern: &str) -> ParseResult<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Split `input` into at most `limit` pieces.
    ///
    /// `limit <= 0` is an ordinary unbounded split on every occurrence of
    /// the separator. For `limit > 0`, the first `limit - 1` pieces each
    /// consume one separator match and the final piece is the entire
    /// remainder after the last consumed match. Fewer matches than
    /// `limit - 1` yield fewer pieces; an input with no match at all comes
    /// back as a single piece. Never pads, never fails.
    pub fn split(&self, input: &str, limit: isize) -> Vec<String> {
        match self {
            Self::Literal(sep) => split_literal(input, sep, limit),
            Self::Pattern(re) => split_pattern(input, re, limit),
        }
    }
}

fn split_literal(input: &str, sep: &str, limit: isize) -> Vec<String> {
    if limit <= 0 {
        return input.split(sep).map(str::to_owned).collect();
    }
    let mut pieces = Vec::new();
    let mut rest = input;
    for _ in 1..limit {
        match rest.find(sep) {
            Some(pos) => {
                pieces.push(rest[..pos].to_owned());
                rest = &rest[pos + sep.len()..];
            }
            None => break,
        }
    }
    pieces.push(rest.to_owned());
    pieces
}

fn split_pattern(input: &str, re: &Regex, limit: isize) -> Vec<String> {
    if limit <= 0 {
        return re.split(input).map(str::to_owned).collect();
    }
    let mut pieces = Vec::new();
    let mut rest = input;
    for _ in 1..limit {
        match re.find(rest) {
            Some(m) => {
                pieces.push(rest[..m.start()].to_owned());
                rest = &rest[m.end()..];
            }
            None => break,
        }
    }
    pieces.push(rest.to_owned());
    pieces
}
