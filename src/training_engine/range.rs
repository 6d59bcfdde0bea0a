//! Compact range notation: `AA`, `88+`, `A2s+`, `22-TT`, `ATs-AJs`.
//!
//! A range is a list of tokens. Each token is parsed into a [`RangeToken`] and
//! tested against a canonical [`HandCode`]. Tokens that do not parse are simply
//! non-matching, so membership is total over any input.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::training_engine::models::{HandCode, Shape};

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    /// A literal code: `AKs`.
    Exact(HandCode),
    /// `88+` means 88 and every higher pair; `A2s+` keeps the top rank and
    /// suitedness and takes every kicker from 2 upwards.
    Open(HandCode),
    /// Inclusive interval `low-high` over the pair rank or the kicker.
    Closed { low: HandCode, high: HandCode },
}

impl RangeToken {
    pub fn parse(raw: &str) -> Option<RangeToken> {
        let token = raw.trim();

        if let Some(base) = token.strip_suffix('+') {
            return HandCode::parse(base).map(RangeToken::Open);
        }

        if let Some((a, b)) = token.split_once('-') {
            let a = HandCode::parse(a.trim())?;
            let b = HandCode::parse(b.trim())?;
            if a.shape != b.shape {
                return None;
            }
            // Endpoints may be written in either order.
            let swap = match a.shape {
                Shape::Pair => a.high > b.high,
                _           => a.low > b.low,
            };
            let (low, high) = if swap { (b, a) } else { (a, b) };
            return Some(RangeToken::Closed { low, high });
        }

        HandCode::parse(token).map(RangeToken::Exact)
    }

    pub fn contains(&self, code: &HandCode) -> bool {
        match *self {
            RangeToken::Exact(exact) => exact == *code,

            RangeToken::Open(base) if base.is_pair() => {
                code.is_pair() && code.high >= base.high
            }
            RangeToken::Open(base) => {
                code.shape == base.shape && code.high == base.high && code.low >= base.low
            }

            RangeToken::Closed { low, high } if low.is_pair() => {
                code.is_pair() && (low.high..=high.high).contains(&code.high)
            }
            RangeToken::Closed { low, high } => {
                code.shape == low.shape
                    && code.high == low.high
                    && (low.low..=high.low).contains(&code.low)
            }
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeToken::Exact(code)          => write!(f, "{code}"),
            RangeToken::Open(code)           => write!(f, "{code}+"),
            RangeToken::Closed { low, high } => write!(f, "{low}-{high}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Membership and expansion
// ---------------------------------------------------------------------------

/// True if any token in `tokens` covers `code`.
///
/// `code` must already be canonical; no canonicalization happens here.
pub fn membership<S: AsRef<str>>(code: &HandCode, tokens: &[S]) -> bool {
    tokens
        .iter()
        .filter_map(|t| RangeToken::parse(t.as_ref()))
        .any(|t| t.contains(code))
}

/// Every code covered by `tokens`, in grid order (high-to-low rank scan).
pub fn expand<S: AsRef<str>>(tokens: &[S]) -> Vec<HandCode> {
    let parsed: Vec<RangeToken> = tokens
        .iter()
        .filter_map(|t| RangeToken::parse(t.as_ref()))
        .collect();
    HandCode::all()
        .filter(|code| parsed.iter().any(|t| t.contains(code)))
        .collect()
}

/// Membership against a range that may not exist. Absent means empty.
pub fn in_range(range: Option<&Range>, code: &HandCode) -> bool {
    range.map_or(false, |r| r.contains(code))
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// An ordered list of range tokens, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Range {
    tokens: Vec<String>,
}

impl Range {
    pub fn new<I, S>(tokens: I) -> Range
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Range { tokens: tokens.into_iter().map(Into::into).collect() }
    }

    /// Parse the comma-joined wire form, e.g. `"AA, AKs, 22+"`.
    pub fn from_wire(s: &str) -> Range {
        Range::new(s.split(',').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn to_wire(&self) -> String {
        self.tokens.join(", ")
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, code: &HandCode) -> bool {
        membership(code, &self.tokens)
    }

    pub fn expand(&self) -> Vec<HandCode> {
        expand(&self.tokens)
    }

    /// The same range written as one exact code per covered hand.
    pub fn explode(&self) -> Range {
        self.expand().into_iter().collect()
    }
}

impl FromIterator<HandCode> for Range {
    fn from_iter<I: IntoIterator<Item = HandCode>>(iter: I) -> Range {
        Range::new(iter.into_iter().map(|c| c.to_string()))
    }
}
