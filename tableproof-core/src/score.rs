//! Sorted-set scores and their canonical text form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal exponents in `(MIN_PLAIN_EXPONENT, MAX_PLAIN_EXPONENT]` render
/// without scientific notation.
const MAX_PLAIN_EXPONENT: i32 = 21;
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Score of a sorted-set member as written by a test.
///
/// The UI renders scores as text, so every comparison goes through
/// [`Score::canonical`] and is an exact string match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Score {
    /// The text the score column shows for this score.
    ///
    /// Floats use the shortest digits that round-trip, in the same layout as a
    /// JavaScript number: `5.0` renders as `"5"`, `1e21` as `"1e+21"`, `1e-7`
    /// as `"1e-7"`, negative zero as `"0"`, and non-finite values as
    /// `NaN`/`Infinity`.
    pub fn canonical(&self) -> String {
        match self {
            Score::Int(n) => n.to_string(),
            Score::Text(s) => s.clone(),
            Score::Float(f) => canonical_float(*f),
        }
    }
}

fn canonical_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e300".
    let sci = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    // Value is 0.DIGITS * 10^n.
    let n = exponent + 1;

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", (n - 1).abs())
        }
    };

    if f < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<i64> for Score {
    fn from(n: i64) -> Self {
        Score::Int(n)
    }
}

impl From<i32> for Score {
    fn from(n: i32) -> Self {
        Score::Int(n.into())
    }
}

impl From<f64> for Score {
    fn from(f: f64) -> Self {
        Score::Float(f)
    }
}

impl From<&str> for Score {
    fn from(s: &str) -> Self {
        Score::Text(s.to_string())
    }
}

impl From<String> for Score {
    fn from(s: String) -> Self {
        Score::Text(s)
    }
}

/// Expected sorted-set member, optionally with its score.
///
/// A `None` score only checks the member is present. Any `Some` score is
/// compared, zero included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedSetEntry {
    pub member: String,
    pub score: Option<Score>,
}

impl SortedSetEntry {
    pub fn new(member: impl Into<String>, score: impl Into<Score>) -> Self {
        Self {
            member: member.into(),
            score: Some(score.into()),
        }
    }

    /// An entry that only asserts the member exists.
    pub fn member(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            score: None,
        }
    }
}
