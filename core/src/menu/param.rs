use crate::errors::MenuError;

use super::operation::ParamKind;

/// A menu parameter converted to the shape its operation expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Sort input where every token was an integer.
    Integers(Vec<i64>),
    /// Sort input taken as the raw characters of the line.
    Chars(Vec<char>),
    /// Non-negative Fibonacci index.
    Index(u32),
    /// Palindrome input, verbatim.
    Text(String),
}

impl Param {
    pub fn parse(kind: ParamKind, raw: &str) -> Result<Self, MenuError> {
        match kind {
            ParamKind::List => Ok(parse_list(raw)),
            ParamKind::Int => parse_index(raw).map(Param::Index),
            ParamKind::Str => Ok(Param::Text(raw.to_string())),
        }
    }
}

/// `"5 3 1"`, `"5,3,1"` and `"[5, 3, 1]"` are integer lists. A single bare
/// token such as `"53142"`, or anything with a non-integer token, is taken as
/// the characters of `raw`.
fn parse_list(raw: &str) -> Param {
    let trimmed = raw.trim();
    let bracketed = trimmed
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'));
    let body = bracketed.unwrap_or(trimmed);

    let tokens: Vec<&str> = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .collect();
    if bracketed.is_none() && tokens.len() == 1 {
        return Param::Chars(raw.chars().collect());
    }

    let ints: Result<Vec<i64>, _> = tokens.into_iter().map(str::parse::<i64>).collect();
    match ints {
        Ok(v) => Param::Integers(v),
        Err(_) => Param::Chars(raw.chars().collect()),
    }
}

fn parse_index(raw: &str) -> Result<u32, MenuError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| MenuError::InvalidParameter {
        kind: ParamKind::Int.type_name(),
        input: trimmed.to_string(),
        reason,
    };

    let n: i64 = trimmed.parse().map_err(|e| invalid(format!("{e}")))?;
    if n < 0 {
        return Err(invalid("fibonacci index must be non-negative".to_string()));
    }
    u32::try_from(n).map_err(|_| invalid(format!("index must be at most {}", u32::MAX)))
}
