use std::fmt;

/// Result of one menu operation, printed as the last line of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Integers(Vec<i64>),
    Chars(Vec<char>),
    Number(u128),
    Flag(bool),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integers(v) => write!(f, "{v:?}"),
            Outcome::Chars(v) => write!(f, "{v:?}"),
            Outcome::Number(n) => write!(f, "{n}"),
            Outcome::Flag(b) => write!(f, "{b}"),
        }
    }
}
