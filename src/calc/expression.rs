//! Expression parsing
//!
//! Accepts `"<int> <op> <int>"`; whitespace around the operator is optional.

use std::fmt;

use crate::error::{FlatError, Result};

use super::DispatchTable;

/// A parsed binary expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub lhs: i32,
    /// Raw symbol; resolved against a table at evaluation time
    pub symbol: char,
    pub rhs: i32,
}

impl Expression {
    /// Evaluate through the given table
    pub fn evaluate(&self, table: &DispatchTable) -> Result<i32> {
        table.evaluate(self.lhs, self.symbol, self.rhs)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.symbol, self.rhs)
    }
}

/// Parse one input line
pub fn parse_expression(line: &str) -> Result<Expression> {
    let line = line.trim();
    let (lhs, rest) = split_integer(line)
        .ok_or_else(|| FlatError::Parse(format!("expected a number at start of '{}'", line)))?;

    let rest = rest.trim_start();
    let mut chars = rest.chars();
    let symbol = chars
        .next()
        .ok_or_else(|| FlatError::Parse(format!("missing operator in '{}'", line)))?;

    let (rhs, tail) = split_integer(chars.as_str().trim_start())
        .ok_or_else(|| FlatError::Parse(format!("expected a number after '{}'", symbol)))?;
    if !tail.trim().is_empty() {
        return Err(FlatError::Parse(format!("unexpected trailing input '{}'", tail.trim())));
    }

    Ok(Expression { lhs, symbol, rhs })
}

/// Split a leading optionally-signed integer off `s`
fn split_integer(s: &str) -> Option<(i32, &str)> {
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }

    let end = sign_len + digits;
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
