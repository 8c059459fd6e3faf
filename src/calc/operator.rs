//! Operator definitions and dispatch table

use crate::error::{FlatError, Result};

/// Supported operators, tagged with their ASCII symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Operator {
    Add = b'+',
    Sub = b'-',
    Mul = b'*',
    Div = b'/',
    Rem = b'%',
}

impl Operator {
    /// All operators, in table order
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
    ];

    /// Look up an operator by symbol
    pub fn from_symbol(symbol: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or(FlatError::UnknownOperator(symbol))
    }

    /// The operator's symbol
    pub fn symbol(self) -> char {
        self as u8 as char
    }

    /// Apply the operator with checked arithmetic
    pub fn apply(self, a: i32, b: i32) -> Result<i32> {
        let result = match self {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div | Operator::Rem if b == 0 => return Err(FlatError::DivisionByZero),
            Operator::Div => a.checked_div(b),
            Operator::Rem => a.checked_rem(b),
        };
        result.ok_or(FlatError::Overflow)
    }
}

/// 256-slot table indexed by operator byte
pub struct DispatchTable {
    slots: [Option<Operator>; 256],
}

impl DispatchTable {
    /// Table with every supported operator registered
    pub fn new() -> Self {
        let mut slots = [None; 256];
        for op in Operator::ALL {
            slots[op as u8 as usize] = Some(op);
        }
        Self { slots }
    }

    /// Operator registered for `symbol`, if any
    pub fn lookup(&self, symbol: char) -> Result<Operator> {
        u8::try_from(symbol)
            .ok()
            .and_then(|byte| self.slots[byte as usize])
            .ok_or(FlatError::UnknownOperator(symbol))
    }

    /// Look up `symbol` and apply it to `a` and `b`
    pub fn evaluate(&self, a: i32, symbol: char, b: i32) -> Result<i32> {
        self.lookup(symbol)?.apply(a, b)
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}
