//! Calculator Module
//!
//! Integer arithmetic dispatched through an operator-keyed table.
//!
//! ## Responsibilities
//! - Map an operator symbol to its operation
//! - Return every failure as a value (no shared error flag)
//! - Parse `"<int> <op> <int>"` input lines
//!
//! ## Dispatch Table
//! ```text
//!   byte  0x00 .. '%'  '*'  '+'  '-'  '/' .. 0xFF
//!   slot  None .. Rem  Mul  Add  Sub  Div .. None
//! ```

mod expression;
mod operator;

pub use expression::{parse_expression, Expression};
pub use operator::{DispatchTable, Operator};
