//! Infix to postfix conversion and postfix evaluation over pre-split string
//! tokens (integers, `+ - * / ^`, parentheses and the unary minus `~`).
//!
//! Both entry points are lenient: unmatched `)` is dropped, junk tokens are
//! skipped and missing operands count as 0. Callers relying on these rules
//! should not expect them to be tightened.

pub mod err;
pub mod token;

mod convert;
mod eval;

pub use convert::{PriorityTable, convert};
pub use err::{RpnErr, RpnResult, Trace};
pub use eval::evaluate;
pub use token::{Operation, TokenKind, UNARY_MINUS};
