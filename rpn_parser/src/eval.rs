use crate::err::{RpnResult, Trace};
use crate::token::{Operation, TokenKind};

#[derive(Default, Debug)]
struct OperandStack(Vec<f64>);
impl OperandStack {
    /// Underflow yields 0 instead of failing.
    fn pop_or_zero(&mut self) -> f64 {
        self.0.pop().unwrap_or(0.0)
    }

    fn push_op(&mut self, op: Operation) {
        let second = self.pop_or_zero();
        let first = if op.arity() == 1 {
            0.0
        } else {
            self.pop_or_zero()
        };
        self.0.push(op.apply(first, second));
    }
}

/// Digit-only tokens always parse; overlong ones saturate to infinity.
fn parse_numeral(tok: &str) -> f64 {
    tok.parse::<f64>().unwrap_or(f64::INFINITY)
}

/// Evaluates a postfix token sequence.
///
/// Missing operands count as 0, and tokens that are neither numerals nor a
/// single character (including the empty string) are skipped. The result is
/// the top of the operand stack, or 0 when nothing was pushed. The only
/// failure is a single-character token that is not one of `+ - * / ^ ~`.
///
/// ```
/// use rpn_parser::evaluate;
///
/// assert_eq!(evaluate(&["25", "4", "+", "2", "~", "*"]).unwrap(), -58.0);
/// ```
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> RpnResult<f64> {
    let mut locals = OperandStack::default();
    for t in tokens {
        let tok = t.as_ref();
        let c = match TokenKind::classify(tok) {
            TokenKind::Numeral => {
                locals.0.push(parse_numeral(tok));
                continue;
            }
            TokenKind::Other => continue,
            // single characters too, so they reach the unknown-operator check
            TokenKind::OpenParen => '(',
            TokenKind::CloseParen => ')',
            TokenKind::Operator(c) => c,
        };
        let op = Operation::from_char(c).trace(line!(), "evaluate")?;
        locals.push_op(op);
    }
    Ok(locals.pop_or_zero())
}
