use std::collections::HashMap;

use crate::err::{RpnErr, RpnResult, Trace};
use crate::token::TokenKind;

/// Operator character to precedence rank. `(` must map to the lowest rank
/// and every operator character that can appear must have an entry.
pub type PriorityTable = HashMap<char, i32>;

fn priority_of(tok: &str, priority: &PriorityTable) -> RpnResult<i32> {
    tok.chars()
        .next()
        .and_then(|c| priority.get(&c).copied())
        .ok_or_else(|| RpnErr::MissingPriority(tok.to_string()))
}

#[derive(Default, Debug)]
struct OperatorStack(Vec<String>);
impl OperatorStack {
    /// Pops everything ranked at least as high as `new_op` (left associative),
    /// then pushes it. The table is only consulted while the stack is non-empty.
    fn push_op(&mut self, new_op: String, priority: &PriorityTable) -> RpnResult<Vec<String>> {
        let mut out_vec = Vec::new();
        while let Some(top) = self.0.last() {
            let top_prec = priority_of(top, priority)?;
            let new_prec = priority_of(&new_op, priority)?;
            if top_prec < new_prec {
                break;
            }
            out_vec.extend(self.0.pop());
        }
        self.0.push(new_op);
        Ok(out_vec)
    }

    fn push_open(&mut self, tok: String) {
        self.0.push(tok);
    }

    /// Unloads up to the nearest `(`, which is discarded. A `)` with no
    /// matching `(` just drains the stack.
    fn push_close(&mut self) -> Vec<String> {
        let mut out_vec = vec![];
        while let Some(op) = self.0.pop()
            && op != "("
        {
            out_vec.push(op);
        }
        out_vec
    }
}

/// Shunting-yard conversion of an infix token sequence into postfix order.
///
/// Unmatched `)` tokens are dropped silently and tokens that are neither
/// numerals nor parentheses are treated as operators, keyed on their first
/// character.
///
/// ```
/// use rpn_parser::{PriorityTable, convert};
///
/// let priority = PriorityTable::from([('(', 0), ('+', 1), ('*', 2)]);
/// let postfix = convert(&["1", "+", "2", "*", "3"], &priority).unwrap();
/// assert_eq!(postfix, ["1", "2", "3", "*", "+"]);
/// ```
pub fn convert<S: AsRef<str>>(tokens: &[S], priority: &PriorityTable) -> RpnResult<Vec<String>> {
    let mut op_stack = OperatorStack::default();
    let mut output: Vec<String> = Vec::new();
    tokens.iter().try_for_each(|t| -> RpnResult<()> {
        let tok = t.as_ref();
        match TokenKind::classify(tok) {
            TokenKind::Numeral => output.push(tok.to_string()),
            TokenKind::OpenParen => op_stack.push_open(tok.to_string()),
            TokenKind::CloseParen => output.extend(op_stack.push_close()),
            TokenKind::Operator(_) | TokenKind::Other => {
                output.extend(
                    op_stack
                        .push_op(tok.to_string(), priority)
                        .trace(line!(), format!("push operator '{tok}'"))?,
                );
            }
        }
        Ok(())
    })?;
    while let Some(v) = op_stack.0.pop() {
        output.push(v);
    }
    Ok(output)
}
