use crate::err::{RpnErr, RpnResult};

pub const UNARY_MINUS: char = '~';

/// How a raw string token is treated by the converter and the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Numeral,
    OpenParen,
    CloseParen,
    /// Any token that is exactly one character long.
    Operator(char),
    Other,
}
impl TokenKind {
    pub fn classify(tok: &str) -> TokenKind {
        if is_numeral(tok) {
            return Self::Numeral;
        }
        match tok {
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            _ => {
                let mut chars = tok.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Operator(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// One or more ASCII decimal digits.
pub fn is_numeral(tok: &str) -> bool {
    !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Negate,
}
impl Operation {
    pub fn from_char(c: char) -> RpnResult<Operation> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            '^' => Ok(Self::Power),
            UNARY_MINUS => Ok(Self::Negate),
            _ => Err(RpnErr::UnknownOperator(c)),
        }
    }
    pub fn arity(&self) -> usize {
        match self {
            Operation::Negate => 1,
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => 2,
        }
    }
    /// `first` is the left-hand operand; for `Negate` it is ignored and the
    /// result is `0 - second`.
    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            Operation::Add => first + second,
            Operation::Subtract => first - second,
            Operation::Multiply => first * second,
            // IEEE semantics: x / 0 gives inf or NaN
            Operation::Divide => first / second,
            Operation::Power => power(first, second),
            Operation::Negate => 0.0 - second,
        }
    }
}

/// `powf`, except that a NaN exponent, or an infinite exponent on a base of
/// magnitude 1, gives NaN rather than 1.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (exponent.is_infinite() && base.abs() == 1.0) {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::{Operation, TokenKind};
    use crate::err::RpnErr;

    #[test]
    fn classify_matrix() {
        let cases = [
            ("0", TokenKind::Numeral),
            ("25", TokenKind::Numeral),
            ("007", TokenKind::Numeral),
            ("(", TokenKind::OpenParen),
            (")", TokenKind::CloseParen),
            ("+", TokenKind::Operator('+')),
            ("~", TokenKind::Operator('~')),
            ("$", TokenKind::Operator('$')),
            ("", TokenKind::Other),
            ("abc", TokenKind::Other),
            ("-5", TokenKind::Other),
            ("3.5", TokenKind::Other),
            ("٣", TokenKind::Operator('٣')),
        ];

        for (input, expected) in cases {
            assert_eq!(TokenKind::classify(input), expected, "input: {input}");
        }
    }

    #[test]
    fn from_char_rejects_unknown() {
        assert_eq!(Operation::from_char('~'), Ok(Operation::Negate));
        assert_eq!(Operation::from_char('^'), Ok(Operation::Power));
        assert_eq!(Operation::from_char('#'), Err(RpnErr::UnknownOperator('#')));
        assert_eq!(Operation::from_char('('), Err(RpnErr::UnknownOperator('(')));
    }

    #[test]
    fn apply_matrix() {
        let cases = [
            (Operation::Add, 2.0, 2.0, 4.0),
            (Operation::Subtract, 5.0, 3.0, 2.0),
            (Operation::Multiply, 3.0, 5.0, 15.0),
            (Operation::Divide, 10.0, 5.0, 2.0),
            (Operation::Power, 2.0, 3.0, 8.0),
            (Operation::Negate, 123.0, 5.0, -5.0),
        ];

        for (op, first, second, expected) in cases {
            let actual = op.apply(first, second);
            assert!((actual - expected).abs() < 1e-9, "op: {op:?} got {actual}");
        }
    }

    #[test]
    fn power_nan_matrix() {
        let cases = [
            (1.0, f64::NAN),
            (1.0, f64::INFINITY),
            (1.0, f64::NEG_INFINITY),
            (-1.0, f64::INFINITY),
            (-1.0, f64::NEG_INFINITY),
            (2.0, f64::NAN),
            (0.0, f64::NAN),
        ];

        for (base, exponent) in cases {
            let actual = Operation::Power.apply(base, exponent);
            assert!(actual.is_nan(), "{base} ^ {exponent} got {actual}");
        }
    }

    #[test]
    fn power_keeps_powf_elsewhere() {
        let cases = [
            (1.0, 0.0, 1.0),
            (f64::NAN, 0.0, 1.0),
            (2.0, f64::INFINITY, f64::INFINITY),
            (0.5, f64::INFINITY, 0.0),
            (2.0, -1.0, 0.5),
        ];

        for (base, exponent, expected) in cases {
            assert_eq!(Operation::Power.apply(base, exponent), expected, "{base} ^ {exponent}");
        }
    }

    #[test]
    fn divide_by_zero_follows_float_semantics() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }
}
