pub type RpnResult<T> = Result<T, RpnErr>;
pub trait Trace<T> {
    fn trace(self, line: u32, msg: impl ToString) -> RpnResult<T>;
}
impl<T> Trace<T> for RpnResult<T> {
    fn trace(self, line: u32, msg: impl ToString) -> RpnResult<T> {
        self.map_err(|e| e.add_trace(line, msg.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnErr {
    Backtrace(u32, String, Box<Self>),
    /// Single-character postfix token that is not `+ - * / ^ ~`.
    UnknownOperator(char),
    /// Token whose first character has no entry in the priority table.
    MissingPriority(String),
}
impl RpnErr {
    pub fn add_trace(self, line: u32, s: String) -> Self {
        Self::Backtrace(line, s, Box::new(self))
    }
    /// Innermost error, with every trace link stripped.
    pub fn root(&self) -> &Self {
        match self {
            RpnErr::Backtrace(_, _, inner) => inner.root(),
            other => other,
        }
    }
}

impl std::fmt::Display for RpnErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_chain(
            err: &RpnErr,
            f: &mut std::fmt::Formatter<'_>,
            depth: usize,
        ) -> std::fmt::Result {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            match err {
                RpnErr::UnknownOperator(c) => writeln!(f, "unknown operator '{c}'"),
                RpnErr::MissingPriority(tok) => {
                    writeln!(f, "no priority for operator token '{tok}'")
                }
                RpnErr::Backtrace(line, msg, inner) => {
                    writeln!(f, "{line}: {msg}")?;
                    write_chain(inner, f, depth + 1)
                }
            }
        }

        write_chain(self, f, 0)
    }
}

impl std::error::Error for RpnErr {}
