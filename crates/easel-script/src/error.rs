use std::fmt;

/// What went wrong on a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// First token is not a known command.
    UnknownCommand(String),
    InvalidArgumentCount,
    /// Argument at this 0-based position is not a number.
    InvalidArgument(usize),
    /// Argument at this 0-based position is outside `[-1, 1]`.
    OutOfRange(usize),
    /// The reader failed.
    Io(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnknownCommand(_) => f.write_str("unknown command"),
            ParseErrorKind::InvalidArgumentCount => f.write_str("invalid argument count"),
            ParseErrorKind::InvalidArgument(pos) => write!(f, "invalid argument at position {pos}"),
            ParseErrorKind::OutOfRange(pos) => {
                write!(f, "value at position {pos} is not in [-1,1] range")
            }
            ParseErrorKind::Io(msg) => write!(f, "read error: {msg}"),
        }
    }
}

/// A script error. Aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number of the offending line.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownCommand(name) => {
                write!(f, "script error at line {}: unknown command `{name}`", self.line)
            }
            kind => write!(f, "script error at line {}: {kind}", self.line),
        }
    }
}

impl std::error::Error for ParseError {}
