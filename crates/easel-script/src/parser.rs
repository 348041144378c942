use std::io::{BufRead, Cursor};

use easel_engine::painter::{DrawingState, Operation};

use crate::command::{parse_line, Command};
use crate::error::{ParseError, ParseErrorKind};

// ── Parser ────────────────────────────────────────────────────────────────

/// Turns scripts into operation sequences for the event loop.
///
/// The drawing state survives across [`parse`](Parser::parse) calls, so
/// scripts submitted one after another keep building on the same picture.
/// A failed parse returns no operations and leaves that state as it was.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    state: DrawingState,
}

impl Parser {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// State as of the end of the last successful parse.
    #[inline]
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Parses a whole script.
    ///
    /// Output is a snapshot of the state at the start of the parse, then one
    /// snapshot after every state-changing command and one
    /// [`Operation::Update`] per `update`, in script order.
    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<Vec<Operation>, ParseError> {
        let mut state = self.state.clone();
        let mut ops = vec![state.snapshot()];
        let mut lines = 0;

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|err| ParseError::new(number, ParseErrorKind::Io(err.to_string())))?;
            lines = number;

            match parse_line(&line).map_err(|kind| ParseError::new(number, kind))? {
                None => {}
                Some(Command::Tweak(tweak)) => {
                    state.apply(tweak);
                    ops.push(state.snapshot());
                }
                Some(Command::Update) => ops.push(Operation::Update),
            }
        }

        self.state = state;
        log::debug!(
            "parsed script: {lines} line(s), {} operation(s), {} figure(s) in state",
            ops.len(),
            self.state.figures().len()
        );
        Ok(ops)
    }

    pub fn parse_str(&mut self, src: &str) -> Result<Vec<Operation>, ParseError> {
        self.parse(Cursor::new(src))
    }
}

/// Parses `src` with a fresh [`Parser`].
pub fn parse_str(src: &str) -> Result<Vec<Operation>, ParseError> {
    Parser::new().parse_str(src)
}
