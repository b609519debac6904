use std::io::Write;

use log::{debug, trace};

use crate::{error::Error, token::TokenKind, tokenizer::Tokenizer};

/// How a scan came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// The whole input was tokenized.
    Clean,
    /// The input contained an invalid token.
    Error,
}

impl Halt {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::Error => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Running,
    Halted(Halt),
}

/// Pulls tokens from a `Tokenizer` and prints one `<KIND> <lexeme>` line per token to `out`.
/// The first invalid token is reported on `err` and stops the scan.
pub struct ScanDriver<'a, O: Write, E: Write> {
    tokenizer: Tokenizer<'a>,
    out: O,
    err: E,
    state: ScanState,
}

impl<'a, O: Write, E: Write> ScanDriver<'a, O, E> {
    pub fn new(source: &'a str, out: O, err: E) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            out,
            err,
            state: ScanState::Running,
        }
    }

    /// Requests one token and reacts to it. Does nothing once the driver has halted.
    pub fn step(&mut self) -> Result<ScanState, Error> {
        if self.state != ScanState::Running {
            return Ok(self.state);
        }

        let token = self.tokenizer.next_token();
        trace!("{}:{} {:?}", token.line, token.column, token.kind);

        self.state = match token.kind {
            TokenKind::Eof => ScanState::Halted(Halt::Clean),
            TokenKind::Error => {
                // Everything scanned before the error has to be out before the diagnostic.
                self.out.flush()?;
                debug!("invalid token at line {}, column {}", token.line, token.column);
                writeln!(self.err, "Scan error: {} is not a valid token.", token.lexeme)?;
                ScanState::Halted(Halt::Error)
            },
            _ => {
                writeln!(self.out, "{token}")?;
                ScanState::Running
            },
        };

        Ok(self.state)
    }

    /// Steps until the scan halts.
    pub fn run(mut self) -> Result<Halt, Error> {
        let halt = loop {
            if let ScanState::Halted(halt) = self.step()? {
                break halt;
            }
        };

        self.out.flush()?;
        debug!("scan halted: {halt:?}");
        Ok(halt)
    }
}
