//! Line-oriented console prompts
//!
//! Interactive menus are written against [`Prompter`] so they can be driven
//! by stdin in the binary and by an in-memory buffer in tests.

use std::io::{self, BufRead, Write};

/// Asks questions on a writer and reads answers from a reader
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` on its own line and read one answer
    ///
    /// The trailing newline is stripped. Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        let trimmed = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed);
        Ok(Some(answer))
    }

    /// Like [`Prompter::ask`], but end of input is an error
    pub fn ask_required(&mut self, question: &str) -> io::Result<String> {
        self.ask(question)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Borrow the output stream, e.g. to render a result between prompts
    pub const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
