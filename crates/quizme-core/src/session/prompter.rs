use std::io::{self, BufRead, Write};

/// Text request/response channel between the session and the user.
pub trait Prompter {
    /// Deliver a line of text (question, feedback, notices).
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Ask for a response. `Ok(None)` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line-oriented prompter over any reader/writer pair.
///
/// The CLI wraps stdin/stdout; tests use in-memory buffers.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
