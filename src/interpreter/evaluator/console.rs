use std::io::{self, BufRead, Write};

/// The input/output collaborator of the evaluator.
///
/// `print` statements write through [`Console::write_line`] and input
/// expressions read through [`Console::read_line`]. Both calls block until
/// they complete.
pub trait Console {
    /// Reads one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes `text` followed by one line terminator.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// A [`Console`] over any buffered reader and writer.
///
/// The binary uses it over stdin and stdout; tests use in-memory buffers.
///
/// # Example
/// ```
/// use midlang::interpreter::evaluator::console::{Console, Streams};
///
/// let mut console = Streams::new("first\r\nsecond\n".as_bytes(), Vec::new());
///
/// assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
/// assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
/// assert_eq!(console.read_line().unwrap(), None);
///
/// console.write_line("done").unwrap();
/// assert_eq!(console.into_writer(), b"done\n");
/// ```
#[derive(Debug)]
pub struct Streams<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Streams<R, W> {
    /// Creates a console reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Streams<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Creates a console bound to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console for Streams<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }
}
