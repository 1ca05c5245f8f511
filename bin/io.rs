use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Stdin, Stdout, Write};
use tracing::instrument;

/// A line oriented text interface.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl Default for Io<Stdout, Stdin> {
    fn default() -> Self {
        Io::new(io::stdout(), io::stdin())
    }
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line, or `None` once the input is exhausted.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<Option<String>> {
        self.reader.next().transpose()
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{msg}")
    }

    /// Send a message without a line break and flush it.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn prompt<T: Display>(&mut self, msg: T) -> io::Result<()> {
        write!(&mut self.writer, "{msg}")?;
        self.flush()
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("[^\r\n]*")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{s}")?;
        let mut io = Io::new(empty(), &mut buf);
        assert_eq!(io.recv()?, Some(s));
    }

    #[test]
    fn recv_returns_none_once_input_is_exhausted() {
        let mut io = Io::new(empty(), empty());
        assert_eq!(io.recv().unwrap(), None);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        io.flush()?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }

    #[proptest]
    fn prompt_does_not_append_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.prompt(&s)?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, s);
    }
}
