use log::Level;

/// Consumer of formatted lines: log files, consoles, async back-ends...
///
/// The bytes handed over are the raw contents of a buffer, without framing
/// or line terminator.
pub trait Sink {
    fn consume(&mut self, line: &[u8]);
}

impl<F: FnMut(&[u8])> Sink for F {
    fn consume(&mut self, line: &[u8]) {
        self(line)
    }
}

/// Forwards lines to whatever logger is installed behind the `log` facade.
/// Bytes which are not valid UTF-8 are escaped.
#[derive(Debug, Clone, Copy)]
pub struct LogSink<'a> {
    target: &'a str,
    level: Level,
}

impl<'a> LogSink<'a> {
    pub fn new(target: &'a str, level: Level) -> Self {
        Self { target, level }
    }
}

impl Sink for LogSink<'_> {
    fn consume(&mut self, line: &[u8]) {
        match core::str::from_utf8(line) {
            Ok(s) => log::log!(target: self.target, self.level, "{}", s),
            Err(_) => log::log!(target: self.target, self.level, "{}", line.escape_ascii()),
        }
    }
}
