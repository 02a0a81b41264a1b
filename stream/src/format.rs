use core::fmt::{Arguments, Write};
use logstream_buffer::{FixedBuffer, MAX_NUMERIC_SIZE};

/// A single value pre-formatted with Rust's format syntax, for fields that
/// need a width, a precision or a radix the plain appends do not offer:
///
/// ```
/// use logstream::{Fmt, LogStream};
///
/// let mut stream = LogStream::<64>::new();
/// stream.push("took ").push(Fmt::new(format_args!("{:.3}", 0.25))).push("s");
/// assert_eq!(stream.buffer().as_bytes(), b"took 0.250s");
/// ```
///
/// Formatting happens on the stack, into at most `MAX_NUMERIC_SIZE - 1`
/// bytes; longer output is truncated.
#[derive(Clone, Debug)]
pub struct Fmt {
    buf: FixedBuffer<MAX_NUMERIC_SIZE>,
}

impl Fmt {
    pub fn new(args: Arguments<'_>) -> Self {
        let mut buf = FixedBuffer::new();
        // Our buffer truncates instead of failing, only a Display impl can error here
        let _ = buf.write_fmt(args);
        Self { buf }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
