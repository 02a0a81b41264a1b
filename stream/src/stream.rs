use crate::float::format_general;
use crate::format::Fmt;
use crate::sink::{LogSink, Sink};
use core::ffi::CStr;
use core::ops::Shl;
use log::Level;
use logstream_buffer::{
    format_decimal, format_hex, Decimal, FixedBuffer, MAX_NUMERIC_SIZE, SMALL_BUFFER,
};

/// Stream-like front-end formatting primitive values into a [`FixedBuffer`].
///
/// One stream is meant to live for one log statement: fill it, hand its bytes
/// to a [`Sink`], drop or reset it. Nothing allocates and nothing can fail:
///
/// * numbers and pointers are only written if `MAX_NUMERIC_SIZE` bytes are
///   free, otherwise the field is silently dropped as a whole;
/// * strings are truncated to whatever space is left.
///
/// ```
/// use logstream::LogStream;
///
/// let mut stream = LogStream::<128>::new();
/// stream.push("answer=").push(42).push(' ').push(true);
/// assert_eq!(stream.buffer().as_bytes(), b"answer=42 1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LogStream<const N: usize = SMALL_BUFFER> {
    buffer: FixedBuffer<N>,
}

/// A value category a [`LogStream`] knows how to format.
pub trait Append {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>);
}

impl<const N: usize> LogStream<N> {
    pub const fn new() -> Self {
        Self {
            buffer: FixedBuffer::new(),
        }
    }

    /// Formats `value` at the end of the buffer.
    pub fn push<T: Append>(&mut self, value: T) -> &mut Self {
        value.append_to(self);
        self
    }

    /// Appends raw bytes, truncated to the space left. Returns the number of
    /// bytes written.
    pub fn append(&mut self, data: &[u8]) -> usize {
        self.buffer.append(data)
    }

    pub fn buffer(&self) -> &FixedBuffer<N> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut FixedBuffer<N> {
        &mut self.buffer
    }

    pub fn reset_buffer(&mut self) {
        self.buffer.reset();
    }

    /// Hands the formatted bytes to `sink`, then resets the buffer.
    pub fn flush_to<S: Sink + ?Sized>(&mut self, sink: &mut S) {
        sink.consume(self.buffer.as_bytes());
        self.buffer.reset();
    }

    /// Sends the formatted line to the `log` facade under the `logstream`
    /// target, then resets the buffer.
    pub fn emit(&mut self, level: Level) {
        self.emit_to("logstream", level);
    }

    pub fn emit_to(&mut self, target: &str, level: Level) {
        self.flush_to(&mut LogSink::new(target, level));
    }

    fn format_integer<T: Decimal>(&mut self, value: T) {
        if self.buffer.available() >= MAX_NUMERIC_SIZE {
            let len = format_decimal(self.buffer.spare_mut(), value);
            self.buffer.advance(len);
        }
    }

    fn format_pointer(&mut self, address: usize) {
        if self.buffer.available() >= MAX_NUMERIC_SIZE {
            let buf = self.buffer.spare_mut();
            buf[0] = b'0';
            buf[1] = b'x';
            let len = format_hex(&mut buf[2..], address);
            self.buffer.advance(len + 2);
        }
    }

    fn format_double(&mut self, value: f64) {
        if self.buffer.available() >= MAX_NUMERIC_SIZE {
            let len = format_general(self.buffer.spare_mut(), value);
            self.buffer.advance(len);
        }
    }
}

impl<const N: usize, T: Append> Shl<T> for LogStream<N> {
    type Output = LogStream<N>;

    fn shl(mut self, value: T) -> Self::Output {
        value.append_to(&mut self);
        self
    }
}

impl<'a, const N: usize, T: Append> Shl<T> for &'a mut LogStream<N> {
    type Output = &'a mut LogStream<N>;

    fn shl(self, value: T) -> Self::Output {
        value.append_to(self);
        self
    }
}

impl<const N: usize> core::fmt::Write for LogStream<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        core::fmt::Write::write_str(&mut self.buffer, s)
    }
}

// Bytes that do not fit are reported as not written, so write_all() on a
// full stream fails with ErrorKind::WriteZero.
#[cfg(feature = "std")]
impl<const N: usize> std::io::Write for LogStream<N> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(self.buffer.append(buf))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for LogStream<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.buffer, serializer)
    }
}

impl Append for bool {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(if self { b"1" } else { b"0" });
    }
}

macro_rules! append_widened {
    ($($t:ty => $wide:ty),*) => {$(
        impl Append for $t {
            #[inline]
            fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
                <$wide>::from(self).append_to(stream);
            }
        }
    )*};
}

macro_rules! append_integer {
    ($($t:ty),*) => {$(
        impl Append for $t {
            #[inline]
            fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
                stream.format_integer(self);
            }
        }
    )*};
}

append_widened!(i8 => i32, i16 => i32, u8 => u32, u16 => u32, f32 => f64);
append_integer!(i32, u32, i64, u64, isize, usize);

impl Append for f64 {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.format_double(self);
    }
}

// ASCII characters take one byte. Others are written as UTF-8, entirely or not at all.
impl Append for char {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        let mut utf8 = [0u8; 4];
        let _ = stream.buffer.try_append(self.encode_utf8(&mut utf8).as_bytes());
    }
}

impl<T: ?Sized> Append for *const T {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.format_pointer(self.cast::<()>() as usize);
    }
}

impl<T: ?Sized> Append for *mut T {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.format_pointer(self.cast::<()>() as usize);
    }
}

impl Append for &str {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self.as_bytes());
    }
}

impl Append for &[u8] {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self);
    }
}

impl<const M: usize> Append for &[u8; M] {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self);
    }
}

impl Append for &CStr {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self.to_bytes());
    }
}

#[cfg(feature = "std")]
impl Append for &String {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self.as_bytes());
    }
}

impl<const M: usize> Append for &FixedBuffer<M> {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self.as_bytes());
    }
}

impl Append for Fmt {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self.as_bytes());
    }
}

impl Append for &Fmt {
    fn append_to<const N: usize>(self, stream: &mut LogStream<N>) {
        stream.buffer.append(self.as_bytes());
    }
}
