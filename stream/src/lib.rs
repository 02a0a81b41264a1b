#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Common modules

mod float;
mod format;
mod sink;
mod stream;

pub use format::Fmt;
pub use sink::{LogSink, Sink};
pub use stream::{Append, LogStream};

// Re-exported from the buffer crate, so that callers only need this one

pub use logstream_buffer::{
    format_decimal, format_hex, BufferError, Decimal, FixedBuffer, LargeBuffer, SmallBuffer,
    LARGE_BUFFER, MAX_NUMERIC_SIZE, SMALL_BUFFER,
};

// Significant digits used when formatting floating point values
pub const FLOAT_PRECISION: usize = 12;
