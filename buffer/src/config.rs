use crate::convert::{MAX_DECIMAL_LEN, MAX_HEX_LEN};

/// Room that must be free in a buffer before a number or pointer is written.
/// Any shorter free region silently drops the field.
pub const MAX_NUMERIC_SIZE: usize = 32;

/// Capacity of the per-statement buffer (`LOGSTREAM_SMALL_BUFFER` at build time).
pub const SMALL_BUFFER: usize = parse_size(env!("LOGSTREAM_SMALL_BUFFER"));

/// Capacity of the batching buffer (`LOGSTREAM_LARGE_BUFFER` at build time).
pub const LARGE_BUFFER: usize = parse_size(env!("LOGSTREAM_LARGE_BUFFER"));

// build.rs already validated these, this only runs at compile time
const fn parse_size(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    assert!(!bytes.is_empty(), "empty buffer size");
    let mut n: usize = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "buffer size is not a decimal integer");
        n = n * 10 + (bytes[i] - b'0') as usize;
        i += 1;
    }
    n
}

// The margin of 10 leaves room for a sign, a decimal point and an exponent
// on top of the significant digits of the widest integer and float types.
const _: () = assert!(MAX_NUMERIC_SIZE - 10 > u64::MAX.ilog10() as usize);
const _: () = assert!(MAX_NUMERIC_SIZE - 10 > i64::MAX.ilog10() as usize);
const _: () = assert!(MAX_NUMERIC_SIZE - 10 > f64::DIGITS as usize);

// Conversions write a NUL after their output
const _: () = assert!(MAX_DECIMAL_LEN < MAX_NUMERIC_SIZE);
const _: () = assert!(2 + MAX_HEX_LEN < MAX_NUMERIC_SIZE);

// One byte of each buffer is kept for the debug sentinel
const _: () = assert!(SMALL_BUFFER > MAX_NUMERIC_SIZE);
const _: () = assert!(LARGE_BUFFER >= SMALL_BUFFER);
