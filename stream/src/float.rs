use crate::FLOAT_PRECISION;
use core::fmt::Write;
use logstream_buffer::{format_decimal, FixedBuffer};

// Holds "d.ddddddddddde-308", the longest output of `{:.11e}` on an absolute value
type Scratch = FixedBuffer<32>;

/// Formats `value` the way C's `%.12g` does and returns the number of bytes
/// written to `out`, which must have room for at least 20 bytes.
///
/// The value is rounded to twelve significant digits in scientific form; the
/// resulting decimal exponent picks between fixed and scientific notation,
/// then trailing zeros are dropped. The output is meant to be read by humans:
/// it does not round-trip (a shortest-representation algorithm would).
pub(crate) fn format_general(out: &mut [u8], value: f64) -> usize {
    let mut w = Writer { out, pos: 0 };
    if value.is_nan() {
        w.put_all(b"nan");
        return w.pos;
    }
    if value.is_sign_negative() {
        w.put(b'-');
    }
    if value.is_infinite() {
        w.put_all(b"inf");
        return w.pos;
    }
    if value == 0.0 {
        w.put(b'0');
        return w.pos;
    }

    let mut scratch = Scratch::new();
    let _ = write!(scratch, "{:.*e}", FLOAT_PRECISION - 1, value.abs());
    let (digits, n, exp) = split_scientific(scratch.as_bytes());

    if exp < -4 || exp >= FLOAT_PRECISION as i32 {
        w.put(digits[0]);
        if n > 1 {
            w.put(b'.');
            w.put_all(&digits[1..n]);
        }
        w.put(b'e');
        w.put(if exp < 0 { b'-' } else { b'+' });
        let exp = exp.unsigned_abs();
        if exp < 10 {
            w.put(b'0');
        }
        let mut tmp = [0u8; 4];
        let len = format_decimal(&mut tmp, exp);
        w.put_all(&tmp[..len]);
    } else if exp < 0 {
        w.put_all(b"0.");
        for _ in 0..(-exp - 1) {
            w.put(b'0');
        }
        w.put_all(&digits[..n]);
    } else {
        let int_len = exp as usize + 1;
        for k in 0..int_len {
            w.put(if k < n { digits[k] } else { b'0' });
        }
        if n > int_len {
            w.put(b'.');
            w.put_all(&digits[int_len..n]);
        }
    }
    w.pos
}

// Splits "d.ddde-x" into its significant digits (trailing zeros removed,
// at least one kept), their count, and the decimal exponent.
fn split_scientific(s: &[u8]) -> ([u8; FLOAT_PRECISION], usize, i32) {
    let mut digits = [b'0'; FLOAT_PRECISION];
    let mut n = 0;
    let mut i = 0;
    while i < s.len() && s[i] != b'e' {
        if s[i].is_ascii_digit() && n < FLOAT_PRECISION {
            digits[n] = s[i];
            n += 1;
        }
        i += 1;
    }
    i += 1;
    let negative = i < s.len() && s[i] == b'-';
    if negative {
        i += 1;
    }
    let mut exp: i32 = 0;
    while i < s.len() {
        exp = exp * 10 + (s[i] - b'0') as i32;
        i += 1;
    }
    if negative {
        exp = -exp;
    }
    while n > 1 && digits[n - 1] == b'0' {
        n -= 1;
    }
    (digits, n, exp)
}

struct Writer<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl Writer<'_> {
    fn put(&mut self, b: u8) {
        if let Some(slot) = self.out.get_mut(self.pos) {
            *slot = b;
            self.pos += 1;
        }
    }

    fn put_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }
}
