//! Integer to ASCII conversions into caller-provided scratch space.
//!
//! Digits are produced least significant first, then the written span is
//! reversed in place. Both conversions write a NUL byte after their output if
//! the scratch space has room for it; that byte is not part of the returned
//! length.

// Indexed by `remainder + 9`: negative remainders of negative values map to
// the same digits as positive ones, so no magnitude needs to be computed and
// the minimum value of every signed type is handled like any other.
static DIGITS: &[u8; 19] = b"9876543210123456789";
static DIGITS_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Longest decimal representation of any supported integer (`i64::MIN`).
pub const MAX_DECIMAL_LEN: usize = 20;

/// Longest hexadecimal representation of a `usize`.
pub const MAX_HEX_LEN: usize = core::mem::size_of::<usize>() * 2;

mod sealed {
    pub trait Sealed {}
}

/// Integer types [`format_decimal`] knows how to convert.
pub trait Decimal: Copy + sealed::Sealed {
    /// Divides `self` by ten, truncating toward zero, and returns the
    /// remainder, which is negative for negative values.
    fn pop_digit(&mut self) -> i8;

    fn is_zero(self) -> bool;

    fn is_negative(self) -> bool;
}

macro_rules! impl_decimal_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Decimal for $t {
            #[inline]
            fn pop_digit(&mut self) -> i8 {
                let lsd = (*self % 10) as i8;
                *self /= 10;
                lsd
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

macro_rules! impl_decimal_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Decimal for $t {
            #[inline]
            fn pop_digit(&mut self) -> i8 {
                let lsd = (*self % 10) as i8;
                *self /= 10;
                lsd
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

impl_decimal_signed!(i8, i16, i32, i64, isize);
impl_decimal_unsigned!(u8, u16, u32, u64, usize);

/// Writes `value` in decimal at the start of `buf` and returns the number of
/// bytes written. At least one digit is always written.
///
/// # Panics
/// Panics if `buf` is too short for the representation of `value`. A buffer
/// of [`MAX_DECIMAL_LEN`] bytes is always enough.
pub fn format_decimal<T: Decimal>(buf: &mut [u8], value: T) -> usize {
    let mut i = value;
    let mut p = 0;
    loop {
        let lsd = i.pop_digit();
        buf[p] = DIGITS[(lsd + 9) as usize];
        p += 1;
        if i.is_zero() {
            break;
        }
    }
    if value.is_negative() {
        buf[p] = b'-';
        p += 1;
    }
    if let Some(nul) = buf.get_mut(p) {
        *nul = 0;
    }
    buf[..p].reverse();
    p
}

/// Writes `value` in uppercase hexadecimal at the start of `buf`, without
/// prefix or leading zeros, and returns the number of bytes written.
///
/// # Panics
/// Panics if `buf` is too short. A buffer of [`MAX_HEX_LEN`] bytes is always
/// enough.
pub fn format_hex(buf: &mut [u8], value: usize) -> usize {
    let mut i = value;
    let mut p = 0;
    loop {
        buf[p] = DIGITS_HEX[i % 16];
        i /= 16;
        p += 1;
        if i == 0 {
            break;
        }
    }
    if let Some(nul) = buf.get_mut(p) {
        *nul = 0;
    }
    buf[..p].reverse();
    p
}
