use crate::error::BufferError;
use core::ffi::CStr;

/// Append-only byte buffer over an inline `[u8; N]` array.
///
/// Bytes `[0, len())` are the written data. The last byte of the storage is
/// never handed out: it is kept for the NUL written by [`debug_view`], so at
/// most `N - 1` bytes of data fit. Nothing ever writes past the storage: every
/// append is bounds-checked and either truncates or is rejected as a whole.
///
/// [`debug_view`]: FixedBuffer::debug_view
#[derive(Clone)]
pub struct FixedBuffer<const N: usize> {
    buf: [u8; N],
    used_bytes: usize,
}

impl<const N: usize> FixedBuffer<N> {
    const HAS_ROOM_FOR_SENTINEL: () = assert!(N > 0, "a FixedBuffer needs at least one byte");

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_ROOM_FOR_SENTINEL;
        Self {
            buf: [0u8; N],
            used_bytes: 0,
        }
    }

    /// Maximum number of data bytes, excluding the sentinel byte.
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    pub const fn len(&self) -> usize {
        self.used_bytes
    }

    pub const fn is_empty(&self) -> bool {
        self.used_bytes == 0
    }

    /// Number of bytes that can still be appended.
    pub const fn available(&self) -> usize {
        N - 1 - self.used_bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.used_bytes]
    }

    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Copies as much of `data` as fits and returns the number of bytes copied.
    /// The rest is dropped, don't panic!()
    pub fn append(&mut self, data: &[u8]) -> usize {
        let len = usize::min(data.len(), self.available());
        self.buf[self.used_bytes..self.used_bytes + len].copy_from_slice(&data[..len]);
        self.used_bytes += len;
        len
    }

    /// Copies all of `data`, or nothing if it does not fit.
    pub fn try_append(&mut self, data: &[u8]) -> Result<(), BufferError> {
        if data.len() > self.available() {
            return Err(BufferError::InsufficientSpace {
                requested: data.len(),
                available: self.available(),
            });
        }
        self.append(data);
        Ok(())
    }

    /// Free region right after the written data, for conversions that format
    /// in place. Bytes written there only become part of the buffer once
    /// committed with [`advance`](FixedBuffer::advance).
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.used_bytes..N - 1]
    }

    /// Commits `len` bytes written through [`spare_mut`](FixedBuffer::spare_mut),
    /// clamped to the free region. Returns the number of bytes committed.
    pub fn advance(&mut self, len: usize) -> usize {
        let len = usize::min(len, self.available());
        self.used_bytes += len;
        len
    }

    /// Forgets the written data. The storage keeps its previous contents.
    pub fn reset(&mut self) {
        self.used_bytes = 0;
    }

    /// Zeroes the whole storage and forgets the written data.
    pub fn bzero(&mut self) {
        self.buf.fill(0);
        self.used_bytes = 0;
    }

    /// NUL-terminates the written data and returns it as a C string, for
    /// debugging only: the view stops early at any NUL byte the data contains.
    pub fn debug_view(&mut self) -> &CStr {
        self.buf[self.used_bytes] = 0;
        CStr::from_bytes_until_nul(&self.buf[..=self.used_bytes]).unwrap_or_default()
    }
}

impl<const N: usize> Default for FixedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedBuffer<M>> for FixedBuffer<N> {
    fn eq(&self, other: &FixedBuffer<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedBuffer<N> {}

impl<const N: usize> core::fmt::Debug for FixedBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("len", &self.used_bytes)
            .field("capacity", &self.capacity())
            .field("data", &format_args!("{}", self.as_bytes().escape_ascii()))
            .finish()
    }
}

impl<const N: usize> core::fmt::Write for FixedBuffer<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // Truncate on a character boundary so the contents stay valid UTF-8
        let mut len = usize::min(s.len(), self.available());
        while !s.is_char_boundary(len) {
            len -= 1;
        }
        self.append(&s.as_bytes()[..len]);
        Ok(())
    }
}

// Buffers travel as a byte string holding only the written data
#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for FixedBuffer<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for FixedBuffer<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(BufferVisitor::<N>)
    }
}

#[cfg(feature = "serde")]
struct BufferVisitor<const N: usize>;

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::de::Visitor<'de> for BufferVisitor<N> {
    type Value = FixedBuffer<N>;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "a byte string of at most {} bytes", N - 1)
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let mut buffer = FixedBuffer::new();
        if buffer.try_append(v).is_err() {
            return Err(E::invalid_length(v.len(), &self));
        }
        Ok(buffer)
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buffer = FixedBuffer::new();
        while let Some(b) = seq.next_element::<u8>()? {
            if buffer.try_append(&[b]).is_err() {
                return Err(serde::de::Error::invalid_length(buffer.len() + 1, &self));
            }
        }
        Ok(buffer)
    }
}
