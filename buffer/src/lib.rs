#![cfg_attr(not(test), no_std)]

// Everything in this crate works on inline storage: no allocation, and no
// operation can panic as long as the documented scratch sizes are respected.

mod config;
mod convert;
mod error;
mod fixed;

pub use config::{LARGE_BUFFER, MAX_NUMERIC_SIZE, SMALL_BUFFER};
pub use convert::{format_decimal, format_hex, Decimal, MAX_DECIMAL_LEN, MAX_HEX_LEN};
pub use error::BufferError;
pub use fixed::FixedBuffer;

/// Buffer sized for a single log line.
pub type SmallBuffer = FixedBuffer<SMALL_BUFFER>;

/// Buffer sized for batches of log lines. At this size it should live on the
/// heap or in a static rather than on a thread stack.
pub type LargeBuffer = FixedBuffer<LARGE_BUFFER>;
