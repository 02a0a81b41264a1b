use logstream::LogStream;
use std::sync::Once;

// Common functions used by all tests for setup / check

static LOGGER_INIT: Once = Once::new();

pub fn common_test_setup() {
    LOGGER_INIT.call_once(|| {
        simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init()
            .expect("unable to install the test logger");
    });
}

pub fn contents<const N: usize>(stream: &LogStream<N>) -> String {
    String::from_utf8(stream.buffer().as_bytes().to_vec()).expect("stream contents are not UTF-8")
}

// Fills a stream with filler bytes until exactly `available` bytes are left
pub fn fill_until_available<const N: usize>(stream: &mut LogStream<N>, available: usize) {
    let missing = stream.buffer().available() - available;
    for _ in 0..missing {
        stream.push('.');
    }
    assert_eq!(stream.buffer().available(), available);
}

/// Deterministic xorshift64* sequence, so that a failing value can be replayed.
///
/// Test binaries draw 10_000 values from a fixed seed written at the call
/// site (`decimal_roundtrip.rs`, `hex_pointer.rs`). To replay a failure, rerun
/// the same test: the seed and the sweep length never change between runs.
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed | 1,
        }
    }
}

impl Iterator for PseudoRandom {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        Some(self.state.wrapping_mul(0x2545_F491_4F6C_DD1D))
    }
}

// Values on both sides of every decimal digit-count boundary
pub fn digit_boundaries() -> Vec<u64> {
    let mut values = vec![0, 1, u64::MAX, u64::MAX - 1];
    let mut p: u64 = 1;
    while let Some(next) = p.checked_mul(10) {
        values.extend_from_slice(&[next - 1, next, next + 1]);
        p = next;
    }
    values
}
