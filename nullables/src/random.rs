//! Nullable random: a random source that replays fixed values.

use rand::{Error, RngCore};

/// An [`RngCore`] returning pre-configured `u64` values in order, wrapping
/// around at the end.
///
/// Useful when a test needs to pin an exact draw (e.g. the lowest confidence
/// in a range, or the first explanation in a pool) rather than just a
/// reproducible one. Uniform integer sampling rejects some raw values, so a
/// constant other than zero can make such sampling spin; prefer [`low`](Self::low).
pub struct NullRandom {
    outputs: Vec<u64>,
    index: usize,
}

impl NullRandom {
    /// Create with a sequence of deterministic values.
    ///
    /// An empty sequence behaves like [`NullRandom::constant(0)`](Self::constant).
    pub fn new(outputs: Vec<u64>) -> Self {
        let outputs = if outputs.is_empty() { vec![0] } else { outputs };
        Self { outputs, index: 0 }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Always produce the smallest possible draw.
    pub fn low() -> Self {
        Self::constant(0)
    }
}

impl RngCore for NullRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.outputs[self.index % self.outputs.len()];
        self.index += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
