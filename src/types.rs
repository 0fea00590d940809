// src/types.rs
use crate::drivers::DisplayError;

/// One scalar measurement pushed by a sample source. Consumed and dropped by the
/// renderer, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64,
    /// Bit `n` set means channel `n`. Exactly one bit is expected.
    pub channel_map: u32,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp_ms: i64, channel: usize, value: f64) -> Self {
        let channel_map = u32::try_from(channel)
            .ok()
            .and_then(|c| 1u32.checked_shl(c))
            .unwrap_or(0);
        Self { timestamp_ms, channel_map, value }
    }

    /// Dense channel index named by `channel_map`.
    pub fn channel(&self) -> Result<usize, DisplayError> {
        single_channel(self.channel_map).ok_or(DisplayError::AmbiguousChannel(self.channel_map))
    }
}

/// Index of the only set bit, or `None` for empty and multi-channel maps.
pub fn single_channel(map: u32) -> Option<usize> {
    (map.count_ones() == 1).then(|| map.trailing_zeros() as usize)
}
