use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::foundation::core::PixelCoord;

/// Last-seen brightness per sampled block, used to smooth glyph choice across frames.
///
/// One memory belongs to exactly one frame sequence. Call [`InterpolationMemory::reset`] (or
/// start from a fresh memory) before reusing it for an unrelated sequence, otherwise brightness
/// from the previous sequence bleeds into the first frame of the next one.
#[derive(Clone, Debug, Default)]
pub struct InterpolationMemory {
    data: HashMap<u64, f64>,
}

impl InterpolationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a frame with `blocks` sampled anchors.
    pub fn with_capacity(blocks: usize) -> Self {
        Self {
            data: HashMap::with_capacity(blocks),
        }
    }

    /// Drop every stored entry.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Blend `current` with the stored value for `coord` and store the result.
    ///
    /// First touch stores and returns `current` unchanged. Afterwards the result is
    /// `current * (1 - weight) + previous * weight`. `weight` is expected in `[0, 1]`; range
    /// checking happens once in `RenderConfig::validate`.
    pub fn blend(&mut self, coord: PixelCoord, current: f64, weight: f64) -> f64 {
        match self.data.entry(coord.pack()) {
            Entry::Vacant(slot) => *slot.insert(current),
            Entry::Occupied(mut slot) => {
                let blended = current * (1.0 - weight) + *slot.get() * weight;
                slot.insert(blended);
                blended
            }
        }
    }

    pub fn get(&self, coord: PixelCoord) -> Option<f64> {
        self.data.get(&coord.pack()).copied()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/memory.rs"]
mod tests;
