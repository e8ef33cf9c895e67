//! Block queue - the three blocks on offer and the player's selection

use crate::rng::RandomSource;
use crate::shapes::pick_random;
use crate::types::{BlockKind, QUEUE_LEN};

/// Fixed-size lookahead of placeable blocks, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockQueue {
    blocks: [BlockKind; QUEUE_LEN],
    /// Slot index of the selected block, if any
    selected: Option<usize>,
}

impl BlockQueue {
    /// Draw a fresh queue from `rng`.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            blocks: std::array::from_fn(|_| pick_random(rng)),
            selected: None,
        }
    }

    /// Build a queue from known blocks.
    pub fn from_blocks(blocks: [BlockKind; QUEUE_LEN]) -> Self {
        Self {
            blocks,
            selected: None,
        }
    }

    pub fn blocks(&self) -> &[BlockKind; QUEUE_LEN] {
        &self.blocks
    }

    pub fn get(&self, slot: usize) -> Option<BlockKind> {
        self.blocks.get(slot).copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Select the block in `slot`. Returns false (selection unchanged) for an
    /// invalid slot.
    pub fn select(&mut self, slot: usize) -> bool {
        if slot >= QUEUE_LEN {
            return false;
        }
        self.selected = Some(slot);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_kind(&self) -> Option<BlockKind> {
        self.selected.and_then(|slot| self.get(slot))
    }

    /// Drop the front block, shift the rest forward and append a new random
    /// block at the back. Clears the selection.
    pub fn replenish<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let next = pick_random(rng);
        self.blocks.rotate_left(1);
        self.blocks[QUEUE_LEN - 1] = next;
        self.selected = None;
    }
}
