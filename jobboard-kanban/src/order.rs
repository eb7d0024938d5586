//! Ordered collection primitives shared by the card and column sequences.
//!
//! A sequence's order is the authoritative display order. Items are moved by
//! removing them at one index and reinserting them at another, so every other
//! element keeps its relative order. Partitioned items (cards) can additionally
//! be reassigned to another partition (column); that never reorders anything on
//! its own and is always paired with a move by the caller.

use crate::error::{KanbanError, Result};

/// An item with a stable identity within a sequence
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

/// An item that belongs to exactly one named partition of a larger sequence
pub trait Partitioned {
    type Partition: PartialEq + Clone;

    fn partition(&self) -> &Self::Partition;

    fn set_partition(&mut self, partition: Self::Partition);
}

/// Find the index of the item with the given key
pub fn position_of<T: Keyed>(items: &[T], key: &T::Key) -> Option<usize> {
    items.iter().position(|item| item.key() == key)
}

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// Out-of-bounds indices return the input unchanged.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    // Bounds failures leave the copy untouched, which is the documented result.
    let _ = move_in_place(&mut moved, from, to);
    moved
}

/// Move the element at `from` to `to` in place.
///
/// Returns `Ok(true)` if the sequence changed, `Ok(false)` for `from == to`.
pub fn move_in_place<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<bool> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(KanbanError::InvalidIndex { index, len });
        }
    }
    if from == to {
        return Ok(false);
    }

    let item = items.remove(from);
    items.insert(to, item);
    Ok(true)
}

/// Set an item's partition. Returns true if it changed.
pub fn reassign_partition<T: Partitioned>(item: &mut T, partition: &T::Partition) -> bool {
    if item.partition() == partition {
        return false;
    }
    item.set_partition(partition.clone());
    true
}
