//! Structural changes to a card sequence, expressed as values.
//!
//! The board applies every mutation to its canonical sequence and, while a
//! filter is active, the identical mutation to the filtered view. Keeping the
//! change as data is what guarantees both receive the same thing.

use crate::error::{KanbanError, Result};
use crate::order::{move_in_place, position_of, reassign_partition};
use crate::types::{Card, CardId, ColumnId};
use serde::Serialize;

/// One change to a card sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mutation", rename_all = "snake_case")]
pub enum CardMutation {
    /// Adopt the category of `onto` and take its index
    MoveOnto { id: CardId, onto: CardId },
    /// Change category without moving
    Reassign { id: CardId, category: ColumnId },
    /// Append a new card
    Insert { card: Card },
    /// Replace the card with the same id in place
    Replace { card: Card },
    /// Remove a card
    Remove { id: CardId },
}

/// What a mutation did to the sequence it was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationEffect {
    Moved {
        from: usize,
        to: usize,
        category_changed: bool,
    },
    Reassigned {
        index: usize,
        changed: bool,
    },
    Inserted {
        index: usize,
    },
    Replaced {
        index: usize,
    },
    Removed {
        index: usize,
    },
}

impl MutationEffect {
    /// Whether the sequence or one of its cards actually changed
    pub fn changed(&self) -> bool {
        match *self {
            Self::Moved {
                from,
                to,
                category_changed,
            } => from != to || category_changed,
            Self::Reassigned { changed, .. } => changed,
            Self::Inserted { .. } | Self::Replaced { .. } | Self::Removed { .. } => true,
        }
    }
}

impl CardMutation {
    /// The card this mutation is about
    pub fn card_id(&self) -> &CardId {
        match self {
            Self::MoveOnto { id, .. } | Self::Reassign { id, .. } | Self::Remove { id } => id,
            Self::Insert { card } | Self::Replace { card } => &card.id,
        }
    }

    /// Apply to `cards`. All lookups happen before anything is written, so an
    /// error leaves the sequence untouched.
    pub fn apply(&self, cards: &mut Vec<Card>) -> Result<MutationEffect> {
        match self {
            Self::MoveOnto { id, onto } => {
                let from = find(cards, id)?;
                let to = find(cards, onto)?;

                let category = cards[to].category.clone();
                let category_changed = reassign_partition(&mut cards[from], &category);
                move_in_place(cards, from, to)?;

                Ok(MutationEffect::Moved {
                    from,
                    to,
                    category_changed,
                })
            }
            Self::Reassign { id, category } => {
                let index = find(cards, id)?;
                let changed = reassign_partition(&mut cards[index], category);
                Ok(MutationEffect::Reassigned { index, changed })
            }
            Self::Insert { card } => {
                if position_of(cards, &card.id).is_some() {
                    return Err(KanbanError::duplicate_id("card", &card.id));
                }
                cards.push(card.clone());
                Ok(MutationEffect::Inserted {
                    index: cards.len() - 1,
                })
            }
            Self::Replace { card } => {
                let index = find(cards, &card.id)?;
                cards[index] = card.clone();
                Ok(MutationEffect::Replaced { index })
            }
            Self::Remove { id } => {
                let index = find(cards, id)?;
                cards.remove(index);
                Ok(MutationEffect::Removed { index })
            }
        }
    }
}

fn find(cards: &[Card], id: &CardId) -> Result<usize> {
    position_of(cards, id).ok_or_else(|| KanbanError::card_not_found(id))
}
