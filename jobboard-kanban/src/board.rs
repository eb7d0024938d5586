//! KanbanBoard - the canonical ordered collections plus drag and filter state
//!
//! Cards and columns are held behind `Arc`s and changed copy-on-write: a caller
//! holding a snapshot from [`KanbanBoard::cards`] keeps seeing the sequence as
//! it was when the snapshot was taken, never a half-applied update.

use crate::config::{validate_categories, BoardConfig};
use crate::error::{KanbanError, Result};
use crate::filter::{apply_filter, FilterField, FilterState, FilterView};
use crate::mutation::{CardMutation, MutationEffect};
use crate::order::{move_in_place, position_of};
use crate::session::DragSession;
use crate::types::{Card, CardId, ColumnId};
use std::sync::Arc;
use tracing::{debug, trace};

/// State of one board
#[derive(Debug, Clone)]
pub struct KanbanBoard {
    /// Fixed category set, in the order it was configured
    categories: Arc<[ColumnId]>,
    /// Column layout order; always a permutation of `categories`
    pub(crate) columns: Arc<Vec<ColumnId>>,
    pub(crate) cards: Arc<Vec<Card>>,
    pub(crate) session: DragSession,
    filter: FilterView,
    filter_field: FilterField,
}

impl KanbanBoard {
    /// Create an empty board over a fixed category set
    pub fn new(categories: impl IntoIterator<Item = impl Into<ColumnId>>) -> Result<Self> {
        let categories: Vec<ColumnId> = categories.into_iter().map(Into::into).collect();
        validate_categories(&categories)?;

        Ok(Self {
            columns: Arc::new(categories.clone()),
            categories: categories.into(),
            cards: Arc::new(Vec::new()),
            session: DragSession::Idle,
            filter: FilterView::Inactive,
            filter_field: FilterField::default(),
        })
    }

    /// Create a board from loaded configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Ok(Self::new(config.categories.iter().cloned())?.with_filter_field(config.filter_field))
    }

    /// Seed the board with an initial card sequence
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut seeded = Vec::new();
        for card in cards {
            self.check_category(&card.category)?;
            CardMutation::Insert { card }.apply(&mut seeded)?;
        }
        self.cards = Arc::new(seeded);
        Ok(self)
    }

    /// Set which card field filter patterns match against
    pub fn with_filter_field(mut self, field: FilterField) -> Self {
        self.filter_field = field;
        self
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Snapshot of the canonical card sequence
    pub fn cards(&self) -> Arc<Vec<Card>> {
        Arc::clone(&self.cards)
    }

    /// Snapshot of the column layout order
    pub fn columns(&self) -> Arc<Vec<ColumnId>> {
        Arc::clone(&self.columns)
    }

    /// The fixed category set
    pub fn categories(&self) -> &[ColumnId] {
        &self.categories
    }

    pub fn is_category(&self, id: &ColumnId) -> bool {
        self.categories.contains(id)
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn filter_view(&self) -> &FilterView {
        &self.filter
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter.state()
    }

    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        position_of(self.cards.as_slice(), id).map(|index| &self.cards[index])
    }

    /// Cards to display: the filtered view while a filter is set, otherwise the
    /// canonical sequence.
    pub fn display_cards(&self) -> &[Card] {
        self.filter.cards().unwrap_or(self.cards.as_slice())
    }

    /// Display cards of one column, in sequence order
    pub fn column_cards<'a>(&'a self, column: &'a ColumnId) -> impl Iterator<Item = &'a Card> {
        self.display_cards()
            .iter()
            .filter(move |card| &card.category == column)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Re-derive the filtered view for a new pattern. An empty pattern clears it.
    pub fn set_filter(&mut self, pattern: &str) {
        self.filter = apply_filter(&self.cards, pattern, self.filter_field);
        debug!(pattern, state = ?self.filter.state(), "filter updated");
    }

    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    /// Apply a mutation to the canonical sequence, then mirror it into the
    /// filtered view.
    pub(crate) fn mutate_cards(&mut self, mutation: &CardMutation) -> Result<MutationEffect> {
        // make_mut clones only while a snapshot is still held elsewhere.
        let effect = mutation.apply(Arc::make_mut(&mut self.cards))?;

        if self.filter.is_active() && self.filter.mirror(mutation).is_none() {
            // The hovered card may be filtered out; keep the dragged card's
            // category in step anyway.
            if let CardMutation::MoveOnto { id, .. } = mutation {
                if let Some(card) = self.find_card(id) {
                    let reassign = CardMutation::Reassign {
                        id: id.clone(),
                        category: card.category.clone(),
                    };
                    self.filter.mirror(&reassign);
                }
            }
        }

        trace!(card = %mutation.card_id(), ?effect, "cards mutated");
        Ok(effect)
    }

    /// Move the column at `from` to `to`
    pub(crate) fn move_column(&mut self, from: usize, to: usize) -> Result<bool> {
        move_in_place(Arc::make_mut(&mut self.columns), from, to)
    }

    pub(crate) fn check_category(&self, id: &ColumnId) -> Result<()> {
        if self.is_category(id) {
            Ok(())
        } else {
            Err(KanbanError::UnknownCategory { id: id.to_string() })
        }
    }
}
