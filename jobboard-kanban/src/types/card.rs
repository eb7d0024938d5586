//! Card type: a job application on the board

use super::ids::{CardId, ColumnId};
use crate::order::{Keyed, Partitioned};
use serde::{Deserialize, Serialize};

/// A card/job on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub company: String,
    /// The role applied for. Not an index; ordering comes from the collection.
    pub position: String,
    pub category: ColumnId,
}

impl Card {
    /// Create a new card with a generated id
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        category: impl Into<ColumnId>,
    ) -> Self {
        Self::with_id(CardId::new(), company, position, category)
    }

    /// Create a card with an explicit id
    pub fn with_id(
        id: impl Into<CardId>,
        company: impl Into<String>,
        position: impl Into<String>,
        category: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            position: position.into(),
            category: category.into(),
        }
    }
}

impl Keyed for Card {
    type Key = CardId;

    fn key(&self) -> &CardId {
        &self.id
    }
}

impl Partitioned for Card {
    type Partition = ColumnId;

    fn partition(&self) -> &ColumnId {
        &self.category
    }

    fn set_partition(&mut self, partition: ColumnId) {
        self.category = partition;
    }
}
