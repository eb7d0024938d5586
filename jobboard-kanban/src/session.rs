//! Drag session state: what is being dragged right now, if anything.

use crate::order::position_of;
use crate::types::{Card, CardId, ColumnId, EntityKind};
use serde::Serialize;

/// The entity picked up at drag start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSubject {
    Column { id: ColumnId },
    /// Value copy taken at drag start. Only used for the floating preview;
    /// mutations always go through the canonical collection.
    Card { snapshot: Card },
}

impl DragSubject {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Column { .. } => EntityKind::Column,
            Self::Card { .. } => EntityKind::Card,
        }
    }

    /// Raw id of the dragged entity
    pub fn id(&self) -> &str {
        match self {
            Self::Column { id } => id.as_str(),
            Self::Card { snapshot } => snapshot.id.as_str(),
        }
    }
}

/// Lifecycle of a single drag interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(DragSubject),
}

impl DragSession {
    /// Classify a dragged id against the board.
    ///
    /// Columns take precedence over cards. An id that is neither leaves the
    /// session idle.
    pub fn begin(dragged_id: &str, columns: &[ColumnId], cards: &[Card]) -> Self {
        if let Some(id) = columns.iter().find(|c| c.as_str() == dragged_id) {
            return Self::Dragging(DragSubject::Column { id: id.clone() });
        }

        match position_of(cards, &CardId::from(dragged_id)) {
            Some(index) => Self::Dragging(DragSubject::Card {
                snapshot: cards[index].clone(),
            }),
            None => Self::Idle,
        }
    }

    /// Return to idle, whatever happened during the drag
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn subject(&self) -> Option<&DragSubject> {
        match self {
            Self::Idle => None,
            Self::Dragging(subject) => Some(subject),
        }
    }

    /// The dragged column, if a column drag is in progress
    pub fn active_column(&self) -> Option<&ColumnId> {
        match self.subject()? {
            DragSubject::Column { id } => Some(id),
            DragSubject::Card { .. } => None,
        }
    }

    /// Snapshot of the dragged card, if a card drag is in progress
    pub fn active_card(&self) -> Option<&Card> {
        match self.subject()? {
            DragSubject::Card { snapshot } => Some(snapshot),
            DragSubject::Column { .. } => None,
        }
    }
}
