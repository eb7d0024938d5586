//! Drag reconciliation: turning drag lifecycle events into board updates.
//!
//! Cards are reconciled continuously while hovering so their placement is
//! visible during the drag. Columns are only reordered on drop; reordering
//! them under the pointer would make them jump around. Nothing in here fails:
//! events that refer to unknown ids are logged and dropped.

use crate::board::KanbanBoard;
use crate::error::{KanbanError, Result};
use crate::mutation::{CardMutation, MutationEffect};
use crate::order::position_of;
use crate::session::{DragSession, DragSubject};
use crate::types::{CardId, ColumnId, DragEvent, DropTarget, EntityKind};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

/// What handling one drag event did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Reconciliation {
    /// Nothing changed
    Ignored,
    /// A drag session was opened
    SessionStarted { kind: EntityKind },
    /// A card took the hovered card's index (and category, if it differed)
    CardMoved {
        id: CardId,
        from: usize,
        to: usize,
        category_changed: bool,
    },
    /// A card changed column without moving in the sequence
    CardReassigned { id: CardId, category: ColumnId },
    /// A column was dropped onto another column
    ColumnsReordered { id: ColumnId, from: usize, to: usize },
    /// The session ended without any reorder
    SessionCleared,
}

impl Reconciliation {
    /// Whether the card or column collections changed
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CardMoved { .. } | Self::CardReassigned { .. } | Self::ColumnsReordered { .. }
        )
    }
}

impl KanbanBoard {
    /// Handle one drag event
    pub fn dispatch(&mut self, event: &DragEvent) -> Reconciliation {
        trace!(?event, "drag event");
        match event {
            DragEvent::Start { active } => self.on_drag_start(active),
            DragEvent::Over { active, over } => self.on_drag_over(active, over.as_ref()),
            DragEvent::End { active, over } => self.on_drag_end(active, over.as_ref()),
            DragEvent::Cancel { .. } => self.on_drag_cancel(),
        }
    }

    /// Open a session for the dragged id
    pub fn on_drag_start(&mut self, active: &str) -> Reconciliation {
        if let Some(previous) = self.session.subject() {
            warn!(previous = previous.id(), active, "drag started while another drag was open");
        }

        self.session = DragSession::begin(active, &self.columns, &self.cards);
        match self.session.subject() {
            Some(subject) => {
                debug!(active, kind = ?subject.kind(), "drag started");
                Reconciliation::SessionStarted {
                    kind: subject.kind(),
                }
            }
            None => {
                debug!(active, "drag started on unknown id, ignoring");
                Reconciliation::Ignored
            }
        }
    }

    /// Reconcile cards against the hovered target
    pub fn on_drag_over(&mut self, active: &str, over: Option<&DropTarget>) -> Reconciliation {
        let Some(over) = over else {
            return Reconciliation::Ignored;
        };
        if over.id() == active {
            return Reconciliation::Ignored;
        }

        // The kind of the dragged entity was settled when the session opened.
        let card_id = match self.session.subject() {
            Some(DragSubject::Card { snapshot }) if snapshot.id.as_str() == active => {
                snapshot.id.clone()
            }
            Some(DragSubject::Card { .. }) => {
                debug!(active, "drag over for a card that is not being dragged");
                return Reconciliation::Ignored;
            }
            Some(DragSubject::Column { .. }) => return Reconciliation::Ignored,
            None => {
                debug!(active, "drag over without an open session");
                return Reconciliation::Ignored;
            }
        };

        let outcome = match over {
            DropTarget::Card(onto) => self.drag_card_onto_card(card_id, onto.clone()),
            DropTarget::Column(column) => self.drag_card_onto_column(card_id, column.clone()),
        };

        outcome.unwrap_or_else(|error| {
            if error.is_reference_error() {
                debug!(%error, active, over = over.id(), "drag over ignored");
            } else {
                warn!(%error, active, over = over.id(), "drag over rejected");
            }
            Reconciliation::Ignored
        })
    }

    /// Close the session and commit a column reorder if one was dropped
    pub fn on_drag_end(&mut self, active: &str, over: Option<&DropTarget>) -> Reconciliation {
        self.session.clear();

        let Some(over) = over else {
            return Reconciliation::SessionCleared;
        };
        if over.id() == active {
            return Reconciliation::SessionCleared;
        }

        // Cards were already placed by the drag-over events, so only a
        // column dropped on a column changes anything here.
        self.drop_column(active, over.id()).unwrap_or_else(|error| {
            trace!(%error, active, over = over.id(), "drop is not a column reorder");
            Reconciliation::SessionCleared
        })
    }

    /// Abandon the drag. Hover reconciliation already applied stays applied.
    pub fn on_drag_cancel(&mut self) -> Reconciliation {
        self.session.clear();
        Reconciliation::SessionCleared
    }

    fn drop_column(&mut self, active: &str, over: &str) -> Result<Reconciliation> {
        let id = ColumnId::from(active);
        let from = position_of(self.columns.as_slice(), &id)
            .ok_or_else(|| KanbanError::column_not_found(active))?;
        let to = position_of(self.columns.as_slice(), &ColumnId::from(over))
            .ok_or_else(|| KanbanError::column_not_found(over))?;

        if !self.move_column(from, to)? {
            return Ok(Reconciliation::SessionCleared);
        }
        info!(column = active, from, to, "columns reordered");
        Ok(Reconciliation::ColumnsReordered { id, from, to })
    }

    fn drag_card_onto_card(&mut self, id: CardId, onto: CardId) -> Result<Reconciliation> {
        let effect = self.mutate_cards(&CardMutation::MoveOnto {
            id: id.clone(),
            onto,
        })?;

        match effect {
            MutationEffect::Moved {
                from,
                to,
                category_changed,
            } if from != to || category_changed => Ok(Reconciliation::CardMoved {
                id,
                from,
                to,
                category_changed,
            }),
            _ => Ok(Reconciliation::Ignored),
        }
    }

    fn drag_card_onto_column(&mut self, id: CardId, column: ColumnId) -> Result<Reconciliation> {
        self.check_category(&column)?;

        let effect = self.mutate_cards(&CardMutation::Reassign {
            id: id.clone(),
            category: column.clone(),
        })?;

        if effect.changed() {
            Ok(Reconciliation::CardReassigned {
                id,
                category: column,
            })
        } else {
            Ok(Reconciliation::Ignored)
        }
    }
}
