//! Render model: what the board looks like right now.
//!
//! Built from the display cards (the filtered view while a filter is set)
//! grouped per column in column order, plus the floating drag preview.

use crate::board::KanbanBoard;
use crate::filter::FilterState;
use crate::session::DragSubject;
use crate::types::{Card, ColumnId};
use serde::Serialize;

/// One column and the cards shown in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub cards: Vec<Card>,
}

/// The floating overlay shown under the pointer during a drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preview {
    /// A dragged column renders with its current cards
    Column(ColumnView),
    /// A dragged card renders from its drag-start snapshot
    Card { card: Card },
}

/// Everything a renderer needs to paint the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
    pub filter: FilterState,
}

impl BoardView {
    pub fn of(board: &KanbanBoard) -> Self {
        let columns = board
            .columns()
            .iter()
            .map(|id| column_view(board, id))
            .collect();

        let preview = board.session().subject().map(|subject| match subject {
            DragSubject::Column { id } => Preview::Column(column_view(board, id)),
            DragSubject::Card { snapshot } => Preview::Card {
                card: snapshot.clone(),
            },
        });

        Self {
            columns,
            preview,
            filter: board.filter_state(),
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&ColumnView> {
        self.columns.iter().find(|c| &c.id == id)
    }
}

fn column_view(board: &KanbanBoard, id: &ColumnId) -> ColumnView {
    ColumnView {
        id: id.clone(),
        cards: board.column_cards(id).cloned().collect(),
    }
}

impl KanbanBoard {
    /// Build the render model
    pub fn view(&self) -> BoardView {
        BoardView::of(self)
    }
}
