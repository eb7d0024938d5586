//! Drag lifecycle events delivered by the drag-and-drop primitive

use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// Kind of entity taking part in a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Card,
    Column,
}

/// The droppable element currently under the pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    Card(CardId),
    Column(ColumnId),
}

impl DropTarget {
    /// Raw identifier of the target, regardless of kind
    pub fn id(&self) -> &str {
        match self {
            Self::Card(id) => id.as_str(),
            Self::Column(id) => id.as_str(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Card(_) => EntityKind::Card,
            Self::Column(_) => EntityKind::Column,
        }
    }
}

/// One event of a drag session.
///
/// A session is delivered as `Start`, zero or more `Over`, then `End` or `Cancel`.
/// `active` is the raw id of the dragged element; what kind of entity it is gets
/// decided once when the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        active: String,
    },
    Over {
        active: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        over: Option<DropTarget>,
    },
    End {
        active: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        over: Option<DropTarget>,
    },
    Cancel {
        active: String,
    },
}

impl DragEvent {
    pub fn start(active: impl Into<String>) -> Self {
        Self::Start {
            active: active.into(),
        }
    }

    pub fn over(active: impl Into<String>, over: Option<DropTarget>) -> Self {
        Self::Over {
            active: active.into(),
            over,
        }
    }

    pub fn end(active: impl Into<String>, over: Option<DropTarget>) -> Self {
        Self::End {
            active: active.into(),
            over,
        }
    }

    pub fn cancel(active: impl Into<String>) -> Self {
        Self::Cancel {
            active: active.into(),
        }
    }

    /// The id of the dragged element
    pub fn active(&self) -> &str {
        match self {
            Self::Start { active }
            | Self::Over { active, .. }
            | Self::End { active, .. }
            | Self::Cancel { active } => active,
        }
    }
}
