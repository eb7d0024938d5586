//! Core types for the kanban engine

mod card;
mod command;
mod event;
mod ids;

// Re-export all types
pub use card::Card;
pub use command::{Ack, AckOutcome, BoardCommand, IgnoreReason};
pub use event::{DragEvent, DropTarget, EntityKind};
pub use ids::{CardId, ColumnId};
