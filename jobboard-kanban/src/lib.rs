//! Drag-reorder reconciliation engine for a job-application kanban board
//!
//! Cards (job applications) live in one ordered sequence and are grouped into
//! columns by their category. Columns are an ordered sequence of their own.
//! This crate keeps both sequences consistent while a drag-and-drop primitive
//! streams drag events at it, and merges create/edit/delete commands coming
//! from the card store.
//!
//! ## Overview
//!
//! - **Cards reorder while hovering** - a dragged card takes the hovered card's
//!   index and category immediately
//! - **Columns reorder on drop** - hovering a column over another changes nothing
//!   until the drag ends
//! - **Copy-on-write sequences** - snapshots handed out by the board never change
//!   underneath their holder
//! - **Explicit acknowledgments** - every store command gets exactly one [`Ack`]
//!
//! ## Basic Usage
//!
//! ```rust
//! use jobboard_kanban::{Card, DragEvent, DropTarget, KanbanBoard};
//!
//! # fn example() -> jobboard_kanban::Result<()> {
//! let mut board = KanbanBoard::new(["Applied", "Interview", "Offer"])?.with_cards([
//!     Card::with_id("1", "Acme", "Backend Engineer", "Applied"),
//!     Card::with_id("2", "Globex", "SRE", "Interview"),
//! ])?;
//!
//! board.dispatch(&DragEvent::start("1"));
//! board.dispatch(&DragEvent::over("1", Some(DropTarget::Card("2".into()))));
//! board.dispatch(&DragEvent::end("1", Some(DropTarget::Card("2".into()))));
//!
//! let cards = board.cards();
//! assert_eq!(cards[1].id.as_str(), "1");
//! assert_eq!(cards[1].category.as_str(), "Interview");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod board;
pub mod config;
mod engine;
mod error;
pub mod filter;
pub mod inbox;
pub mod mutation;
pub mod order;
pub mod session;
pub mod types;
pub mod view;

pub use board::KanbanBoard;
pub use config::BoardConfig;
pub use engine::Reconciliation;
pub use error::{KanbanError, Result};
pub use filter::{apply_filter, CardFilter, FilterField, FilterState, FilterView};
pub use inbox::{command_channel, CommandInbox, CommandSender, Envelope, PendingAck};
pub use session::{DragSession, DragSubject};
pub use view::{BoardView, ColumnView, Preview};

// Re-export commonly used types
pub use types::{
    Ack, AckOutcome, BoardCommand, Card, CardId, ColumnId, DragEvent, DropTarget, EntityKind,
    IgnoreReason,
};
