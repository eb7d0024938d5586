//! Store commands and their acknowledgments

use super::card::Card;
use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// A change to the card collection originating outside the drag interaction
/// (the create/edit dialogs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardCommand {
    /// Append a new card
    Create { card: Card },
    /// Replace an existing card's fields, keeping its place in the sequence
    Edit { card: Card },
    /// Remove a card
    Delete { id: CardId },
}

impl BoardCommand {
    pub fn create(card: Card) -> Self {
        Self::Create { card }
    }

    pub fn edit(card: Card) -> Self {
        Self::Edit { card }
    }

    pub fn delete(id: impl Into<CardId>) -> Self {
        Self::Delete { id: id.into() }
    }

    /// The card this command targets
    pub fn card_id(&self) -> &CardId {
        match self {
            Self::Create { card } | Self::Edit { card } => &card.id,
            Self::Delete { id } => id,
        }
    }

    /// Canonical op string for logs (e.g. "edit card")
    pub fn op(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create card",
            Self::Edit { .. } => "edit card",
            Self::Delete { .. } => "delete card",
        }
    }
}

/// Why a command was acknowledged without changing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    NotFound,
    DuplicateId,
    UnknownCategory,
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AckOutcome {
    Created { id: CardId },
    Edited { id: CardId },
    Deleted { id: CardId },
    Ignored { id: CardId, reason: IgnoreReason },
}

impl AckOutcome {
    /// Whether the command changed the board
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored { .. })
    }
}

/// Acknowledgment sent back for exactly one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub seq: u64,
    #[serde(flatten)]
    pub outcome: AckOutcome,
}
