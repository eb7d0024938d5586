//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Card not found in the collection it was looked up in
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Column not found in the column collection
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// A move targeted an index outside the collection
    #[error("index {index} out of bounds for collection of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Category is not part of the board's fixed category set
    #[error("unknown category: {id}")]
    UnknownCategory { id: String },

    /// Configuration was loaded but is not usable
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The command inbox was dropped, nothing can be delivered anymore
    #[error("command inbox closed")]
    InboxClosed,

    /// A command was dropped before the engine acknowledged it
    #[error("command {seq} was never acknowledged")]
    AckDropped { seq: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Configuration extraction error
    #[error("config error: {0}")]
    Config(#[from] figment::Error),
}

impl KanbanError {
    /// Create a card not found error
    pub fn card_not_found(id: impl ToString) -> Self {
        Self::CardNotFound { id: id.to_string() }
    }

    /// Create a column not found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl ToString) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Errors caused by an event or command that refers to something the board
    /// does not hold. These are logged and ignored, never propagated.
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            Self::CardNotFound { .. } | Self::ColumnNotFound { .. } | Self::InvalidIndex { .. }
        )
    }
}
