//! Newtype identifiers for board entities

use crate::order::Keyed;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a card (a job application)
    CardId
);

define_id!(
    /// Identifier of a column. Doubles as the category key cards are partitioned by.
    ColumnId
);

impl Keyed for ColumnId {
    type Key = ColumnId;

    fn key(&self) -> &ColumnId {
        self
    }
}

impl CardId {
    /// Generate a fresh ULID-based card id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}
