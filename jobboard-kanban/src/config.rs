//! Board configuration loaded with Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults compiled into the crate (`builtin/board.yaml`)
//! 2. An optional YAML file
//! 3. Environment variables prefixed with `JOBBOARD_`
//!
//! `JOBBOARD_CATEGORIES` takes a comma-separated list (`Wishlist,Applied,Offer`).
//! The bracketed form `[Wishlist, Applied]` is accepted too.

use crate::error::{KanbanError, Result};
use crate::filter::FilterField;
use crate::types::ColumnId;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_CONFIG: &str = include_str!("../builtin/board.yaml");

/// Prefix for environment overrides, e.g. `JOBBOARD_FILTER_FIELD=position`
pub const ENV_PREFIX: &str = "JOBBOARD_";

/// Category list override, parsed separately from the other `JOBBOARD_` keys
pub const CATEGORIES_VAR: &str = "JOBBOARD_CATEGORIES";

/// Configuration for one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// The fixed category set, in initial column order
    pub categories: Vec<ColumnId>,
    /// Card field that filter patterns match against
    #[serde(default)]
    pub filter_field: FilterField,
}

impl BoardConfig {
    /// The built-in defaults alone
    pub fn builtin() -> Result<Self> {
        Self::extract(Figment::from(Yaml::string(BUILTIN_CONFIG)))
    }

    /// Load defaults, then `path` if given, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Yaml::string(BUILTIN_CONFIG));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(KanbanError::invalid_config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "loading board config file");
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["categories"]));
        if let Some(categories) = categories_from_env() {
            debug!(categories = categories.len(), "category list from environment");
            figment = figment.merge(Serialized::default("categories", categories));
        }

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        debug!(categories = config.categories.len(), filter_field = ?config.filter_field, "board config loaded");
        Ok(config)
    }

    /// Check the category set is usable
    pub fn validate(&self) -> Result<()> {
        validate_categories(&self.categories)
    }
}

/// A category set must name at least one column and no column twice
pub(crate) fn validate_categories(categories: &[ColumnId]) -> Result<()> {
    if categories.is_empty() {
        return Err(KanbanError::invalid_config(
            "categories must list at least one column",
        ));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = categories.iter().find(|c| !seen.insert(*c)) {
        return Err(KanbanError::invalid_config(format!(
            "category '{}' is listed twice",
            dup
        )));
    }
    Ok(())
}

fn categories_from_env() -> Option<Vec<ColumnId>> {
    let raw = std::env::var(CATEGORIES_VAR).ok()?;
    Some(parse_category_list(&raw))
}

/// Split `A, B` (optionally wrapped in brackets, items optionally quoted)
fn parse_category_list(raw: &str) -> Vec<ColumnId> {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .unwrap_or(raw);

    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c: char| c == '"' || c == '\''))
        .filter(|item| !item.is_empty())
        .map(ColumnId::from)
        .collect()
}
