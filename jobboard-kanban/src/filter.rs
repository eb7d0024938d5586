//! Filtered view over the card collection.
//!
//! The view is derived data: it is computed from the canonical cards when the
//! pattern changes and afterwards only receives the same mutations the
//! canonical collection gets. An empty pattern means no filter at all, which is
//! kept distinct from a filter that matched nothing.

use crate::mutation::{CardMutation, MutationEffect};
use crate::types::Card;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Card field a filter pattern is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    #[default]
    Company,
    Position,
}

impl FilterField {
    fn value<'a>(&self, card: &'a Card) -> &'a str {
        match self {
            Self::Company => &card.company,
            Self::Position => &card.position,
        }
    }
}

/// A compiled, case-insensitive card predicate
#[derive(Debug, Clone)]
pub struct CardFilter {
    pattern: String,
    field: FilterField,
    regex: Regex,
}

impl CardFilter {
    /// Compile a pattern. Returns `None` for an empty pattern.
    ///
    /// Patterns are regular expressions; one that does not compile (say, a lone
    /// `(` typed halfway through) is matched as literal text instead.
    pub fn new(pattern: &str, field: FilterField) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(pattern))
                    .case_insensitive(true)
                    .build()
            })
            .ok()?;

        Some(Self {
            pattern: pattern.to_string(),
            field,
            regex,
        })
    }

    pub fn matches(&self, card: &Card) -> bool {
        self.regex.is_match(self.field.value(card))
    }
}

impl PartialEq for CardFilter {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.field == other.field
    }
}

/// Tri-state summary of the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum FilterState {
    Inactive,
    Matched(usize),
    NoMatches,
}

/// The filtered subset of cards, if a filter is set
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterView {
    #[default]
    Inactive,
    Active { filter: CardFilter, cards: Vec<Card> },
}

/// Derive a view from the canonical cards. Pure; `cards` is only read.
pub fn apply_filter(cards: &[Card], pattern: &str, field: FilterField) -> FilterView {
    match CardFilter::new(pattern, field) {
        None => FilterView::Inactive,
        Some(filter) => {
            let cards = cards.iter().filter(|c| filter.matches(c)).cloned().collect();
            FilterView::Active { filter, cards }
        }
    }
}

impl FilterView {
    pub fn state(&self) -> FilterState {
        match self {
            Self::Inactive => FilterState::Inactive,
            Self::Active { cards, .. } if cards.is_empty() => FilterState::NoMatches,
            Self::Active { cards, .. } => FilterState::Matched(cards.len()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Filtered cards, or `None` when no filter is set
    pub fn cards(&self) -> Option<&[Card]> {
        match self {
            Self::Inactive => None,
            Self::Active { cards, .. } => Some(cards),
        }
    }

    /// Mirror a mutation that was applied to the canonical collection.
    ///
    /// Cards missing from the view are expected, so lookup failures are not
    /// errors here. A created card only joins the view if it matches.
    pub fn mirror(&mut self, mutation: &CardMutation) -> Option<MutationEffect> {
        let Self::Active { filter, cards } = self else {
            return None;
        };

        if let CardMutation::Insert { card } = mutation {
            if !filter.matches(card) {
                return None;
            }
        }

        mutation.apply(cards).ok()
    }
}
