//! Replay scripts: initial cards plus an ordered list of steps.
//!
//! ```yaml
//! cards:
//!   - { id: "1", company: Acme, position: Backend Engineer, category: Applied }
//! steps:
//!   - drag: { type: start, active: "1" }
//!   - drag: { type: over, active: "1", over: { kind: column, id: Offer } }
//!   - drag: { type: end, active: "1" }
//!   - command: { op: delete, id: "1" }
//!   - filter: { pattern: acme }
//! ```

use std::path::Path;

use jobboard_kanban::{BoardCommand, Card, DragEvent, Result};
use serde::Deserialize;

/// A parsed replay script
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Script {
    /// Canonical card sequence the board starts with
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One thing that happens to the board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// An event from the drag-and-drop primitive
    Drag(DragEvent),
    /// A create/edit/delete notification from the card store
    Command(BoardCommand),
    /// New filter text; empty clears the filter
    Filter { pattern: String },
}

impl Script {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_kanban::DropTarget;

    #[test]
    fn test_parse_script() {
        let yaml = r#"
cards:
  - { id: "1", company: Acme, position: Dev, category: Applied }
  - { id: "2", company: Globex, position: SRE, category: Interview }
steps:
  - drag: { type: start, active: "1" }
  - drag: { type: over, active: "1", over: { kind: card, id: "2" } }
  - command: { op: delete, id: "2" }
  - filter: { pattern: acme }
"#;
        let script = Script::from_yaml(yaml).unwrap();

        assert_eq!(script.cards.len(), 2);
        assert_eq!(
            script.steps,
            vec![
                Step::Drag(DragEvent::start("1")),
                Step::Drag(DragEvent::over("1", Some(DropTarget::Card("2".into())))),
                Step::Command(BoardCommand::delete("2")),
                Step::Filter {
                    pattern: "acme".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::from_yaml("{}").unwrap();
        assert_eq!(script, Script::default());
    }

    #[test]
    fn test_unknown_step_is_an_error() {
        assert!(Script::from_yaml("steps:\n  - teleport: {}\n").is_err());
    }
}
