//! Table rendering for board views and replay steps.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use jobboard_kanban::{
    AckOutcome, BoardCommand, BoardView, Card, ColumnId, DragEvent, DropTarget, FilterState,
    IgnoreReason, Reconciliation,
};

use crate::replay::StepOutcome;

/// Create a table with the shared preset.
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// One column per category, cards stacked top to bottom in sequence order.
pub fn board_table(view: &BoardView) -> Table {
    let mut table = new_table();
    table.set_header(
        view.columns
            .iter()
            .map(|column| format!("{} ({})", column.id, column.cards.len())),
    );

    let depth = view.columns.iter().map(|c| c.cards.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(view.columns.iter().map(|column| {
            column.cards.get(row).map(card_cell).unwrap_or_default()
        }));
    }
    table
}

/// Numbered list of categories.
pub fn categories_table(categories: &[ColumnId]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Category"]);
    for (i, category) in categories.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), category.to_string()]);
    }
    table
}

/// What each replayed step did.
pub fn steps_table(steps: &[StepOutcome]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Step", "Result"]);
    for (i, step) in steps.iter().enumerate() {
        let (input, result) = describe_step(step);
        table.add_row(vec![(i + 1).to_string(), input, result]);
    }
    table
}

/// A line describing an active filter, `None` when no filter is set.
pub fn filter_summary(state: FilterState) -> Option<String> {
    match state {
        FilterState::Inactive => None,
        FilterState::Matched(1) => Some("Filter: 1 matching card".to_string()),
        FilterState::Matched(n) => Some(format!("Filter: {n} matching cards")),
        FilterState::NoMatches => Some("Filter: no matching cards".to_string()),
    }
}

fn card_cell(card: &Card) -> String {
    format!("{}\n{}", card.company, card.position)
}

fn describe_step(step: &StepOutcome) -> (String, String) {
    match step {
        StepOutcome::Drag { event, result } => (describe_event(event), describe_result(result)),
        StepOutcome::Command { command, ack } => {
            (describe_command(command), describe_ack(&ack.outcome))
        }
        StepOutcome::Filter { pattern, filter } => (
            format!("filter '{pattern}'"),
            filter_summary(*filter).unwrap_or_else(|| "filter cleared".to_string()),
        ),
    }
}

fn describe_target(target: Option<&DropTarget>) -> String {
    match target {
        Some(DropTarget::Card(id)) => format!("card {id}"),
        Some(DropTarget::Column(id)) => format!("column {id}"),
        None => "nothing".to_string(),
    }
}

fn describe_event(event: &DragEvent) -> String {
    match event {
        DragEvent::Start { active } => format!("drag start {active}"),
        DragEvent::Over { active, over } => {
            format!("drag {active} over {}", describe_target(over.as_ref()))
        }
        DragEvent::End { active, over } => {
            format!("drop {active} on {}", describe_target(over.as_ref()))
        }
        DragEvent::Cancel { active } => format!("drag cancel {active}"),
    }
}

fn describe_result(result: &Reconciliation) -> String {
    match result {
        Reconciliation::Ignored => "ignored".to_string(),
        Reconciliation::SessionStarted { kind } => format!("{kind:?} drag started").to_lowercase(),
        Reconciliation::CardMoved {
            from,
            to,
            category_changed,
            ..
        } => {
            if *category_changed {
                format!("card moved {from} -> {to}, new column")
            } else {
                format!("card moved {from} -> {to}")
            }
        }
        Reconciliation::CardReassigned { category, .. } => format!("card moved to {category}"),
        Reconciliation::ColumnsReordered { from, to, .. } => {
            format!("column moved {from} -> {to}")
        }
        Reconciliation::SessionCleared => "drag ended".to_string(),
    }
}

fn describe_command(command: &BoardCommand) -> String {
    format!("{} {}", command.op(), command.card_id())
}

fn describe_ack(outcome: &AckOutcome) -> String {
    match outcome {
        AckOutcome::Created { .. } => "created".to_string(),
        AckOutcome::Edited { .. } => "edited".to_string(),
        AckOutcome::Deleted { .. } => "deleted".to_string(),
        AckOutcome::Ignored { reason, .. } => {
            let reason = match reason {
                IgnoreReason::NotFound => "not found",
                IgnoreReason::DuplicateId => "duplicate id",
                IgnoreReason::UnknownCategory => "unknown category",
            };
            format!("ignored ({reason})")
        }
    }
}
