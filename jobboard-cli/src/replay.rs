//! Replay a script against a fresh board.
//!
//! Drag events go straight to the board. Store commands travel through the
//! command channel and are drained between steps, the way an event loop would
//! interleave them with drag events.

use std::path::Path;

use anyhow::Context;
use jobboard_kanban::{
    command_channel, Ack, BoardCommand, BoardConfig, BoardView, DragEvent, FilterState,
    KanbanBoard, Reconciliation, Result,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::script::{Script, Step};
use crate::table;

/// What one script step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepOutcome {
    Drag {
        event: DragEvent,
        result: Reconciliation,
    },
    Command {
        command: BoardCommand,
        ack: Ack,
    },
    Filter {
        pattern: String,
        filter: FilterState,
    },
}

/// Every step outcome plus the final board
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepOutcome>,
    pub board: BoardView,
}

/// Build the board from `config` and the script's cards, then run every step
pub async fn replay(script: Script, config: &BoardConfig) -> Result<ReplayReport> {
    let mut board = KanbanBoard::from_config(config)?.with_cards(script.cards)?;
    let (sender, mut inbox) = command_channel();

    let mut steps = Vec::with_capacity(script.steps.len());
    for step in script.steps {
        let outcome = match step {
            Step::Drag(event) => {
                let result = board.dispatch(&event);
                StepOutcome::Drag { event, result }
            }
            Step::Command(command) => {
                let pending = sender.send(command.clone())?;
                inbox.drain(&mut board);
                let ack = pending.wait().await?;
                StepOutcome::Command { command, ack }
            }
            Step::Filter { pattern } => {
                board.set_filter(&pattern);
                StepOutcome::Filter {
                    filter: board.filter_state(),
                    pattern,
                }
            }
        };
        debug!(?outcome, "step replayed");
        steps.push(outcome);
    }

    info!(steps = steps.len(), cards = board.cards().len(), "script replayed");
    Ok(ReplayReport {
        steps,
        board: board.view(),
    })
}

/// Run the replay command.
pub async fn run_replay(script_path: &Path, config: &BoardConfig, json: bool) -> anyhow::Result<()> {
    let script = Script::from_file(script_path)
        .with_context(|| format!("failed to read script {}", script_path.display()))?;
    let report = replay(script, config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !report.steps.is_empty() {
        println!("{}", table::steps_table(&report.steps));
    }
    println!("{}", table::board_table(&report.board));
    if let Some(summary) = table::filter_summary(report.board.filter) {
        println!("{summary}");
    }
    Ok(())
}
