//! Command channel between the card store and the board.
//!
//! Create/edit/delete notifications arrive as [`BoardCommand`]s over an mpsc
//! channel. The board applies them on its own thread, between drag events, and
//! answers every command with exactly one [`Ack`] over a oneshot channel. An
//! envelope that is dropped unanswered surfaces as a warning on the sending
//! side and only affects that one command.

use crate::board::KanbanBoard;
use crate::error::{KanbanError, Result};
use crate::mutation::CardMutation;
use crate::types::{Ack, AckOutcome, BoardCommand, IgnoreReason};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Create a connected sender/inbox pair
pub fn command_channel() -> (CommandSender, CommandInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        CommandSender {
            tx,
            next_seq: Arc::new(AtomicU64::new(1)),
        },
        CommandInbox { rx },
    )
}

/// Store-side handle for submitting commands
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<Envelope>,
    next_seq: Arc<AtomicU64>,
}

impl CommandSender {
    /// Queue a command. The returned handle resolves once the board has
    /// applied (or ignored) it.
    pub fn send(&self, command: BoardCommand) -> Result<PendingAck> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let (ack_tx, ack_rx) = oneshot::channel();

        debug!(seq, op = command.op(), card = %command.card_id(), "command queued");
        self.tx
            .send(Envelope {
                seq,
                command,
                ack: ack_tx,
            })
            .map_err(|_| KanbanError::InboxClosed)?;

        Ok(PendingAck { seq, rx: ack_rx })
    }
}

/// A queued command together with its reply channel
#[derive(Debug)]
pub struct Envelope {
    seq: u64,
    command: BoardCommand,
    ack: oneshot::Sender<Ack>,
}

impl Envelope {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn command(&self) -> &BoardCommand {
        &self.command
    }

    /// Apply the command to `board` and acknowledge it. Consumes the envelope,
    /// so a command can only ever be acknowledged once.
    pub fn apply(self, board: &mut KanbanBoard) -> Ack {
        let outcome = board.apply_command(&self.command);
        let ack = Ack {
            seq: self.seq,
            outcome,
        };

        if self.ack.send(ack.clone()).is_err() {
            debug!(seq = self.seq, "acknowledgment receiver already dropped");
        }
        ack
    }
}

/// Board-side end of the command channel
#[derive(Debug)]
pub struct CommandInbox {
    rx: mpsc::UnboundedReceiver<Envelope>,
}

impl CommandInbox {
    /// Apply every command queued so far, without waiting. Returns the acks in
    /// delivery order.
    pub fn drain(&mut self, board: &mut KanbanBoard) -> Vec<Ack> {
        let mut acks = Vec::new();
        while let Ok(envelope) = self.rx.try_recv() {
            acks.push(envelope.apply(board));
        }
        acks
    }

    /// Wait for the next command. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<Envelope> {
        self.rx.recv().await
    }
}

/// Sender-side handle for one command's acknowledgment
#[derive(Debug)]
pub struct PendingAck {
    seq: u64,
    rx: oneshot::Receiver<Ack>,
}

impl PendingAck {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Wait for the acknowledgment
    pub async fn wait(self) -> Result<Ack> {
        let seq = self.seq;
        self.rx.await.map_err(|_| dropped(seq))
    }

    /// Take the acknowledgment if it already arrived. `None` while the command
    /// is still queued.
    pub fn try_take(&mut self) -> Option<Result<Ack>> {
        match self.rx.try_recv() {
            Ok(ack) => Some(Ok(ack)),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(dropped(self.seq))),
        }
    }
}

fn dropped(seq: u64) -> KanbanError {
    warn!(seq, "command was never acknowledged, its pending slot is stuck");
    KanbanError::AckDropped { seq }
}

impl KanbanBoard {
    /// Apply a store command to the canonical cards (and the filtered view).
    ///
    /// Never fails: commands that cannot be applied are acknowledged as ignored.
    pub fn apply_command(&mut self, command: &BoardCommand) -> AckOutcome {
        let id = command.card_id().clone();

        if let BoardCommand::Create { card } | BoardCommand::Edit { card } = command {
            if self.check_category(&card.category).is_err() {
                warn!(card = %id, category = %card.category, op = command.op(), "unknown category");
                return AckOutcome::Ignored {
                    id,
                    reason: IgnoreReason::UnknownCategory,
                };
            }
        }

        let mutation = match command {
            BoardCommand::Create { card } => CardMutation::Insert { card: card.clone() },
            BoardCommand::Edit { card } => CardMutation::Replace { card: card.clone() },
            BoardCommand::Delete { id } => CardMutation::Remove { id: id.clone() },
        };

        match self.mutate_cards(&mutation) {
            Ok(_) => {
                info!(card = %id, op = command.op(), "command applied");
                match command {
                    BoardCommand::Create { .. } => AckOutcome::Created { id },
                    BoardCommand::Edit { .. } => AckOutcome::Edited { id },
                    BoardCommand::Delete { .. } => AckOutcome::Deleted { id },
                }
            }
            Err(KanbanError::DuplicateId { .. }) => {
                warn!(card = %id, "create for an id that already exists");
                AckOutcome::Ignored {
                    id,
                    reason: IgnoreReason::DuplicateId,
                }
            }
            Err(error) => {
                debug!(%error, card = %id, op = command.op(), "command target missing");
                AckOutcome::Ignored {
                    id,
                    reason: IgnoreReason::NotFound,
                }
            }
        }
    }
}
