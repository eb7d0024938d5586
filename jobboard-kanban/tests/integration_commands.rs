//! Integration tests for the store command channel

use jobboard_kanban::{
    command_channel, AckOutcome, BoardCommand, Card, DragEvent, DropTarget, IgnoreReason,
    KanbanBoard, KanbanError,
};
use tracing_test::traced_test;

fn board() -> KanbanBoard {
    KanbanBoard::new(["Applied", "Interview", "Offer"])
        .unwrap()
        .with_cards([
            Card::with_id("1", "Acme", "Backend Engineer", "Applied"),
            Card::with_id("2", "Globex", "SRE", "Interview"),
        ])
        .unwrap()
}

#[tokio::test]
async fn test_acks_resolve_after_board_applies() {
    let (sender, mut inbox) = command_channel();

    let board_task = tokio::spawn(async move {
        let mut board = board();
        while let Some(envelope) = inbox.recv().await {
            envelope.apply(&mut board);
        }
        board
    });

    let created = sender
        .send(BoardCommand::create(Card::with_id("3", "Hooli", "PM", "Offer")))
        .unwrap();
    let edited = sender
        .send(BoardCommand::edit(Card::with_id("2", "Globex", "Staff SRE", "Interview")))
        .unwrap();
    let deleted = sender.send(BoardCommand::delete("1")).unwrap();

    let created = created.wait().await.unwrap();
    let edited = edited.wait().await.unwrap();
    let deleted = deleted.wait().await.unwrap();

    assert_eq!(created.outcome, AckOutcome::Created { id: "3".into() });
    assert_eq!(edited.outcome, AckOutcome::Edited { id: "2".into() });
    assert_eq!(deleted.outcome, AckOutcome::Deleted { id: "1".into() });
    assert!(created.seq < edited.seq && edited.seq < deleted.seq);

    drop(sender);
    let board = board_task.await.unwrap();
    let cards = board.cards();
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert_eq!(cards[0].position, "Staff SRE");
}

#[tokio::test]
async fn test_commands_interleave_with_a_drag() {
    let mut board = board();
    let (sender, mut inbox) = command_channel();

    board.dispatch(&DragEvent::start("1"));
    board.dispatch(&DragEvent::over("1", Some(DropTarget::Card("2".into()))));

    let pending = sender
        .send(BoardCommand::create(Card::with_id("3", "Hooli", "PM", "Applied")))
        .unwrap();
    inbox.drain(&mut board);

    board.dispatch(&DragEvent::end("1", Some(DropTarget::Card("2".into()))));

    let ack = pending.wait().await.unwrap();
    assert!(ack.outcome.is_applied());

    let cards = board.cards();
    let layout: Vec<(&str, &str)> = cards
        .iter()
        .map(|c| (c.id.as_str(), c.category.as_str()))
        .collect();
    assert_eq!(
        layout,
        vec![("2", "Interview"), ("1", "Interview"), ("3", "Applied")]
    );
}

#[tokio::test]
async fn test_ignored_commands_are_still_acknowledged() {
    let mut board = board();
    let (sender, mut inbox) = command_channel();

    let missing = sender.send(BoardCommand::delete("404")).unwrap();
    let unknown = sender
        .send(BoardCommand::create(Card::with_id("9", "Nowhere", "PM", "Limbo")))
        .unwrap();
    assert_eq!(inbox.drain(&mut board).len(), 2);

    assert_eq!(
        missing.wait().await.unwrap().outcome,
        AckOutcome::Ignored {
            id: "404".into(),
            reason: IgnoreReason::NotFound,
        }
    );
    assert_eq!(
        unknown.wait().await.unwrap().outcome,
        AckOutcome::Ignored {
            id: "9".into(),
            reason: IgnoreReason::UnknownCategory,
        }
    );
    assert_eq!(board.cards().len(), 2);
}

#[tokio::test]
async fn test_delete_reaches_filtered_view() {
    let mut board = board();
    board.set_filter("acme");
    let (sender, mut inbox) = command_channel();

    let pending = sender.send(BoardCommand::delete("1")).unwrap();
    inbox.drain(&mut board);
    pending.wait().await.unwrap();

    assert!(board.display_cards().is_empty());
    assert_eq!(board.cards().len(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_dropped_envelope_only_affects_its_own_ack() {
    let mut board = board();
    let (sender, mut inbox) = command_channel();

    let lost = sender.send(BoardCommand::delete("1")).unwrap();
    let kept = sender.send(BoardCommand::delete("2")).unwrap();

    // The board loses the first envelope without answering it.
    let envelope = inbox.recv().await.unwrap();
    assert_eq!(envelope.seq(), lost.seq());
    assert_eq!(envelope.command(), &BoardCommand::delete("1"));
    drop(envelope);
    inbox.drain(&mut board);

    let err = lost.wait().await.unwrap_err();
    assert!(matches!(err, KanbanError::AckDropped { seq: 1 }));
    assert!(logs_contain("never acknowledged"));

    let ack = kept.wait().await.unwrap();
    assert_eq!(ack.outcome, AckOutcome::Deleted { id: "2".into() });
    assert_eq!(board.cards().len(), 1);
}

#[test]
fn test_try_take_before_and_after_drain() {
    let mut board = board();
    let (sender, mut inbox) = command_channel();

    let mut pending = sender.send(BoardCommand::delete("2")).unwrap();
    assert!(pending.try_take().is_none());

    inbox.drain(&mut board);
    let ack = pending.try_take().unwrap().unwrap();
    assert_eq!(ack.seq, pending.seq());
}
