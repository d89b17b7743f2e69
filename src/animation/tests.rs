//! Animation pipeline tests
//!
//! Diff tests validate the matching algorithm and the apply-equals-target
//! property; queue tests validate strict ordering, zero-duration handling and
//! destroy semantics against a recording view.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::model::{Marker, Piece, PieceColor, PieceType, Position, Square, FEN_START};
use crate::view::BoardView;

fn sq(name: &str) -> Square {
    name.parse().expect("test square name must be valid")
}

fn fen(text: &str) -> Position {
    Position::from_fen(text).expect("test FEN must be valid")
}

fn white(kind: PieceType) -> Piece {
    Piece::new(PieceColor::White, kind)
}

// ============================================================================
// Diff computation
// ============================================================================

#[test]
fn test_diff_of_equal_positions_is_empty() {
    let start = fen(FEN_START);
    assert!(PositionDiff::between(&start, &start).is_empty());
}

#[test]
fn test_single_pawn_push_is_one_move_op() {
    let before = fen(FEN_START);
    let after = fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
    let diff = PositionDiff::between(&before, &after);
    assert_eq!(
        diff.ops(),
        &[PieceOp::Move {
            piece: white(PieceType::Pawn),
            from: sq("e2"),
            to: sq("e4"),
        }]
    );
}

#[test]
fn test_capture_is_a_move_plus_a_disappearance() {
    // White pawn e4 takes the black pawn on d5.
    let before = fen("8/8/8/3p4/4P3/8/8/8");
    let after = fen("8/8/8/3P4/8/8/8/8");
    let diff = PositionDiff::between(&before, &after);
    assert_eq!(diff.len(), 2);
    assert!(diff.ops().contains(&PieceOp::Move {
        piece: white(PieceType::Pawn),
        from: sq("e4"),
        to: sq("d5"),
    }));
    assert!(diff.ops().contains(&PieceOp::Disappear {
        piece: Piece::new(PieceColor::Black, PieceType::Pawn),
        at: sq("d5"),
    }));
}

#[test]
fn test_appearance_prefers_the_nearest_vacated_square() {
    // Both knights are candidates for the appearance on e2; g1 is closer.
    let before = fen("8/8/8/8/8/8/8/1N4N1");
    let after = fen("8/8/8/8/8/8/4N3/8");
    let diff = PositionDiff::between(&before, &after);
    assert!(diff.ops().contains(&PieceOp::Move {
        piece: white(PieceType::Knight),
        from: sq("g1"),
        to: sq("e2"),
    }));
    assert!(diff.ops().contains(&PieceOp::Disappear {
        piece: white(PieceType::Knight),
        at: sq("b1"),
    }));
}

#[test]
fn test_unmatched_changes_become_appear_and_disappear() {
    // A rook leaves and a queen arrives; no pairing is possible.
    let before = fen("8/8/8/8/8/8/8/R7");
    let after = fen("8/8/8/8/3q4/8/8/8");
    let diff = PositionDiff::between(&before, &after);
    assert_eq!(diff.len(), 2);
    assert!(diff.ops().contains(&PieceOp::Appear {
        piece: Piece::new(PieceColor::Black, PieceType::Queen),
        at: sq("d4"),
    }));
    assert!(diff.ops().contains(&PieceOp::Disappear {
        piece: white(PieceType::Rook),
        at: sq("a1"),
    }));
}

#[test]
fn test_applying_a_diff_reproduces_the_target() {
    let cases = [
        (FEN_START, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"),
        // Kingside castling: two pieces travel at once.
        ("8/8/8/8/8/8/8/4K2R", "8/8/8/8/8/8/8/5RK1"),
        // Capture.
        ("8/8/8/3p4/4P3/8/8/8", "8/8/8/3P4/8/8/8/8"),
        // Wholesale replacement.
        (FEN_START, "8/8/8/8/8/8/8/8"),
        ("8/8/8/8/8/8/8/8", FEN_START),
        // A piece moves onto a square another piece vacates.
        ("8/8/8/8/8/8/8/RN6", "8/8/8/8/8/8/8/1R6"),
    ];
    for (from_fen, to_fen) in cases {
        let from = fen(from_fen);
        let to = fen(to_fen);
        let diff = PositionDiff::between(&from, &to);
        assert_eq!(
            diff.apply_to(&from),
            to,
            "applying the diff of {from_fen} -> {to_fen} must reproduce the target"
        );
    }
}

// ============================================================================
// Queue behavior
// ============================================================================

/// View that records every call and sleeps for the animation duration plus a
/// configurable extra delay
struct RecordingView {
    events: Arc<Mutex<Vec<String>>>,
    durations: Arc<Mutex<Vec<Duration>>>,
    extra_delay: Duration,
}

impl RecordingView {
    fn new(extra_delay: Duration) -> RecordingView {
        RecordingView {
            events: Arc::new(Mutex::new(Vec::new())),
            durations: Arc::new(Mutex::new(Vec::new())),
            extra_delay,
        }
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String, duration: Duration) {
        self.events.lock().unwrap().push(event);
        self.durations.lock().unwrap().push(duration);
    }
}

#[async_trait]
impl BoardView for RecordingView {
    async fn animate_move(&self, from: Square, to: Square, _piece: Piece, duration: Duration) {
        self.record(format!("move {from}->{to}"), duration);
        tokio::time::sleep(duration + self.extra_delay).await;
    }

    async fn animate_appear(&self, square: Square, _piece: Piece, duration: Duration) {
        self.record(format!("appear {square}"), duration);
        tokio::time::sleep(duration + self.extra_delay).await;
    }

    async fn animate_disappear(&self, square: Square, _piece: Piece, duration: Duration) {
        self.record(format!("disappear {square}"), duration);
        tokio::time::sleep(duration + self.extra_delay).await;
    }

    fn draw_pieces(&self, position: &Position) {
        self.events
            .lock()
            .unwrap()
            .push(format!("draw {}", position.to_fen()));
    }

    fn draw_markers(&self, markers: &[Marker]) {
        self.events
            .lock()
            .unwrap()
            .push(format!("markers {}", markers.len()));
    }

    fn redraw_board(&self, orientation: PieceColor) {
        self.events
            .lock()
            .unwrap()
            .push(format!("redraw {orientation:?}"));
    }
}

#[tokio::test]
async fn test_entries_play_in_enqueue_order() {
    let view = Arc::new(RecordingView::new(Duration::ZERO));
    let queue = AnimationQueue::new(view.clone(), Duration::from_millis(5));

    let first_pos = fen("8/8/8/8/8/8/8/P7");
    let second_pos = fen("8/8/8/8/8/8/8/1P6");

    let first = queue.enqueue_position_change(Position::empty(), first_pos.clone(), true);
    let second = queue.enqueue_position_change(first_pos, second_pos, false);
    first.await;
    second.await;

    assert_eq!(
        view.events(),
        vec![
            "appear a1".to_string(),
            "draw 8/8/8/8/8/8/8/P7".to_string(),
            "move a1->b1".to_string(),
            "draw 8/8/8/8/8/8/8/1P6".to_string(),
        ],
        "the second entry must not start before the first one finished"
    );
}

#[tokio::test]
async fn test_equal_positions_resolve_without_queueing() {
    let view = Arc::new(RecordingView::new(Duration::ZERO));
    let queue = AnimationQueue::new(view.clone(), Duration::from_millis(5));

    let start = fen(FEN_START);
    queue
        .enqueue_position_change(start.clone(), start, true)
        .await;

    assert!(view.events().is_empty(), "a no-op change must not touch the view");
}

#[tokio::test]
async fn test_unanimated_entries_use_zero_duration() {
    let view = Arc::new(RecordingView::new(Duration::ZERO));
    let queue = AnimationQueue::new(view.clone(), Duration::from_millis(50));

    let target = fen("8/8/8/8/8/8/8/P7");
    queue
        .enqueue_position_change(Position::empty(), target.clone(), false)
        .await;
    queue
        .enqueue_position_change(target, Position::empty(), true)
        .await;

    let durations = view.durations.lock().unwrap().clone();
    assert_eq!(durations, vec![Duration::ZERO, Duration::from_millis(50)]);
}

#[tokio::test]
async fn test_turn_board_redraws_between_the_waves() {
    let view = Arc::new(RecordingView::new(Duration::ZERO));
    let queue = AnimationQueue::new(view.clone(), Duration::from_millis(5));

    let position = fen("8/8/8/8/8/8/8/KR6");
    queue
        .enqueue_turn_board(position, PieceColor::Black, true)
        .await;

    assert_eq!(
        view.events(),
        vec![
            "disappear a1".to_string(),
            "disappear b1".to_string(),
            "redraw Black".to_string(),
            "appear a1".to_string(),
            "appear b1".to_string(),
            "draw 8/8/8/8/8/8/8/KR6".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_destroy_resolves_all_handles_without_visuals() {
    let view = Arc::new(RecordingView::new(Duration::from_secs(5)));
    let queue = AnimationQueue::new(view.clone(), Duration::from_millis(1));

    let a = fen("8/8/8/8/8/8/8/P7");
    let b = fen("8/8/8/8/8/8/8/1P6");

    let first = queue.enqueue_position_change(Position::empty(), a.clone(), true);
    let second = queue.enqueue_position_change(a.clone(), b.clone(), true);
    let third = queue.enqueue_position_change(b, Position::empty(), true);

    // Let the driver pick up the first entry, then tear everything down.
    tokio::time::sleep(Duration::from_millis(50)).await;
    queue.destroy();

    tokio::time::timeout(Duration::from_secs(1), async {
        first.await;
        second.await;
        third.await;
    })
    .await
    .expect("all completions must resolve after destroy");

    let events = view.events();
    assert_eq!(
        events,
        vec!["appear a1".to_string()],
        "pending entries must not reach the view after destroy"
    );

    // Enqueueing on a destroyed queue resolves immediately and stays silent.
    queue
        .enqueue_position_change(Position::empty(), a, true)
        .await;
    assert_eq!(view.events(), events);
}
