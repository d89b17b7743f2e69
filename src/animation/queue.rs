//! Ordered animation queue
//!
//! Serializes visual transitions so at most one animation plays at a time.
//! Entries are processed strictly in enqueue order by a driver task; within
//! one entry all sub-animations run concurrently with one shared duration,
//! and the entry's completion resolves only when every sub-animation has
//! finished. Entry N+1 never starts before entry N has resolved, so a view
//! never observes interleaved partial states from two transitions.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::model::{PieceColor, Position};
use crate::view::BoardView;

use super::diff::{PieceOp, PositionDiff};

/// Completion handle for an enqueued transition
///
/// Resolves once the visual transition has finished, or immediately when the
/// transition was skipped (no-op change, destroyed queue). It never fails: a
/// torn-down driver counts as resolution, so awaiting after `destroy` cannot
/// hang.
pub struct Completion {
    inner: CompletionInner,
}

enum CompletionInner {
    Resolved,
    Pending(oneshot::Receiver<()>),
}

impl Completion {
    pub(crate) fn resolved() -> Completion {
        Completion {
            inner: CompletionInner::Resolved,
        }
    }

    fn pending(receiver: oneshot::Receiver<()>) -> Completion {
        Completion {
            inner: CompletionInner::Pending(receiver),
        }
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match &mut self.get_mut().inner {
            CompletionInner::Resolved => Poll::Ready(()),
            // A dropped sender means the entry will never play; that still
            // counts as resolution.
            CompletionInner::Pending(receiver) => Pin::new(receiver).poll(cx).map(|_| ()),
        }
    }
}

/// Clears the caller-side flip guard even when the entry is dropped unplayed
pub(crate) struct TurnGuard(Arc<AtomicBool>);

impl TurnGuard {
    pub(crate) fn new(flag: Arc<AtomicBool>) -> TurnGuard {
        TurnGuard(flag)
    }
}

impl Drop for TurnGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

enum Transition {
    PositionChange {
        from: Position,
        to: Position,
    },
    TurnBoard {
        position: Position,
        orientation: PieceColor,
        guard: Option<TurnGuard>,
    },
}

struct QueueEntry {
    transition: Transition,
    animated: bool,
    done: oneshot::Sender<()>,
}

/// FIFO queue of visual transitions, processed by a background driver task
pub struct AnimationQueue {
    sender: mpsc::UnboundedSender<QueueEntry>,
    driver: JoinHandle<()>,
}

impl AnimationQueue {
    /// Spawns the driver task on the current tokio runtime
    ///
    /// Panics outside a runtime; [`crate::board::Chessboard::new`] checks for
    /// one first and surfaces a construction error instead.
    pub fn new(view: Arc<dyn BoardView>, duration: Duration) -> AnimationQueue {
        let (sender, receiver) = mpsc::unbounded_channel();
        let driver = tokio::spawn(drive(view, duration, receiver));
        AnimationQueue { sender, driver }
    }

    /// Queues the visual transition between two position snapshots
    ///
    /// Equal positions resolve immediately without queueing an entry.
    pub fn enqueue_position_change(
        &self,
        from: Position,
        to: Position,
        animated: bool,
    ) -> Completion {
        if from == to {
            return Completion::resolved();
        }
        self.submit(Transition::PositionChange { from, to }, animated)
    }

    /// Queues a board flip: pieces leave, the board redraws with the new
    /// orientation, the pieces come back
    ///
    /// The at-most-one-flip-in-flight rule is the caller's guard, not the
    /// queue's; the queue plays whatever it is handed, in order.
    pub fn enqueue_turn_board(
        &self,
        position: Position,
        orientation: PieceColor,
        animated: bool,
    ) -> Completion {
        self.submit(
            Transition::TurnBoard {
                position,
                orientation,
                guard: None,
            },
            animated,
        )
    }

    pub(crate) fn enqueue_turn_board_guarded(
        &self,
        position: Position,
        orientation: PieceColor,
        animated: bool,
        guard: TurnGuard,
    ) -> Completion {
        self.submit(
            Transition::TurnBoard {
                position,
                orientation,
                guard: Some(guard),
            },
            animated,
        )
    }

    fn submit(&self, transition: Transition, animated: bool) -> Completion {
        let (done, receiver) = oneshot::channel();
        let entry = QueueEntry {
            transition,
            animated,
            done,
        };
        match self.sender.send(entry) {
            Ok(()) => Completion::pending(receiver),
            // Destroyed queue: skip the visuals but resolve the caller.
            Err(_) => Completion::resolved(),
        }
    }

    /// Stops the driver
    ///
    /// Pending and in-flight entries never touch the view again, and every
    /// outstanding completion handle resolves within one scheduling turn.
    pub fn destroy(&self) {
        self.driver.abort();
    }
}

impl Drop for AnimationQueue {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(
    view: Arc<dyn BoardView>,
    duration: Duration,
    mut receiver: mpsc::UnboundedReceiver<QueueEntry>,
) {
    while let Some(entry) = receiver.recv().await {
        let QueueEntry {
            transition,
            animated,
            done,
        } = entry;
        let duration = if animated { duration } else { Duration::ZERO };
        match transition {
            Transition::PositionChange { from, to } => {
                play_position_change(view.as_ref(), &from, &to, duration).await;
            }
            Transition::TurnBoard {
                position,
                orientation,
                guard,
            } => {
                play_turn_board(view.as_ref(), &position, orientation, duration).await;
                drop(guard);
            }
        }
        // A gone receiver means the caller stopped waiting; nothing to do.
        let _ = done.send(());
    }
}

async fn play_position_change(
    view: &dyn BoardView,
    from: &Position,
    to: &Position,
    duration: Duration,
) {
    let diff = PositionDiff::between(from, to);
    debug!(ops = diff.len(), "playing position change");
    animate_ops(view, &diff, duration).await;
    view.draw_pieces(to);
}

async fn play_turn_board(
    view: &dyn BoardView,
    position: &Position,
    orientation: PieceColor,
    duration: Duration,
) {
    debug!(?orientation, "turning board");
    let empty = Position::empty();
    animate_ops(view, &PositionDiff::between(position, &empty), duration).await;
    view.redraw_board(orientation);
    animate_ops(view, &PositionDiff::between(&empty, position), duration).await;
    view.draw_pieces(position);
}

async fn animate_ops(view: &dyn BoardView, diff: &PositionDiff, duration: Duration) {
    let animations = diff.ops().iter().map(|op| match *op {
        PieceOp::Move { piece, from, to } => view.animate_move(from, to, piece, duration),
        PieceOp::Appear { piece, at } => view.animate_appear(at, piece, duration),
        PieceOp::Disappear { piece, at } => view.animate_disappear(at, piece, duration),
    });
    join_all(animations).await;
}
