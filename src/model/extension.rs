//! Extension hook registry
//!
//! A registry of tagged callback records keyed by event name, invoked via
//! explicit iteration in registration order.

use super::piece::PieceColor;

/// Lifecycle events a hook can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionPoint {
    /// The authoritative position changed
    PositionChanged,
    /// The board itself changed (orientation flip)
    BoardChanged,
    /// The board is being torn down
    Destroy,
}

/// Immutable snapshot handed to hooks
///
/// Hooks see the state the board had when the event fired; they cannot reach
/// back into the live board during dispatch, so dispatch order is always
/// well defined.
#[derive(Debug, Clone)]
pub struct ExtensionContext {
    pub point: ExtensionPoint,
    pub board_id: String,
    pub fen: String,
    pub orientation: PieceColor,
}

type ExtensionHook = Box<dyn FnMut(&ExtensionContext) + Send>;

struct HookRecord {
    point: ExtensionPoint,
    hook: ExtensionHook,
}

/// Registry of extension hooks
#[derive(Default)]
pub struct ExtensionRegistry {
    records: Vec<HookRecord>,
}

impl ExtensionRegistry {
    pub fn register<F>(&mut self, point: ExtensionPoint, hook: F)
    where
        F: FnMut(&ExtensionContext) + Send + 'static,
    {
        self.records.push(HookRecord {
            point,
            hook: Box::new(hook),
        });
    }

    /// Calls every hook registered for `ctx.point`, in registration order
    pub fn invoke(&mut self, ctx: &ExtensionContext) {
        for record in self.records.iter_mut() {
            if record.point == ctx.point {
                (record.hook)(ctx);
            }
        }
    }
}
