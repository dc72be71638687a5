//! Host listener registration as an owned, scoped resource.
//!
//! While a drag is in flight a control listens at document level for move and
//! end events, and while mounted it listens for window resizes. The host
//! performs the actual (un)registration through [`ListenerHost`]; the
//! [`ListenerRegistry`] tracks what is attached and detaches everything it
//! still holds when dropped, so tearing a control down mid-drag cannot leak
//! handlers.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Kinds of host-level listeners a control may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Document-level mouse move
    MouseMove,
    /// Document-level touch move
    TouchMove,
    /// Document-level mouse up
    MouseUp,
    /// Document-level touch end
    TouchEnd,
    /// Window-level resize
    WindowResize,
}

impl ListenerKind {
    /// Listeners that track an in-flight drag.
    pub const DRAG_MOVE: [Self; 2] = [Self::MouseMove, Self::TouchMove];
    /// Listeners that terminate a drag.
    pub const DRAG_END: [Self; 2] = [Self::MouseUp, Self::TouchEnd];

    /// DOM event name.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::MouseMove => "mousemove",
            Self::TouchMove => "touchmove",
            Self::MouseUp => "mouseup",
            Self::TouchEnd => "touchend",
            Self::WindowResize => "resize",
        }
    }

    /// Whether the listener is registered on the document (vs. the window).
    #[must_use]
    pub const fn is_document_level(self) -> bool {
        !matches!(self, Self::WindowResize)
    }
}

/// Host side of listener registration.
pub trait ListenerHost: Send {
    /// Register a listener of the given kind for this control.
    fn attach(&mut self, kind: ListenerKind);

    /// Remove a previously registered listener.
    fn detach(&mut self, kind: ListenerKind);
}

/// Host that registers nothing (headless use).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl ListenerHost for NoopHost {
    fn attach(&mut self, _kind: ListenerKind) {}

    fn detach(&mut self, _kind: ListenerKind) {}
}

/// Operation recorded by [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerOp {
    /// Listener attached
    Attach(ListenerKind),
    /// Listener detached
    Detach(ListenerKind),
}

/// Host that records every operation; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Arc<Mutex<Vec<ListenerOp>>>,
}

impl RecordingHost {
    /// Create an empty recording host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation so far, in order.
    #[must_use]
    pub fn operations(&self) -> Vec<ListenerOp> {
        self.log.lock().clone()
    }

    /// Listeners currently attached.
    #[must_use]
    pub fn active(&self) -> Vec<ListenerKind> {
        let mut active = Vec::new();
        for op in self.log.lock().iter() {
            match *op {
                ListenerOp::Attach(kind) => active.push(kind),
                ListenerOp::Detach(kind) => {
                    if let Some(index) = active.iter().position(|k| *k == kind) {
                        active.remove(index);
                    }
                }
            }
        }
        active
    }

    /// Whether a listener of `kind` is attached.
    #[must_use]
    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.active().contains(&kind)
    }

    /// Number of attach operations recorded.
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|op| matches!(op, ListenerOp::Attach(_)))
            .count()
    }
}

impl ListenerHost for RecordingHost {
    fn attach(&mut self, kind: ListenerKind) {
        self.log.lock().push(ListenerOp::Attach(kind));
    }

    fn detach(&mut self, kind: ListenerKind) {
        self.log.lock().push(ListenerOp::Detach(kind));
    }
}

/// Host that queues operations until the embedder drains them.
///
/// Clones share the queue. Drained operations are dropped, so the queue only
/// holds what the embedder has not applied yet.
#[derive(Debug, Clone, Default)]
pub struct QueuedHost {
    pending: Arc<Mutex<Vec<ListenerOp>>>,
}

impl QueuedHost {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every operation queued since the last drain, in order.
    #[must_use]
    pub fn drain(&self) -> Vec<ListenerOp> {
        std::mem::take(&mut *self.pending.lock())
    }

    /// Number of operations waiting to be drained.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }
}

impl ListenerHost for QueuedHost {
    fn attach(&mut self, kind: ListenerKind) {
        self.pending.lock().push(ListenerOp::Attach(kind));
    }

    fn detach(&mut self, kind: ListenerKind) {
        self.pending.lock().push(ListenerOp::Detach(kind));
    }
}

/// Listeners held by one control instance.
///
/// Each kind is attached at most once. Releases can be deferred to the next
/// [`tick`](Self::tick); re-acquiring a kind that is waiting for its deferred
/// release keeps it attached instead of dropping it a tick later.
pub struct ListenerRegistry {
    host: Box<dyn ListenerHost>,
    attached: Vec<ListenerKind>,
    deferred: Vec<ListenerKind>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("attached", &self.attached)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new(NoopHost)
    }
}

impl ListenerRegistry {
    /// Create a registry backed by `host`.
    pub fn new(host: impl ListenerHost + 'static) -> Self {
        Self {
            host: Box::new(host),
            attached: Vec::new(),
            deferred: Vec::new(),
        }
    }

    /// Attach every kind not already held.
    pub fn acquire(&mut self, kinds: &[ListenerKind]) {
        for &kind in kinds {
            self.deferred.retain(|k| *k != kind);
            if !self.attached.contains(&kind) {
                self.host.attach(kind);
                self.attached.push(kind);
            }
        }
    }

    /// Detach the given kinds now.
    pub fn release(&mut self, kinds: &[ListenerKind]) {
        for &kind in kinds {
            self.deferred.retain(|k| *k != kind);
            if let Some(index) = self.attached.iter().position(|k| *k == kind) {
                self.attached.remove(index);
                self.host.detach(kind);
            }
        }
    }

    /// Detach the given kinds on the next [`tick`](Self::tick).
    pub fn release_next_tick(&mut self, kinds: &[ListenerKind]) {
        for &kind in kinds {
            if self.attached.contains(&kind) && !self.deferred.contains(&kind) {
                self.deferred.push(kind);
            }
        }
    }

    /// Run deferred releases. Returns how many listeners were detached.
    pub fn tick(&mut self) -> usize {
        let due = std::mem::take(&mut self.deferred);
        let count = due.len();
        self.release(&due);
        count
    }

    /// Detach everything immediately, deferred or not.
    pub fn release_all(&mut self) {
        self.deferred.clear();
        for kind in std::mem::take(&mut self.attached) {
            self.host.detach(kind);
        }
    }

    /// Whether `kind` is currently attached.
    #[must_use]
    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached.contains(&kind)
    }

    /// Whether releases are waiting for the next tick.
    #[must_use]
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// True when nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

impl Drop for ListenerRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}
