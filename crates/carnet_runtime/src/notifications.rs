//! Cross-component notifications delivered one scheduler tick after the triggering event.
//!
//! Reducers run synchronously inside pointer handlers. Anything that would make another component
//! mutate its own state is parked in a [`DeferredQueue`] and flushed on the next animation frame,
//! so no component updates state while another component's event is still being handled.

use crate::{card_stack::StackEffect, model::PageKey};

/// Ticket for one scheduled item; cancelling an already-delivered ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    next_handle: u64,
    pending: Vec<(TickHandle, T)>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks `item` until the next [`flush`](Self::flush).
    pub fn schedule(&mut self, item: T) -> TickHandle {
        self.next_handle += 1;
        let handle = TickHandle(self.next_handle);
        self.pending.push((handle, item));
        handle
    }

    /// Drops one pending item. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TickHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Takes every pending item in scheduling order.
    pub fn flush(&mut self) -> Vec<T> {
        self.pending.drain(..).map(|(_, item)| item).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNotification {
    /// The page's tab was clicked while it was already active.
    Reseed(PageKey),
}

/// One delivered re-activation; `seq` grows with every delivery so repeats are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReseedTick {
    pub page: PageKey,
    pub seq: u64,
}

/// Whether `tick` is a new re-activation of `page`.
///
/// `last_seen` is the sequence observed on the previous run of the watching effect, and `None`
/// on its first run: a tick already present when the page mounts is never acted on.
pub fn should_advance(
    page: PageKey,
    last_seen: Option<Option<u64>>,
    tick: Option<ReseedTick>,
) -> bool {
    match (last_seen, tick) {
        (Some(last_seq), Some(tick)) => tick.page == page && last_seq != Some(tick.seq),
        _ => false,
    }
}

/// Routes reducer effects: returns the key to report as active right away and queues
/// re-activation notices for the next tick.
pub fn schedule_stack_effects(
    effects: &[StackEffect],
    queue: &mut DeferredQueue<PageNotification>,
) -> Option<PageKey> {
    let mut active = None;
    for effect in effects {
        match *effect {
            StackEffect::ActiveChanged(key) => active = Some(key),
            StackEffect::LabelReactivated(key) => {
                queue.schedule(PageNotification::Reseed(key));
            }
        }
    }
    active
}
