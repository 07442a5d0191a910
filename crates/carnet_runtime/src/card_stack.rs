//! Card-stack ordering, reducer actions, and emitted effects.
//!
//! The stack is an ordered sequence of page keys where position 0 is furthest back and the last
//! entry is the frontmost, active card. Reordering only ever moves one existing key to the end,
//! so the order stays a permutation of the seeded keys.

use thiserror::Error;

use crate::model::{Card, PageKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOrder {
    keys: Vec<PageKey>,
}

impl StackOrder {
    /// Seeds the order from the shell-provided list (identity order, last = topmost).
    ///
    /// Repeated keys keep their first occurrence.
    pub fn initialize(keys: impl IntoIterator<Item = PageKey>) -> Self {
        let mut ordered = Vec::new();
        for key in keys {
            if !ordered.contains(&key) {
                ordered.push(key);
            }
        }
        Self { keys: ordered }
    }

    pub fn keys(&self) -> &[PageKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: PageKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn active(&self) -> Option<PageKey> {
        self.keys.last().copied()
    }

    pub fn position_of(&self, key: PageKey) -> Option<usize> {
        self.keys.iter().position(|k| *k == key)
    }

    /// True iff `position` is the frontmost slot.
    pub fn is_top(&self, position: usize) -> bool {
        !self.keys.is_empty() && position == self.keys.len() - 1
    }

    pub fn cards(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.keys.iter().enumerate().map(|(idx, key)| (idx, key.card()))
    }

    /// Removes `key` from the order and appends it at the end.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::UnknownCard`] when `key` is not part of the stack; the order is
    /// left untouched.
    pub fn bring_to_front(&mut self, key: PageKey) -> Result<(), StackError> {
        let index = self
            .position_of(key)
            .ok_or(StackError::UnknownCard(key))?;
        if index + 1 != self.keys.len() {
            let moved = self.keys.remove(index);
            self.keys.push(moved);
        }
        Ok(())
    }

    /// Whether `keys` names a different set of pages than this stack.
    pub fn differs_from(&self, keys: &[PageKey]) -> bool {
        let other = Self::initialize(keys.iter().copied());
        other.len() != self.len() || other.keys.iter().any(|key| !self.contains(*key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackAction {
    /// A click anywhere on a card body.
    CardClicked { key: PageKey },
    /// A click on a card's folder tab.
    LabelClicked { key: PageKey },
    /// The shell supplied a (possibly different) initial key list.
    Reseed { keys: Vec<PageKey> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEffect {
    /// Report the topmost key upward.
    ActiveChanged(PageKey),
    /// The tab of the already-active card was clicked again.
    LabelReactivated(PageKey),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("card `{0}` is not in the stack")]
    UnknownCard(PageKey),
}

/// Applies a [`StackAction`] and collects the effects the shell must deliver.
///
/// # Errors
///
/// Returns [`StackError::UnknownCard`] when a click names a key not in the stack.
pub fn reduce_stack(
    stack: &mut StackOrder,
    action: StackAction,
) -> Result<Vec<StackEffect>, StackError> {
    let mut effects = Vec::new();
    match action {
        StackAction::CardClicked { key } => {
            stack.bring_to_front(key)?;
            effects.push(StackEffect::ActiveChanged(key));
        }
        StackAction::LabelClicked { key } => {
            let was_active = stack.active() == Some(key);
            stack.bring_to_front(key)?;
            if was_active {
                effects.push(StackEffect::LabelReactivated(key));
            }
            effects.push(StackEffect::ActiveChanged(key));
        }
        StackAction::Reseed { keys } => {
            if stack.differs_from(&keys) {
                *stack = StackOrder::initialize(keys);
                if let Some(active) = stack.active() {
                    effects.push(StackEffect::ActiveChanged(active));
                }
            }
        }
    }
    Ok(effects)
}
