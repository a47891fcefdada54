//! Initial state and effects for starting a loop.

use super::next::{write_effects, TransitionResult};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Result of initializing a loop.
///
/// Unlike [`TransitionResult`], the state is always present: a loop cannot
/// start without one. Effects follow the same set semantics.
///
/// # Example
///
/// ```rust
/// use nextstate::core::First;
///
/// let first = First::new("loading", ["fetch"]);
/// assert_eq!(first.state(), &"loading");
/// assert!(first.has_effects());
/// ```
#[derive(Clone, Debug)]
pub struct First<S, E> {
    state: S,
    effects: HashSet<E>,
}

impl<S, E> First<S, E> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn effects(&self) -> &HashSet<E> {
        &self.effects
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn into_parts(self) -> (S, HashSet<E>) {
        (self.state, self.effects)
    }
}

impl<S, E: Eq + Hash> First<S, E> {
    /// Start in `state` and request `effects`. Duplicates collapse.
    pub fn new<I>(state: S, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            state,
            effects: effects.into_iter().collect(),
        }
    }

    /// Start in `state` without requesting any effect.
    pub fn with_state(state: S) -> Self {
        Self::new(state, [])
    }
}

impl<S, E> From<First<S, E>> for TransitionResult<S, E>
where
    E: Eq + Hash,
{
    fn from(first: First<S, E>) -> Self {
        TransitionResult::with_state_and_effects(first.state, first.effects)
    }
}

impl<S: PartialEq, E: Eq + Hash> PartialEq for First<S, E> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.effects == other.effects
    }
}

impl<S: Eq, E: Eq + Hash> Eq for First<S, E> {}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for First<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, ", self.state)?;
        write_effects(f, &self.effects)?;
        f.write_str(")")
    }
}
