//! The result of applying an update function to a state and an event.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Marker rendered in place of the state when a result carries none.
pub(crate) const ABSENT: &str = "nil";

/// Outcome of a single update cycle.
///
/// A transition result carries an optional new state and an unordered set of
/// effect requests. An absent state means "keep the current state", not
/// "the state became empty". Duplicate effects collapse by `Eq` + `Hash`.
///
/// Values are immutable once built. Every transformation consumes the value
/// and hands back a new one.
///
/// # Required Traits
///
/// The struct places no bounds on `S` or `E`. Construction from effects needs
/// `E: Eq + Hash`, equality additionally needs `S: PartialEq`, and
/// `Display` needs both parameters to implement `Display`.
///
/// # Example
///
/// ```rust
/// use nextstate::core::TransitionResult;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum Effect {
///     Send,
///     Refresh,
/// }
///
/// let next = TransitionResult::new(Some(1), [Effect::Send, Effect::Refresh, Effect::Send]);
///
/// assert_eq!(next.state(), Some(&1));
/// assert_eq!(next.effects().len(), 2);
/// assert!(next.has_effects());
/// ```
#[derive(Clone, Debug)]
pub struct TransitionResult<S, E> {
    state: Option<S>,
    effects: HashSet<E>,
}

impl<S, E> TransitionResult<S, E> {
    /// Result that neither changes the state nor requests any effect.
    ///
    /// Every value produced by this function compares equal to every other,
    /// so there is no shared instance to preserve.
    ///
    /// ```rust
    /// use nextstate::core::TransitionResult;
    ///
    /// let next: TransitionResult<String, u32> = TransitionResult::no_change();
    /// assert!(!next.has_state());
    /// assert!(!next.has_effects());
    /// ```
    pub fn no_change() -> Self {
        Self {
            state: None,
            effects: HashSet::new(),
        }
    }

    /// The new state, if the transition changed it.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// The requested effects.
    pub fn effects(&self) -> &HashSet<E> {
        &self.effects
    }

    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    /// True iff at least one effect was requested.
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Split the result into its state and effects.
    pub fn into_parts(self) -> (Option<S>, HashSet<E>) {
        (self.state, self.effects)
    }

    /// Resolve against the state the result was computed from.
    ///
    /// Returns the new state if one is present, otherwise `current`, along
    /// with the effects to hand to the effect layer.
    ///
    /// ```rust
    /// use nextstate::core::TransitionResult;
    ///
    /// let (state, effects) = TransitionResult::<u32, &str>::dispatch(["save"]).resolve(7);
    /// assert_eq!(state, 7);
    /// assert!(effects.contains("save"));
    /// ```
    pub fn resolve(self, current: S) -> (S, HashSet<E>) {
        (self.state.unwrap_or(current), self.effects)
    }

    /// Map the state, leaving the effects untouched.
    pub fn map_state<T, F>(self, f: F) -> TransitionResult<T, E>
    where
        F: FnOnce(S) -> T,
    {
        TransitionResult {
            state: self.state.map(f),
            effects: self.effects,
        }
    }
}

impl<S, E: Eq + Hash> TransitionResult<S, E> {
    /// Build a result from an optional state and any collection of effects.
    ///
    /// Duplicate effects collapse into one.
    pub fn new<I>(state: Option<S>, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            state,
            effects: effects.into_iter().collect(),
        }
    }

    /// Move to `state` without requesting any effect.
    pub fn with_state(state: S) -> Self {
        Self::new(Some(state), [])
    }

    /// Move to `state` and request `effects`.
    pub fn with_state_and_effects<I>(state: S, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::new(Some(state), effects)
    }

    /// Keep the current state and request `effects`.
    pub fn dispatch<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::new(None, effects)
    }

    /// Check whether `effect` was requested.
    pub fn contains_effect<Q>(&self, effect: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.effects.contains(effect)
    }

    /// Return a new result that additionally requests `effect`.
    pub fn and_effect(mut self, effect: E) -> Self {
        self.effects.insert(effect);
        self
    }

    /// Return a new result that additionally requests every effect in `effects`.
    pub fn and_effects<I>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.effects.extend(effects);
        self
    }

    /// Combine two results computed one after the other.
    ///
    /// The state of `later` wins when present. Effects are unioned.
    ///
    /// ```rust
    /// use nextstate::core::TransitionResult;
    ///
    /// let first = TransitionResult::with_state_and_effects(1, ["a"]);
    /// let second = TransitionResult::dispatch(["b"]);
    ///
    /// let merged = first.merge(second);
    /// assert_eq!(merged.state(), Some(&1));
    /// assert_eq!(merged.effects().len(), 2);
    /// ```
    pub fn merge(self, later: Self) -> Self {
        let mut effects = self.effects;
        effects.extend(later.effects);
        Self {
            state: later.state.or(self.state),
            effects,
        }
    }

    /// Map every effect. Effects that become equal collapse.
    pub fn map_effects<F, M>(self, f: M) -> TransitionResult<S, F>
    where
        F: Eq + Hash,
        M: FnMut(E) -> F,
    {
        TransitionResult {
            state: self.state,
            effects: self.effects.into_iter().map(f).collect(),
        }
    }
}

impl<S, E> Default for TransitionResult<S, E> {
    fn default() -> Self {
        Self::no_change()
    }
}

impl<S: PartialEq, E: Eq + Hash> PartialEq for TransitionResult<S, E> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.effects == other.effects
    }
}

impl<S: Eq, E: Eq + Hash> Eq for TransitionResult<S, E> {}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for TransitionResult<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => write!(f, "({state}, ")?,
            None => write!(f, "({ABSENT}, ")?,
        }
        write_effects(f, &self.effects)?;
        f.write_str(")")
    }
}

/// Render effects as `[a, b, ...]` in the set's iteration order.
pub(crate) fn write_effects<E: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    effects: &HashSet<E>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, effect) in effects.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{effect}")?;
    }
    f.write_str("]")
}
