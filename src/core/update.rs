//! Update and init function seams.
//!
//! Update functions are pure: they read the current state and an event and
//! describe what should happen next. Nothing here performs the effects.

use super::first::First;
use super::next::TransitionResult;
use std::collections::HashSet;
use std::hash::Hash;

/// Pure function from (current state, event) to a [`TransitionResult`].
///
/// Implemented for every `Fn(&S, Ev) -> TransitionResult<S, E>`, so plain
/// functions and closures can be used directly.
///
/// # Example
///
/// ```rust
/// use nextstate::core::{TransitionResult, Update};
///
/// fn counter(state: &i64, delta: i64) -> TransitionResult<i64, &'static str> {
///     if delta == 0 {
///         TransitionResult::no_change()
///     } else {
///         TransitionResult::with_state(state + delta)
///     }
/// }
///
/// assert_eq!(counter.update(&1, 2), TransitionResult::with_state(3));
/// assert_eq!(counter.update(&1, 0), TransitionResult::no_change());
/// ```
pub trait Update<S, Ev, E> {
    fn update(&self, state: &S, event: Ev) -> TransitionResult<S, E>;
}

impl<S, Ev, E, F> Update<S, Ev, E> for F
where
    F: Fn(&S, Ev) -> TransitionResult<S, E>,
{
    fn update(&self, state: &S, event: Ev) -> TransitionResult<S, E> {
        self(state, event)
    }
}

/// Pure function producing the [`First`] of a loop from a starting state.
///
/// Typically used to resume from a restored state and request the effects
/// needed to catch up.
pub trait Initiate<S, E> {
    fn initiate(&self, state: S) -> First<S, E>;
}

impl<S, E, F> Initiate<S, E> for F
where
    F: Fn(S) -> First<S, E>,
{
    fn initiate(&self, state: S) -> First<S, E> {
        self(state)
    }
}

/// Run one update and resolve it against `state`.
///
/// Returns the state to continue from and the effects to hand to the effect
/// layer. This is pure; tracing output is the only observable side channel.
///
/// ```rust
/// use nextstate::core::{advance, TransitionResult};
///
/// let update = |state: &u32, event: u32| {
///     TransitionResult::with_state_and_effects(state + event, ["persist"])
/// };
///
/// let (state, effects) = advance(&update, 1, 2);
/// assert_eq!(state, 3);
/// assert!(effects.contains("persist"));
/// ```
pub fn advance<U, S, Ev, E>(update: &U, state: S, event: Ev) -> (S, HashSet<E>)
where
    U: Update<S, Ev, E>,
    E: Eq + Hash,
{
    let next = update.update(&state, event);
    tracing::trace!(
        state_changed = next.has_state(),
        effect_count = next.effects().len(),
        "advanced"
    );
    next.resolve(state)
}
