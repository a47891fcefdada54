//! Free-standing factories for transition results.
//!
//! These read as intent at update-function call sites:
//!
//! ```
//! use nextstate::builder::{dispatch, no_change, with_state};
//! use nextstate::core::TransitionResult;
//!
//! fn update(state: &u32, event: &str) -> TransitionResult<u32, &'static str> {
//!     match event {
//!         "increment" => with_state(state + 1),
//!         "save" => dispatch(["persist"]),
//!         _ => no_change(),
//!     }
//! }
//!
//! assert_eq!(update(&1, "increment").state(), Some(&2));
//! assert!(update(&1, "save").has_effects());
//! assert_eq!(update(&1, "noop"), no_change());
//! ```

pub mod macros;

use crate::core::TransitionResult;
use std::hash::Hash;

/// Move to `state` without requesting any effect.
pub fn with_state<S, E>(state: S) -> TransitionResult<S, E>
where
    E: Eq + Hash,
{
    TransitionResult::with_state(state)
}

/// Move to `state` and request `effects`.
pub fn with_state_and_effects<S, E, I>(state: S, effects: I) -> TransitionResult<S, E>
where
    E: Eq + Hash,
    I: IntoIterator<Item = E>,
{
    TransitionResult::with_state_and_effects(state, effects)
}

/// Keep the current state and request `effects`.
pub fn dispatch<S, E, I>(effects: I) -> TransitionResult<S, E>
where
    E: Eq + Hash,
    I: IntoIterator<Item = E>,
{
    TransitionResult::dispatch(effects)
}

/// Nothing to do.
///
/// A generic factory rather than a shared constant, so it works with any
/// state and effect types at the call site.
pub fn no_change<S, E>() -> TransitionResult<S, E> {
    TransitionResult::no_change()
}
