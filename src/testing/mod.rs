//! Given/when/then verification of update functions.
//!
//! Update functions are pure, so testing them needs no mocks: pick a state,
//! feed it events, and check the resulting [`TransitionResult`] against a set
//! of [`Expectations`]. Checks use `Validation`, so a failing spec reports
//! every mismatch at once.
//!
//! # Example
//!
//! ```rust
//! use nextstate::core::TransitionResult;
//! use nextstate::testing::{ExpectationsBuilder, UpdateSpec};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Effect {
//!     Save(u32),
//! }
//!
//! fn update(state: &u32, event: &str) -> TransitionResult<u32, Effect> {
//!     match event {
//!         "add" => TransitionResult::with_state_and_effects(state + 1, [Effect::Save(state + 1)]),
//!         _ => TransitionResult::no_change(),
//!     }
//! }
//!
//! let spec = UpdateSpec::new(update);
//!
//! spec.given(1)
//!     .when("add")
//!     .then(
//!         &ExpectationsBuilder::new()
//!             .has_state(2)
//!             .has_only_effects([Effect::Save(2)])
//!             .build(),
//!     )
//!     .and("ignored")
//!     .then(&ExpectationsBuilder::new().has_no_state().has_no_effects().build());
//! ```

pub mod expectations;
pub mod mismatch;

pub use expectations::{ExpectationCheck, Expectations, ExpectationsBuilder};
pub use mismatch::{Mismatch, Verdict};

use crate::core::{TransitionResult, Update};
use std::hash::Hash;
use stillwater::validation::Validation;

/// Test harness around a single update function.
pub struct UpdateSpec<U> {
    update: U,
}

impl<U> UpdateSpec<U> {
    pub fn new(update: U) -> Self {
        Self { update }
    }

    /// Start from `state`.
    pub fn given<S>(&self, state: S) -> Given<'_, U, S> {
        Given {
            update: &self.update,
            state,
        }
    }
}

/// A starting state waiting for its first event.
pub struct Given<'a, U, S> {
    update: &'a U,
    state: S,
}

impl<'a, U, S> Given<'a, U, S> {
    /// Apply `event` to the given state.
    pub fn when<Ev, E>(self, event: Ev) -> Outcome<'a, U, S, E>
    where
        U: Update<S, Ev, E>,
        E: Eq + Hash,
    {
        Outcome::apply(self.update, self.state, event)
    }
}

/// The result of the most recent event, together with the state it was
/// computed from.
pub struct Outcome<'a, U, S, E> {
    update: &'a U,
    state: S,
    next: TransitionResult<S, E>,
}

impl<'a, U, S, E> Outcome<'a, U, S, E>
where
    E: Eq + Hash,
{
    fn apply<Ev>(update: &'a U, state: S, event: Ev) -> Self
    where
        U: Update<S, Ev, E>,
    {
        let next = update.update(&state, event);
        tracing::debug!(
            state_changed = next.has_state(),
            effect_count = next.effects().len(),
            "applied event"
        );
        Self {
            update,
            state,
            next,
        }
    }

    /// Apply another event to the state resolved from the current result.
    ///
    /// Effects requested by earlier events are dropped; only the latest
    /// result is checked.
    pub fn and<Ev>(self, event: Ev) -> Self
    where
        U: Update<S, Ev, E>,
    {
        let (state, _) = self.next.resolve(self.state);
        Self::apply(self.update, state, event)
    }

    /// The result of the most recent event.
    pub fn result(&self) -> &TransitionResult<S, E> {
        &self.next
    }

    /// The state the most recent event was applied to.
    pub fn state_before(&self) -> &S {
        &self.state
    }

    pub fn verify(&self, expectations: &Expectations<S, E>) -> Verdict {
        expectations.verify(&self.next)
    }

    /// Check `expectations`, panicking with every mismatch if any fail.
    pub fn then(self, expectations: &Expectations<S, E>) -> Self {
        if let Validation::Failure(errors) = self.verify(expectations) {
            tracing::debug!(mismatches = errors.len(), "expectations not met");
            let report: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
            panic!("update spec failed:\n{}", report.join("\n"));
        }
        self
    }
}
