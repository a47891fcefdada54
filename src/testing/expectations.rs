//! Expectations on a transition result, checked with `Validation`.
//!
//! Every check runs, so a failing result reports all of its mismatches at
//! once instead of only the first one.

use crate::core::TransitionResult;
use crate::testing::mismatch::{Mismatch, Verdict};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Type alias for a single expectation check.
pub type ExpectationCheck<S, E> = Box<dyn Fn(&TransitionResult<S, E>) -> Verdict + Send + Sync>;

/// A set of checks to run against one transition result.
pub struct Expectations<S, E> {
    checks: Vec<ExpectationCheck<S, E>>,
}

impl<S, E> Expectations<S, E> {
    /// Run every check, accumulating ALL mismatches.
    pub fn verify(&self, next: &TransitionResult<S, E>) -> Verdict {
        let verdicts: Vec<Verdict> = self.checks.iter().map(|check| check(next)).collect();
        Validation::all_vec(verdicts).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Builder for [`Expectations`]
pub struct ExpectationsBuilder<S, E> {
    checks: Vec<ExpectationCheck<S, E>>,
}

impl<S, E> ExpectationsBuilder<S, E> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a custom check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TransitionResult<S, E>) -> Verdict + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&TransitionResult<S, E>) -> bool + Send + Sync + 'static,
    {
        self.require(move |next| {
            if predicate(next) {
                Validation::success(())
            } else {
                Validation::fail(Mismatch::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        })
    }

    pub fn build(self) -> Expectations<S, E> {
        Expectations {
            checks: self.checks,
        }
    }
}

impl<S, E> ExpectationsBuilder<S, E>
where
    S: PartialEq + Debug + Send + Sync + 'static,
    E: Eq + Hash + Debug + Send + Sync + 'static,
{
    /// Expect the state to have changed to `expected`.
    pub fn has_state(self, expected: S) -> Self {
        self.require(move |next| match next.state() {
            Some(actual) if *actual == expected => Validation::success(()),
            Some(actual) => Validation::fail(Mismatch::UnexpectedState {
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            }),
            None => Validation::fail(Mismatch::MissingState {
                expected: format!("{expected:?}"),
            }),
        })
    }

    /// Expect the state to be left unchanged.
    pub fn has_no_state(self) -> Self {
        self.require(|next| match next.state() {
            None => Validation::success(()),
            Some(actual) => Validation::fail(Mismatch::UnexpectedStateChange {
                actual: format!("{actual:?}"),
            }),
        })
    }

    /// Expect at least these effects. Others may be present too.
    pub fn has_effects<I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let expected: HashSet<E> = expected.into_iter().collect();
        self.require(move |next| missing_from(&expected, next.effects()))
    }

    /// Expect exactly these effects.
    pub fn has_only_effects<I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let expected: Arc<HashSet<E>> = Arc::new(expected.into_iter().collect());
        let allowed = Arc::clone(&expected);

        self.require(move |next| missing_from(&expected, next.effects()))
            .require(move |next| unexpected(next.effects().difference(&allowed).collect()))
    }

    /// Expect no effects at all.
    pub fn has_no_effects(self) -> Self {
        self.require(|next| unexpected(next.effects().iter().collect()))
    }

    /// Expect `effect` not to be requested.
    pub fn lacks_effect(self, effect: E) -> Self {
        self.require(move |next| {
            if next.contains_effect(&effect) {
                unexpected(vec![&effect])
            } else {
                Validation::success(())
            }
        })
    }
}

impl<S, E> Default for ExpectationsBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_from<E: Eq + Hash + Debug>(expected: &HashSet<E>, actual: &HashSet<E>) -> Verdict {
    let missing: Vec<&E> = expected.difference(actual).collect();
    if missing.is_empty() {
        Validation::success(())
    } else {
        Validation::fail(Mismatch::MissingEffects {
            missing: render(missing),
        })
    }
}

fn unexpected<E: Debug>(extra: Vec<&E>) -> Verdict {
    if extra.is_empty() {
        Validation::success(())
    } else {
        Validation::fail(Mismatch::UnexpectedEffects {
            unexpected: render(extra),
        })
    }
}

/// Sorted so messages do not depend on set iteration order.
fn render<E: Debug>(effects: Vec<&E>) -> String {
    let mut rendered: Vec<String> = effects.iter().map(|e| format!("{e:?}")).collect();
    rendered.sort();
    rendered.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestEffect {
        Fetch,
        Render,
        Log,
    }

    type Next = TransitionResult<u32, TestEffect>;

    fn failures(verdict: Verdict) -> Vec<Mismatch> {
        match verdict {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn empty_expectations_always_pass() {
        let expectations: Expectations<u32, TestEffect> = ExpectationsBuilder::new().build();

        assert!(expectations.is_empty());
        assert!(expectations.verify(&Next::no_change()).is_success());
    }

    #[test]
    fn has_state_reports_wrong_and_missing_state() {
        let expectations: Expectations<u32, TestEffect> =
            ExpectationsBuilder::new().has_state(2).build();

        assert!(expectations.verify(&Next::with_state(2)).is_success());
        assert_eq!(
            failures(expectations.verify(&Next::with_state(3))),
            vec![Mismatch::UnexpectedState {
                expected: "2".to_string(),
                actual: "3".to_string(),
            }]
        );
        assert_eq!(
            failures(expectations.verify(&Next::no_change())),
            vec![Mismatch::MissingState {
                expected: "2".to_string(),
            }]
        );
    }

    #[test]
    fn has_no_state_rejects_state_change() {
        let expectations: Expectations<u32, TestEffect> =
            ExpectationsBuilder::new().has_no_state().build();

        assert!(expectations.verify(&Next::dispatch([TestEffect::Log])).is_success());
        assert!(expectations.verify(&Next::with_state(1)).is_failure());
    }

    #[test]
    fn has_effects_allows_extra_effects() {
        let expectations: Expectations<u32, TestEffect> = ExpectationsBuilder::new()
            .has_effects([TestEffect::Fetch])
            .build();

        let next = Next::dispatch([TestEffect::Fetch, TestEffect::Log]);
        assert!(expectations.verify(&next).is_success());

        let next = Next::dispatch([TestEffect::Log]);
        assert_eq!(
            failures(expectations.verify(&next)),
            vec![Mismatch::MissingEffects {
                missing: "Fetch".to_string(),
            }]
        );
    }

    #[test]
    fn has_only_effects_reports_missing_and_unexpected() {
        let expectations: Expectations<u32, TestEffect> = ExpectationsBuilder::new()
            .has_only_effects([TestEffect::Fetch, TestEffect::Render])
            .build();

        assert!(expectations
            .verify(&Next::dispatch([TestEffect::Render, TestEffect::Fetch]))
            .is_success());

        let errors = failures(expectations.verify(&Next::dispatch([
            TestEffect::Fetch,
            TestEffect::Log,
        ])));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&Mismatch::MissingEffects {
            missing: "Render".to_string(),
        }));
        assert!(errors.contains(&Mismatch::UnexpectedEffects {
            unexpected: "Log".to_string(),
        }));
    }

    #[test]
    fn has_no_effects_lists_effects_sorted() {
        let expectations: Expectations<u32, TestEffect> =
            ExpectationsBuilder::new().has_no_effects().build();

        assert!(expectations.verify(&Next::with_state(1)).is_success());
        assert_eq!(
            failures(expectations.verify(&Next::dispatch([TestEffect::Render, TestEffect::Fetch]))),
            vec![Mismatch::UnexpectedEffects {
                unexpected: "Fetch, Render".to_string(),
            }]
        );
    }

    #[test]
    fn lacks_effect_rejects_named_effect() {
        let expectations: Expectations<u32, TestEffect> = ExpectationsBuilder::new()
            .lacks_effect(TestEffect::Log)
            .build();

        assert!(expectations.verify(&Next::dispatch([TestEffect::Fetch])).is_success());
        assert!(expectations.verify(&Next::dispatch([TestEffect::Log])).is_failure());
    }

    #[test]
    fn verification_accumulates_all_mismatches() {
        let expectations: Expectations<u32, TestEffect> = ExpectationsBuilder::new()
            .has_state(1)
            .has_no_effects()
            .require_pred(|_next| false, "Custom check always fails".to_string())
            .build();

        let errors = failures(expectations.verify(&Next::dispatch([TestEffect::Fetch])));

        assert_eq!(expectations.len(), 3);
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| matches!(e, Mismatch::MissingState { .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, Mismatch::UnexpectedEffects { .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, Mismatch::CustomCheckFailed { .. })));
    }

    #[test]
    fn custom_check_can_return_its_own_mismatch() {
        let expectations: Expectations<u32, TestEffect> = ExpectationsBuilder::new()
            .require(|next: &Next| {
                if next.effects().len() <= 1 {
                    Validation::success(())
                } else {
                    Validation::fail(Mismatch::CustomCheckFailed {
                        message: "At most one effect per event".to_string(),
                    })
                }
            })
            .build();

        assert!(expectations.verify(&Next::dispatch([TestEffect::Fetch])).is_success());
        assert!(expectations
            .verify(&Next::dispatch([TestEffect::Fetch, TestEffect::Render]))
            .is_failure());
    }

    #[test]
    fn mismatch_messages_are_readable() {
        let mismatch = Mismatch::MissingEffects {
            missing: "Fetch".to_string(),
        };

        assert_eq!(mismatch.to_string(), "Missing effects: [Fetch]");
    }
}
