//! Macros for building effect sets.

/// Build a `HashSet` of effects. Duplicates collapse.
///
/// # Example
///
/// ```
/// use nextstate::core::TransitionResult;
/// use nextstate::effects;
///
/// let next: TransitionResult<u32, &str> =
///     TransitionResult::new(Some(1), effects!["send", "refresh", "send"]);
///
/// assert_eq!(next.effects().len(), 2);
/// assert_eq!(next.effects(), &effects!["refresh", "send"]);
/// ```
#[macro_export]
macro_rules! effects {
    () => {
        ::std::collections::HashSet::new()
    };
    ($($effect:expr),+ $(,)?) => {{
        let mut effects = ::std::collections::HashSet::new();
        $(
            effects.insert($effect);
        )+
        effects
    }};
}
