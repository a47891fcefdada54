//! Nextstate: immutable transition results for unidirectional dataflow
//!
//! In a unidirectional-dataflow architecture an update function takes the
//! current state and an incoming event and decides what happens next. It
//! does not perform I/O itself. Instead it returns a [`TransitionResult`]:
//! an optional new state plus a set of effect requests, which a separate
//! loop applies and dispatches.
//!
//! # Core Concepts
//!
//! - **TransitionResult**: An optional new state and an unordered, deduplicated set of effects
//! - **First**: The starting state of a loop plus the effects to run on start
//! - **Update / Initiate**: Seams for pure update and init functions
//! - **Testing**: Given/when/then verification of update functions
//!
//! # Example
//!
//! ```rust
//! use nextstate::builder::{dispatch, no_change, with_state_and_effects};
//! use nextstate::core::TransitionResult;
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Effect {
//!     Send(String),
//!     Refresh,
//! }
//!
//! enum Event {
//!     Typed(char),
//!     Submit,
//!     Reload,
//! }
//!
//! fn update(draft: &String, event: Event) -> TransitionResult<String, Effect> {
//!     match event {
//!         Event::Typed(c) => TransitionResult::with_state(format!("{draft}{c}")),
//!         Event::Submit if draft.is_empty() => no_change(),
//!         Event::Submit => with_state_and_effects(String::new(), [Effect::Send(draft.clone())]),
//!         Event::Reload => dispatch([Effect::Refresh]),
//!     }
//! }
//!
//! let next = update(&"hi".to_string(), Event::Submit);
//! assert_eq!(next.state(), Some(&String::new()));
//! assert!(next.contains_effect(&Effect::Send("hi".to_string())));
//!
//! let next = update(&String::new(), Event::Reload);
//! assert!(next.state().is_none());
//! assert!(next.has_effects());
//! ```

pub mod builder;
pub mod core;
pub mod testing;

// Re-export commonly used types
pub use crate::core::{advance, First, Initiate, TransitionResult, Update};
