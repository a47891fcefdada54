//! Core transition types.
//!
//! This module contains the pure values exchanged between update functions
//! and the loop that drives them:
//! - `TransitionResult`: optional new state plus a set of effects
//! - `First`: starting state plus a set of effects
//! - `Update` / `Initiate`: seams for update and init functions
//!
//! Nothing in this module performs I/O or mutates shared state.

mod first;
mod next;
mod update;

pub use first::First;
pub use next::TransitionResult;
pub use update::{advance, Initiate, Update};
