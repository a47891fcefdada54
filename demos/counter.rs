//! Counter With Effects
//!
//! This example demonstrates a pure update function driving a counter.
//!
//! Key concepts:
//! - Update functions return a transition result, never perform I/O
//! - Absent state means "keep the current state"
//! - Duplicate effect requests collapse into one
//! - Given/when/then verification of the update function
//!
//! Run with: cargo run --example counter

use nextstate::builder::{dispatch, no_change, with_state_and_effects};
use nextstate::core::{advance, First, Initiate, TransitionResult};
use nextstate::testing::{ExpectationsBuilder, UpdateSpec};
use std::fmt;

#[derive(Clone, Copy, Debug)]
enum Event {
    Increment,
    Decrement,
    Save,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Effect {
    Persist(i64),
    Warn(&'static str),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persist(value) => write!(f, "persist({value})"),
            Self::Warn(message) => write!(f, "warn({message})"),
        }
    }
}

fn init(count: i64) -> First<i64, Effect> {
    if count < 0 {
        First::new(0, [Effect::Warn("negative start")])
    } else {
        First::with_state(count)
    }
}

fn update(count: &i64, event: Event) -> TransitionResult<i64, Effect> {
    match event {
        Event::Increment => with_state_and_effects(count + 1, []),
        Event::Decrement if *count == 0 => dispatch([Effect::Warn("already zero")]),
        Event::Decrement => with_state_and_effects(count - 1, []),
        Event::Save if *count == 0 => no_change(),
        Event::Save => dispatch([Effect::Persist(*count)]),
    }
}

fn main() {
    println!("=== Counter Example ===\n");

    let first = init.initiate(-3);
    println!("Initial: {first}");

    let (mut count, _) = first.into_parts();
    for event in [Event::Decrement, Event::Increment, Event::Increment, Event::Save] {
        println!("{event:?} -> {}", update(&count, event));
        let (next, effects) = advance(&update, count, event);
        for effect in effects {
            println!("  dispatch {effect}");
        }
        count = next;
    }

    println!("\nFinal count: {count}");

    // The same update, verified without running any effect
    UpdateSpec::new(update)
        .given(0)
        .when(Event::Decrement)
        .then(
            &ExpectationsBuilder::new()
                .has_no_state()
                .has_only_effects([Effect::Warn("already zero")])
                .build(),
        )
        .and(Event::Increment)
        .then(&ExpectationsBuilder::new().has_state(1).has_no_effects().build());

    println!("\n=== Example Complete ===");
}
