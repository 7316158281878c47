//! Modifier Slots
//!
//! A modifier is a `P -> P` function applied lazily whenever a value of type
//! `P` is read out of a list. Each list owns one shared slot per payload type;
//! views and cursors hold handles to the same slots, so installing a new
//! modifier is visible to every reader that already exists.
//!
//! Composition order: after composing f1, f2, ..., fn the slot computes
//! `fn(...f2(f1(x)))`. The earliest modifier runs first.

mod numeric;
mod slot;

use std::rc::Rc;

pub use numeric::{clamp, negate, offset, scale};
pub use slot::{ModifierSlot, ModifierSlots};

/// Shared, type-erased modifier function.
pub type Modifier<T> = Rc<dyn Fn(T) -> T>;

/// The modifier every slot starts with.
pub fn identity<T: 'static>() -> Modifier<T> {
    Rc::new(|value: T| value)
}

/// Build `outer ∘ inner`: the result runs `inner` first, then `outer`.
pub fn compose<T: 'static>(outer: Modifier<T>, inner: Modifier<T>) -> Modifier<T> {
    Rc::new(move |value: T| outer(inner(value)))
}
