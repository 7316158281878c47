//! Shared modifier cells

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{compose, identity, Modifier};
use crate::storage::Element;

struct SlotState<T> {
    modifier: Modifier<T>,
    /// Compositions installed since the last reset.
    depth: usize,
}

/// Handle to a single per-type modifier cell.
///
/// Cloning the handle shares the cell: a modifier installed through any
/// handle is seen by all of them. The installed function is replaced
/// wholesale on every change, never edited in place.
pub struct ModifierSlot<T> {
    state: Rc<RefCell<SlotState<T>>>,
}

impl<T: 'static> ModifierSlot<T> {
    /// Create a slot holding the identity modifier.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SlotState {
                modifier: identity(),
                depth: 0,
            })),
        }
    }

    /// Get the modifier installed right now.
    pub fn current(&self) -> Modifier<T> {
        Rc::clone(&self.state.borrow().modifier)
    }

    /// Run the current modifier on `value`.
    pub fn apply(&self, value: T) -> T {
        // Release the borrow before calling out, the modifier may touch this slot.
        let modifier = self.current();
        modifier(value)
    }

    /// Install `f` so it runs after everything already composed.
    ///
    /// Returns the new composition depth.
    pub fn compose_front(&self, f: impl Fn(T) -> T + 'static) -> usize {
        let mut state = self.state.borrow_mut();
        state.modifier = compose(Rc::new(f), Rc::clone(&state.modifier));
        state.depth += 1;
        state.depth
    }

    /// Drop all composed modifiers and go back to identity.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.modifier = identity();
        state.depth = 0;
    }

    /// Install `f` as the only modifier.
    pub fn replace(&self, f: impl Fn(T) -> T + 'static) {
        let mut state = self.state.borrow_mut();
        state.modifier = Rc::new(f);
        state.depth = 1;
    }

    /// Number of modifiers composed since the last reset.
    pub fn depth(&self) -> usize {
        self.state.borrow().depth
    }

    /// Check whether both handles point at the same cell.
    pub fn shares_state_with(&self, other: &ModifierSlot<T>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T: 'static> Default for ModifierSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ModifierSlot<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for ModifierSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierSlot")
            .field("depth", &self.state.borrow().depth)
            .field("handles", &Rc::strong_count(&self.state))
            .finish()
    }
}

/// The three slots of a list, one per payload type.
pub struct ModifierSlots<A, B, C> {
    pub(crate) first: ModifierSlot<A>,
    pub(crate) second: ModifierSlot<B>,
    pub(crate) third: ModifierSlot<C>,
}

impl<A: 'static, B: 'static, C: 'static> ModifierSlots<A, B, C> {
    /// Create three identity slots.
    pub fn new() -> Self {
        Self {
            first: ModifierSlot::new(),
            second: ModifierSlot::new(),
            third: ModifierSlot::new(),
        }
    }

    /// Produce a fresh element with the matching slot applied to its payload.
    pub fn apply(&self, element: &Element<A, B, C>) -> Element<A, B, C>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        match element {
            Element::First(value) => Element::First(self.first.apply(value.clone())),
            Element::Second(value) => Element::Second(self.second.apply(value.clone())),
            Element::Third(value) => Element::Third(self.third.apply(value.clone())),
        }
    }

    /// Composition depths of the three slots, in tag order.
    pub fn depths(&self) -> [usize; 3] {
        [
            self.first.depth(),
            self.second.depth(),
            self.third.depth(),
        ]
    }
}

impl<A: 'static, B: 'static, C: 'static> Default for ModifierSlots<A, B, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, C> Clone for ModifierSlots<A, B, C> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            third: self.third.clone(),
        }
    }
}

impl<A, B, C> fmt::Debug for ModifierSlots<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierSlots")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("third", &self.third)
            .finish()
    }
}
