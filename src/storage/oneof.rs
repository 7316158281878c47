//! Compile-time payload membership
//!
//! Every operation that names a payload type `P` carries a `P: OneOf<A, B, C, I>`
//! bound. There is one blanket impl per position, told apart by the index
//! marker `I`. The markers live in a private module, so `I` can only ever be
//! inferred:
//! - `P` equal to none of `A`, `B`, `C`: no impl applies, the bound is unmet.
//! - `P` equal to exactly one: a single impl applies and `I` is inferred.
//! - `P` equal to two or more: several impls apply and inference fails.
//!
//! A type that is not one of the payload types is rejected:
//!
//! ```compile_fail
//! let mut list = trilist::TriList::<i64, String, f64>::new();
//! list.push(1_u8);
//! ```
//!
//! And a list whose payload types repeat cannot be built at all:
//!
//! ```compile_fail
//! let list = trilist::TriList::<i64, i64, f64>::new();
//! ```

use super::{Element, Tag};
use crate::modifier::{ModifierSlot, ModifierSlots};

mod index {
    /// Position marker for the first payload type.
    pub enum First {}
    /// Position marker for the second payload type.
    pub enum Second {}
    /// Position marker for the third payload type.
    pub enum Third {}
}

mod sealed {
    pub trait Sealed<A, B, C, I> {}
}

use index::{First, Second, Third};

impl<A, B, C> sealed::Sealed<A, B, C, First> for A {}
impl<A, B, C> sealed::Sealed<A, B, C, Second> for B {}
impl<A, B, C> sealed::Sealed<A, B, C, Third> for C {}

/// Proof that `Self` is exactly one of the payload types `A`, `B`, `C`.
///
/// `I` is an unnameable position marker; always leave it to inference
/// (`list.view::<i64, _>()`). Payload types must be `'static` because
/// modifiers are stored as shared closures. This trait is sealed.
pub trait OneOf<A, B, C, I>: sealed::Sealed<A, B, C, I> + Sized + 'static {
    /// Tag carried by elements holding this type.
    const TAG: Tag;

    /// Wrap a value in the matching variant.
    fn into_element(self) -> Element<A, B, C>;

    /// Borrow the payload when the element carries this type.
    fn from_element(element: &Element<A, B, C>) -> Option<&Self>;

    /// Unwrap the payload, handing the element back on a tag mismatch.
    fn from_owned(element: Element<A, B, C>) -> Result<Self, Element<A, B, C>>;

    /// The modifier slot dedicated to this type.
    fn slot(slots: &ModifierSlots<A, B, C>) -> &ModifierSlot<Self>;
}

impl<A: 'static, B, C> OneOf<A, B, C, First> for A {
    const TAG: Tag = Tag::First;

    fn into_element(self) -> Element<A, B, C> {
        Element::First(self)
    }

    fn from_element(element: &Element<A, B, C>) -> Option<&Self> {
        match element {
            Element::First(value) => Some(value),
            _ => None,
        }
    }

    fn from_owned(element: Element<A, B, C>) -> Result<Self, Element<A, B, C>> {
        match element {
            Element::First(value) => Ok(value),
            other => Err(other),
        }
    }

    fn slot(slots: &ModifierSlots<A, B, C>) -> &ModifierSlot<Self> {
        &slots.first
    }
}

impl<A, B: 'static, C> OneOf<A, B, C, Second> for B {
    const TAG: Tag = Tag::Second;

    fn into_element(self) -> Element<A, B, C> {
        Element::Second(self)
    }

    fn from_element(element: &Element<A, B, C>) -> Option<&Self> {
        match element {
            Element::Second(value) => Some(value),
            _ => None,
        }
    }

    fn from_owned(element: Element<A, B, C>) -> Result<Self, Element<A, B, C>> {
        match element {
            Element::Second(value) => Ok(value),
            other => Err(other),
        }
    }

    fn slot(slots: &ModifierSlots<A, B, C>) -> &ModifierSlot<Self> {
        &slots.second
    }
}

impl<A, B, C: 'static> OneOf<A, B, C, Third> for C {
    const TAG: Tag = Tag::Third;

    fn into_element(self) -> Element<A, B, C> {
        Element::Third(self)
    }

    fn from_element(element: &Element<A, B, C>) -> Option<&Self> {
        match element {
            Element::Third(value) => Some(value),
            _ => None,
        }
    }

    fn from_owned(element: Element<A, B, C>) -> Result<Self, Element<A, B, C>> {
        match element {
            Element::Third(value) => Ok(value),
            other => Err(other),
        }
    }

    fn slot(slots: &ModifierSlots<A, B, C>) -> &ModifierSlot<Self> {
        &slots.third
    }
}

/// Proof that the payload types `A`, `B`, `C` are pairwise distinct.
///
/// Each type must resolve to a single position; a repeated type matches two
/// positions and the inferred `I` becomes ambiguous.
pub trait Distinct<I> {}

impl<A, B, C, IA, IB, IC> Distinct<(IA, IB, IC)> for (A, B, C)
where
    A: OneOf<A, B, C, IA>,
    B: OneOf<A, B, C, IB>,
    C: OneOf<A, B, C, IC>,
{
}
