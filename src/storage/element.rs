//! Element and Tag definitions

use std::fmt;

use super::OneOf;
use crate::error::{Result, TriListError};

/// Which of the three payload types an element holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    First,
    Second,
    Third,
}

impl Tag {
    /// All tags in declaration order.
    pub const ALL: [Tag; 3] = [Tag::First, Tag::Second, Tag::Third];

    /// Zero-based position of the payload type in the list's type parameters.
    pub fn index(self) -> usize {
        match self {
            Tag::First => 0,
            Tag::Second => 1,
            Tag::Third => 2,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::First => write!(f, "first"),
            Tag::Second => write!(f, "second"),
            Tag::Third => write!(f, "third"),
        }
    }
}

/// A single stored value together with the tag of its payload type.
///
/// Elements are immutable once stored. Reading through a view or cursor
/// always produces a fresh `Element`, never a reference into the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

impl<A, B, C> Element<A, B, C> {
    /// Wrap a payload value, picking the variant from its type.
    pub fn new<P, I>(value: P) -> Self
    where
        P: OneOf<A, B, C, I>,
    {
        value.into_element()
    }

    /// Get the tag of this element
    pub fn tag(&self) -> Tag {
        match self {
            Element::First(_) => Tag::First,
            Element::Second(_) => Tag::Second,
            Element::Third(_) => Tag::Third,
        }
    }

    /// Check whether this element holds a `P`
    pub fn is<P, I>(&self) -> bool
    where
        P: OneOf<A, B, C, I>,
    {
        self.tag() == P::TAG
    }

    /// Borrow the payload if this element holds a `P`
    pub fn get<P, I>(&self) -> Option<&P>
    where
        P: OneOf<A, B, C, I>,
    {
        P::from_element(self)
    }

    /// Take the payload out, failing if the element holds another type
    pub fn into_payload<P, I>(self) -> Result<P>
    where
        P: OneOf<A, B, C, I>,
    {
        let found = self.tag();
        P::from_owned(self).map_err(|_| TriListError::TagMismatch {
            expected: P::TAG,
            found,
        })
    }

    /// Borrow each variant's payload.
    pub fn as_ref(&self) -> Element<&A, &B, &C> {
        match self {
            Element::First(value) => Element::First(value),
            Element::Second(value) => Element::Second(value),
            Element::Third(value) => Element::Third(value),
        }
    }

    /// Transform the payload with the function matching its tag.
    pub fn map<X, Y, Z>(
        self,
        first: impl FnOnce(A) -> X,
        second: impl FnOnce(B) -> Y,
        third: impl FnOnce(C) -> Z,
    ) -> Element<X, Y, Z> {
        match self {
            Element::First(value) => Element::First(first(value)),
            Element::Second(value) => Element::Second(second(value)),
            Element::Third(value) => Element::Third(third(value)),
        }
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Element<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::First(value) => write!(f, "{}", value),
            Element::Second(value) => write!(f, "{}", value),
            Element::Third(value) => write!(f, "{}", value),
        }
    }
}
