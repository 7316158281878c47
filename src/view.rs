//! View Engine
//!
//! A [`View`] is a lazy projection of a list onto one payload type. It stores
//! nothing but a borrow of the element slice and a handle to the type's
//! modifier slot. Filtering and the modifier both run on every pull, so:
//! - a view can be iterated any number of times, each pass starts over
//! - a modifier installed after the view was created still applies
//! - reading a view never changes the list or its slots

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::modifier::ModifierSlot;
use crate::storage::{Element, Tag};

type Extract<A, B, C, P> = for<'e> fn(&'e Element<A, B, C>) -> Option<&'e P>;

/// Lazy, restartable, type-filtered view over a list.
pub struct View<'a, A, B, C, P> {
    elements: &'a [Element<A, B, C>],
    slot: ModifierSlot<P>,
    extract: Extract<A, B, C, P>,
    tag: Tag,
}

impl<'a, A, B, C, P> View<'a, A, B, C, P>
where
    P: Clone + 'static,
{
    pub(crate) fn new(
        elements: &'a [Element<A, B, C>],
        slot: ModifierSlot<P>,
        extract: Extract<A, B, C, P>,
        tag: Tag,
    ) -> Self {
        Self {
            elements,
            slot,
            extract,
            tag,
        }
    }

    /// Start a new pass over the view.
    pub fn iter(&self) -> ViewIter<'a, A, B, C, P> {
        ViewIter {
            inner: self.elements.iter(),
            slot: self.slot.clone(),
            extract: self.extract,
            tag: self.tag,
        }
    }

    /// Stored payloads of this type, before any modifier.
    pub fn raw(&self) -> impl DoubleEndedIterator<Item = &'a P> + 'a
    where
        A: 'a,
        B: 'a,
        C: 'a,
    {
        let extract = self.extract;
        self.elements.iter().filter_map(move |element| extract(element))
    }

    /// Number of elements of this type. The modifier is not run.
    pub fn count(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.tag() == self.tag)
            .count()
    }

    /// Check whether the list holds no element of this type.
    pub fn is_empty(&self) -> bool {
        !self.elements.iter().any(|element| element.tag() == self.tag)
    }

    /// First value of this type, modified.
    pub fn first(&self) -> Option<P> {
        self.iter().next()
    }

    /// Last value of this type, modified.
    pub fn last(&self) -> Option<P> {
        self.iter().next_back()
    }

    /// The `n`-th value of this type (zero-based), modified.
    pub fn nth(&self, n: usize) -> Option<P> {
        self.iter().nth(n)
    }

    /// Collect one pass into a vector.
    pub fn to_vec(&self) -> Vec<P> {
        self.iter().collect()
    }

    /// Tag of the payload type this view selects.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl<A, B, C, P> Clone for View<'_, A, B, C, P> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            slot: self.slot.clone(),
            extract: self.extract,
            tag: self.tag,
        }
    }
}

impl<A, B, C, P> fmt::Debug for View<'_, A, B, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("tag", &self.tag)
            .field("len", &self.elements.len())
            .field("slot", &self.slot)
            .finish()
    }
}

impl<'a, A, B, C, P> IntoIterator for View<'a, A, B, C, P>
where
    P: Clone + 'static,
{
    type Item = P;
    type IntoIter = ViewIter<'a, A, B, C, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, B, C, P> IntoIterator for &View<'a, A, B, C, P>
where
    P: Clone + 'static,
{
    type Item = P;
    type IntoIter = ViewIter<'a, A, B, C, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over a [`View`].
///
/// The slot is read again for every produced value.
pub struct ViewIter<'a, A, B, C, P> {
    inner: std::slice::Iter<'a, Element<A, B, C>>,
    slot: ModifierSlot<P>,
    extract: Extract<A, B, C, P>,
    tag: Tag,
}

impl<A, B, C, P> ViewIter<'_, A, B, C, P>
where
    P: Clone + 'static,
{
    fn produce(&self, value: &P) -> P {
        trace!(tag = %self.tag, depth = self.slot.depth(), "view produced value");
        self.slot.apply(value.clone())
    }
}

impl<A, B, C, P> Iterator for ViewIter<'_, A, B, C, P>
where
    P: Clone + 'static,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        while let Some(element) = self.inner.next() {
            if let Some(value) = (self.extract)(element) {
                return Some(self.produce(value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<A, B, C, P> DoubleEndedIterator for ViewIter<'_, A, B, C, P>
where
    P: Clone + 'static,
{
    fn next_back(&mut self) -> Option<P> {
        while let Some(element) = self.inner.next_back() {
            if let Some(value) = (self.extract)(element) {
                return Some(self.produce(value));
            }
        }
        None
    }
}

impl<A, B, C, P> FusedIterator for ViewIter<'_, A, B, C, P> where P: Clone + 'static {}
