//! Full-Sequence Iterator
//!
//! [`Cursor`] is a bidirectional position in a list, valid anywhere in
//! `[begin, end]`. Reading it applies the current modifier for the element's
//! tag every time, nothing is cached. Two cursors are equal when they point
//! at the same position of the same list; the values they would produce do
//! not matter.
//!
//! [`Iter`] is the standard-library face of the same thing: a pair of cursors
//! closing in on each other.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use tracing::trace;

use crate::error::{Result, TriListError};
use crate::modifier::ModifierSlots;
use crate::storage::{Element, Tag};

/// Bidirectional position over every element of a list.
pub struct Cursor<'a, A, B, C> {
    elements: &'a [Element<A, B, C>],
    modifiers: ModifierSlots<A, B, C>,
    position: usize,
}

impl<'a, A, B, C> Cursor<'a, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    pub(crate) fn new(
        elements: &'a [Element<A, B, C>],
        modifiers: ModifierSlots<A, B, C>,
        position: usize,
    ) -> Self {
        debug_assert!(position <= elements.len());
        Self {
            elements,
            modifiers,
            position,
        }
    }

    fn stored(&self) -> Result<&'a Element<A, B, C>> {
        self.elements
            .get(self.position)
            .ok_or(TriListError::CursorOutOfBounds {
                position: self.position,
                len: self.elements.len(),
            })
    }

    /// Read the element under the cursor with its modifier applied.
    ///
    /// # Errors
    /// Returns `CursorOutOfBounds` at the end position.
    pub fn get(&self) -> Result<Element<A, B, C>> {
        let stored = self.stored()?;
        trace!(position = self.position, tag = %stored.tag(), "cursor read");
        Ok(self.modifiers.apply(stored))
    }

    /// Tag of the element under the cursor.
    pub fn tag(&self) -> Result<Tag> {
        self.stored().map(Element::tag)
    }

    /// Step forward by one.
    ///
    /// # Errors
    /// Returns `CursorOutOfBounds` when already at the end; the cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        if self.is_end() {
            return Err(TriListError::CursorOutOfBounds {
                position: self.position + 1,
                len: self.elements.len(),
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Step back by one.
    ///
    /// # Errors
    /// Returns `CursorOutOfBounds` when already at the beginning; the cursor does not move.
    pub fn move_prev(&mut self) -> Result<()> {
        if self.is_begin() {
            return Err(TriListError::CursorOutOfBounds {
                position: self.position,
                len: self.elements.len(),
            });
        }
        self.position -= 1;
        Ok(())
    }

    /// Zero-based position; equals the list length at the end.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_begin(&self) -> bool {
        self.position == 0
    }

    pub fn is_end(&self) -> bool {
        self.position == self.elements.len()
    }

    /// Signed number of steps from `self` to `other`.
    ///
    /// Only meaningful for cursors over the same list.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.position as isize - self.position as isize
    }
}

impl<A, B, C> Clone for Cursor<'_, A, B, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            modifiers: self.modifiers.clone(),
            position: self.position,
        }
    }
}

impl<A, B, C> PartialEq for Cursor<'_, A, B, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.elements, other.elements) && self.position == other.position
    }
}

impl<A, B, C> Eq for Cursor<'_, A, B, C> {}

impl<A, B, C> PartialOrd for Cursor<'_, A, B, C> {
    /// Cursors over different lists are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.elements, other.elements) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<A, B, C> fmt::Debug for Cursor<'_, A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.elements.len())
            .finish()
    }
}

/// Double-ended iterator over every element of a list, modifiers applied.
pub struct Iter<'a, A, B, C> {
    front: Cursor<'a, A, B, C>,
    back: Cursor<'a, A, B, C>,
}

impl<'a, A, B, C> Iter<'a, A, B, C> {
    pub(crate) fn new(front: Cursor<'a, A, B, C>, back: Cursor<'a, A, B, C>) -> Self {
        Self { front, back }
    }
}

impl<A, B, C> Iterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    type Item = Element<A, B, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.front.get().ok()?;
        self.front.move_next().ok()?;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.position - self.front.position;
        (remaining, Some(remaining))
    }
}

impl<A, B, C> DoubleEndedIterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev().ok()?;
        self.back.get().ok()
    }
}

impl<A, B, C> ExactSizeIterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
}

impl<A, B, C> FusedIterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
}
