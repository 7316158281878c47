//! The three-type list
//!
//! [`TriList`] owns the element sequence and the three modifier slots. Storage
//! only ever grows through [`TriList::push`]; the slots change through
//! [`TriList::compose_front`] and [`TriList::reset`]. Views and cursors combine
//! the two at the moment they are read.
//!
//! Slot changes take `&self`, so they can happen while views and cursors are
//! alive. Appending takes `&mut self` and waits until every reader is gone.

use std::fmt;

use tracing::{debug, trace};

use crate::config::ListConfig;
use crate::cursor::{Cursor, Iter};
use crate::modifier::{ModifierSlot, ModifierSlots};
use crate::storage::{Distinct, Element, OneOf, Tag};
use crate::view::View;

/// Ordered list of values of exactly three distinct payload types.
///
/// ```
/// use trilist::TriList;
///
/// let mut list = TriList::<i64, String, f64>::new();
/// list.push(1_i64);
/// list.push("x".to_string());
/// list.push(2.0_f64);
/// list.push(3_i64);
///
/// let ints = list.view::<i64, _>();
/// assert_eq!(ints.to_vec(), vec![1, 3]);
///
/// list.compose_front::<i64, _>(|x| x + 1);
/// list.compose_front::<i64, _>(|x| x * 10);
/// assert_eq!(ints.to_vec(), vec![20, 40]);
///
/// list.reset::<i64, _>();
/// assert_eq!(ints.to_vec(), vec![1, 3]);
/// ```
pub struct TriList<A, B, C> {
    elements: Vec<Element<A, B, C>>,
    modifiers: ModifierSlots<A, B, C>,
    config: ListConfig,
}

impl<A, B, C> TriList<A, B, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    /// Create an empty list with default settings.
    pub fn new<I>() -> Self
    where
        (A, B, C): Distinct<I>,
    {
        Self::build(ListConfig::default())
    }

    /// Create an empty list with custom settings.
    pub fn with_config<I>(config: ListConfig) -> Self
    where
        (A, B, C): Distinct<I>,
    {
        Self::build(config)
    }

    /// Create a list holding `elements` in the given order.
    pub fn from_elements<I, T>(elements: T) -> Self
    where
        (A, B, C): Distinct<I>,
        T: IntoIterator<Item = Element<A, B, C>>,
    {
        let mut list = Self::build(ListConfig::default());
        list.extend(elements);
        list
    }

    fn build(config: ListConfig) -> Self {
        debug!(
            list = %config.name,
            capacity = config.initial_capacity,
            "created list"
        );
        Self {
            elements: Vec::with_capacity(config.initial_capacity),
            modifiers: ModifierSlots::new(),
            config,
        }
    }

    /// Append a value at the end of the list.
    pub fn push<P, I>(&mut self, value: P)
    where
        P: OneOf<A, B, C, I>,
    {
        self.elements.push(value.into_element());
        trace!(
            list = %self.config.name,
            tag = %P::TAG,
            len = self.elements.len(),
            "pushed element"
        );
    }

    /// Append an element that is already tagged.
    pub fn push_element(&mut self, element: Element<A, B, C>) {
        trace!(
            list = %self.config.name,
            tag = %element.tag(),
            len = self.elements.len() + 1,
            "pushed element"
        );
        self.elements.push(element);
    }

    /// Append every value yielded by `values`, all of type `P`.
    pub fn extend_values<P, I>(&mut self, values: impl IntoIterator<Item = P>)
    where
        P: OneOf<A, B, C, I>,
    {
        self.elements.extend(values.into_iter().map(P::into_element));
    }

    /// Number of stored elements of any type.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Number of stored elements of type `P`.
    pub fn count_of<P, I>(&self) -> usize
    where
        P: OneOf<A, B, C, I>,
    {
        self.elements
            .iter()
            .filter(|element| element.tag() == P::TAG)
            .count()
    }

    /// Tags of all elements in insertion order.
    pub fn tags(&self) -> impl DoubleEndedIterator<Item = Tag> + ExactSizeIterator + '_ {
        self.elements.iter().map(Element::tag)
    }

    /// Lazy view of the values of type `P`, with `P`'s modifier applied when read.
    ///
    /// The view follows later `compose_front` and `reset` calls for `P`.
    pub fn view<P, I>(&self) -> View<'_, A, B, C, P>
    where
        P: OneOf<A, B, C, I> + Clone,
    {
        View::new(
            &self.elements,
            P::slot(&self.modifiers).clone(),
            P::from_element,
            P::TAG,
        )
    }

    /// Install `f` to run after every modifier already composed for `P`.
    ///
    /// Composing `f` then `g` yields `g(f(x))`.
    pub fn compose_front<P, I>(&self, f: impl Fn(P) -> P + 'static)
    where
        P: OneOf<A, B, C, I>,
    {
        let depth = P::slot(&self.modifiers).compose_front(f);
        debug!(list = %self.config.name, tag = %P::TAG, depth, "composed modifier");
    }

    /// Restore the identity modifier for `P`.
    pub fn reset<P, I>(&self)
    where
        P: OneOf<A, B, C, I>,
    {
        P::slot(&self.modifiers).reset();
        debug!(list = %self.config.name, tag = %P::TAG, "reset modifier");
    }

    /// Install `f` as the only modifier for `P`.
    pub fn replace<P, I>(&self, f: impl Fn(P) -> P + 'static)
    where
        P: OneOf<A, B, C, I>,
    {
        P::slot(&self.modifiers).replace(f);
        debug!(list = %self.config.name, tag = %P::TAG, "replaced modifier");
    }

    /// Run `P`'s current modifier on an arbitrary value.
    pub fn apply<P, I>(&self, value: P) -> P
    where
        P: OneOf<A, B, C, I>,
    {
        P::slot(&self.modifiers).apply(value)
    }

    /// Number of modifiers composed for `P` since its last reset.
    pub fn depth<P, I>(&self) -> usize
    where
        P: OneOf<A, B, C, I>,
    {
        P::slot(&self.modifiers).depth()
    }

    /// Shared handle to `P`'s modifier slot.
    pub fn modifier<P, I>(&self) -> ModifierSlot<P>
    where
        P: OneOf<A, B, C, I>,
    {
        P::slot(&self.modifiers).clone()
    }

    /// Settings the list was built with.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }
}

impl<A, B, C> TriList<A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, A, B, C> {
        Cursor::new(&self.elements, self.modifiers.clone(), 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, A, B, C> {
        Cursor::new(&self.elements, self.modifiers.clone(), self.elements.len())
    }

    /// Iterate every element in insertion order, modifiers applied.
    pub fn iter(&self) -> Iter<'_, A, B, C> {
        Iter::new(self.begin(), self.end())
    }
}

impl<A, B, C> Extend<Element<A, B, C>> for TriList<A, B, C> {
    fn extend<T: IntoIterator<Item = Element<A, B, C>>>(&mut self, iter: T) {
        let before = self.elements.len();
        self.elements.extend(iter);
        trace!(
            list = %self.config.name,
            added = self.elements.len() - before,
            "extended list"
        );
    }
}

impl<'a, A, B, C> IntoIterator for &'a TriList<A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    type Item = Element<A, B, C>;
    type IntoIter = Iter<'a, A, B, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: fmt::Debug, B: fmt::Debug, C: fmt::Debug> fmt::Debug for TriList<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriList")
            .field("name", &self.config.name)
            .field("elements", &self.elements)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    type Sample = TriList<i64, String, f64>;

    fn scenario() -> Sample {
        let mut list = Sample::new();
        list.push(1_i64);
        list.push("x".to_string());
        list.push(2.0_f64);
        list.push(3_i64);
        list
    }

    #[test]
    fn test_new_is_empty() {
        let list = Sample::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.view::<i64, _>().is_empty());
        assert_eq!(list.begin(), list.end());
    }

    #[test]
    fn test_with_config_reserves() {
        let list = Sample::with_config(ListConfig::new().with_capacity(32).with_name("reserved"));
        assert!(list.capacity() >= 32);
        assert_eq!(list.config().name, "reserved");
    }

    #[test]
    fn test_push_keeps_order_and_tags() {
        let list = scenario();
        assert_eq!(list.len(), 4);
        assert_eq!(
            list.tags().collect::<Vec<_>>(),
            vec![Tag::First, Tag::Second, Tag::Third, Tag::First]
        );
        assert_eq!(list.count_of::<i64, _>(), 2);
        assert_eq!(list.count_of::<String, _>(), 1);
        assert_eq!(list.count_of::<f64, _>(), 1);
    }

    #[test]
    fn test_compose_then_reset() {
        let list = scenario();
        let ints = list.view::<i64, _>();
        assert_eq!(ints.to_vec(), vec![1, 3]);

        list.compose_front::<i64, _>(|x| x + 1);
        assert_eq!(ints.to_vec(), vec![2, 4]);

        list.compose_front::<i64, _>(|x| x * 10);
        assert_eq!(ints.to_vec(), vec![20, 40]);
        assert_eq!(list.depth::<i64, _>(), 2);

        list.reset::<i64, _>();
        assert_eq!(ints.to_vec(), vec![1, 3]);
        assert_eq!(list.depth::<i64, _>(), 0);
    }

    #[test]
    fn test_replace_and_apply() {
        let list = scenario();
        list.compose_front::<f64, _>(|x| x + 100.0);
        list.replace::<f64, _>(|x| x / 4.0);
        assert_relative_eq!(list.apply(8.0_f64), 2.0);
        assert_relative_eq!(list.view::<f64, _>().first().unwrap(), 0.5);
    }

    #[test]
    fn test_modifier_handle_is_shared() {
        let list = scenario();
        let handle = list.modifier::<String, _>();
        handle.compose_front(|s| format!("<{}>", s));
        assert_eq!(list.view::<String, _>().to_vec(), vec!["<x>".to_string()]);
        assert_eq!(list.depth::<String, _>(), 1);
    }

    #[test]
    fn test_from_elements_and_extend() {
        let mut list = Sample::from_elements(vec![
            Element::Third(0.5),
            Element::First(9),
        ]);
        list.extend_values(vec![10_i64, 11]);
        list.push_element(Element::Second("tail".to_string()));

        assert_eq!(list.view::<i64, _>().to_vec(), vec![9, 10, 11]);
        assert_eq!(list.iter().last(), Some(Element::Second("tail".to_string())));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_iter_applies_modifiers() {
        let list = scenario();
        list.compose_front::<String, _>(|s| s.repeat(2));
        let collected: Vec<_> = (&list).into_iter().collect();
        assert_eq!(
            collected,
            vec![
                Element::First(1),
                Element::Second("xx".to_string()),
                Element::Third(2.0),
                Element::First(3),
            ]
        );
    }
}
