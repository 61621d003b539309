use alloc::{format, vec::Vec};
use core::{
    cmp::Ordering,
    mem,
    ops::{Index, IndexMut},
};

pub use iter::Iter;

use super::{
    comparer::{Comparer, DefaultComparer},
    index::{self, IndexArgument},
};
use crate::errors::{CollectionError, Result};

mod iter;

const LOG: &str = "collection";

/// An ordered, zero-indexed, growable list.
///
/// Every operation that takes a position accepts any [`IndexArgument`] and
/// validates it in two stages: a non-integer argument fails with
/// [`CollectionError::InvalidArgument`], an integer outside the operation's
/// bounds fails with [`CollectionError::ArgumentOutOfRange`]. A rejected call
/// leaves the collection exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a collection holding `count` clones of `value`.
    #[must_use]
    pub fn repeating(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            items: alloc::vec![value; count],
        }
    }

    /// The number of elements in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A `bool` value indicating whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Adds a new element at the end of the collection.
    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }

    /// Appends every element of `values`, in order.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
    }

    /// Removes all elements from the collection.
    pub fn clear(&mut self) {
        log::trace!(target: LOG, "clearing {} elements", self.items.len());
        self.items.clear();
    }

    /// Copies every element into `target`, starting at position 0.
    ///
    /// Equivalent to [`copy_to_at`](Self::copy_to_at) with index `0`.
    pub fn copy_to(&self, target: &mut Vec<T>)
    where
        T: Clone,
    {
        let overlap = target.len().min(self.items.len());
        target[..overlap].clone_from_slice(&self.items[..overlap]);
        target.extend_from_slice(&self.items[overlap..]);
    }

    /// Copies every element, in order, into `target` starting at `index`.
    ///
    /// Positions `index..index + len` of the target are overwritten, and the
    /// target grows when it is too short to hold them. Positions before `index`
    /// and after the copied block are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `index` is not an integer
    /// or does not satisfy `0 <= index <= target.len()`. The target is not
    /// modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::collection;
    ///
    /// let words = collection!["one", "two", "three"];
    /// let mut target = vec!["testing", "testing", "now", "done"];
    /// words.copy_to_at(&mut target, 2).unwrap();
    /// assert_eq!(target, ["testing", "testing", "one", "two", "three"]);
    /// ```
    pub fn copy_to_at<I>(&self, target: &mut Vec<T>, index: I) -> Result<()>
    where
        I: IndexArgument,
        T: Clone,
    {
        let value = index::integer("index", &index)?;
        let at = usize::try_from(value)
            .ok()
            .filter(|&at| at <= target.len())
            .ok_or_else(|| {
                CollectionError::invalid_argument(
                    "index",
                    format!("{value} is not within 0..={}", target.len()),
                )
            })?;

        log::trace!(
            target: LOG,
            "copying {} elements into a sequence of {} at {at}",
            self.items.len(),
            target.len()
        );

        let overlap = (target.len() - at).min(self.items.len());
        target[at..at + overlap].clone_from_slice(&self.items[..overlap]);
        target.extend_from_slice(&self.items[overlap..]);
        Ok(())
    }

    /// Whether any element satisfies `predicate`.
    pub fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Whether every element satisfies `predicate`. True for an empty collection.
    pub fn true_for_all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Returns the first element that satisfies `predicate`, if any.
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().find(|element| predicate(element))
    }

    pub fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn find_last<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|element| predicate(element))
    }

    pub fn find_last_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().rposition(predicate)
    }

    /// Returns a new collection with every element that satisfies `predicate`,
    /// in their original order. `self` is not modified.
    #[must_use]
    pub fn find_all<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        self.items
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Iterates `(index, &element)` pairs over the current contents.
    ///
    /// Every call starts a fresh pass at index `0`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `index` is not an integer,
    /// [`CollectionError::ArgumentOutOfRange`] unless `0 <= index < len`.
    pub fn get<I: IndexArgument>(&self, index: I) -> Result<&T> {
        let at = index::position("index", &index, self.items.len(), false)?;
        Ok(&self.items[at])
    }

    /// Mutable counterpart of [`get`](Self::get), with the same validation.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn get_mut<I: IndexArgument>(&mut self, index: I) -> Result<&mut T> {
        let at = index::position("index", &index, self.items.len(), false)?;
        Ok(&mut self.items[at])
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn set<I: IndexArgument>(&mut self, index: I, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// The position of the first element equal to `value`, or `None`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|element| element == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|element| element == value)
    }

    /// Inserts `value` before the element at `index`, shifting it and every
    /// element after it one position to the right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `index` is not an integer,
    /// [`CollectionError::ArgumentOutOfRange`] unless `0 <= index <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::collection;
    ///
    /// let mut list = collection!["one", "two"];
    /// list.insert(1, "three").unwrap();
    /// assert_eq!(list.to_vec(), ["one", "three", "two"]);
    /// assert!(list.insert(9, "four").is_err());
    /// ```
    pub fn insert<I: IndexArgument>(&mut self, index: I, value: T) -> Result<()> {
        let at = index::position("index", &index, self.items.len(), true)?;
        self.items.insert(at, value);
        Ok(())
    }

    /// Inserts the elements of `values`, in order, before the element at `index`.
    ///
    /// # Errors
    ///
    /// See [`insert`](Self::insert).
    pub fn insert_range<I, C>(&mut self, index: I, values: C) -> Result<()>
    where
        I: IndexArgument,
        C: IntoIterator<Item = T>,
    {
        let at = index::position("index", &index, self.items.len(), true)?;
        let values: Vec<T> = values.into_iter().collect();
        log::trace!(target: LOG, "inserting {} elements at {at}", values.len());

        let tail = self.items.split_off(at);
        self.items.extend(values);
        self.items.extend(tail);
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, leaving the collection untouched, when there is no such
    /// element.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(at) => {
                self.items.remove(at);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index`. Every element after it is
    /// shifted one position to the left.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn remove_at<I: IndexArgument>(&mut self, index: I) -> Result<T> {
        let at = index::position("index", &index, self.items.len(), false)?;
        Ok(self.items.remove(at))
    }

    /// Removes all the elements that satisfy the given predicate and returns
    /// how many were removed. Survivors keep their relative order.
    pub fn remove_all<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|element| !predicate(element));
        let removed = before - self.items.len();
        log::trace!(target: LOG, "removed {removed} of {before} elements by predicate");
        removed
    }

    /// Removes `count` contiguous elements starting at `start_index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if either argument is not an
    /// integer. [`CollectionError::ArgumentOutOfRange`] unless
    /// `0 <= start_index <= len` and `0 <= count <= len - start_index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection::collection;
    ///
    /// let mut list = collection![1, 2, 3, 4, 5, 6];
    /// list.remove_range(2, 2).unwrap();
    /// assert_eq!(list.to_vec(), [1, 2, 5, 6]);
    /// ```
    pub fn remove_range<S, C>(&mut self, start_index: S, count: C) -> Result<()>
    where
        S: IndexArgument,
        C: IndexArgument,
    {
        let (start, end) = self.range_bounds(&start_index, &count)?;
        log::trace!(target: LOG, "removing range {start}..{end} of {}", self.items.len());
        self.items.drain(start..end);
        Ok(())
    }

    /// Returns a new collection holding `count` elements starting at
    /// `start_index`.
    ///
    /// # Errors
    ///
    /// See [`remove_range`](Self::remove_range).
    pub fn get_range<S, C>(&self, start_index: S, count: C) -> Result<Self>
    where
        S: IndexArgument,
        C: IndexArgument,
        T: Clone,
    {
        let (start, end) = self.range_bounds(&start_index, &count)?;
        Ok(Self::from(&self.items[start..end]))
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Sorts the collection by the element type's natural order.
    ///
    /// The sort is stable. Strings compare by code point, so `"img2.png"`
    /// follows `"img12.png"`; see [`sort_with`](Self::sort_with) and
    /// [`NaturalStringComparer`](super::comparer::NaturalStringComparer).
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(&DefaultComparer);
    }

    /// Sorts the collection with `comparer`. The sort is stable.
    pub fn sort_with<C>(&mut self, comparer: &C)
    where
        C: Comparer<T> + ?Sized,
    {
        log::trace!(target: LOG, "sorting {} elements", self.items.len());
        self.items.sort_by(|a, b| comparer.compare(a, b));
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// An independent, ordered snapshot of the current contents.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    fn range_bounds(
        &self,
        start_index: &dyn IndexArgument,
        count: &dyn IndexArgument,
    ) -> Result<(usize, usize)> {
        let start = index::integer("start_index", start_index)?;
        let count = index::integer("count", count)?;

        let len = self.items.len();
        let start = index::within("start_index", start, 0, len as i128)?;
        let count = index::within("count", count, 0, (len - start) as i128)?;
        Ok((start, start + count))
    }
}

impl<T, I: IndexArgument> Index<I> for Collection<T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, I: IndexArgument> IndexMut<I> for Collection<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a [`Collection`](crate::Collection) from a list of elements, or from
/// one element repeated a number of times.
///
/// ```
/// use collection::collection;
///
/// let words = collection!["one", "two", "three"];
/// assert_eq!(words.len(), 3);
///
/// let zeros = collection![0; 4];
/// assert_eq!(zeros.to_vec(), [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! collection {
    ($elem:expr; $count:expr) => {
        $crate::Collection::repeating($elem, $count)
    };

    ($($elem:expr),* $(,)?) => {{
        let mut collection = $crate::Collection::new();
        $(collection.add($elem);)*
        collection
    }};
}
