use std::{fmt, slice};

use crate::{
    error::AssignError,
    hash::{SubjectId, slot, stable_hash},
};

/// Something with a stable string identifier, such as a content set.
pub trait Identified {
    /// The stable identifier.
    fn id(&self) -> &str;
}

/// A non-empty, ordered collection to assign from.
///
/// Emptiness is rejected once, at construction, so picking from a `Pool` can
/// never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T> {
    items: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> Pool<T> {
    /// Build a pool, failing with [`AssignError::EmptyPool`] when `items` is
    /// empty.
    pub fn new(items: Vec<T>) -> Result<Self, AssignError> {
        if items.is_empty() {
            return Err(AssignError::EmptyPool);
        }
        Ok(Self { items })
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The first element, used as the default when no subject is known.
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// The elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Pick the element at `stable_hash(subject) mod len`.
    pub fn pick(&self, subject: &SubjectId) -> &T {
        &self.items[slot(subject.stable_hash(), self.items.len())]
    }

    /// Consume the pool, returning its elements.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Identified> Pool<T> {
    /// Look an element up by identifier.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<Vec<T>> for Pool<T> {
    type Error = AssignError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

/// Pick a top-level element for a subject.
///
/// Fails with [`AssignError::EmptyPool`] when `items` is empty.
///
/// # Examples
/// ```
/// use kpa_assign::{SubjectId, assign};
///
/// let sets = ["A", "B", "C", "D", "E"];
/// let subject = SubjectId::from("P_123456");
/// assert_eq!(assign(&subject, &sets), Ok(&"C"));
/// ```
pub fn assign<'a, T>(subject: &SubjectId, items: &'a [T]) -> Result<&'a T, AssignError> {
    if items.is_empty() {
        return Err(AssignError::EmptyPool);
    }
    Ok(&items[slot(subject.stable_hash(), items.len())])
}

/// Pick an item within one tier for a subject.
///
/// The seed is `"{subject}-{tier}"`. A single item is returned without
/// hashing; an empty list fails with [`AssignError::EmptyPool`].
pub fn assign_item<'a, T>(
    subject: &SubjectId,
    tier: impl fmt::Display,
    items: &'a [T],
) -> Result<&'a T, AssignError> {
    match items {
        [] => Err(AssignError::EmptyPool),
        [only] => Ok(only),
        _ => {
            let seed = subject.tier_seed(tier);
            Ok(&items[slot(stable_hash(&seed), items.len())])
        }
    }
}
