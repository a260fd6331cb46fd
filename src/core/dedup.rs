//! Insertion-ordered list that rejects duplicate titles.
//!
//! Obligation and recommendation lists carry a "no two entries share a title"
//! invariant. Enforcing it at insert time makes the invariant structural
//! instead of a convention every call site has to remember.

use serde::Serialize;
use std::collections::HashSet;

/// Anything identified by a display title.
pub trait Titled {
    fn title(&self) -> &str;
}

/// Ordered container with first-occurrence-wins deduplication by title.
///
/// Serializes as a plain JSON array.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct TitledList<T> {
    items: Vec<T>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl<T> Default for TitledList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for TitledList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Titled> TitledList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless an entry with the same title is already present.
    /// Returns whether the item was kept.
    pub fn insert(&mut self, item: T) -> bool {
        if self.seen.contains(item.title()) {
            return false;
        }
        self.seen.insert(item.title().to_string());
        self.items.push(item);
        true
    }

    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Titled> FromIterator<T> for TitledList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a TitledList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
