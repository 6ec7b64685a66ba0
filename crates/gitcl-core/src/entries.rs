//! Category-keyed accumulator for changelog entry messages.

use std::collections::BTreeMap;

/// Entry messages grouped by category.
///
/// Categories iterate in lexicographic order; messages keep insertion order
/// within their category. Keys are case-sensitive, so `Added` and `added`
/// are separate categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedEntries {
    inner: BTreeMap<String, Vec<String>>,
}

impl CategorizedEntries {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the category, creating the category if needed.
    pub fn upsert_append(&mut self, category: impl Into<String>, message: impl Into<String>) {
        self.inner
            .entry(category.into())
            .or_default()
            .push(message.into());
    }

    /// Returns the messages recorded under a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.inner.get(category).map(Vec::as_slice)
    }

    /// Iterates categories in lexicographic order with their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .map(|(category, messages)| (category.as_str(), messages.as_slice()))
    }

    /// Returns the category names in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns true if no messages have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the total number of messages across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    /// Takes the accumulated entries, leaving this accumulator empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<C, M> FromIterator<(C, M)> for CategorizedEntries
where
    C: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, M)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (category, message) in iter {
            entries.upsert_append(category, message);
        }
        entries
    }
}
