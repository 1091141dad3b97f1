//! Search over packing lists.

use super::PackingList;

/// Case-insensitive substring filter over list titles and destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Lower-cased search text; empty matches every list
    query: String,
}

impl ListFilter {
    /// Creates a filter for `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packer_core::models::{ListFilter, PackingList};
    ///
    /// let list = PackingList::new("Paris Trip");
    /// assert!(ListFilter::new("paris").matches(&list));
    /// assert!(ListFilter::new("").matches(&list));
    /// assert!(!ListFilter::new("tokyo").matches(&list));
    /// ```
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }

    /// Whether the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Whether `list` has the query in its title or destination.
    pub fn matches(&self, list: &PackingList) -> bool {
        self.is_empty()
            || list.title.to_lowercase().contains(&self.query)
            || list
                .destination
                .as_deref()
                .is_some_and(|destination| destination.to_lowercase().contains(&self.query))
    }

    /// Keeps the matching lists in their input order.
    pub fn apply<'a, I>(&self, lists: I) -> Vec<&'a PackingList>
    where
        I: IntoIterator<Item = &'a PackingList>,
    {
        lists.into_iter().filter(|list| self.matches(list)).collect()
    }
}

impl From<&crate::params::SearchLists> for ListFilter {
    fn from(params: &crate::params::SearchLists) -> Self {
        Self::new(&params.query)
    }
}

/// Lists whose title or destination contains `query`, ignoring case.
pub fn filter<'a>(lists: &'a [PackingList], query: &str) -> Vec<&'a PackingList> {
    ListFilter::new(query).apply(lists)
}
