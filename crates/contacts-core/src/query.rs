// crates/contacts-core/src/query.rs - Attribute filters for contact search
//
// A search is a conjunction of up to three exact-equality filters. Filters are
// keyed by attribute: giving the same attribute twice replaces its value and
// does not use up another slot. Insertion order is kept so the filters can be
// echoed back in the order they were entered.

use indexmap::IndexMap;
use thiserror::Error;

use crate::contact::{Contact, Field};
use crate::store::ContactTable;

/// Maximum number of distinct attributes in one search
pub const MAX_FILTERS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("At most {} attributes can be combined in one search", MAX_FILTERS)]
    TooManyFilters,
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Exact-match filter set, ANDed together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    filters: IndexMap<Field, String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SearchQuery::insert`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> QueryResult<Self> {
        self.insert(field, value)?;
        Ok(self)
    }

    /// Add a filter, or replace the value of an existing one
    pub fn insert(&mut self, field: Field, value: impl Into<String>) -> QueryResult<()> {
        if self.is_full() && !self.filters.contains_key(&field) {
            return Err(QueryError::TooManyFilters);
        }
        self.filters.insert(field, value.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.filters.len() >= MAX_FILTERS
    }

    pub fn filters(&self) -> impl Iterator<Item = (Field, &str)> {
        self.filters
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Whether `contact` satisfies every filter
    ///
    /// An empty query matches everything; callers that require at least one
    /// filter check [`SearchQuery::is_empty`] first.
    pub fn matches(&self, contact: &Contact) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| contact.get(*field) == value)
    }

    /// Matching rows, in table order
    pub fn apply<'a>(&self, table: &'a ContactTable) -> Vec<&'a Contact> {
        table
            .rows()
            .iter()
            .filter(|contact| self.matches(contact))
            .collect()
    }
}
