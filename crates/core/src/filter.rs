//! Filter engine for list endpoints.
//!
//! Composes exact field-equality predicates (foreign-key scoping) with a
//! case-insensitive substring search on the record name. Filtering is
//! stable: matching records keep their original relative order and the
//! engine never sorts.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of records a list request may reach when it carries neither a
/// field predicate nor a search term.
pub const DEFAULT_UNFILTERED_CAP: usize = 50;

// ---------------------------------------------------------------------------
// Listable
// ---------------------------------------------------------------------------

/// A record the filter engine and paginator can operate on.
pub trait Listable {
    /// The record's unique id, also used as the pagination cursor.
    fn id(&self) -> &str;

    /// The name field that substring search runs against.
    fn name(&self) -> &str;

    /// String value of a named field, for equality predicates.
    ///
    /// Returns `None` when the record has no such field.
    fn field(&self, key: &str) -> Option<&str>;
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Exact, case-sensitive equality on a string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEquals {
    pub field: &'static str,
    pub value: String,
}

impl FieldEquals {
    fn matches<T: Listable>(&self, record: &T) -> bool {
        record.field(self.field) == Some(self.value.as_str())
    }
}

/// A conjunction of predicates applied to a collection.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    equals: Vec<FieldEquals>,
    search_term: Option<String>,
    unfiltered_cap: Option<usize>,
}

impl Filter {
    /// A filter that accepts every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `record.field == value`.
    pub fn with_field(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.equals.push(FieldEquals {
            field,
            value: value.into(),
        });
        self
    }

    /// Require the record name to contain `term`, ignoring case.
    ///
    /// `None` and the empty string leave the filter unchanged.
    pub fn with_search(mut self, term: Option<&str>) -> Self {
        self.search_term = term
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase());
        self
    }

    /// Truncate the result to `cap` records when no predicate is present.
    pub fn with_unfiltered_cap(mut self, cap: usize) -> Self {
        self.unfiltered_cap = Some(cap);
        self
    }

    /// `true` when neither a field predicate nor a search term is set.
    pub fn is_unfiltered(&self) -> bool {
        self.equals.is_empty() && self.search_term.is_none()
    }

    /// Check a single record against every predicate.
    pub fn matches<T: Listable>(&self, record: &T) -> bool {
        if !self.equals.iter().all(|p| p.matches(record)) {
            return false;
        }
        match &self.search_term {
            Some(term) => record.name().to_lowercase().contains(term.as_str()),
            None => true,
        }
    }

    /// Keep the records satisfying all predicates, in their original order.
    pub fn apply<T: Listable>(&self, records: Vec<T>) -> Vec<T> {
        if self.is_unfiltered() {
            let mut records = records;
            if let Some(cap) = self.unfiltered_cap {
                records.truncate(cap);
            }
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
