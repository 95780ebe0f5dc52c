//! Forward-only cursor pagination.
//!
//! The cursor is the id of the last record on the previous page. A cursor
//! that no longer resolves within the filtered sequence restarts from the
//! first page instead of failing.

use serde::Serialize;

use crate::filter::Listable;
use crate::types::RecordId;

/// Default number of records per page.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// One page of a list response: `{ limit, last_id, data }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub limit: usize,
    /// Cursor for the next request; `None` once the page is empty.
    pub last_id: Option<RecordId>,
    pub data: Vec<T>,
}

/// Raise a user-provided limit to at least 1, defaulting when absent.
///
/// There is no upper bound.
pub fn clamp_limit(limit: Option<i64>) -> usize {
    match limit {
        None => DEFAULT_PAGE_LIMIT,
        Some(n) => usize::try_from(n.max(1)).unwrap_or(usize::MAX),
    }
}

/// Resolve a cursor into a start offset within `records`.
///
/// Returns the position just past the first record whose id equals
/// `last_id`, or `0` when the cursor is absent, empty, or unknown.
pub fn resolve_offset<T: Listable>(records: &[T], last_id: Option<&str>) -> usize {
    match last_id.filter(|id| !id.is_empty()) {
        Some(cursor) => records
            .iter()
            .position(|r| r.id() == cursor)
            .map_or(0, |i| i + 1),
        None => 0,
    }
}

/// Slice one page out of an already filtered, ordered sequence.
pub fn paginate<T: Listable>(records: Vec<T>, limit: usize, last_id: Option<&str>) -> Page<T> {
    let offset = resolve_offset(&records, last_id);
    let data: Vec<T> = records.into_iter().skip(offset).take(limit).collect();
    let last_id = data.last().map(|r| r.id().to_string());

    Page {
        limit,
        last_id,
        data,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
