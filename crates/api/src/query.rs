//! Shared query parameter types for API handlers.

use brandhub_core::pagination::clamp_limit;
use brandhub_db::repositories::ListQuery;
use serde::Deserialize;

/// Cursor pagination and search parameters (`?search_term=&limit=&last_id=`).
///
/// Accepted by every list endpoint. A limit below 1 is raised to 1 when
/// converted to a [`ListQuery`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search_term: Option<String>,
    pub limit: Option<i64>,
    pub last_id: Option<String>,
}

impl ListParams {
    /// Resolve into repository parameters. `unfiltered_cap` bounds lists
    /// that end up with no predicate at all.
    pub fn to_query(&self, unfiltered_cap: Option<usize>) -> ListQuery {
        ListQuery {
            search_term: self.search_term.clone(),
            limit: clamp_limit(self.limit),
            last_id: self.last_id.clone(),
            unfiltered_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_defaults() {
        let query = ListParams::default().to_query(None);
        assert_eq!(query.limit, 10);
        assert_eq!(query.unfiltered_cap, None);
    }

    #[test]
    fn carries_search_cursor_and_cap() {
        let params = ListParams {
            search_term: Some("spa".into()),
            limit: Some(500),
            last_id: Some("B7".into()),
        };
        let query = params.to_query(Some(50));
        assert_eq!(query.search_term.as_deref(), Some("spa"));
        assert_eq!(query.limit, 500);
        assert_eq!(query.last_id.as_deref(), Some("B7"));
        assert_eq!(query.unfiltered_cap, Some(50));
    }
}
