use crate::error::model_error::ModelError;
use crate::query_filter::{MAX_QUERY_FILTER_LIMIT, QueryFilter, SortOrder};

use chrono::{DateTime, Utc};

/// Builder for validated [`QueryFilter`] values.
///
/// Starts from the default filter (page 1, limit 50, ascending), so unset
/// fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct QueryFilterBuilder {
    filter: QueryFilter,
}

impl QueryFilterBuilder {
    pub fn with_page(mut self, page: u16) -> Self {
        self.filter.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u8) -> Self {
        self.filter.limit = Some(limit);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortOrder) -> Self {
        self.filter.sort_by = Some(sort_by);
        self
    }

    pub fn with_created_before(mut self, at: DateTime<Utc>) -> Self {
        self.filter.created_before = Some(at);
        self
    }

    pub fn with_created_after(mut self, at: DateTime<Utc>) -> Self {
        self.filter.created_after = Some(at);
        self
    }

    pub fn with_updated_before(mut self, at: DateTime<Utc>) -> Self {
        self.filter.updated_before = Some(at);
        self
    }

    pub fn with_updated_after(mut self, at: DateTime<Utc>) -> Self {
        self.filter.updated_after = Some(at);
        self
    }

    pub fn with_include_archived(mut self, include: bool) -> Self {
        self.filter.include_archived = Some(include);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.filter.query = Some(query.into());
        self
    }

    /// Build the filter with validation.
    #[track_caller]
    pub fn build(self) -> Result<QueryFilter, ModelError> {
        let filter = self.filter;

        if filter.page == Some(0) {
            return Err(ModelError::validation("page is 1-based, got 0"));
        }

        if let Some(limit) = filter.limit.filter(|l| *l == 0 || *l > MAX_QUERY_FILTER_LIMIT) {
            return Err(ModelError::validation(format!(
                "limit must be between 1 and {MAX_QUERY_FILTER_LIMIT}, got {limit}"
            )));
        }

        if matches!((filter.created_after, filter.created_before), (Some(after), Some(before)) if after > before) {
            return Err(ModelError::validation(
                "createdAfter must not be later than createdBefore",
            ));
        }

        if matches!((filter.updated_after, filter.updated_before), (Some(after), Some(before)) if after > before) {
            return Err(ModelError::validation(
                "updatedAfter must not be later than updatedBefore",
            ));
        }

        Ok(filter)
    }
}
