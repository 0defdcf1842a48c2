use crate::query_filter::QueryFilter;

use serde::{Deserialize, Serialize};

/// The server's accounting of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u16,
    pub limit: u8,
    pub filtered_count: u64,
    pub total_count: u64,
}

impl Pagination {
    /// Whether records remain beyond this page among the filtered set.
    pub fn has_next_page(&self) -> bool {
        let seen = u64::from(self.page.max(1)) * u64::from(self.limit);
        seen < self.filtered_count
    }
}

/// One page of records plus the server's pagination.
///
/// `data.len() <= pagination.limit` is expected but not enforced; the server
/// is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFilteredResult<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> QueryFilteredResult<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }

    /// No records; pagination projected from the filter (default filter for `None`).
    pub fn empty(filter: Option<&QueryFilter>) -> Self {
        let pagination = filter.cloned().unwrap_or_default().to_pagination();
        Self {
            data: Vec::new(),
            pagination,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for QueryFilteredResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
