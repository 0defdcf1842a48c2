//! Page/sort/time-range filter and its query-string codec.
//!
//! Encoding emits one parameter per set field. Decoding is permissive: a
//! value that does not parse leaves its field untouched and never raises an
//! error. Defaulting a zero limit is the extraction site's job, not the
//! parser's.

pub mod builder;
pub mod params;

use crate::pagination::Pagination;
use params::QueryParams;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

pub const QUERY_KEY_PAGE: &str = "page";
pub const QUERY_KEY_LIMIT: &str = "limit";
pub const QUERY_KEY_SORT_BY: &str = "sortBy";
pub const QUERY_KEY_CREATED_BEFORE: &str = "createdBefore";
pub const QUERY_KEY_CREATED_AFTER: &str = "createdAfter";
pub const QUERY_KEY_UPDATED_BEFORE: &str = "updatedBefore";
pub const QUERY_KEY_UPDATED_AFTER: &str = "updatedAfter";
pub const QUERY_KEY_INCLUDE_ARCHIVED: &str = "includeArchived";
pub const QUERY_KEY_SEARCH: &str = "q";

pub const DEFAULT_QUERY_FILTER_PAGE: u16 = 1;
pub const DEFAULT_QUERY_FILTER_LIMIT: u8 = 50;
pub const MAX_QUERY_FILTER_LIMIT: u8 = 250;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Case-insensitive; only `asc` and `desc` are recognized.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Ascending)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Descending)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client-specified page/sort/time-range request.
///
/// Every field is optional. `QueryFilter::default()` is the default filter
/// (page 1, limit 50, ascending); `QueryFilter::blank()` has nothing set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            page: Some(DEFAULT_QUERY_FILTER_PAGE),
            limit: Some(DEFAULT_QUERY_FILTER_LIMIT),
            sort_by: Some(SortOrder::Ascending),
            ..Self::blank()
        }
    }
}

impl QueryFilter {
    /// A filter with no field set. Parsing starts from here.
    pub fn blank() -> Self {
        Self {
            page: None,
            limit: None,
            sort_by: None,
            created_before: None,
            created_after: None,
            updated_before: None,
            updated_after: None,
            include_archived: None,
            query: None,
        }
    }

    pub fn builder() -> builder::QueryFilterBuilder {
        builder::QueryFilterBuilder::default()
    }

    /// Encode every set field as a query parameter.
    pub fn to_values(&self) -> QueryParams {
        let mut values = QueryParams::new();

        if let Some(page) = self.page {
            values.set(QUERY_KEY_PAGE, page.to_string());
        }
        if let Some(limit) = self.limit {
            values.set(QUERY_KEY_LIMIT, limit.to_string());
        }
        if let Some(sort_by) = self.sort_by {
            values.set(QUERY_KEY_SORT_BY, sort_by.as_str());
        }

        let timestamps = [
            (QUERY_KEY_CREATED_BEFORE, self.created_before),
            (QUERY_KEY_CREATED_AFTER, self.created_after),
            (QUERY_KEY_UPDATED_BEFORE, self.updated_before),
            (QUERY_KEY_UPDATED_AFTER, self.updated_after),
        ];
        for (key, at) in timestamps {
            if let Some(at) = at {
                values.set(key, format_timestamp(&at));
            }
        }

        if let Some(include_archived) = self.include_archived {
            values.set(QUERY_KEY_INCLUDE_ARCHIVED, include_archived.to_string());
        }
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            values.set(QUERY_KEY_SEARCH, query);
        }

        values
    }

    /// Overwrite fields from recognized parameters.
    ///
    /// Missing or unparseable values leave the field as it was. `page` is
    /// clamped to at least 1 and `limit` to `[0, 250]`; a zero limit is kept.
    pub fn from_params(&mut self, params: &QueryParams) {
        if let Some(page) = params.get(QUERY_KEY_PAGE).and_then(parse_saturating) {
            let page = page.clamp(i64::from(DEFAULT_QUERY_FILTER_PAGE), i64::from(u16::MAX));
            self.page = u16::try_from(page).ok();
        }

        if let Some(limit) = params.get(QUERY_KEY_LIMIT).and_then(parse_saturating) {
            let limit = limit.clamp(0, i64::from(MAX_QUERY_FILTER_LIMIT));
            self.limit = u8::try_from(limit).ok();
        }

        if let Some(sort_by) = params.get(QUERY_KEY_SORT_BY).and_then(SortOrder::from_token) {
            self.sort_by = Some(sort_by);
        }

        if let Some(at) = params.get(QUERY_KEY_CREATED_BEFORE).and_then(parse_timestamp) {
            self.created_before = Some(at);
        }
        if let Some(at) = params.get(QUERY_KEY_CREATED_AFTER).and_then(parse_timestamp) {
            self.created_after = Some(at);
        }
        if let Some(at) = params.get(QUERY_KEY_UPDATED_BEFORE).and_then(parse_timestamp) {
            self.updated_before = Some(at);
        }
        if let Some(at) = params.get(QUERY_KEY_UPDATED_AFTER).and_then(parse_timestamp) {
            self.updated_after = Some(at);
        }

        if let Some(include) = params.get(QUERY_KEY_INCLUDE_ARCHIVED).and_then(parse_bool) {
            self.include_archived = Some(include);
        }

        if let Some(query) = params.get(QUERY_KEY_SEARCH).filter(|q| !q.is_empty()) {
            self.query = Some(query.to_string());
        }
    }

    /// Parse a request URL's query string, then default a zero or absent limit.
    ///
    /// This is the only path where a zero limit is corrected automatically.
    pub fn extract_from_url(url: &Url) -> Self {
        let params = QueryParams::parse(url.query().unwrap_or_default());

        let mut filter = Self::blank();
        filter.from_params(&params);

        if filter.limit.unwrap_or(0) == 0 {
            filter.limit = Some(DEFAULT_QUERY_FILTER_LIMIT);
        }

        filter
    }

    /// Page/limit projection used when a list response omits pagination.
    pub fn to_pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(DEFAULT_QUERY_FILTER_PAGE).max(1),
            limit: match self.limit {
                Some(0) | None => DEFAULT_QUERY_FILTER_LIMIT,
                Some(limit) => limit.min(MAX_QUERY_FILTER_LIMIT),
            },
            filtered_count: 0,
            total_count: 0,
        }
    }

    /// Key-value pairs describing this filter, for log and span attachment.
    pub fn log_pairs(&self) -> Vec<(String, String)> {
        self.to_values()
            .iter()
            .map(|(key, value)| (format!("filter.{key}"), value.to_string()))
            .collect()
    }
}

/// Encode an optional filter, treating `None` as the default filter.
pub fn to_values(filter: Option<&QueryFilter>) -> QueryParams {
    match filter {
        Some(filter) => filter.to_values(),
        None => QueryFilter::default().to_values(),
    }
}

/// RFC3339 with nanoseconds, always in UTC.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// Integer parse that saturates on overflow instead of failing.
fn parse_saturating(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<i64>() {
        return Some(parsed);
    }

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(if negative { i64::MIN } else { i64::MAX })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
