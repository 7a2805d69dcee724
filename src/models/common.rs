//! Shared pagination and query primitives.

use serde::{Deserialize, Serialize};

/// Pagination block returned alongside every list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of list results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: &'static [SortOrder] = &[SortOrder::Asc, SortOrder::Desc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

/// How multiple filters combine on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    And,
    Or,
}

impl FilterMode {
    pub const ALL: &'static [FilterMode] = &[FilterMode::And, FilterMode::Or];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::And => "and",
            FilterMode::Or => "or",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::And => "AND",
            FilterMode::Or => "OR",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_decodes_camel_case() {
        let meta: PaginationMeta = serde_json::from_str(
            r#"{"page":2,"pageSize":10,"totalCount":53,"totalPages":6,"hasNext":true,"hasPrevious":true}"#,
        )
        .unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.page_size, 10);
        assert_eq!(meta.total_count, 53);
        assert!(meta.has_next);
    }

    #[test]
    fn test_sort_order_wire_values() {
        assert_eq!(serde_json::to_value(SortOrder::Asc).unwrap(), "asc");
        assert_eq!(serde_json::to_value(SortOrder::Desc).unwrap(), "desc");
        assert_eq!(SortOrder::from_value("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::from_value("DESC"), None);
    }

    #[test]
    fn test_filter_mode_wire_values() {
        assert_eq!(serde_json::to_value(FilterMode::And).unwrap(), "and");
        assert_eq!(FilterMode::from_value("or"), Some(FilterMode::Or));
    }
}
