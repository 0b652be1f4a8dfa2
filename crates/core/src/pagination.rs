//! Page slicing for in-memory collections

use crate::errors::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(default = "default_page", alias = "Page")]
    pub page: u32,
    #[serde(default = "default_page_size", alias = "PageSize", alias = "pagesize")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Both values must be at least 1
    pub fn validate(&self) -> CoreResult<()> {
        if self.page < 1 {
            return Err(CoreError::validation("page must be at least 1"));
        }
        if self.page_size < 1 {
            return Err(CoreError::validation("pageSize must be at least 1"));
        }
        Ok(())
    }

    /// Number of items to skip before the page starts
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}

/// One page of a collection together with the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

/// Skip `(page - 1) * page_size` items and take `page_size`.
/// Pages past the end are empty rather than an error.
pub fn paginate<T>(items: Vec<T>, params: &PaginationParams) -> Page<T> {
    let total = items.len();
    let data = items
        .into_iter()
        .skip(params.offset())
        .take(params.page_size as usize)
        .collect();

    Page {
        data,
        total,
        page: params.page,
        page_size: params.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_second_page_of_six() {
        let page = paginate((1..=6).collect::<Vec<_>>(), &PaginationParams::new(2, 2));
        assert_eq!(page.data, vec![3, 4]);
        assert_eq!(page.total, 6);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 2);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let page = paginate((1..=6).collect::<Vec<_>>(), &PaginationParams::new(5, 10));
        assert!(page.data.is_empty());
        assert_eq!(page.total, 6);
    }

    #[test]
    fn test_partial_last_page() {
        let page = paginate((1..=5).collect::<Vec<_>>(), &PaginationParams::new(2, 3));
        assert_eq!(page.data, vec![4, 5]);
    }

    #[test]
    fn test_defaults_when_query_is_empty() {
        let params: PaginationParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params, PaginationParams::default());

        let params: PaginationParams = serde_json::from_value(json!({"pageSize": 3})).unwrap();
        assert_eq!(params, PaginationParams::new(1, 3));

        let params: PaginationParams =
            serde_json::from_value(json!({"Page": 2, "PageSize": 4})).unwrap();
        assert_eq!(params, PaginationParams::new(2, 4));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(PaginationParams::new(0, 10).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_offset_saturates() {
        let params = PaginationParams::new(u32::MAX, u32::MAX);
        assert!(params.offset() > 0);
        assert!(paginate(vec![1, 2, 3], &params).data.is_empty());
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = paginate(vec!["a"], &PaginationParams::default());
        assert_eq!(
            serde_json::to_value(page).unwrap(),
            json!({"data": ["a"], "total": 1, "page": 1, "pageSize": 10})
        );
    }
}
