use serde::{Deserialize, Serialize};
use validator::Validate;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// One-based page selection; missing values fall back to page 1 of 10 records.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 1000, message = "pageSize must be between 1 and 1000"))]
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE)
    }

    #[inline]
    pub fn page_size(&self) -> u32 {
        self.page_size
            .filter(|s| *s >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub pages: u32,
    pub records: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PageResult<T> {
    pub fn new(records: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            pages: total.div_ceil(page_size.max(1) as u64) as u32,
            records,
            total,
            page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 10);
        assert!(PageParams::new(0, 10).validate().is_err());
    }

    #[test]
    fn test_page_count_rounds_up() {
        let page: PageResult<u8> = PageResult::new(vec![], 21, 1, 10);
        assert_eq!(page.pages, 3);
        let empty: PageResult<u8> = PageResult::new(vec![], 0, 1, 10);
        assert_eq!(empty.pages, 0);
    }
}
