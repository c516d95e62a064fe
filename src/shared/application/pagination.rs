/// Pagination support for queries
///
/// Pages are zero-based: page 0 is the first page.
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        self.page as i64 * self.page_size as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    /// Key identifying this page in the read-through cache
    pub fn cache_key(&self) -> String {
        format!("page:{}:{}", self.page, self.page_size)
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Convert the items while keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Raw `?page=&size=` query string values, validated before use
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageQuery {
    pub fn into_params(self) -> AppResult<PaginationParams> {
        let defaults = PaginationParams::default();
        let page = self.page.unwrap_or(defaults.page as i64);
        let size = self.size.unwrap_or(defaults.page_size as i64);

        Validator::validate_pagination(page, size)?;
        let page = u32::try_from(page)
            .map_err(|_| AppError::InvalidInput(format!("Page {} is out of range", page)))?;
        Ok(PaginationParams::new(page, size as u32))
    }
}
