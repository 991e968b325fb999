use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{Result, StorageError};

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_page_size(),
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(StorageError::InvalidParameter(
                "page must be >= 1".to_string(),
            ));
        }
        if self.size < 1 || self.size > MAX_PAGE_SIZE {
            return Err(StorageError::InvalidParameter(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }
}

/// Page envelope: the requested slice plus its position in the full listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total: usize,
    pub pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: usize, size: usize, total: usize) -> Self {
        Self {
            items,
            page,
            size,
            total,
            pages: total_pages(total, size),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            pages: self.pages,
        }
    }
}

/// Number of pages for `total` items, never less than one.
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 {
        return 1;
    }
    total.div_ceil(size).max(1)
}
