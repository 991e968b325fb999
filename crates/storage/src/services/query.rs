//! Filtering and pagination over a snapshot taken from
//! [`AthleteRepository::list`](crate::repository::athlete::AthleteRepository::list).
//!
//! Nothing here touches the store; callers hand in an owned snapshot so no
//! lock is held while slicing.

use crate::dto::athlete::AthleteFilter;
use crate::dto::common::Page;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Keep the athletes matching `filter`, preserving snapshot order.
pub fn filter(snapshot: &[Athlete], filter: &AthleteFilter) -> Vec<Athlete> {
    snapshot
        .iter()
        .filter(|athlete| filter.matches(athlete))
        .cloned()
        .collect()
}

/// Slice `snapshot` into the 1-based `page` of `size` items.
///
/// A page past the end yields an empty `items` list rather than an error.
pub fn paginate<T>(snapshot: Vec<T>, page: usize, size: usize) -> Result<Page<T>> {
    if page < 1 {
        return Err(StorageError::InvalidParameter(
            "page must be >= 1".to_string(),
        ));
    }
    if size < 1 {
        return Err(StorageError::InvalidParameter(
            "size must be >= 1".to_string(),
        ));
    }

    let total = snapshot.len();
    let start = (page - 1).saturating_mul(size);

    let items = if start >= total {
        Vec::new()
    } else {
        snapshot.into_iter().skip(start).take(size).collect()
    };

    Ok(Page::new(items, page, size, total))
}
