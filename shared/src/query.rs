//! Pagination envelope for list endpoints.

use serde::{Deserialize, Serialize};

/// Metadata returned alongside a page of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page (1-based)
    pub page: u32,
    /// Total number of pages for the filtered set
    pub total_pages: u32,
    /// Total matching items across all pages
    pub total_items: u64,
    /// Requested page size
    pub page_size: u32,
    /// Sort field the listing was ordered by
    pub sort: String,
    /// Sort direction (`asc` / `desc`)
    pub order: String,
}

/// Paginated response envelope: `{items, meta}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Build the envelope; `total_pages = ceil(total_items / page_size)`.
    pub fn new(
        items: Vec<T>,
        total_items: u64,
        page: u32,
        page_size: u32,
        sort: impl Into<String>,
        order: impl Into<String>,
    ) -> Self {
        let total_pages = if page_size > 0 {
            total_items.div_ceil(page_size as u64) as u32
        } else {
            0
        };
        Self {
            items,
            meta: PageMeta {
                page,
                total_pages,
                total_items,
                page_size,
                sort: sort.into(),
                order: order.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(total_items: u64, page_size: u32) -> u32 {
        Paginated::<i32>::new(Vec::new(), total_items, 1, page_size, "price", "asc")
            .meta
            .total_pages
    }

    #[test]
    fn total_pages_is_ceiling_of_items_over_size() {
        assert_eq!(pages(0, 10), 0);
        assert_eq!(pages(1, 10), 1);
        assert_eq!(pages(10, 10), 1);
        assert_eq!(pages(11, 10), 2);
        assert_eq!(pages(75, 50), 2);
        assert_eq!(pages(100, 50), 2);
        assert_eq!(pages(101, 50), 3);
    }

    #[test]
    fn meta_echoes_the_request() {
        let envelope = Paginated::new(vec![1, 2, 3], 3, 2, 3, "name", "desc");
        assert_eq!(envelope.meta.page, 2);
        assert_eq!(envelope.meta.page_size, 3);
        assert_eq!(envelope.meta.sort, "name");
        assert_eq!(envelope.meta.order, "desc");
        assert_eq!(envelope.items, vec![1, 2, 3]);
    }
}
