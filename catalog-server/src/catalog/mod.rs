//! Storefront listing: query parsing, price ordering and cache policy.

pub mod filter;
pub mod sort;

pub use filter::{
    CatalogFilter, CatalogPage, CatalogQuery, SortField, SortOrder, SqlArg, DEFAULT_LIMIT,
    DEFAULT_PAGE, MAX_LIMIT,
};
pub use sort::{page_window, parse_price, sort_by_price};

/// CDN cache lifetime for a listing response.
///
/// First pages without a search term are the landing-page hot path and
/// cache long; searches and deep pages churn more and cache short.
pub fn cache_ttl_seconds(filter: &CatalogFilter, page: u32) -> u32 {
    if filter.search.is_some() || page > 1 {
        60
    } else {
        600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_browse_caches_long() {
        assert_eq!(cache_ttl_seconds(&CatalogFilter::default(), 1), 600);
    }

    #[test]
    fn searches_and_deep_pages_cache_short() {
        let searched = CatalogFilter {
            search: Some("gt3".to_string()),
            ..Default::default()
        };
        assert_eq!(cache_ttl_seconds(&searched, 1), 60);
        assert_eq!(cache_ttl_seconds(&CatalogFilter::default(), 2), 60);
    }

    #[test]
    fn id_filters_alone_do_not_shorten_the_ttl() {
        let filtered = CatalogFilter {
            brand_id: Some(7),
            ..Default::default()
        };
        assert_eq!(cache_ttl_seconds(&filtered, 1), 600);
    }
}
