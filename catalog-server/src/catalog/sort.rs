//! In-memory price ordering
//!
//! `car.price` is stored as TEXT to keep exact decimal strings, so the
//! database would order it lexicographically ("10.00" < "9.99"). Price
//! sorts therefore load the filtered set and order it here numerically.

use shared::models::CarRow;

use super::filter::SortOrder;

/// Numeric value of a price string. Unparseable prices sort first so a
/// bad row is visible instead of hidden at the end.
pub fn parse_price(price: &str) -> f64 {
    price.trim().parse::<f64>().unwrap_or(0.0)
}

/// Stable sort by numeric price. Equal prices keep their incoming id order.
pub fn sort_by_price(rows: &mut [CarRow], order: SortOrder) {
    rows.sort_by(|a, b| {
        let pa = parse_price(&a.price);
        let pb = parse_price(&b.price);
        match order {
            SortOrder::Asc => pa.total_cmp(&pb),
            SortOrder::Desc => pb.total_cmp(&pa),
        }
    });
}

/// One page out of an already ordered set.
pub fn page_window<T>(rows: Vec<T>, page: u32, limit: u32) -> Vec<T> {
    let skip = (page.saturating_sub(1) as usize) * limit as usize;
    rows.into_iter().skip(skip).take(limit as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, price: &str) -> CarRow {
        CarRow {
            id,
            name: format!("car-{id}"),
            price: price.to_string(),
            scale: "1:18".to_string(),
            description: String::new(),
            brand_id: 1,
            brand_name: "brand".to_string(),
            brand_image_url: None,
            model_id: 1,
            model_name: "model".to_string(),
            model_image_url: None,
            model_display_order: 0,
            color_id: 1,
            color_name: "color".to_string(),
            color_rgb: "#000000".to_string(),
            color_display_order: 0,
            status_id: 1,
            status_name: "status".to_string(),
            status_display_order: 0,
            thumbnail_image_id: None,
            thumbnail_url: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn price_sort_is_numeric_not_lexicographic() {
        let mut rows = vec![row(1, "10.00"), row(2, "9.99"), row(3, "100.50")];
        sort_by_price(&mut rows, SortOrder::Asc);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn desc_reverses_asc_for_distinct_prices() {
        let mut asc = vec![row(1, "5.00"), row(2, "1.25"), row(3, "99.99"), row(4, "42.00")];
        let mut desc = asc.clone();
        sort_by_price(&mut asc, SortOrder::Asc);
        sort_by_price(&mut desc, SortOrder::Desc);
        let asc_ids: Vec<i64> = asc.iter().map(|r| r.id).collect();
        let mut desc_ids: Vec<i64> = desc.iter().map(|r| r.id).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn equal_prices_keep_id_order() {
        let mut rows = vec![row(3, "10.00"), row(1, "10.00"), row(2, "10.00")];
        sort_by_price(&mut rows, SortOrder::Asc);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn window_selects_the_requested_page() {
        let rows: Vec<i64> = (1..=25).collect();
        assert_eq!(page_window(rows.clone(), 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_window(rows.clone(), 3, 10), (21..=25).collect::<Vec<_>>());
        assert_eq!(page_window(rows.clone(), 4, 10), Vec::<i64>::new());
        assert_eq!(page_window(rows, 1, 50), (1..=25).collect::<Vec<_>>());
    }
}
