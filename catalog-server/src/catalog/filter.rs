//! Catalog query parsing
//!
//! Turns the raw `/api/cars/paginated` query string into a validated
//! filter plus page request. Out-of-range paging, unknown sort fields
//! and malformed ids are hard 400s, never silently clamped.

use serde::Deserialize;

use crate::utils::AppError;

/// First page when `page` is omitted
pub const DEFAULT_PAGE: u32 = 1;
/// Page size when `limit` is omitted
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound for `limit`
pub const MAX_LIMIT: u32 = 50;

/// Raw query parameters as they arrive on the wire.
///
/// Everything is a string so that malformed numbers produce our own 400
/// body instead of the extractor's.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
    pub brand_id: Option<String>,
    pub color_id: Option<String>,
    pub model_id: Option<String>,
    pub status_id: Option<String>,
}

/// Sortable car fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Name,
    Scale,
    Id,
    CreatedAt,
}

impl SortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price" => Some(Self::Price),
            "name" => Some(Self::Name),
            "scale" => Some(Self::Scale),
            "id" => Some(Self::Id),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Column used when ordering is delegated to the database.
    ///
    /// `price` never reaches ORDER BY; it is sorted in memory because the
    /// TEXT decimal column orders lexicographically.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Price => "c.price",
            Self::Name => "c.name",
            Self::Scale => "c.scale",
            Self::Id => "c.id",
            Self::CreatedAt => "c.created_at",
        }
    }

    /// Wire name echoed back in pagination metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
            Self::Scale => "scale",
            Self::Id => "id",
            Self::CreatedAt => "createdAt",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Search/equality predicate applied to the car listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub brand_id: Option<i64>,
    pub color_id: Option<i64>,
    pub model_id: Option<i64>,
    pub status_id: Option<i64>,
}

/// Validated paging and ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogPage {
    pub page: u32,
    pub limit: u32,
    pub sort: SortField,
    pub order: SortOrder,
}

impl CatalogPage {
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.limit
    }
}

/// Bind argument for dynamically assembled WHERE clauses.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Int(i64),
    Text(String),
}

impl CatalogQuery {
    /// Validate and split into filter + page request.
    pub fn into_parts(self) -> Result<(CatalogFilter, CatalogPage), AppError> {
        let page = parse_number::<u32>(self.page, "page")?.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(AppError::validation("page must be >= 1"));
        }

        let limit = parse_number::<u32>(self.limit, "limit")?.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let sort = match self.sort.as_deref() {
            None | Some("") => SortField::Price,
            Some(value) => SortField::parse(value)
                .ok_or_else(|| AppError::validation(format!("unknown sort field '{value}'")))?,
        };

        let order = match self.order.as_deref() {
            None | Some("") => SortOrder::Asc,
            Some(value) => SortOrder::parse(value)
                .ok_or_else(|| AppError::validation("order must be 'asc' or 'desc'"))?,
        };

        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let filter = CatalogFilter {
            search,
            brand_id: parse_number(self.brand_id, "brandId")?,
            color_id: parse_number(self.color_id, "colorId")?,
            model_id: parse_number(self.model_id, "modelId")?,
            status_id: parse_number(self.status_id, "statusId")?,
        };

        Ok((
            filter,
            CatalogPage {
                page,
                limit,
                sort,
                order,
            },
        ))
    }
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    field: &str,
) -> Result<Option<T>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} is not a valid number"))),
    }
}

impl CatalogFilter {
    /// WHERE fragment with `?` placeholders (leading space included), or
    /// an empty string when no predicate applies. Placeholder order
    /// matches [`CatalogFilter::bind_args`].
    pub fn where_sql(&self) -> String {
        let mut conds: Vec<&'static str> = Vec::new();
        if self.search.is_some() {
            // LIKE is case-insensitive for ASCII in SQLite
            conds.push("(c.name LIKE ? OR c.description LIKE ?)");
        }
        if self.brand_id.is_some() {
            conds.push("c.brand_id = ?");
        }
        if self.color_id.is_some() {
            conds.push("c.color_id = ?");
        }
        if self.model_id.is_some() {
            conds.push("c.model_id = ?");
        }
        if self.status_id.is_some() {
            conds.push("c.status_id = ?");
        }

        if conds.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conds.join(" AND "))
        }
    }

    /// Bind values in the order [`CatalogFilter::where_sql`] expects them.
    pub fn bind_args(&self) -> Vec<SqlArg> {
        let mut args = Vec::new();
        if let Some(search) = &self.search {
            let pattern = format!("%{search}%");
            args.push(SqlArg::Text(pattern.clone()));
            args.push(SqlArg::Text(pattern));
        }
        for id in [self.brand_id, self.color_id, self.model_id, self.status_id]
            .into_iter()
            .flatten()
        {
            args.push(SqlArg::Int(id));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> CatalogQuery {
        let mut q = CatalogQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => q.page = value,
                "limit" => q.limit = value,
                "sort" => q.sort = value,
                "order" => q.order = value,
                "search" => q.search = value,
                "brandId" => q.brand_id = value,
                "colorId" => q.color_id = value,
                "modelId" => q.model_id = value,
                "statusId" => q.status_id = value,
                other => panic!("unknown key {other}"),
            }
        }
        q
    }

    #[test]
    fn defaults_when_nothing_is_given() {
        let (filter, page) = CatalogQuery::default().into_parts().unwrap();
        assert_eq!(filter, CatalogFilter::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.sort, SortField::Price);
        assert_eq!(page.order, SortOrder::Asc);
    }

    #[test]
    fn out_of_range_paging_is_rejected() {
        assert!(query(&[("page", "0")]).into_parts().is_err());
        assert!(query(&[("page", "-3")]).into_parts().is_err());
        assert!(query(&[("limit", "0")]).into_parts().is_err());
        assert!(query(&[("limit", "51")]).into_parts().is_err());
        assert!(query(&[("limit", "abc")]).into_parts().is_err());
        assert!(query(&[("limit", "50")]).into_parts().is_ok());
    }

    #[test]
    fn unknown_sort_field_and_order_are_rejected() {
        assert!(query(&[("sort", "password")]).into_parts().is_err());
        assert!(query(&[("order", "sideways")]).into_parts().is_err());
        let (_, page) = query(&[("sort", "createdAt"), ("order", "desc")])
            .into_parts()
            .unwrap();
        assert_eq!(page.sort, SortField::CreatedAt);
        assert_eq!(page.order, SortOrder::Desc);
    }

    #[test]
    fn malformed_ids_are_rejected_and_empty_treated_as_absent() {
        assert!(query(&[("brandId", "xyz")]).into_parts().is_err());
        let (filter, _) = query(&[("brandId", ""), ("colorId", "12")])
            .into_parts()
            .unwrap();
        assert_eq!(filter.brand_id, None);
        assert_eq!(filter.color_id, Some(12));
    }

    #[test]
    fn blank_search_is_dropped() {
        let (filter, _) = query(&[("search", "   ")]).into_parts().unwrap();
        assert_eq!(filter.search, None);
        let (filter, _) = query(&[("search", " gt3 ")]).into_parts().unwrap();
        assert_eq!(filter.search, Some("gt3".to_string()));
    }

    #[test]
    fn where_clause_matches_bind_args() {
        let filter = CatalogFilter {
            search: Some("gt3".to_string()),
            brand_id: Some(5),
            status_id: Some(9),
            ..Default::default()
        };
        assert_eq!(
            filter.where_sql(),
            " WHERE (c.name LIKE ? OR c.description LIKE ?) AND c.brand_id = ? AND c.status_id = ?"
        );
        assert_eq!(
            filter.bind_args(),
            vec![
                SqlArg::Text("%gt3%".to_string()),
                SqlArg::Text("%gt3%".to_string()),
                SqlArg::Int(5),
                SqlArg::Int(9),
            ]
        );
    }

    #[test]
    fn empty_filter_has_no_where_clause() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.where_sql(), "");
        assert!(filter.bind_args().is_empty());
    }

    #[test]
    fn offset_is_zero_based() {
        let (_, page) = query(&[("page", "3"), ("limit", "20")]).into_parts().unwrap();
        assert_eq!(page.offset(), 40);
    }
}
