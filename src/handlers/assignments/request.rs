//! Assignment request DTOs

use serde::Deserialize;

use crate::{
    constants::LEVEL_FIELD,
    models::{Filter, FilterExt},
};

/// `level` constraint, or none for an absent or empty filter
pub fn level_filter(filter: Option<&str>) -> Filter {
    match filter {
        Some(level) if !level.is_empty() => Filter::field_eq(LEVEL_FIELD, level),
        _ => Filter::new(),
    }
}

/// `filter` wins over `level` when both are given
fn requested_level<'a>(filter: Option<&'a str>, level: Option<&'a str>) -> Option<&'a str> {
    filter.or(level)
}

/// Paginated listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct AssignmentPageQuery {
    /// Page size; absent means no limit
    pub size: Option<u64>,
    /// 1-based page number
    pub page: Option<u64>,
    pub filter: Option<String>,
    pub level: Option<String>,
}

impl AssignmentPageQuery {
    /// Documents to skip: `(page - 1) * size`, page 0 counting as page 1
    pub fn skip(&self) -> u64 {
        let page = self.page.unwrap_or(1).max(1);
        (page - 1).saturating_mul(self.size.unwrap_or(0))
    }

    pub fn limit(&self) -> Option<u64> {
        self.size
    }

    pub fn level_filter(&self) -> Filter {
        level_filter(requested_level(
            self.filter.as_deref(),
            self.level.as_deref(),
        ))
    }
}

/// Count query parameters
#[derive(Debug, Default, Deserialize)]
pub struct AssignmentCountQuery {
    pub filter: Option<String>,
    pub level: Option<String>,
}

impl AssignmentCountQuery {
    pub fn level_filter(&self) -> Filter {
        level_filter(requested_level(
            self.filter.as_deref(),
            self.level.as_deref(),
        ))
    }
}
