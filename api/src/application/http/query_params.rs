use std::collections::HashMap;
use std::str::FromStr;

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Filter operator for query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,    // equals (default)
    Ilike, // contains, case-insensitive
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ilike" => Ok(FilterOperator::Ilike),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    /// First value given for `field` with `operator`.
    pub fn value(&self, field: &str, operator: FilterOperator) -> Option<&str> {
        self.conditions
            .iter()
            .find(|c| c.field == field && c.operator == operator)
            .map(|c| c.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();

        Self { sorts }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u64,
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            offset: offset.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

/// Combined query parameters (filter, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field
    /// - offset=0, limit=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut sort = SortParams::default();
        let mut offset: Option<u64> = None;
        let mut limit: Option<u64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                if let Some(condition) = parse_filter(filter_key, value) {
                    filter.conditions.push(condition);
                }
            } else if key == "sort" {
                sort = SortParams::from_string(value);
            } else if key == "offset" {
                offset = value.parse().ok();
            } else if key == "limit" {
                limit = value.parse().ok();
            }
        }

        // HashMap iteration order is arbitrary.
        filter.conditions.sort_by(|a, b| a.field.cmp(&b.field));

        Self {
            filter,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}

fn parse_filter(filter_key: &str, value: &str) -> Option<FilterCondition> {
    let end_bracket = filter_key.find(']')?;
    let field = filter_key[..end_bracket].to_string();
    let remaining = &filter_key[end_bracket + 1..];

    let operator = if remaining.is_empty() {
        FilterOperator::Eq
    } else {
        remaining
            .strip_prefix('[')?
            .strip_suffix(']')?
            .parse()
            .ok()?
    };

    Some(FilterCondition {
        field,
        operator,
        value: value.to_string(),
    })
}
