//! Sort and search state of the directory table, mirrored in the URL.

use std::fmt;

use crate::config::params;
use crate::utils::QueryParams;

/// Sortable fields of a directory entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Type,
    Size,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Name, Self::Type, Self::Size];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Size => "size",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Active sort of the table. Encoded in the URL as `key:direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Parse a `key:direction` parameter.
    ///
    /// Anything malformed (missing colon, unknown key or direction, extra
    /// segments) yields the default `name:asc` instead of an error.
    pub fn parse(param: &str) -> Self {
        let Some((key, direction)) = param.split_once(':') else {
            return Self::default();
        };
        match (SortKey::from_name(key), SortDirection::from_name(direction)) {
            (Some(key), Some(direction)) => Self { key, direction },
            _ => Self::default(),
        }
    }

    /// Sort requested by clicking the header of `key`.
    ///
    /// The active ascending column flips to descending; any other click
    /// selects the column ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if key == self.key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key.as_str(), self.direction.as_str())
    }
}

/// View state of the directory table derived from the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub sort: SortSpec,
}

impl TableQuery {
    pub fn from_params(query: &QueryParams) -> Self {
        Self {
            search: query.get(params::SEARCH).unwrap_or_default().to_string(),
            sort: SortSpec::parse(query.get(params::SORT).unwrap_or_default()),
        }
    }

    /// Parse from a raw `?search=...&sort=...` string.
    pub fn from_search(search: &str) -> Self {
        Self::from_params(&QueryParams::parse(search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_round_trip() {
        for key in SortKey::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let spec = SortSpec::new(key, direction);
                assert_eq!(SortSpec::parse(&spec.to_string()), spec);
            }
        }
    }

    #[test]
    fn test_invalid_sort_falls_back_to_default() {
        let default = SortSpec::new(SortKey::Name, SortDirection::Asc);
        assert_eq!(SortSpec::parse(""), default);
        assert_eq!(SortSpec::parse("size"), default);
        assert_eq!(SortSpec::parse("owner:asc"), default);
        assert_eq!(SortSpec::parse("size:sideways"), default);
        assert_eq!(SortSpec::parse("size:desc:extra"), default);
        assert_eq!(SortSpec::parse("SIZE:DESC"), default);
    }

    #[test]
    fn test_toggle() {
        let spec = SortSpec::default();
        let flipped = spec.toggled(SortKey::Name);
        assert_eq!(flipped, SortSpec::new(SortKey::Name, SortDirection::Desc));
        assert_eq!(flipped.toggled(SortKey::Name), spec);
        assert_eq!(
            flipped.toggled(SortKey::Size),
            SortSpec::new(SortKey::Size, SortDirection::Asc)
        );
    }

    #[test]
    fn test_table_query_from_search() {
        let query = TableQuery::from_search("?search=report+2024&sort=size%3Adesc");
        assert_eq!(query.search, "report 2024");
        assert_eq!(query.sort, SortSpec::new(SortKey::Size, SortDirection::Desc));

        assert_eq!(TableQuery::from_search(""), TableQuery::default());
    }
}
