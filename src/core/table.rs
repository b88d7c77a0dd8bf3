//! Table view model: filtering and sorting of rows.
//!
//! [`derive_rows`] is a pure function of its inputs. Callers recompute it
//! whenever rows, columns, sort, or search text change.

use std::cmp::Ordering;
use std::fmt;

use crate::models::{DirectoryEntry, SortDirection, SortKey, SortSpec};
use crate::utils::format_size;

/// Raw value of a cell, ordered by its natural ordering.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue {
    Text(String),
    Number(u64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A row type the table can display.
pub trait TableRow {
    type Key: Copy + Eq;

    fn cell(&self, key: Self::Key) -> CellValue;
}

impl TableRow for DirectoryEntry {
    type Key = SortKey;

    fn cell(&self, key: SortKey) -> CellValue {
        match key {
            SortKey::Name => CellValue::Text(self.name.clone()),
            SortKey::Type => CellValue::Text(self.kind.as_str().to_string()),
            SortKey::Size => CellValue::Number(self.size),
        }
    }
}

/// Column definition.
pub struct Column<T: TableRow> {
    pub key: T::Key,
    pub label: &'static str,
    pub sortable: bool,
    pub searchable: bool,
    /// Text matched by search instead of the raw cell
    pub value_getter: Option<fn(&T) -> String>,
    /// Text displayed instead of the raw cell
    pub render: Option<fn(&T) -> String>,
}

impl<T: TableRow> Column<T> {
    /// Text used when matching this column against the search string.
    pub fn search_text(&self, row: &T) -> String {
        match self.value_getter {
            Some(getter) => getter(row),
            None => row.cell(self.key).to_string(),
        }
    }

    pub fn display(&self, row: &T) -> String {
        match self.render {
            Some(render) => render(row),
            None => row.cell(self.key).to_string(),
        }
    }
}

impl<T: TableRow> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            searchable: self.searchable,
            value_getter: self.value_getter,
            render: self.render,
        }
    }
}

/// Whether any searchable column contains `needle` (already lowercased).
fn matches<T: TableRow>(row: &T, columns: &[Column<T>], needle: &str) -> bool {
    columns
        .iter()
        .filter(|col| col.searchable)
        .any(|col| col.search_text(row).to_lowercase().contains(needle))
}

/// Filter `rows` by `search` and stable-sort them by `key`.
///
/// Search is a case-insensitive substring match over searchable columns;
/// empty search keeps every row. Descending order reverses the comparator,
/// so ties keep their input order either way.
pub fn derive_rows<T>(
    rows: &[T],
    columns: &[Column<T>],
    key: T::Key,
    direction: SortDirection,
    search: &str,
) -> Vec<T>
where
    T: TableRow + Clone,
{
    let needle = search.to_lowercase();
    let mut out: Vec<T> = rows
        .iter()
        .filter(|row| needle.is_empty() || matches(*row, columns, &needle))
        .cloned()
        .collect();

    out.sort_by(|a, b| compare(a, b, key, direction));
    out
}

/// [`derive_rows`] for directory entries with a [`SortSpec`].
pub fn directory_rows(
    rows: &[DirectoryEntry],
    columns: &[Column<DirectoryEntry>],
    sort: SortSpec,
    search: &str,
) -> Vec<DirectoryEntry> {
    derive_rows(rows, columns, sort.key, sort.direction, search)
}

/// Columns of the directory table: name, type and size.
pub fn directory_columns() -> Vec<Column<DirectoryEntry>> {
    vec![
        Column {
            key: SortKey::Name,
            label: "Name",
            sortable: true,
            searchable: true,
            value_getter: None,
            render: None,
        },
        Column {
            key: SortKey::Type,
            label: "Type",
            sortable: true,
            searchable: false,
            value_getter: None,
            render: Some(kind_label),
        },
        Column {
            key: SortKey::Size,
            label: "Size",
            sortable: true,
            searchable: false,
            value_getter: Some(size_label),
            render: Some(size_label),
        },
    ]
}

fn kind_label(entry: &DirectoryEntry) -> String {
    entry.kind.label().to_string()
}

fn size_label(entry: &DirectoryEntry) -> String {
    format_size(entry.size)
}

/// Compare two rows the way [`derive_rows`] does.
pub fn compare<T: TableRow>(a: &T, b: &T, key: T::Key, direction: SortDirection) -> Ordering {
    let ord = a.cell(key).cmp(&b.cell(key));
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry::dir("b", vec![]),
            DirectoryEntry::file("abc.pdf", 500),
            DirectoryEntry::file("abb.txt", 100),
        ]
    }

    fn names(rows: &[DirectoryEntry]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_filter_and_sort_desc() {
        let rows = directory_rows(
            &sample(),
            &directory_columns(),
            SortSpec::new(SortKey::Name, SortDirection::Desc),
            "ab",
        );
        assert_eq!(names(&rows), vec!["abc.pdf", "abb.txt"]);
    }

    #[test]
    fn test_empty_search_keeps_all() {
        let rows = directory_rows(&sample(), &directory_columns(), SortSpec::default(), "");
        assert_eq!(names(&rows), vec!["abb.txt", "abc.pdf", "b"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = directory_rows(&sample(), &directory_columns(), SortSpec::default(), "ABC");
        assert_eq!(names(&rows), vec!["abc.pdf"]);
    }

    #[test]
    fn test_non_searchable_columns_ignored() {
        // "dir" appears in the type column, which is not searchable
        let rows = directory_rows(&sample(), &directory_columns(), SortSpec::default(), "dir");
        assert!(rows.is_empty());
        // size renders as "500 B" but size is not searchable either
        let rows = directory_rows(&sample(), &directory_columns(), SortSpec::default(), "500");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_value_getter_used_for_search() {
        let mut columns = directory_columns();
        columns[2].searchable = true;
        let rows = directory_rows(&sample(), &columns, SortSpec::default(), "500 b");
        assert_eq!(names(&rows), vec!["abc.pdf"]);
    }

    #[test]
    fn test_numeric_sort() {
        let rows = vec![
            DirectoryEntry::file("big", 10_000),
            DirectoryEntry::file("small", 9),
            DirectoryEntry::file("mid", 100),
        ];
        let sorted = directory_rows(
            &rows,
            &directory_columns(),
            SortSpec::new(SortKey::Size, SortDirection::Asc),
            "",
        );
        // numeric, not lexicographic ("10000" < "9")
        assert_eq!(names(&sorted), vec!["small", "mid", "big"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let rows = vec![
            DirectoryEntry::file("one", 5),
            DirectoryEntry::dir("two", vec![]),
            DirectoryEntry::file("three", 5),
            DirectoryEntry::file("four", 1),
            DirectoryEntry::file("five", 5),
        ];
        let columns = directory_columns();

        let asc = directory_rows(
            &rows,
            &columns,
            SortSpec::new(SortKey::Size, SortDirection::Asc),
            "",
        );
        assert_eq!(names(&asc), vec!["two", "four", "one", "three", "five"]);

        let desc = directory_rows(
            &asc,
            &columns,
            SortSpec::new(SortKey::Size, SortDirection::Desc),
            "",
        );
        assert_eq!(names(&desc), vec!["one", "three", "five", "four", "two"]);

        let back = directory_rows(
            &desc,
            &columns,
            SortSpec::new(SortKey::Size, SortDirection::Asc),
            "",
        );
        assert_eq!(names(&back), names(&asc));
    }

    #[test]
    fn test_type_sort_dirs_first() {
        let sorted = directory_rows(
            &sample(),
            &directory_columns(),
            SortSpec::new(SortKey::Type, SortDirection::Asc),
            "",
        );
        assert_eq!(names(&sorted), vec!["b", "abc.pdf", "abb.txt"]);
    }

    #[test]
    fn test_filter_is_monotonic() {
        let rows = vec![
            DirectoryEntry::file("report-2023.pdf", 1),
            DirectoryEntry::file("report-2024.pdf", 2),
            DirectoryEntry::file("Repo.txt", 3),
            DirectoryEntry::dir("photos", vec![]),
        ];
        let columns = directory_columns();
        let searches = ["", "r", "re", "rep", "repo", "report", "report-2024"];

        for pair in searches.windows(2) {
            let looser = directory_rows(&rows, &columns, SortSpec::default(), pair[0]);
            let stricter = directory_rows(&rows, &columns, SortSpec::default(), pair[1]);
            assert!(
                stricter.iter().all(|row| looser.contains(row)),
                "{:?} is not a subset of {:?}",
                pair[1],
                pair[0]
            );
        }
    }

    #[test]
    fn test_comparator_is_total() {
        let rows = sample();
        for key in SortKey::ALL {
            for a in &rows {
                for b in &rows {
                    let ab = compare(a, b, key, SortDirection::Asc);
                    let ba = compare(b, a, key, SortDirection::Asc);
                    assert_eq!(ab, ba.reverse());
                    assert_eq!(compare(a, b, key, SortDirection::Desc), ba);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let columns = directory_columns();
        let dir = DirectoryEntry::dir("b", vec![]);
        let file = DirectoryEntry::file("a", 1500);
        assert_eq!(columns[0].display(&file), "a");
        assert_eq!(columns[1].display(&dir), "Directory");
        assert_eq!(columns[1].display(&file), "File");
        assert_eq!(columns[2].display(&dir), "-");
        assert_eq!(columns[2].display(&file), "1.50 KB");
    }
}
