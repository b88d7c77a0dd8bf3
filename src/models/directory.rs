//! Directory listing types returned by the `/api/dir` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a directory entry, serialized as `"file"` or `"dir"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Wire name, also used for search and ordering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
        }
    }

    /// Human-readable label for the type column.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Dir => "Directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file or directory as reported by the server.
///
/// `contents` is only present on directories. Entries are immutable once
/// received and are replaced wholesale when the browsed path changes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (0 for directories without an intrinsic size)
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<DirectoryEntry>>,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
            contents: None,
        }
    }

    pub fn dir(name: impl Into<String>, contents: Vec<DirectoryEntry>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            size: 0,
            contents: Some(contents),
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Children of a directory, empty for files.
    pub fn children(&self) -> &[DirectoryEntry] {
        self.contents.as_deref().unwrap_or_default()
    }
}
