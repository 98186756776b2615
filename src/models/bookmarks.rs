//! The bookmark list model
//!
//! An ordered sequence of directory paths. Insertion order is save order and
//! duplicates are allowed. The list as a whole is the unit of persistence:
//! every mutation is a read-modify-write of the complete sequence.

use serde::{Deserialize, Serialize};

use crate::error::{StashError, StashResult};

/// Ordered list of saved directory paths
///
/// Serializes transparently as a JSON array of strings, which is the exact
/// plaintext form handed to the encryption layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList(Vec<String>);

impl BookmarkList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path to the end of the list
    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }

    /// Remove and return the last path
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Get the last path without removing it
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Get the path at a 0-based offset
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of saved paths
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the paths in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for BookmarkList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

/// Convert a 1-based index argument to a 0-based offset
///
/// The argument must parse as an integer and satisfy `1 <= idx <= len`;
/// anything else is an error and produces no partial output.
pub fn parse_index(arg: &str, len: usize) -> StashResult<usize> {
    let idx: i64 = arg
        .parse()
        .map_err(|_| StashError::Index(format!("'{}' is not a valid integer", arg)))?;

    if idx < 1 || idx as u64 > len as u64 {
        return Err(StashError::Index("index out of range".to_string()));
    }

    Ok((idx - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BookmarkList {
        BookmarkList::from(vec![
            "/home/user/projects".to_string(),
            "/tmp".to_string(),
            "/var/log".to_string(),
        ])
    }

    #[test]
    fn test_push_preserves_order() {
        let mut list = BookmarkList::new();
        list.push("/a");
        list.push("/b");
        list.push("/a");

        let paths: Vec<&str> = list.iter().collect();
        assert_eq!(paths, vec!["/a", "/b", "/a"]);
    }

    #[test]
    fn test_pop_returns_last() {
        let mut list = sample();

        assert_eq!(list.pop().as_deref(), Some("/var/log"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.last(), Some("/tmp"));
    }

    #[test]
    fn test_pop_empty() {
        let mut list = BookmarkList::new();
        assert!(list.pop().is_none());
        assert!(list.last().is_none());
    }

    #[test]
    fn test_get_zero_based() {
        let list = sample();
        assert_eq!(list.get(0), Some("/home/user/projects"));
        assert_eq!(list.get(2), Some("/var/log"));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let list = sample();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["/home/user/projects","/tmp","/var/log"]"#);

        let round_tripped: BookmarkList = serde_json::from_str(&json).unwrap();
        assert_eq!(round_tripped, list);
    }

    #[test]
    fn test_parse_index_accepts_full_range() {
        assert_eq!(parse_index("1", 3).unwrap(), 0);
        assert_eq!(parse_index("3", 3).unwrap(), 2);
    }

    #[test]
    fn test_parse_index_rejects_out_of_range() {
        let err = parse_index("0", 3).unwrap_err();
        assert!(matches!(err, StashError::Index(_)));
        assert!(err.to_string().contains("index out of range"));

        assert!(parse_index("4", 3).is_err());
        assert!(parse_index("-1", 3).is_err());
        assert!(parse_index("1", 0).is_err());
    }

    #[test]
    fn test_parse_index_rejects_non_integers() {
        let err = parse_index("abc", 3).unwrap_err();
        assert!(matches!(err, StashError::Index(_)));
        assert!(err.to_string().contains("not a valid integer"));

        assert!(parse_index("1.5", 3).is_err());
        assert!(parse_index("", 3).is_err());
    }
}
