use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag carried in an object envelope.
///
/// The tag set is open: stores may introduce new object types, so unknown
/// tags are preserved verbatim rather than rejected. Only commit bodies get
/// interpreted beyond the envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Commit: field block plus free-text message.
    Commit,
    /// Directory listing.
    Tree,
    /// Raw content.
    Blob,
    /// Annotated tag.
    Tag,
    /// Any tag this decoder does not know about.
    Other(String),
}

impl ObjectKind {
    /// Map an envelope tag to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "commit" => Self::Commit,
            "tree" => Self::Tree,
            "blob" => Self::Blob,
            "tag" => Self::Tag,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The envelope tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Commit => "commit",
            Self::Tree => "tree",
            Self::Blob => "blob",
            Self::Tag => "tag",
            Self::Other(tag) => tag,
        }
    }

    /// Returns `true` for commit objects.
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered multimap of header fields.
///
/// A field name may legitimately repeat (a merge commit carries one `parent`
/// line per parent), so each key maps to a list of values. Keys keep the
/// order they first appear in, and values within a key keep file order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap(Vec<(String, Vec<String>)>);

impl FieldMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to `key`'s list, creating the list on first sight.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into()),
            None => self.0.push((key, vec![value.into()])),
        }
    }

    /// All values recorded for `key`, in file order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// The first value recorded for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// Returns `true` if `key` has at least one value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys and their value lists in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// The decoded record for one stored object.
///
/// Constructed fresh per decode call and owned solely by the caller; the
/// decoder retains nothing between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Envelope type tag.
    pub kind: ObjectKind,
    /// Size declared in the envelope header, kept verbatim.
    pub declared_size: String,
    /// Free-text message after the blank-line boundary (empty when absent).
    pub message: String,
    /// Header fields before the blank-line boundary.
    pub fields: FieldMap,
}
