//! Field paths for locating violations inside a message tree.
//!
//! A path is a sequence of field names and list indices, rendered as
//! `CreditTransferTransactionInfo[2].Debtor.Name`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field or choice group.
    Field(Cow<'static, str>),
    /// A position inside a repeated field.
    Index(usize),
}

// ============================================================================
// FIELD PATH
// ============================================================================

/// Location of a field relative to the structure being validated.
///
/// The empty path denotes the root structure itself.
///
/// # Examples
///
/// ```
/// use isomsg_validator::foundation::FieldPath;
///
/// let path = FieldPath::root()
///     .child("CreditTransferTransactionInfo")
///     .index(2)
///     .child("Debtor")
///     .child("Name");
///
/// assert_eq!(path.to_string(), "CreditTransferTransactionInfo[2].Debtor.Name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 6]>,
}

impl FieldPath {
    /// The empty path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field name appended.
    #[must_use]
    pub fn child(&self, name: impl Into<Cow<'static, str>>) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Field(name.into()));
        next
    }

    /// Returns a new path with a list index appended.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Index(index));
        next
    }

    /// Prepends `prefix` to this path.
    #[must_use]
    pub fn prefixed(&self, prefix: &FieldPath) -> Self {
        let mut segments = prefix.segments.clone();
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns `true` if `prefix` is a leading run of this path's segments.
    ///
    /// `Debtor.Name` lies under `Debtor` but not under `Debt`.
    #[must_use]
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments.iter().zip(&prefix.segments).all(|(a, b)| a == b)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The last field name in the path, if any.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::Field(name) => Some(name.as_ref()),
            PathSegment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl serde::Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Error returned when a textual path is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("empty field name at position {0}")]
    EmptySegment(usize),
    #[error("invalid index `{0}`")]
    InvalidIndex(String),
    #[error("unclosed `[` at position {0}")]
    UnclosedBracket(usize),
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = FieldPath::root();
        if s.is_empty() {
            return Ok(path);
        }

        let mut offset = 0;
        for part in s.split('.') {
            let (name, mut rest) = match part.find('[') {
                Some(at) => part.split_at(at),
                None => (part, ""),
            };
            if name.is_empty() {
                return Err(PathError::EmptySegment(offset));
            }
            path.segments.push(PathSegment::Field(Cow::Owned(name.to_owned())));

            while let Some(tail) = rest.strip_prefix('[') {
                let close = tail
                    .find(']')
                    .ok_or(PathError::UnclosedBracket(offset + name.len()))?;
                let digits = &tail[..close];
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidIndex(digits.to_owned()))?;
                path.segments.push(PathSegment::Index(index));
                rest = &tail[close + 1..];
            }
            if !rest.is_empty() {
                return Err(PathError::InvalidIndex(rest.to_owned()));
            }
            offset += part.len() + 1;
        }
        Ok(path)
    }
}

impl From<&'static str> for FieldPath {
    /// Builds a single-segment path from a field name.
    fn from(name: &'static str) -> Self {
        FieldPath::root().child(name)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_empty() {
        assert_eq!(FieldPath::root().to_string(), "");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn nested_path_display() {
        let path = FieldPath::root().child("Debtor").child("PostalAddress").child("Country");
        assert_eq!(path.to_string(), "Debtor.PostalAddress.Country");
        assert_eq!(path.leaf(), Some("Country"));
    }

    #[test]
    fn indexed_path_display() {
        let path = FieldPath::root().child("Related").index(0).child("From");
        assert_eq!(path.to_string(), "Related[0].From");
    }

    #[test]
    fn parse_matches_display() {
        let text = "CreditTransferTransactionInfo[2].Debtor.Name";
        let path: FieldPath = text.parse().unwrap();
        assert_eq!(path.to_string(), text);
        assert_eq!(
            path,
            FieldPath::root()
                .child("CreditTransferTransactionInfo")
                .index(2)
                .child("Debtor")
                .child("Name")
        );
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!("A..B".parse::<FieldPath>(), Err(PathError::EmptySegment(_))));
        assert!(matches!("A[x]".parse::<FieldPath>(), Err(PathError::InvalidIndex(_))));
        assert!(matches!("A[1".parse::<FieldPath>(), Err(PathError::UnclosedBracket(_))));
    }

    #[test]
    fn starts_with_is_segment_aware() {
        let path: FieldPath = "Debtor.Name".parse().unwrap();
        assert!(path.starts_with(&"Debtor".parse().unwrap()));
        assert!(!path.starts_with(&"Debt".parse().unwrap()));
        assert!(path.starts_with(&FieldPath::root()));
    }

    #[test]
    fn prefixed_joins_paths() {
        let inner: FieldPath = "Name".parse().unwrap();
        let outer: FieldPath = "Creditor".parse().unwrap();
        assert_eq!(inner.prefixed(&outer).to_string(), "Creditor.Name");
    }
}
