//! Identifier sets (visibility flags on graph items).
//!
//! Identifiers are opaque byte strings joined with `|`. Identifiers that
//! themselves contain `|` cannot survive a round trip; this is not enforced
//! here (see scene validation).

use std::collections::BTreeSet;
use std::fmt;

/// Separator between identifiers in the text form.
pub const ID_SEPARATOR: u8 = b'|';

/// A deduplicated set of byte-string identifiers.
///
/// Iteration (and therefore the text form) follows byte order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IdentifierSet(BTreeSet<Vec<u8>>);

impl IdentifierSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identifier; returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<Vec<u8>>) -> bool {
        self.0.insert(id.into())
    }

    pub fn contains(&self, id: &[u8]) -> bool {
        self.0.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }
}

impl fmt::Debug for IdentifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.0.iter().map(|id| String::from_utf8_lossy(id)))
            .finish()
    }
}

impl<T: Into<Vec<u8>>> FromIterator<T> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Joins the identifiers with `|`.
pub fn vis_to_string(ids: &IdentifierSet) -> String {
    let joined = ids.0.iter().fold(Vec::new(), |mut acc, id| {
        if !acc.is_empty() {
            acc.push(ID_SEPARATOR);
        }
        acc.extend_from_slice(id);
        acc
    });
    String::from_utf8_lossy(&joined).into_owned()
}

/// Splits `text` on `|` into a set.
///
/// Empty segments are kept: `""` and `"a||b"` both yield an empty-string
/// member.
pub fn vis_from_string(text: &str) -> IdentifierSet {
    text.as_bytes()
        .split(|b| *b == ID_SEPARATOR)
        .map(<[u8]>::to_vec)
        .collect()
}

/// Converts every identifier to a string, replacing invalid UTF-8.
pub fn byte_array_set_to_string_list(ids: &IdentifierSet) -> Vec<String> {
    ids.0
        .iter()
        .map(|id| String::from_utf8_lossy(id).into_owned())
        .collect()
}
