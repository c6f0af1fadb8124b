//! Namespaced metadata keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::xml::split_name;

/// Namespace URI bound to the `dc` prefix.
pub const DC_URI: &str = "http://purl.org/dc/elements/1.1/";

/// Namespace URI bound to the `dcterms` prefix.
pub const DCTERMS_URI: &str = "http://purl.org/dc/terms/";

/// Namespace URI bound to the default namespace of the metadata fragment.
pub const DEFAULT_NS_URI: &str = "http://www.streamonthefly.org/";

/// Prefix of the reserved title key.
const TITLE_PREFIX: &str = "dc";
/// Local name of the reserved title key.
const TITLE_NAME: &str = "title";
/// Prefix of the reserved extent (playlength) key.
const EXTENT_PREFIX: &str = "dcterms";
/// Local name of the reserved extent (playlength) key.
const EXTENT_NAME: &str = "extent";

/// A namespaced metadata key: a (prefix, local name) pair.
///
/// The two reserved keys alias structured clip fields and are kept
/// synchronized with them; every other key is free-form and the prefix may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKey {
    /// `dc:title`, aliasing the clip title.
    Title,
    /// `dcterms:extent`, aliasing the clip playlength.
    Extent,
    /// Any other key.
    Other {
        /// Namespace prefix, empty when the key has none.
        prefix: String,
        /// Local name.
        name: String,
    },
}

impl MetadataKey {
    /// Build a key from a namespace prefix and a local name.
    ///
    /// The reserved pairs canonicalize to their tagged variants, so equality
    /// holds no matter how a key was constructed.
    pub fn from_parts(prefix: &str, name: &str) -> Self {
        match (prefix, name) {
            (TITLE_PREFIX, TITLE_NAME) => Self::Title,
            (EXTENT_PREFIX, EXTENT_NAME) => Self::Extent,
            _ => Self::Other {
                prefix: prefix.to_string(),
                name: name.to_string(),
            },
        }
    }

    /// Build a key from a `prefix:name` string, splitting on the first colon.
    ///
    /// Text before the colon is the prefix, text after is the name; a string
    /// without a colon is a bare name with no prefix.
    pub fn parse(key: &str) -> Self {
        let (prefix, name) = split_name(key);
        Self::from_parts(prefix, name)
    }

    /// Namespace prefix of this key, empty when it has none.
    pub fn prefix(&self) -> &str {
        match self {
            Self::Title => TITLE_PREFIX,
            Self::Extent => EXTENT_PREFIX,
            Self::Other { prefix, .. } => prefix,
        }
    }

    /// Local name of this key.
    pub fn name(&self) -> &str {
        match self {
            Self::Title => TITLE_NAME,
            Self::Extent => EXTENT_NAME,
            Self::Other { name, .. } => name,
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix().is_empty() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}:{}", self.prefix(), self.name())
        }
    }
}
