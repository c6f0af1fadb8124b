//! Tag conversion table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{AircastError, Result};
use crate::xml::Element;

/// Name of the conversion table configuration element.
pub const TABLE_ELEMENT_NAME: &str = "tagConversionTable";

/// Name of one table row element.
const TAG_ELEMENT_NAME: &str = "tag";
/// Attribute holding the external tag key of a row.
const EXTERNAL_ATTR_NAME: &str = "id3Tag";
/// Attribute holding the internal metadata key of a row.
const INTERNAL_ATTR_NAME: &str = "dublinCore";

/// Read-only table translating external tag vocabulary — generic field names
/// and 4-character frame codes — into internal namespaced metadata keys.
///
/// Built once at startup and passed by reference into [`crate::TagImporter`];
/// an unconfigured table fails every import at its first precondition. Once
/// built the table is immutable, so it can be shared between threads behind
/// an `Arc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagConversion {
    mappings: HashMap<String, String>,
    configured: bool,
}

impl TagConversion {
    /// Create an unconfigured table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configured table from (external key, internal key) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mappings: pairs
                .into_iter()
                .map(|(external, internal)| (external.into(), internal.into()))
                .collect(),
            configured: true,
        }
    }

    /// Build a configured table from a `tagConversionTable` element of
    /// `<tag id3Tag="..." dublinCore="..."/>` rows.
    pub fn from_config(element: &Element) -> Result<Self> {
        if element.name() != TABLE_ELEMENT_NAME {
            return Err(AircastError::InvalidConfigElement(element.name().to_string()));
        }
        let mut mappings = HashMap::new();
        for row in element.children_named(TAG_ELEMENT_NAME) {
            let external = row
                .attribute(EXTERNAL_ATTR_NAME)
                .ok_or_else(|| AircastError::MissingAttribute(EXTERNAL_ATTR_NAME.to_string()))?;
            let internal = row
                .attribute(INTERNAL_ATTR_NAME)
                .ok_or_else(|| AircastError::MissingAttribute(INTERNAL_ATTR_NAME.to_string()))?;
            mappings.insert(external.to_string(), internal.to_string());
        }
        Ok(Self {
            mappings,
            configured: true,
        })
    }

    /// Whether the table has been initialized.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Whether an external key has a mapping.
    pub fn has_mapping(&self, external_key: &str) -> bool {
        self.mappings.contains_key(external_key)
    }

    /// The internal key mapped to an external key.
    pub fn mapping(&self, external_key: &str) -> Option<&str> {
        self.mappings.get(external_key).map(String::as_str)
    }
}
