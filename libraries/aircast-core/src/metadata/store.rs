//! Namespace-aware metadata store.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::metadata::key::{MetadataKey, DCTERMS_URI, DC_URI, DEFAULT_NS_URI};
use crate::types::{ClipId, CONFIG_ELEMENT_NAME};
use crate::xml::Element;

/// Name of the metadata child element of the fragment.
pub(crate) const METADATA_ELEMENT_NAME: &str = "metadata";

/// Namespace-qualified key/value record for one clip.
///
/// Held in a canonical form — an ordered list of unique `(key, value)`
/// entries plus the declared namespace bindings — and materialized on demand
/// as a document fragment: a single `audioClip` root with one `metadata`
/// child holding one element per entry.
///
/// Each store is exclusively owned by one clip; cloning it yields a fully
/// independent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataStore {
    root_id: Option<String>,
    namespaces: Vec<(String, String)>,
    entries: Vec<(MetadataKey, String)>,
}

impl MetadataStore {
    /// Create an empty store with the reserved namespace bindings and the
    /// default namespace declared.
    pub fn new() -> Self {
        Self {
            root_id: None,
            namespaces: vec![
                (String::new(), DEFAULT_NS_URI.to_string()),
                ("dc".to_string(), DC_URI.to_string()),
                ("dcterms".to_string(), DCTERMS_URI.to_string()),
            ],
            entries: Vec::new(),
        }
    }

    /// Build a store by importing a `metadata` element wholesale.
    ///
    /// The clip identifier becomes the `id` attribute of the fragment root.
    /// Namespace declarations found on the element are carried over as-is;
    /// when the element repeats a key, the first occurrence wins.
    pub fn from_metadata_element(id: &ClipId, element: &Element) -> Self {
        let mut namespaces = Vec::new();
        for (key, value) in element.attributes() {
            if key == "xmlns" {
                namespaces.push((String::new(), value.to_string()));
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                namespaces.push((prefix.to_string(), value.to_string()));
            }
        }

        let mut store = Self {
            root_id: Some(id.to_string()),
            namespaces,
            entries: Vec::new(),
        };
        for child in element.children() {
            let key = MetadataKey::from_parts(child.prefix(), child.name());
            if store.get(&key).is_none() {
                store.entries.push((key, child.text().to_string()));
            }
        }
        store
    }

    /// Stored text for an exact (prefix, name) match.
    pub fn get(&self, key: &MetadataKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value.as_str())
    }

    /// Create or replace the entry for a key.
    ///
    /// A free-form prefix is declared only when a binding for it is already
    /// known; otherwise the entry is stored and later serialized undeclared.
    pub fn set(&mut self, key: MetadataKey, value: impl Into<String>) {
        let value = value.into();
        if let MetadataKey::Other { prefix, .. } = &key {
            if !prefix.is_empty() && !self.declares(prefix) {
                tracing::debug!("no namespace binding for prefix `{prefix}`, storing undeclared");
            }
        }
        match self.entries.iter_mut().find(|(stored, _)| stored == &key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate over (key, value) entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&MetadataKey, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key, value.as_str()))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole fragment to text.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(CONFIG_ELEMENT_NAME);
        if let Some(id) = &self.root_id {
            let _ = write!(out, " id=\"{}\"", escape(id.as_str()));
        }
        out.push('>');

        out.push('<');
        out.push_str(METADATA_ELEMENT_NAME);
        for (prefix, uri) in &self.namespaces {
            if prefix.is_empty() {
                let _ = write!(out, " xmlns=\"{}\"", escape(uri.as_str()));
            } else {
                let _ = write!(out, " xmlns:{}=\"{}\"", prefix, escape(uri.as_str()));
            }
        }
        out.push('>');

        for (key, value) in &self.entries {
            if value.is_empty() {
                let _ = write!(out, "<{key}/>");
            } else {
                let _ = write!(out, "<{key}>{}</{key}>", escape(value.as_str()));
            }
        }

        let _ = write!(out, "</{METADATA_ELEMENT_NAME}></{CONFIG_ELEMENT_NAME}>");
        out
    }

    fn declares(&self, prefix: &str) -> bool {
        self.namespaces.iter().any(|(declared, _)| declared == prefix)
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new()
    }
}
