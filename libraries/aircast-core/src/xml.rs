//! Minimal XML element tree.
//!
//! Only the document-engine subset the configuration parser and the metadata
//! store consume: parsing a source string into an owned tree, attribute
//! lookup, child traversal by local name, and text content. Serialization of
//! the metadata fragment lives with the store, which rebuilds it from its
//! canonical representation instead of editing a tree in place.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{AircastError, Result};

/// An owned XML element: qualified name, attributes, child elements and
/// concatenated text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    prefix: String,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Parse a source string into an element tree.
    ///
    /// The first element in the document becomes the root; the XML
    /// declaration, comments and processing instructions are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut reader = Reader::from_str(source);
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    stack.push(Self::from_start(&reader, &start)?);
                }
                Event::Empty(start) => {
                    let element = Self::from_start(&reader, &start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            None => return Ok(element),
                        }
                    }
                }
                Event::Text(text) => {
                    let raw = reader
                        .decoder()
                        .decode(text.as_ref())
                        .map_err(|e| AircastError::Xml(e.to_string()))?;
                    let unescaped =
                        unescape(&raw).map_err(|e| AircastError::Xml(e.to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&unescaped);
                    }
                }
                Event::CData(data) => {
                    let raw = reader
                        .decoder()
                        .decode(data.as_ref())
                        .map_err(|e| AircastError::Xml(e.to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&raw);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Err(AircastError::Xml("no root element".to_string()))
    }

    fn from_start<R>(reader: &Reader<R>, start: &BytesStart<'_>) -> Result<Self> {
        let decoder = reader.decoder();
        let name_binding = start.name();
        let qualified = decoder
            .decode(name_binding.as_ref())
            .map_err(|e| AircastError::Xml(e.to_string()))?;
        let (prefix, name) = split_name(&qualified);
        let mut element = Element {
            prefix: prefix.to_string(),
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        };
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| AircastError::Xml(e.to_string()))?;
            let key = decoder
                .decode(attribute.key.as_ref())
                .map_err(|e| AircastError::Xml(e.to_string()))?
                .into_owned();
            let raw = decoder
                .decode(&attribute.value)
                .map_err(|e| AircastError::Xml(e.to_string()))?;
            let value = unescape(&raw)
                .map_err(|e| AircastError::Xml(e.to_string()))?
                .into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    /// Local name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace prefix of this element, empty when it has none.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Value of an attribute by its qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over (qualified name, value) attribute pairs in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Child elements with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Concatenated text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Split a qualified name on its first colon into (prefix, local name).
///
/// A name without a colon has an empty prefix.
pub(crate) fn split_name(qualified: &str) -> (&str, &str) {
    match qualified.split_once(':') {
        Some((prefix, name)) => (prefix, name),
        None => ("", qualified),
    }
}
