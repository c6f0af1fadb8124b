//! Audio clip domain type, its configuration parser and serializer.

use serde::{Deserialize, Serialize};

use quick_xml::escape::escape;

use crate::error::{AircastError, Result};
use crate::metadata::{MetadataKey, MetadataStore, METADATA_ELEMENT_NAME};
use crate::types::{ClipId, Playlength};
use crate::xml::Element;

/// Name of the configuration element for audio clips.
pub const CONFIG_ELEMENT_NAME: &str = "audioClip";

/// Name of the attribute carrying the clip id.
const ID_ATTR_NAME: &str = "id";
/// Name of the attribute carrying the clip URI.
const URI_ATTR_NAME: &str = "uri";
/// Name of the attribute carrying the clip playlength.
const PLAYLENGTH_ATTR_NAME: &str = "playlength";
/// Name of the attribute carrying the clip title.
const TITLE_ATTR_NAME: &str = "title";

/// An audio clip: structured descriptive fields plus the namespaced metadata
/// record they stay synchronized with.
///
/// The reserved `dc:title` and `dcterms:extent` metadata keys alias the
/// `title` and `playlength` fields; writing either representation updates the
/// other. The metadata record is created lazily on first write and is owned
/// exclusively by its clip — cloning a clip deep-copies the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clip {
    id: Option<ClipId>,
    title: Option<String>,
    playlength: Option<Playlength>,
    uri: Option<String>,
    token: Option<String>,
    store: Option<MetadataStore>,
}

impl Clip {
    /// Create an empty clip, to be filled by [`Clip::configure`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clip from programmatic parts.
    ///
    /// Title and playlength are mirrored into the metadata record.
    pub fn with_fields(
        id: Option<ClipId>,
        title: impl Into<String>,
        playlength: Playlength,
        uri: Option<String>,
    ) -> Self {
        let mut clip = Self {
            id,
            uri,
            ..Self::default()
        };
        clip.set_title(title);
        clip.set_playlength(playlength);
        clip
    }

    /// Create a clip without a title; the mirrored title entry is the empty
    /// string.
    pub fn untitled(id: Option<ClipId>, playlength: Playlength, uri: Option<String>) -> Self {
        Self::with_fields(id, "", playlength, uri)
    }

    /// Build a clip from an `audioClip` configuration element.
    pub fn from_config(element: &Element) -> Result<Self> {
        let mut clip = Self::new();
        clip.configure(element)?;
        Ok(clip)
    }

    /// Configure the clip from an `audioClip` element.
    ///
    /// Attributes are read first and win over metadata-child values; fields
    /// that are already set are left untouched. The whole configuration is
    /// validated before anything is committed, so a failing call leaves the
    /// clip unchanged.
    pub fn configure(&mut self, element: &Element) -> Result<()> {
        if element.name() != CONFIG_ELEMENT_NAME {
            return Err(AircastError::InvalidConfigElement(element.name().to_string()));
        }

        let id = match (&self.id, element.attribute(ID_ATTR_NAME)) {
            (Some(id), _) => id.clone(),
            (None, Some(value)) => ClipId::new(value),
            (None, None) => {
                return Err(AircastError::MissingAttribute(ID_ATTR_NAME.to_string()));
            }
        };

        let mut playlength = self.playlength;
        let mut title = self.title.clone();
        let mut uri = self.uri.clone();
        let mut store = self.store.clone();

        if playlength.is_none() {
            if let Some(value) = element.attribute(PLAYLENGTH_ATTR_NAME) {
                playlength = Some(value.parse()?);
                // The literal attribute text is stored, not the canonical
                // re-rendered form.
                store
                    .get_or_insert_with(MetadataStore::new)
                    .set(MetadataKey::Extent, value);
            }
        }

        if title.is_none() {
            if let Some(value) = element.attribute(TITLE_ATTR_NAME) {
                title = Some(value.to_string());
                store
                    .get_or_insert_with(MetadataStore::new)
                    .set(MetadataKey::Title, value);
            }
        }

        if uri.is_none() {
            if let Some(value) = element.attribute(URI_ATTR_NAME) {
                uri = Some(value.to_string());
            }
        }

        let mut metadata_children = element.children_named(METADATA_ELEMENT_NAME);
        if let Some(metadata_element) = metadata_children.next() {
            if metadata_children.next().is_some() {
                return Err(AircastError::TooManyMetadataElements);
            }

            // The metadata child replaces whatever the attributes put in the
            // record; attribute values still win for the structured fields.
            store = Some(MetadataStore::from_metadata_element(&id, metadata_element));

            for child in metadata_element.children() {
                match MetadataKey::from_parts(child.prefix(), child.name()) {
                    MetadataKey::Extent if playlength.is_none() => {
                        playlength = Some(if child.text().trim().is_empty() {
                            Playlength::ZERO
                        } else {
                            child.text().parse()?
                        });
                    }
                    MetadataKey::Title if title.is_none() => {
                        title = Some(child.text().to_string());
                    }
                    _ => {}
                }
            }
        }

        let playlength = playlength.ok_or_else(|| {
            AircastError::MissingRequiredField(PLAYLENGTH_ATTR_NAME.to_string())
        })?;
        let title = title
            .ok_or_else(|| AircastError::MissingRequiredField(TITLE_ATTR_NAME.to_string()))?;

        self.id = Some(id);
        self.playlength = Some(playlength);
        self.title = Some(title);
        self.uri = uri;
        self.store = store;
        Ok(())
    }

    /// The clip identifier.
    pub fn id(&self) -> Option<&ClipId> {
        self.id.as_ref()
    }

    /// The clip title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The playing length.
    pub fn playlength(&self) -> Option<Playlength> {
        self.playlength
    }

    /// The source locator of the binary sound file.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The opaque playback token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Set the title and mirror it into the metadata record.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = Some(title.clone());
        self.store_mut().set(MetadataKey::Title, title);
    }

    /// Set the playlength and mirror its canonical rendering into the
    /// metadata record.
    pub fn set_playlength(&mut self, playlength: Playlength) {
        self.playlength = Some(playlength);
        self.store_mut()
            .set(MetadataKey::Extent, playlength.to_string());
    }

    /// Set the source locator. The locator is never mirrored into the
    /// metadata record.
    pub fn set_uri(&mut self, uri: impl Into<String>) {
        self.uri = Some(uri.into());
    }

    /// Set or clear the opaque playback token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Stored metadata text for an exact key, absent when the record does
    /// not exist or holds no matching entry.
    pub fn get_metadata(&self, key: &MetadataKey) -> Option<&str> {
        self.store.as_ref().and_then(|store| store.get(key))
    }

    /// Create or replace a metadata entry, updating the aliased structured
    /// field for reserved keys.
    ///
    /// Never fails: a reserved playlength value that does not parse leaves
    /// the structured field unchanged but is still stored.
    pub fn set_metadata(&mut self, key: MetadataKey, value: impl Into<String>) {
        let value = value.into();
        match &key {
            MetadataKey::Title => self.title = Some(value.clone()),
            MetadataKey::Extent => match value.parse::<Playlength>() {
                Ok(playlength) => self.playlength = Some(playlength),
                Err(_) => {
                    tracing::warn!("unparseable playlength metadata `{value}` left unmirrored");
                }
            },
            MetadataKey::Other { .. } => {}
        }
        self.store_mut().set(key, value);
    }

    /// The full metadata record, if it has been created.
    pub fn metadata(&self) -> Option<&MetadataStore> {
        self.store.as_ref()
    }

    /// Compact single-element summary carrying the identifier, the canonical
    /// playlength rendering and the title as attributes.
    ///
    /// Always succeeds; unset fields render as empty text or a zero
    /// playlength. Attribute values are XML-escaped.
    pub fn summary_xml(&self) -> String {
        let id = self.id.as_ref().map(ClipId::as_str).unwrap_or_default();
        let playlength = self.playlength.unwrap_or(Playlength::ZERO).to_string();
        let title = self.title.as_deref().unwrap_or_default();
        format!(
            "<{CONFIG_ELEMENT_NAME} {ID_ATTR_NAME}=\"{}\" {PLAYLENGTH_ATTR_NAME}=\"{}\" {TITLE_ATTR_NAME}=\"{}\"/>",
            escape(id),
            escape(playlength.as_str()),
            escape(title),
        )
    }

    /// Full metadata fragment text, absent until the record is first
    /// written.
    pub fn metadata_xml(&self) -> Option<String> {
        self.store.as_ref().map(MetadataStore::to_xml)
    }

    fn store_mut(&mut self) -> &mut MetadataStore {
        self.store.get_or_insert_with(MetadataStore::new)
    }
}
