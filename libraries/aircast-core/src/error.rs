//! Error types for aircast-core.

use thiserror::Error;

/// Result type alias using `AircastError`
pub type Result<T> = std::result::Result<T, AircastError>;

/// Central error type for clip configuration and tag import.
///
/// Nothing here is retried; every variant is surfaced to the caller as the
/// terminal result of the failing call.
#[derive(Error, Debug)]
pub enum AircastError {
    /// Configuration element has the wrong name
    #[error("bad configuration element: {0}")]
    InvalidConfigElement(String),

    /// Required attribute absent from a configuration element
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    /// More than one metadata child element
    #[error("more than one metadata element")]
    TooManyMetadataElements,

    /// Title or playlength still unresolved after configuration
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// Playlength text that does not parse as a duration
    #[error("invalid playlength: {0}")]
    InvalidPlaylength(String),

    /// Tag conversion table not initialized before import
    #[error("tag conversion table not configured")]
    TagTableNotConfigured,

    /// Clip has no source locator to import tags from
    #[error("audio clip has no uri")]
    MissingLocator,

    /// Source locator does not point at a readable file
    #[error("sound file not readable: {0}")]
    FileNotReadable(String),

    /// Malformed XML in a configuration element
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for AircastError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}
