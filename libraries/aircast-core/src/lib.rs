//! Aircast Core
//!
//! Platform-agnostic domain types for audio clip metadata: the namespaced
//! metadata record, the clip configuration parser, and the tag-import
//! pipeline boundary.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: [`Clip`], [`ClipId`], [`Playlength`]
//! - **Metadata**: [`MetadataKey`], [`MetadataStore`] and its document
//!   fragment rendering
//! - **Collaborator seams**: [`TagReader`], [`TagConversion`],
//!   [`TagImporter`]
//! - **Error Handling**: unified [`AircastError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use aircast_core::types::Clip;
//! use aircast_core::xml::Element;
//!
//! let element = Element::parse(
//!     r#"<audioClip id="42" playlength="01:02:03" title="Intro"/>"#,
//! )?;
//! let clip = Clip::from_config(&element)?;
//! assert_eq!(clip.title(), Some("Intro"));
//! # Ok::<(), aircast_core::AircastError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod import;
pub mod metadata;
pub mod tagconv;
pub mod traits;
pub mod types;
pub mod xml;

// Re-export commonly used types
pub use error::{AircastError, Result};
pub use import::TagImporter;
pub use metadata::{MetadataKey, MetadataStore};
pub use tagconv::TagConversion;
pub use traits::{FrameMap, GenericTag, TagReader};
pub use types::{Clip, ClipId, Playlength};
