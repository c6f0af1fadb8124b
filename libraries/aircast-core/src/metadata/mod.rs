//! Namespaced clip metadata: keys, store and fragment rendering.

mod key;
mod store;

pub use key::{MetadataKey, DCTERMS_URI, DC_URI, DEFAULT_NS_URI};
pub use store::MetadataStore;

pub(crate) use store::METADATA_ELEMENT_NAME;
