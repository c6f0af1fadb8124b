//! Tag import into the clip metadata record.

use crate::error::{AircastError, Result};
use crate::metadata::MetadataKey;
use crate::tagconv::TagConversion;
use crate::traits::TagReader;
use crate::types::Clip;

/// Imports the tags of a clip's source file into its metadata record,
/// translating external tag vocabulary through a [`TagConversion`] table.
///
/// The table is threaded in explicitly; there is no process-wide lookup.
#[derive(Debug, Clone, Copy)]
pub struct TagImporter<'a> {
    table: &'a TagConversion,
}

impl<'a> TagImporter<'a> {
    /// Create an importer over a conversion table.
    pub fn new(table: &'a TagConversion) -> Self {
        Self { table }
    }

    /// Read the tags of the clip's source file and store every mapped value.
    ///
    /// Preconditions are checked in order before anything is written: the
    /// table must be configured, the clip must have a locator, and the
    /// locator must be readable. Past the preconditions nothing fails: a
    /// file without a generic tag imports nothing, unrecognized fields and
    /// frame codes are skipped, and so are empty frame groups.
    pub fn import<R: TagReader>(&self, clip: &mut Clip, reader: &R) -> Result<()> {
        if !self.table.is_configured() {
            return Err(AircastError::TagTableNotConfigured);
        }
        let uri = match clip.uri() {
            Some(uri) => uri.to_string(),
            None => return Err(AircastError::MissingLocator),
        };
        if !reader.is_readable(&uri) {
            return Err(AircastError::FileNotReadable(uri));
        }

        let Some(tag) = reader.open_generic(&uri) else {
            return Ok(());
        };

        let fields: [(&str, String); 7] = [
            ("Artist", tag.artist),
            ("Title", tag.title),
            ("Album", tag.album),
            ("Comment", tag.comment),
            ("Genre", tag.genre),
            ("Year", tag.year.to_string()),
            ("Track", tag.track.to_string()),
        ];

        let mut imported = 0usize;
        for (field, value) in fields {
            if let Some(internal) = self.table.mapping(field) {
                clip.set_metadata(MetadataKey::parse(internal), value);
                imported += 1;
            }
        }

        if let Some(frames) = reader.open_frames(&uri) {
            for (code, group) in frames.iter() {
                if let Some(internal) = self.table.mapping(code) {
                    if let Some(first) = group.first() {
                        clip.set_metadata(MetadataKey::parse(internal), first.clone());
                        imported += 1;
                    }
                }
            }
        }

        tracing::debug!("imported {imported} tag values into clip metadata");
        Ok(())
    }
}
