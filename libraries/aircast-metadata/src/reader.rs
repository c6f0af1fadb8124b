/// Tag reader implementation using lofty and id3
use aircast_core::traits::{FrameMap, GenericTag, TagReader};
use id3::Content;
use lofty::{Accessor, TaggedFileExt};
use std::path::Path;

/// File tag reader backed by lofty, with raw ID3v2 frame access through the
/// id3 crate.
pub struct LoftyTagReader;

impl LoftyTagReader {
    /// Create a new tag reader
    pub fn new() -> Self {
        Self
    }

    /// Extract the generic view from a lofty tag
    fn generic_from_tag(tag: &lofty::Tag) -> GenericTag {
        GenericTag {
            artist: tag.artist().map(|s| s.to_string()).unwrap_or_default(),
            title: tag.title().map(|s| s.to_string()).unwrap_or_default(),
            album: tag.album().map(|s| s.to_string()).unwrap_or_default(),
            comment: tag.comment().map(|s| s.to_string()).unwrap_or_default(),
            genre: tag.genre().map(|s| s.to_string()).unwrap_or_default(),
            year: tag.year().unwrap_or_default(),
            track: tag.track().unwrap_or_default(),
        }
    }

    /// Render a frame's content as text, if it has a text form
    fn render_frame(content: &Content) -> Option<String> {
        match content {
            Content::Text(text) => Some(text.clone()),
            Content::ExtendedText(extended) => Some(extended.value.clone()),
            Content::Link(link) => Some(link.clone()),
            Content::ExtendedLink(extended) => Some(extended.link.clone()),
            Content::Comment(comment) => Some(comment.text.clone()),
            Content::Lyrics(lyrics) => Some(lyrics.text.clone()),
            _ => None,
        }
    }
}

impl Default for LoftyTagReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TagReader for LoftyTagReader {
    fn is_readable(&self, uri: &str) -> bool {
        std::fs::metadata(Path::new(uri))
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    fn open_generic(&self, uri: &str) -> Option<GenericTag> {
        let tagged_file = lofty::read_from_path(Path::new(uri)).ok()?;
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())?;
        Some(Self::generic_from_tag(tag))
    }

    fn open_frames(&self, uri: &str) -> Option<FrameMap> {
        let tag = id3::Tag::read_from_path(Path::new(uri)).ok()?;
        let mut frames = FrameMap::new();
        for frame in tag.frames() {
            if let Some(text) = Self::render_frame(frame.content()) {
                frames.push(frame.id(), text);
            }
        }
        Some(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_path_is_not_readable() {
        let reader = LoftyTagReader::new();
        assert!(!reader.is_readable("/definitely/does/not/exist.mp3"));
    }

    #[test]
    fn directory_is_not_readable() {
        let reader = LoftyTagReader::new();
        assert!(!reader.is_readable("."));
    }
}
