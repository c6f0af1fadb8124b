//! Collaborator traits for aircast-core.

/// Generic tag view of a sound file.
///
/// Mirrors the fixed field set shared by common tag formats; absent text
/// fields read as empty strings and absent numeric fields as zero, the way
/// tag libraries report them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericTag {
    /// Performing artist.
    pub artist: String,
    /// Track title.
    pub title: String,
    /// Album name.
    pub album: String,
    /// Free-text comment.
    pub comment: String,
    /// Genre name.
    pub genre: String,
    /// Release year, zero when unset.
    pub year: u32,
    /// Track number, zero when unset.
    pub track: u32,
}

/// Frame groups of a file's extended tag, keyed by 4-character frame code.
///
/// Groups keep file order; each group holds the rendered text of its frames
/// in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMap {
    groups: Vec<(String, Vec<String>)>,
}

impl FrameMap {
    /// Create an empty frame map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame's rendered text to its code group, creating the group
    /// on first use.
    pub fn push(&mut self, code: impl Into<String>, text: impl Into<String>) {
        let code = code.into();
        match self.groups.iter_mut().find(|(stored, _)| *stored == code) {
            Some((_, frames)) => frames.push(text.into()),
            None => self.groups.push((code, vec![text.into()])),
        }
    }

    /// Iterate over (code, frames) groups in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(code, frames)| (code.as_str(), frames.as_slice()))
    }

    /// Number of frame groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the map holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Read-only view of the tags embedded in a binary sound file.
///
/// Implementers never mutate the source file.
pub trait TagReader {
    /// Whether the locator points at a readable file.
    fn is_readable(&self, uri: &str) -> bool;

    /// Open the generic tag view; `None` when the file carries no tag.
    fn open_generic(&self, uri: &str) -> Option<GenericTag>;

    /// Open the extended frame view; `None` when the file carries none.
    fn open_frames(&self, uri: &str) -> Option<FrameMap>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_map_groups_by_code_in_order() {
        let mut frames = FrameMap::new();
        frames.push("TIT2", "first title");
        frames.push("TPE1", "artist");
        frames.push("TIT2", "second title");

        let groups: Vec<(&str, usize)> = frames.iter().map(|(code, f)| (code, f.len())).collect();
        assert_eq!(groups, [("TIT2", 2), ("TPE1", 1)]);
        assert_eq!(frames.len(), 2);
    }
}
