//! Aircast Metadata
//!
//! File-backed tag reading for aircast.
//!
//! This crate implements the [`aircast_core::TagReader`] seam:
//! - the generic artist/title/album/comment/genre/year/track view via lofty
//! - raw 4-character ID3v2 frame groups via the id3 crate
//!
//! Reading never mutates the source file.
//!
//! # Example
//!
//! ```rust,no_run
//! use aircast_core::TagReader;
//! use aircast_metadata::LoftyTagReader;
//!
//! let reader = LoftyTagReader::new();
//! if reader.is_readable("/music/clip.mp3") {
//!     let tag = reader.open_generic("/music/clip.mp3");
//!     println!("{tag:?}");
//! }
//! ```

mod reader;

pub use reader::LoftyTagReader;
