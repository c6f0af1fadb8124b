//! Domain types for aircast clips.

mod clip;
mod ids;
mod playlength;

pub use clip::{Clip, CONFIG_ELEMENT_NAME};
pub use ids::ClipId;
pub use playlength::Playlength;
