//! Concept Album Explorer: load a curated album catalog, narrow it by genre,
//! artist and era, and derive the preview shown for a chosen album.

pub mod color;
pub mod data;
pub mod state;
