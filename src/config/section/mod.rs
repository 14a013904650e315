//! Configuration section definitions.
//!
//! Each module corresponds to a section in `mdx-map.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `map`      | `[map]`        | Map defaults, tile layer              |
//! | `assets`   | `[assets]`     | Leaflet stylesheet and script urls    |
//!
//! The `[markdown]` section is [`crate::markdown::MarkdownOptions`].

mod assets;
mod map;

pub use assets::AssetsConfig;
pub use map::MapSectionConfig;
