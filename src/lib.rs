//! mdx-map - interactive Leaflet maps embedded in Markdown.
//!
//! Scans a document for `<map>` blocks and replaces each with an HTML
//! container plus an inline script that builds the map, its markers and
//! its GPX routes.
//!
//! ```text
//! <map>
//! "settings": { "initial-zoom": "11" },
//! "markers": [{ "name": "Hut", "lat": "61.87", "lng": "9.79", "html": "🏠" }]
//! </map>
//! ```
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── extract/     # Block scanning and the per-document fold
//! ├── render/      # Payload parsing, asset flags, markup generation
//! ├── config/      # mdx-map.toml (defaults, asset urls, markdown)
//! ├── preprocess   # Preprocessor trait for host pipelines
//! ├── markdown     # Markdown → HTML via pulldown-cmark
//! ├── error        # MapError
//! └── logger       # log!/debug! macros
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod markdown;
pub mod preprocess;
pub mod render;

pub use config::Config;
pub use error::MapError;
pub use extract::{Compiled, MapBlock, compile, compile_report, compile_with, scan};
pub use preprocess::{MapPreprocessor, Preprocessor};
pub use render::{AssetFlags, MapConfig, render};
