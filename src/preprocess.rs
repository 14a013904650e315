//! Preprocessor seam for host rendering pipelines.
//!
//! A host runs its preprocessors in order over the raw source before
//! rendering. [`MapPreprocessor`] is the map-block pass.
//!
//! ```ignore
//! let passes: Vec<Box<dyn Preprocessor>> = vec![Box::new(MapPreprocessor::default())];
//! let source = run_all(&passes, &markdown)?;
//! ```

use crate::{config::Config, error::MapError, extract::compile_with};

/// A text-to-text pass run before markup rendering.
pub trait Preprocessor: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Transform the full source text.
    fn run(&self, text: &str) -> Result<String, MapError>;
}

/// Replaces `<map>` blocks with Leaflet map fragments.
#[derive(Debug, Clone, Default)]
pub struct MapPreprocessor {
    config: Config,
}

impl MapPreprocessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Preprocessor for MapPreprocessor {
    fn name(&self) -> &'static str {
        "map"
    }

    fn run(&self, text: &str) -> Result<String, MapError> {
        compile_with(text, &self.config)
    }
}

/// Run passes in order, feeding each the previous output.
pub fn run_all(passes: &[Box<dyn Preprocessor>], text: &str) -> Result<String, MapError> {
    let mut current = text.to_string();
    for pass in passes {
        current = pass.run(&current)?;
        crate::debug!("preprocess"; "ran `{}`", pass.name());
    }
    Ok(current)
}
