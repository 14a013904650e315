//! Block extraction: compile every `<map>` block of a document.
//!
//! One forward scan collects all block spans, then the output is built in a
//! single pass: text between blocks is copied verbatim and each block is
//! replaced by its fragment surrounded by newlines. Widget identifiers and
//! asset flags are folded through the blocks in document order.

mod scan;

pub use scan::{MapBlock, scan};

use crate::{
    config::Config,
    debug,
    error::MapError,
    render::{AssetFlags, render},
};

/// Prefix of generated widget identifiers (`mdx_map_1`, `mdx_map_2`, ...).
pub const WIDGET_ID_PREFIX: &str = "mdx_map_";

/// Result of compiling one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub text: String,
    /// Number of map blocks replaced.
    pub blocks: usize,
}

/// Compile all map blocks with built-in defaults.
pub fn compile(document: &str) -> Result<String, MapError> {
    compile_with(document, &Config::default())
}

/// Compile all map blocks with the given config.
pub fn compile_with(document: &str, config: &Config) -> Result<String, MapError> {
    compile_report(document, config).map(|compiled| compiled.text)
}

/// Compile all map blocks and report how many were replaced.
///
/// Fails on the first block whose payload does not parse; no partial
/// document is returned.
pub fn compile_report(document: &str, config: &Config) -> Result<Compiled, MapError> {
    let blocks = scan(document);
    if blocks.is_empty() {
        return Ok(Compiled {
            text: document.to_string(),
            blocks: 0,
        });
    }

    let mut out = String::with_capacity(document.len() + blocks.len() * 2048);
    let mut assets = AssetFlags::ALL;
    let mut cursor = 0;

    for (index, block) in blocks.iter().enumerate() {
        let widget_id = format!("{WIDGET_ID_PREFIX}{}", index + 1);
        let (html, effective) = render(block.payload, &widget_id, assets, config)?;
        debug!("compile"; "{}: css={} js={} gpx={}", widget_id, effective.css, effective.js, effective.gpx);

        out.push_str(&document[cursor..block.start]);
        out.push('\n');
        out.push_str(&html);
        out.push('\n');
        cursor = block.end;

        // Every asset counts as handled once a block is compiled
        assets = AssetFlags::NONE;
    }
    out.push_str(&document[cursor..]);

    Ok(Compiled {
        text: out,
        blocks: blocks.len(),
    })
}
