//! Locating `<map>` blocks in a document.

use regex::Regex;
use std::sync::LazyLock;

/// Opener on its own line, body up to the first `</map>` that ends a line.
/// Lines may end in `\n` or `\r\n`.
static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^<map>\r?\n(?P<config>.*?)</map>\r?$").unwrap());

/// A `<map>` block found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapBlock<'a> {
    /// Byte offset of the `<map>` opener.
    pub start: usize,
    /// Byte offset just past the `</map>` closer (and its `\r`, if any).
    pub end: usize,
    /// Everything between the opener line and the closer.
    pub payload: &'a str,
}

/// Find all blocks, left to right, without overlap.
///
/// An opener without a closer is not a block and stays in the text.
pub fn scan(text: &str) -> Vec<MapBlock<'_>> {
    BLOCK_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let payload = caps.name("config")?;
            Some(MapBlock {
                start: whole.start(),
                end: whole.end(),
                payload: payload.as_str(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_block() {
        let text = "intro\n<map>\n\"a\": 1\n</map>\noutro";
        let blocks = scan(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].payload, "\"a\": 1\n");
        assert_eq!(&text[blocks[0].start..blocks[0].end], "<map>\n\"a\": 1\n</map>");
    }

    #[test]
    fn test_scan_non_greedy() {
        let text = "<map>\none\n</map>\nmiddle\n<map>\ntwo\n</map>";
        let payloads: Vec<_> = scan(text).into_iter().map(|b| b.payload).collect();
        assert_eq!(payloads, vec!["one\n", "two\n"]);
    }

    #[test]
    fn test_scan_empty_body() {
        let blocks = scan("<map>\n</map>\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].payload, "");
    }

    #[test]
    fn test_scan_requires_opener_on_own_line() {
        assert!(scan("text <map>\n{}\n</map>").is_empty());
        assert!(scan("<map> \n{}\n</map>").is_empty());
        assert!(scan("<map>{}</map>").is_empty());
    }

    #[test]
    fn test_scan_closer_must_end_line() {
        assert!(scan("<map>\n{}\n</map> trailing").is_empty());
        // Closer may follow the body on the same line
        assert_eq!(scan("<map>\n{}</map>\n")[0].payload, "{}");
    }

    #[test]
    fn test_scan_crlf_lines() {
        let text = "# Trip\r\n\r\n<map>\r\n\"markers\": []\r\n</map>\r\nafter\r\n";
        let blocks = scan(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].payload, "\"markers\": []\r\n");
        assert_eq!(&text[blocks[0].end..], "\nafter\r\n");
        assert!(scan("<map>\r\n{}\r\n</map>\r trailing").is_empty());
    }

    #[test]
    fn test_scan_unterminated() {
        assert!(scan("before\n<map>\n\"a\": 1\n").is_empty());
    }
}
