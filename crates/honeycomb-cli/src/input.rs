//! Grid and dictionary file readers.
//!
//! Grid files hold the depth on the first line, then one line per ring with
//! exactly that ring's letters. Dictionary files hold one word per line.
//! Windows line endings are accepted in both.

use std::fs;
use std::path::Path;

use anyhow::Context;
use honeycomb_lexicon::Dictionary;
use honeycomb_topology::{HoneycombGraph, TopologyError};
use thiserror::Error;

/// A grid file that cannot describe a honeycomb.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("grid file is empty, expected the depth on the first line")]
    MissingDepth,

    #[error("invalid depth {0:?}, expected a positive integer")]
    InvalidDepth(String),

    #[error("grid ends after {found} of {depth} rings")]
    MissingRing { found: usize, depth: usize },

    #[error("unexpected content after the last ring on line {line}")]
    TrailingData { line: usize },

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

// `lines()` already drops the `\r` of `\r\n`; this catches a final line
// that ends in a bare `\r`.
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse grid text into a honeycomb.
pub fn parse_grid(text: &str) -> Result<HoneycombGraph, InputError> {
    let mut lines = text.lines().map(strip_cr);

    let depth_line = lines.next().ok_or(InputError::MissingDepth)?;
    let depth: usize = depth_line
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidDepth(depth_line.to_string()))?;

    let mut rings = Vec::new();
    for found in 0..depth {
        let ring = lines
            .next()
            .ok_or(InputError::MissingRing { found, depth })?;
        rings.push(ring);
    }

    if let Some(extra) = lines.position(|line| !line.trim().is_empty()) {
        return Err(InputError::TrailingData {
            line: depth + 2 + extra,
        });
    }

    Ok(HoneycombGraph::new(depth, &rings)?)
}

/// Parse dictionary text, one word per line, skipping blank lines.
pub fn parse_dictionary(text: &str) -> Dictionary {
    Dictionary::from_words(text.lines().map(strip_cr).filter(|word| !word.is_empty()))
}

/// Read and parse a grid file.
pub fn read_grid(path: &Path) -> anyhow::Result<HoneycombGraph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read grid file {}", path.display()))?;
    parse_grid(&text).with_context(|| format!("invalid grid file {}", path.display()))
}

/// Read and parse a dictionary file.
pub fn read_dictionary(path: &Path) -> anyhow::Result<Dictionary> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary file {}", path.display()))?;
    Ok(parse_dictionary(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeycomb_topology::Malformation;

    #[test]
    fn parses_grid() {
        let graph = parse_grid("2\na\nbcdefg\n").unwrap();
        assert_eq!(graph.depth(), 2);
        assert_eq!(graph.len(), 7);
    }

    #[test]
    fn accepts_crlf_and_trailing_blank_lines() {
        let graph = parse_grid("2\r\na\r\nbcdefg\r\n\r\n\n").unwrap();
        assert_eq!(graph.to_string(), "2\na\nbcdefg\n");
    }

    #[test]
    fn rejects_bad_depth() {
        assert!(matches!(parse_grid(""), Err(InputError::MissingDepth)));
        assert!(matches!(parse_grid("two\na"), Err(InputError::InvalidDepth(d)) if d == "two"));
        assert!(matches!(
            parse_grid("0\n"),
            Err(InputError::Topology(TopologyError::MalformedGraph(Malformation::ZeroDepth)))
        ));
    }

    #[test]
    fn rejects_missing_ring() {
        assert!(matches!(
            parse_grid("3\na\nbcdefg\n"),
            Err(InputError::MissingRing { found: 2, depth: 3 })
        ));
    }

    #[test]
    fn huge_depth_with_short_file() {
        assert!(matches!(
            parse_grid("18446744073709551615\na\n"),
            Err(InputError::MissingRing { found: 1, depth: usize::MAX })
        ));
        assert!(matches!(
            parse_grid("1000000000000\na\nbcdefg\n"),
            Err(InputError::MissingRing { found: 2, .. })
        ));
    }

    #[test]
    fn final_line_with_bare_cr() {
        let graph = parse_grid("1\na\r").unwrap();
        assert_eq!(graph.to_string(), "1\na\n");
    }

    #[test]
    fn rejects_short_ring() {
        let err = parse_grid("3\na\nbcdefg\nhijklmnopqr\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::Topology(TopologyError::MalformedGraph(Malformation::RingLength {
                ring: 2,
                expected: 12,
                actual: 11,
            }))
        ));
    }

    #[test]
    fn rejects_trailing_data() {
        assert!(matches!(
            parse_grid("1\na\n\nxyz\n"),
            Err(InputError::TrailingData { line: 4 })
        ));
    }

    #[test]
    fn dictionary_skips_blank_lines() {
        let dictionary = parse_dictionary("ab\r\n\nac\nab\n");
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_word("ab"));
        assert!(dictionary.contains_word("ac"));
    }

    #[test]
    fn dictionary_with_very_long_line() {
        let long = "z".repeat(300_000);
        let dictionary = parse_dictionary(&format!("ab\n{}\n", long));
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_word(&long));
    }
}
