//! Metadata block parsing for template files.
//!
//! The metadata block is deliberately not YAML: each line between the `---`
//! delimiters is either `key: value` or ignored. Malformed lines never make a
//! template unloadable.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `key: value` with keys restricted to word characters and hyphens.
static META_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w-]+):\s*(.*)$").expect("Invalid metadata line regex"));

const DELIMITER: &str = "---";

/// A template file split into metadata fields and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Metadata fields in key order. Later duplicates win.
    pub meta: BTreeMap<String, String>,
    /// Body text with the metadata block removed.
    pub body: String,
}

/// Parse template file content into metadata and body.
///
/// Line endings are normalized to `\n`. Content without a leading `---`, or
/// without a closing line-leading `---`, is all body (untrimmed). Otherwise
/// the body is the trimmed text after the closing delimiter.
pub fn parse_template(content: &str) -> ParsedTemplate {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    if !normalized.starts_with(DELIMITER) {
        return ParsedTemplate {
            meta: BTreeMap::new(),
            body: normalized,
        };
    }

    let Some(closing) = normalized[DELIMITER.len()..]
        .find("\n---")
        .map(|pos| pos + DELIMITER.len())
    else {
        return ParsedTemplate {
            meta: BTreeMap::new(),
            body: normalized,
        };
    };

    let block = &normalized[DELIMITER.len()..closing];
    let body = normalized[closing + 1 + DELIMITER.len()..].trim().to_string();

    ParsedTemplate {
        meta: parse_meta_block(block),
        body,
    }
}

fn parse_meta_block(block: &str) -> BTreeMap<String, String> {
    let mut meta = BTreeMap::new();
    for line in block.lines() {
        if let Some(caps) = META_LINE_REGEX.captures(line) {
            let value = strip_quotes(caps[2].trim());
            meta.insert(caps[1].to_string(), value.to_string());
        }
    }
    meta
}

/// Strip one pair of matching surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Interpret a boolean-like metadata value. Unrecognized values fall back to `default`.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "false" | "no" | "off" | "0") => false,
        Some(v) if matches!(v.as_str(), "true" | "yes" | "on" | "1") => true,
        _ => default,
    }
}
