//! Class and custom-property usage detection.
//!
//! Detects:
//! - `class="a b"` / `class='a b'` attributes in markup and Markdown
//! - `var(--name)` references in any text, stylesheets included

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Names referenced by a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageResult {
    /// Class names found in `class` attributes
    pub classes: BTreeSet<String>,
    /// Custom-property names found in `var()` calls, including `--`
    pub variables: BTreeSet<String>,
}

fn class_attribute_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"class=["']([^"']+)["']"#).expect("Hardcoded regex pattern is valid")
    })
}

fn var_reference_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"var\((--[a-zA-Z0-9_-]+)\)").expect("Hardcoded regex pattern is valid")
    })
}

/// Extract class names referenced through `class` attributes.
///
/// Each attribute value is split on whitespace; every non-empty token counts.
pub fn extract_used_classes(content: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    for caps in class_attribute_regex().captures_iter(content) {
        if let Some(value) = caps.get(1) {
            classes.extend(
                value
                    .as_str()
                    .split_whitespace()
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string),
            );
        }
    }
    classes
}

/// Extract custom properties referenced as `var(--name)`.
///
/// Only the bare form matches; `var(--name, fallback)` is not recognized.
pub fn extract_used_variables(content: &str) -> BTreeSet<String> {
    var_reference_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract both class and variable usages from markup text.
pub fn extract_usages(content: &str) -> UsageResult {
    UsageResult {
        classes: extract_used_classes(content),
        variables: extract_used_variables(content),
    }
}
