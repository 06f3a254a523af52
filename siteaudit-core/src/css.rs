//! Class selector and custom-property extraction from stylesheet text.
//!
//! This is a lexical scan, not a CSS parser. Tokens inside comments, strings
//! and `url(...)` values (`url(logo.png)` yields `png`) are picked up too.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Names declared by a single stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetDefinitions {
    /// Class selector names, without the leading `.`
    pub classes: BTreeSet<String>,
    /// Custom-property names, including the leading `--`
    pub variables: BTreeSet<String>,
}

fn class_selector_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // SAFETY: hardcoded pattern, covered by tests.
    REGEX.get_or_init(|| {
        Regex::new(r"\.([a-zA-Z_-][a-zA-Z0-9_-]*)").expect("Hardcoded regex pattern is valid")
    })
}

fn custom_property_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"--([a-zA-Z0-9_-]+):").expect("Hardcoded regex pattern is valid")
    })
}

/// Extract distinct class selector names from stylesheet text.
pub fn extract_classes(content: &str) -> BTreeSet<String> {
    class_selector_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract distinct custom-property declarations (`--name:`) from stylesheet text.
pub fn extract_variables(content: &str) -> BTreeSet<String> {
    custom_property_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| format!("--{}", m.as_str()))
        .collect()
}

/// Extract everything a stylesheet defines.
pub fn extract_definitions(content: &str) -> StylesheetDefinitions {
    StylesheetDefinitions {
        classes: extract_classes(content),
        variables: extract_variables(content),
    }
}
