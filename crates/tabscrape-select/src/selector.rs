//! Selector parsing
//!
//! A simple selector is one or more concatenated tokens with no separator:
//! an optional `.` or `#` prefix, an optional `-`, then a name. A compound
//! selector is a whitespace-separated chain of simple selectors.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{SelectorError, tags::is_valid_tag};

const TOKEN: &str = r"[.#]?-?[_a-zA-Z]+[_a-zA-Z0-9-]*";

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TOKEN).expect("valid token regex"));
static SELECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:{TOKEN})+$")).expect("valid selector regex"));

/// A single tag/id/class predicate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Lower-cased tag name
    pub tag: Option<String>,
    pub id: Option<String>,
    /// Class names in source order, duplicates kept
    pub classes: Vec<String>,
}

impl Selector {
    /// Selector matching a bare tag, bypassing validation
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_ascii_lowercase()),
            ..Self::default()
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selector(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// Parse a whitespace-separated chain of simple selectors.
///
/// The first failing simple selector aborts the whole chain.
pub fn parse_selectors(s: &str) -> Result<Vec<Selector>, SelectorError> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.is_empty() {
        return Err(SelectorError::NoSelector(s.to_string()));
    }
    parts.into_iter().map(parse_selector).collect()
}

/// Parse one simple selector such as `table.wikitable` or `div#main.a.b`
pub fn parse_selector(s: &str) -> Result<Selector, SelectorError> {
    if !SELECTOR_RE.is_match(s) {
        return Err(SelectorError::InvalidSelector {
            selector: s.to_string(),
            reason: "malformed".to_string(),
        });
    }

    let mut sel = Selector::default();
    for token in TOKEN_RE.find_iter(s).map(|m| m.as_str()) {
        if let Some(class) = token.strip_prefix('.') {
            sel.classes.push(class.to_string());
        } else if let Some(id) = token.strip_prefix('#') {
            if sel.id.is_some() {
                return Err(SelectorError::DuplicateId(id.to_string()));
            }
            sel.id = Some(id.to_string());
        } else if sel.tag.is_none() {
            sel.tag = Some(token.to_lowercase());
        } else {
            return Err(SelectorError::InvalidSelector {
                selector: s.to_string(),
                reason: format!("bad token {token}"),
            });
        }
    }

    validate_selector(&sel)?;
    Ok(sel)
}

/// Check a selector against the tag allow-list and that it constrains something
pub fn validate_selector(sel: &Selector) -> Result<(), SelectorError> {
    if let Some(tag) = &sel.tag {
        if !is_valid_tag(tag) {
            return Err(SelectorError::InvalidTag(tag.clone()));
        }
    }
    if sel.tag.is_none() && sel.id.is_none() && sel.classes.is_empty() {
        return Err(SelectorError::InvalidSelector {
            selector: sel.to_string(),
            reason: "nothing specified".to_string(),
        });
    }
    Ok(())
}
