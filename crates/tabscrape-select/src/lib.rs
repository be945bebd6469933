//! tabscrape selectors
//!
//! A deliberately small CSS subset: `tag`, `#id` and `.class` compounds,
//! chained by whitespace as descendant steps. No attribute selectors,
//! pseudo-classes or `>`/`+` combinators.

mod query;
mod selector;
mod tags;

pub use query::ElementQuery;
pub use selector::{Selector, parse_selector, parse_selectors, validate_selector};
pub use tags::is_valid_tag;

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("no selector in {0:?}")]
    NoSelector(String),

    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("duplicate id: '{0}'")]
    DuplicateId(String),

    #[error("invalid tag: {0}")]
    InvalidTag(String),
}
