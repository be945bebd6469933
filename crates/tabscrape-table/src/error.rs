//! Error kinds for one scrape invocation

use tabscrape_html::ParseError;
use tabscrape_net::NetError;
use tabscrape_select::SelectorError;

/// Invalid scraper definition
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("header row index {index} outside header row count {count}")]
    HeaderIndexOutOfRange { index: usize, count: usize },

    #[error("unknown column type {0:?}")]
    UnknownType(String),

    #[error("invalid source URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// The document does not have the expected table shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("no element matches container selector {0:?}")]
    ContainerNotFound(String),

    #[error("expected at least {expected} rows, got {actual}")]
    InsufficientRows { expected: usize, actual: usize },

    #[error("expected {expected} header columns, got {actual}")]
    HeaderColumnCountMismatch { expected: usize, actual: usize },

    #[error("header column {position}: expected '{actual}' to contain '{expected}'")]
    HeaderMismatch {
        position: usize,
        expected: String,
        actual: String,
    },
}

/// A body row that cannot be turned into typed values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("expected {expected} data cells, got {actual} ({row:?})")]
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
        row: Vec<String>,
    },

    #[error("column {column}: cannot parse {value:?}: {reason}")]
    Coercion {
        column: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RearrangeError {
    #[error("target columns {target:?} are not a permutation of current columns {current:?}")]
    ColumnSetMismatch {
        target: Vec<String>,
        current: Vec<String>,
    },
}

/// Output sink failure
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("invalid identifier {0:?}, must match [_a-zA-Z]+[_a-zA-Z0-9]*")]
    InvalidIdentifier(String),

    #[error("column name {0:?} is reserved")]
    ReservedColumn(String),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure of a scrape
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("fetch error: {0}")]
    Fetch(#[from] NetError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("row error: {0}")]
    Row(#[from] RowError),

    #[error("rearrange error: {0}")]
    Rearrange(#[from] RearrangeError),
}

impl From<SelectorError> for ScrapeError {
    fn from(err: SelectorError) -> Self {
        Self::Config(ConfigError::Selector(err))
    }
}
