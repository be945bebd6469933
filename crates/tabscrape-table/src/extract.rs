//! Table location and row flattening

use tabscrape_dom::{DomTree, NodeId};
use tabscrape_select::{ElementQuery, Selector};

use crate::{RawRow, ScrapeError, StructureError};

/// Find the table container with a compound selector
pub fn locate_container(tree: &DomTree, root: NodeId, selector: &str) -> Result<NodeId, ScrapeError> {
    let container = tree
        .query_selector(root, selector)?
        .ok_or_else(|| StructureError::ContainerNotFound(selector.to_string()))?;

    tracing::debug!("Container {:?} matched {:?}", selector, container);
    Ok(container)
}

/// One raw row per `tr` under the container.
///
/// Rows of a table nested inside a matched row are not collected.
pub fn extract_rows(tree: &DomTree, container: NodeId) -> Vec<RawRow> {
    tree.query_all_no_children(container, &Selector::tag("tr"))
        .into_iter()
        .map(|tr| extract_row(tree, tr))
        .collect()
}

/// Trimmed texts of a row's `th` cells followed by its `td` cells
pub fn extract_row(tree: &DomTree, tr: NodeId) -> RawRow {
    let th = tree.query_all_no_children(tr, &Selector::tag("th"));
    let td = tree.query_all_no_children(tr, &Selector::tag("td"));

    th.into_iter()
        .chain(td)
        .map(|cell| tree.text_content(cell).trim().to_string())
        .collect()
}
