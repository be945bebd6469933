//! Element Query
//!
//! Pre-order, depth-first queries over a `DomTree`: self before children,
//! children left to right. Traversal uses an explicit stack so pathological
//! nesting cannot overflow the call stack.

use tabscrape_dom::{DomTree, NodeId};

use crate::{Selector, SelectorError, parse_selectors};

/// Selector queries over a DOM tree
pub trait ElementQuery {
    /// Check if a node matches a simple selector
    fn matches(&self, node: NodeId, selector: &Selector) -> bool;

    /// First match in pre-order, `root` included
    fn query(&self, root: NodeId, selector: &Selector) -> Option<NodeId>;

    /// Every match in pre-order, including matches nested inside matches
    fn query_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId>;

    /// Every match in pre-order, without looking inside a matched node
    fn query_all_no_children(&self, root: NodeId, selector: &Selector) -> Vec<NodeId>;

    /// Resolve a descendant chain, returning the first match of the chain's
    /// head inside which the rest of the chain resolves
    fn query_nested(&self, root: NodeId, selectors: &[Selector]) -> Option<NodeId>;

    /// Parse `selector` and run it from `root`
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError>;
}

impl ElementQuery for DomTree {
    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let Some(elem) = self.get(node).and_then(|n| n.as_element()) else {
            return false;
        };

        if let Some(tag) = &selector.tag {
            if *tag != elem.name {
                return false;
            }
        }
        if let Some(id) = &selector.id {
            if elem.id() != Some(id.as_str()) {
                return false;
            }
        }
        if selector.classes.is_empty() {
            return true;
        }
        // Substring containment on the raw attribute, not class-token
        // membership: `.ab` matches class="abc".
        match elem.class() {
            Some(class) => selector.classes.iter().all(|c| class.contains(c.as_str())),
            None => false,
        }
    }

    fn query(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
        self.get(root)?;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.matches(id, selector) {
                return Some(id);
            }
            push_children(self, id, &mut stack);
        }
        None
    }

    fn query_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        collect(self, root, selector, true)
    }

    fn query_all_no_children(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        collect(self, root, selector, false)
    }

    fn query_nested(&self, root: NodeId, selectors: &[Selector]) -> Option<NodeId> {
        match selectors {
            [] => None,
            [only] => self.query(root, only),
            [head, rest @ ..] => self
                .query_all(root, head)
                .into_iter()
                .find(|&candidate| self.query_nested(candidate, rest).is_some()),
        }
    }

    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let selectors = parse_selectors(selector)?;
        let found = if selectors.len() > 1 {
            self.query_nested(root, &selectors)
        } else {
            self.query(root, &selectors[0])
        };
        tracing::trace!("query_selector {:?} -> {:?}", selector, found);
        Ok(found)
    }
}

fn collect(tree: &DomTree, root: NodeId, selector: &Selector, descend_on_match: bool) -> Vec<NodeId> {
    let mut found = Vec::new();
    if tree.get(root).is_none() {
        return found;
    }

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if tree.matches(id, selector) {
            found.push(id);
            if !descend_on_match {
                continue;
            }
        }
        push_children(tree, id, &mut stack);
    }
    found
}

/// Push children so the leftmost is popped first
fn push_children(tree: &DomTree, id: NodeId, stack: &mut Vec<NodeId>) {
    let start = stack.len();
    stack.extend(tree.children(id).map(|(child, _)| child));
    stack[start..].reverse();
}
