//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
}

impl Document {
    /// Create a document with only the root node
    pub fn new(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Text of the first `<title>` element, empty if none
    pub fn title(&self) -> String {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if self.tree.tag_name(id) == Some("title") {
                return self.tree.text_content(id).trim().to_string();
            }
            let start = stack.len();
            stack.extend(self.tree.children(id).map(|(child, _)| child));
            stack[start..].reverse();
        }
        String::new()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        let mut doc = Document::new("about:blank");
        let head = doc.tree_mut().create_element("head");
        let title = doc.tree_mut().create_element("title");
        let text = doc.tree_mut().create_text(" Cases ");
        let root = doc.root();
        doc.tree_mut().append_child(root, head);
        doc.tree_mut().append_child(head, title);
        doc.tree_mut().append_child(title, text);

        assert_eq!(doc.title(), "Cases");
        assert_eq!(Document::new("x").title(), "");
    }
}
