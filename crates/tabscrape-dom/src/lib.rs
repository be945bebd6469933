//! tabscrape DOM - Document Object Model
//!
//! Arena-allocated DOM tree. Nodes are linked by parent, first-child and
//! next-sibling ids, which is all the selector engine needs to walk a
//! document in pre-order.

mod node;
mod tree;
mod document;

pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Children, DomTree};
pub use document::Document;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Absent link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
