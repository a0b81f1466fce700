//! Document-level types.

use super::Node;
use serde::{Deserialize, Serialize};

/// Control word declaring the ANSI codepage of a document.
const ANSI_CODEPAGE_WORD: &str = "\\ansicpg";

/// A parsed RTF document.
///
/// Holds the nodes of the outermost, unbracketed scope. A regular RTF file
/// has a single top-level block (`{\rtf1 ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level nodes in source order
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document from parsed top-level nodes.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes.
    pub fn child_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Check if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::node_count).sum()
    }

    /// Codepage declared by `\ansicpg`, e.g. `"cp1252"`.
    ///
    /// Only direct children of top-level groups are inspected; the first
    /// match wins.
    pub fn detect_encoding(&self) -> Option<String> {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Block { .. }))
            .flat_map(|block| block.children())
            .find(|child| child.is_ctrl_word() && child.name() == ANSI_CODEPAGE_WORD)
            .and_then(Node::param)
            .map(|param| format!("cp{}", param))
    }

    /// Concatenated raw text of the whole document.
    pub fn flatten_to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.write_text(&mut out);
        }
        out
    }

    /// Raw text decoded as UTF-8, replacing invalid sequences.
    pub fn plain_text(&self) -> String {
        String::from_utf8_lossy(&self.flatten_to_bytes()).into_owned()
    }
}
