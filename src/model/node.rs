//! RTF node tree.

use serde::{Deserialize, Serialize};

/// Control words whose presence as a direct child hides a group's text.
///
/// These mark destinations such as font tables, color palettes and
/// document properties.
pub const HIDDEN_TEXT_WORDS: &[&str] = &[
    "\\*",
    "\\fonttbl",
    "\\colortbl",
    "\\datastore",
    "\\themedata",
    "\\hl",
    "\\stylesheet",
    "\\nonshppict",
    "\\author",
    "\\operator",
];

/// A node of the parsed RTF tree.
///
/// Deserialized groups recompute `show_text` from their children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", from = "NodeRepr")]
pub enum Node {
    /// A `{ ... }` group.
    Block {
        /// Nodes between the braces
        children: Vec<Node>,
        /// False when a direct child is one of [`HIDDEN_TEXT_WORDS`]
        show_text: bool,
    },

    /// A control word without special rendering.
    CtrlWord {
        /// Name including the leading backslash (e.g. `\ansicpg`)
        name: String,
        /// Numeric parameter, 0 when absent
        param: i64,
    },

    /// The `\par` control word.
    Par {
        /// Numeric parameter, 0 when absent
        param: i64,
    },

    /// A single raw character byte.
    Char {
        /// Byte value
        code: u8,
    },

    /// A run of raw bytes merged from consecutive characters.
    Text {
        /// Undecoded bytes
        bytes: Vec<u8>,
    },
}

/// Serialized form of [`Node`]; a group's `show_text` field is ignored.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum NodeRepr {
    Block { children: Vec<Node> },
    CtrlWord { name: String, param: i64 },
    Par { param: i64 },
    Char { code: u8 },
    Text { bytes: Vec<u8> },
}

impl From<NodeRepr> for Node {
    fn from(repr: NodeRepr) -> Self {
        match repr {
            NodeRepr::Block { children } => Node::block(children),
            NodeRepr::CtrlWord { name, param } => Node::ctrl_word(name, param),
            NodeRepr::Par { param } => Node::Par { param },
            NodeRepr::Char { code } => Node::char(code),
            NodeRepr::Text { bytes } => Node::text_run(bytes),
        }
    }
}

impl Node {
    /// Build a group node, deciding once whether its text is visible.
    pub fn block(children: Vec<Node>) -> Self {
        let show_text = !children.iter().any(|child| {
            child.is_ctrl_word() && HIDDEN_TEXT_WORDS.iter().any(|word| *word == child.name())
        });
        Node::Block {
            children,
            show_text,
        }
    }

    /// Build a control word node, resolving registered specializations.
    pub fn ctrl_word(name: impl Into<String>, param: i64) -> Self {
        let name = name.into();
        match name.as_str() {
            "\\par" => Node::Par { param },
            _ => Node::CtrlWord { name, param },
        }
    }

    /// Build a character node.
    pub fn char(code: u8) -> Self {
        Node::Char { code }
    }

    /// Build a text node.
    pub fn text_run(bytes: Vec<u8>) -> Self {
        Node::Text { bytes }
    }

    /// Discriminator: `block`, `char`, `text` or the control word name.
    pub fn name(&self) -> &str {
        match self {
            Node::Block { .. } => "block",
            Node::CtrlWord { name, .. } => name.as_str(),
            Node::Par { .. } => "\\par",
            Node::Char { .. } => "char",
            Node::Text { .. } => "text",
        }
    }

    /// Control word parameter, if this is a control word.
    pub fn param(&self) -> Option<i64> {
        match self {
            Node::CtrlWord { param, .. } | Node::Par { param } => Some(*param),
            _ => None,
        }
    }

    /// Whether this node is a control word (including `\par`).
    pub fn is_ctrl_word(&self) -> bool {
        matches!(self, Node::CtrlWord { .. } | Node::Par { .. })
    }

    /// Direct children of a group; empty for every other node.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Rendered plain text of this node and its subtree.
    pub fn text(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_text(&mut out);
        out
    }

    /// Append the rendered plain text to `out`.
    pub fn write_text(&self, out: &mut Vec<u8>) {
        match self {
            Node::Block {
                children,
                show_text,
            } => {
                if *show_text {
                    for child in children {
                        child.write_text(out);
                    }
                }
            }
            Node::CtrlWord { .. } => {}
            Node::Par { .. } => out.push(b'\n'),
            Node::Char { code } => out.push(*code),
            Node::Text { bytes } => out.extend_from_slice(bytes),
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}
