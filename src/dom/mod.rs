//! Arena-based markup tree.
//!
//! The exporter builds its output into this append-only tree and serializes
//! it at the end. Nodes live in a contiguous vector; handles are indices into
//! it, so the stack machines can hold on to elements without borrowing the
//! document.

mod serialize;

pub use serialize::escape_into;

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Node type in the arena.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// The root fragment; serializes as its children only.
    Fragment,
    /// Element with name and ordered attributes.
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Text content, escaped on serialization.
    Text(String),
}

#[derive(Debug)]
struct Node {
    data: NodeData,
    children: Vec<NodeId>,
}

/// An append-only markup tree rooted at a fragment node.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a new empty document holding only the root fragment.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Fragment,
                children: Vec::new(),
            }],
        }
    }

    /// The root fragment ID.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            data,
            children: Vec::new(),
        });
        id
    }

    /// Create an element and append it as the last child of `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> NodeId {
        let id = self.alloc(NodeData::Element {
            name: name.into(),
            attrs,
        });
        self.append_child(parent, id);
        id
    }

    /// Create a text node and append it as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = self.alloc(NodeData::Text(text.into()));
        self.append_child(parent, id);
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0 as usize].children.push(child);
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize].data
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0 as usize].children
    }

    /// Serialize the whole tree to compact HTML.
    pub fn to_html(&self) -> String {
        serialize::serialize(self)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
