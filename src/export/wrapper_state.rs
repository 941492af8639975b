//! Block Wrapper Nesting.
//!
//! Chooses each block's container element and manages a depth-indexed stack
//! of shared wrapper elements across consecutive blocks, so sibling list
//! items land in one list and deeper items re-nest by their `depth`.

use crate::config::{BlockMap, WrapperSpec};
use crate::content::Block;
use crate::dom::{Document, NodeId};
use crate::error::Result;

pub struct WrapperState<'a> {
    block_map: &'a BlockMap,
    /// Wrapper elements indexed by depth; every entry shares one spec.
    stack: Vec<(NodeId, WrapperSpec)>,
}

impl<'a> WrapperState<'a> {
    pub fn new(block_map: &'a BlockMap) -> Self {
        Self {
            block_map,
            stack: Vec::new(),
        }
    }

    /// Create and return the container element for `block`, wiring it into
    /// the current wrapper chain (or directly under the root).
    pub fn element_for(&mut self, doc: &mut Document, block: &Block) -> Result<NodeId> {
        let options = self.block_map.resolve(block)?;

        let parent = match &options.wrapper {
            Some(spec) => self.wrapper_at_depth(doc, spec, block.depth),
            None => {
                // An unwrapped block ends any in-progress wrapped chain.
                self.stack.clear();
                doc.root()
            }
        };

        let element = doc.append_element(parent, options.element.as_str(), options.attrs.clone());
        if let Some(prefix) = &options.prefix {
            doc.append_text(element, prefix.as_str());
        }
        Ok(element)
    }

    /// The wrapper element blocks of `spec` at `depth` append into, growing
    /// or truncating the stack as the depth demands.
    fn wrapper_at_depth(&mut self, doc: &mut Document, spec: &WrapperSpec, depth: usize) -> NodeId {
        let same_spec = self
            .stack
            .last()
            .is_some_and(|(_, current)| current == spec);
        if !same_spec {
            self.stack.clear();
            let root = doc.root();
            let outer = doc.append_element(root, spec.element.as_str(), spec.attrs.clone());
            self.stack.push((outer, spec.clone()));
        }

        self.stack.truncate(depth + 1);
        while self.stack.len() < depth + 1 {
            let parent = self.stack[self.stack.len() - 1].0;
            let nested = doc.append_element(parent, spec.element.as_str(), spec.attrs.clone());
            self.stack.push((nested, spec.clone()));
        }
        self.stack[self.stack.len() - 1].0
    }
}
