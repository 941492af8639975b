//! The export pipeline: command compilation, stack machines, and assembly.

pub mod commands;
pub mod entity_state;
pub mod style_state;
pub mod wrapper_state;

use std::collections::HashMap;

use crate::config::ExporterConfig;
use crate::content::{Block, ContentState, Entity};
use crate::dom::{Document, NodeId};
use crate::error::Result;

use commands::CommandGroups;
use entity_state::EntityState;
use style_state::StyleState;
use wrapper_state::WrapperState;

/// Converts content states to HTML with one fixed configuration.
///
/// An exporter is immutable and reusable; each [`export`](Self::export) call
/// allocates its own tree and stacks, so a single instance can serve any
/// number of documents.
#[derive(Debug)]
pub struct HtmlExporter {
    config: ExporterConfig,
}

impl HtmlExporter {
    pub fn new(config: ExporterConfig) -> Self {
        Self { config }
    }

    /// Convert one document to an HTML string.
    ///
    /// Fails without partial output when entity ranges cross, or when a
    /// lookup misses with no configured fallback.
    pub fn export(&self, content: &ContentState) -> Result<String> {
        let mut doc = Document::new();
        let mut wrappers = WrapperState::new(&self.config.block_map);
        for block in &content.blocks {
            let element = wrappers.element_for(&mut doc, block)?;
            self.export_block(&mut doc, element, block, &content.entity_map)?;
        }
        Ok(doc.to_html())
    }

    fn export_block(
        &self,
        doc: &mut Document,
        element: NodeId,
        block: &Block,
        entity_map: &HashMap<String, Entity>,
    ) -> Result<()> {
        let mut entities = EntityState::new(element, &self.config.decorators, entity_map);
        let mut styles = StyleState::new(&self.config.style_map, &self.config.style_tags);

        for (segment, commands) in CommandGroups::new(block) {
            for command in &commands {
                entities.apply(doc, command)?;
                styles.apply(command);
            }
            self.append_segment(doc, entities.current_parent(), segment, &styles)?;
        }
        Ok(())
    }

    /// Append one text segment under `parent`, wrapped in the semantic tag
    /// chain and/or a styled span as the style state dictates.
    fn append_segment(
        &self,
        doc: &mut Document,
        parent: NodeId,
        segment: &str,
        styles: &StyleState<'_>,
    ) -> Result<()> {
        if segment.is_empty() {
            return Ok(());
        }

        let mut parent = parent;
        for tag in styles.wrapper_tags() {
            parent = doc.append_element(parent, tag, Vec::new());
        }
        match styles.css()? {
            Some(css) => {
                let span = doc.append_element(parent, "span", vec![("style".to_string(), css)]);
                doc.append_text(span, segment);
            }
            None => {
                doc.append_text(parent, segment);
            }
        }
        Ok(())
    }
}

/// One-shot conversion of a raw ContentState JSON string with the stock
/// Draft.js configuration.
pub fn export_html(json: &str) -> Result<String> {
    let content = ContentState::from_json(json)?;
    HtmlExporter::new(ExporterConfig::default()).export(&content)
}
