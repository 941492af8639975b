//! # draftex
//!
//! A Draft.js ContentState to HTML exporter.
//!
//! Takes the raw document model an editor produces — ordered text blocks
//! annotated with overlapping inline-style ranges and non-overlapping entity
//! ranges — and converts it into correctly nested HTML: entities become
//! elements via pluggable decorators, styles merge into CSS (or semantic
//! tags), and consecutive list blocks share and re-nest wrapper elements by
//! depth.
//!
//! ## Quick Start
//!
//! ```
//! use draftex::{ContentState, ExporterConfig, HtmlExporter};
//!
//! let content = ContentState::from_json(
//!     r#"{
//!         "entityMap": {},
//!         "blocks": [
//!             {"key": "5s7g9", "text": "Header", "type": "header-one", "depth": 0,
//!              "inlineStyleRanges": [], "entityRanges": []}
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let exporter = HtmlExporter::new(ExporterConfig::default());
//! assert_eq!(exporter.export(&content).unwrap(), "<h1>Header</h1>");
//! ```
//!
//! ## Configuration
//!
//! [`ExporterConfig`] maps block types to elements (and shared wrappers),
//! style identifiers to CSS declarations or semantic tags, and entity types
//! to [`EntityDecorator`] implementations. Every map accepts a `"default"`
//! fallback entry.
//!
//! ```
//! use draftex::{
//!     BlockMap, BlockTypeOptions, DecoratorMap, ExporterConfig, HtmlExporter, Link,
//!     StyleMap, StyleTagMap, WrapperSpec,
//! };
//!
//! let config = ExporterConfig {
//!     block_map: BlockMap::new()
//!         .with_block("unstyled", BlockTypeOptions::new("p"))
//!         .with_block(
//!             "unordered-list-item",
//!             BlockTypeOptions::new("li").with_wrapper(WrapperSpec::new("ul")),
//!         ),
//!     style_map: StyleMap::new().with_style("BOLD", &[("fontWeight", "bold")]),
//!     style_tags: StyleTagMap::new(),
//!     decorators: DecoratorMap::new().with_decorator("LINK", Link::new()),
//! };
//! let exporter = HtmlExporter::new(config);
//! # let _ = exporter;
//! ```

pub mod config;
pub mod content;
pub mod dom;
pub mod entities;
pub mod error;
pub mod export;
pub(crate) mod util;

pub use config::{
    AtomicRule, BlockMap, BlockTypeOptions, DecoratorMap, ExporterConfig, StyleMap, StyleTagMap,
    UnknownStylePolicy, WrapperSpec,
};
pub use content::{Block, ContentState, Entity, EntityKey, EntityRange, StyleRange};
pub use entities::{EntityDecorator, Link, Null};
pub use error::{Error, Result};
pub use export::{HtmlExporter, export_html};
