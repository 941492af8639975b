//! Exporter configuration: block, style, and decorator maps.
//!
//! All maps support a `"default"` fallback entry. Attribute lists and CSS
//! declarations are ordered vectors so output is deterministic.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::content::Block;
use crate::entities::{EntityDecorator, Link, Null};
use crate::error::{Error, Result};
use crate::util::fetch_or_default;

/// A shared container element enclosing consecutive blocks of one type
/// (e.g. the `<ul>` around list items). Identity is (element, attrs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSpec {
    pub element: String,
    pub attrs: Vec<(String, String)>,
}

impl WrapperSpec {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }
}

/// How one block type renders: its element, attributes, an optional literal
/// prefix prepended to the contents, and an optional shared wrapper.
#[derive(Debug, Clone)]
pub struct BlockTypeOptions {
    pub element: String,
    pub attrs: Vec<(String, String)>,
    pub prefix: Option<String>,
    pub wrapper: Option<WrapperSpec>,
}

impl BlockTypeOptions {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            attrs: Vec::new(),
            prefix: None,
            wrapper: None,
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_wrapper(mut self, wrapper: WrapperSpec) -> Self {
        self.wrapper = Some(wrapper);
        self
    }
}

/// One `"atomic"` dispatch rule: matches when every `match_data` pair is
/// present and equal in the block's `data`.
#[derive(Debug, Clone)]
pub struct AtomicRule {
    pub match_data: Vec<(String, Value)>,
    pub options: BlockTypeOptions,
}

impl AtomicRule {
    pub fn new(options: BlockTypeOptions) -> Self {
        Self {
            match_data: Vec::new(),
            options,
        }
    }

    pub fn with_match(mut self, key: impl Into<String>, value: Value) -> Self {
        self.match_data.push((key.into(), value));
        self
    }

    fn matches(&self, block: &Block) -> bool {
        self.match_data
            .iter()
            .all(|(key, value)| block.data.get(key) == Some(value))
    }
}

/// Block type name → rendering options, plus the ordered `"atomic"` rules.
#[derive(Debug, Clone, Default)]
pub struct BlockMap {
    options: HashMap<String, BlockTypeOptions>,
    atomic: Vec<AtomicRule>,
}

impl BlockMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block_type: impl Into<String>, options: BlockTypeOptions) -> Self {
        self.options.insert(block_type.into(), options);
        self
    }

    /// Append an atomic dispatch rule; rules are tried in insertion order and
    /// the first match wins.
    pub fn with_atomic_rule(mut self, rule: AtomicRule) -> Self {
        self.atomic.push(rule);
        self
    }

    /// Resolve the rendering options for `block`.
    ///
    /// `"atomic"` blocks dispatch through the rule list, falling back to the
    /// `"unstyled"` options when no rule matches. Other types resolve as
    /// exact type, then `"default"`, then `"unstyled"`.
    pub fn resolve(&self, block: &Block) -> Result<&BlockTypeOptions> {
        if block.block_type == "atomic" {
            if let Some(rule) = self.atomic.iter().find(|rule| rule.matches(block)) {
                return Ok(&rule.options);
            }
            return self
                .options
                .get("unstyled")
                .ok_or_else(|| Error::UnknownBlockType(block.block_type.clone()));
        }

        fetch_or_default(&self.options, &block.block_type)
            .or_else(|| self.options.get("unstyled"))
            .ok_or_else(|| Error::UnknownBlockType(block.block_type.clone()))
    }
}

/// Ordered CSS declarations, camelCase property names as the editor emits.
pub type StyleDecl = Vec<(String, String)>;

/// What to do when an active style has no map entry and no `"default"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStylePolicy {
    /// Abort the export with [`Error::UnknownStyle`].
    #[default]
    Fail,
    /// Log a warning and skip the style's contribution.
    Warn,
    /// Skip silently.
    Skip,
}

/// Style identifier → CSS declarations, plus the unknown-style policy.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    styles: HashMap<String, StyleDecl>,
    pub policy: UnknownStylePolicy,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: impl Into<String>, declarations: &[(&str, &str)]) -> Self {
        self.styles.insert(
            style.into(),
            declarations
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        );
        self
    }

    pub fn with_policy(mut self, policy: UnknownStylePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn resolve(&self, style: &str) -> Option<&StyleDecl> {
        fetch_or_default(&self.styles, style)
    }
}

/// Style identifier → semantic wrapper element, in declared order.
///
/// Declared order fixes the nesting order for overlapping semantic styles,
/// independent of the order the ranges opened.
#[derive(Debug, Clone, Default)]
pub struct StyleTagMap {
    tags: Vec<(String, String)>,
}

impl StyleTagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, style: impl Into<String>, element: impl Into<String>) -> Self {
        self.tags.push((style.into(), element.into()));
        self
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags
            .iter()
            .map(|(style, element)| (style.as_str(), element.as_str()))
    }
}

/// Entity type → decorator, with a `"default"` fallback slot.
#[derive(Default)]
pub struct DecoratorMap {
    decorators: HashMap<String, Box<dyn EntityDecorator>>,
}

impl DecoratorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decorator(
        mut self,
        entity_type: impl Into<String>,
        decorator: impl EntityDecorator + 'static,
    ) -> Self {
        self.decorators
            .insert(entity_type.into(), Box::new(decorator));
        self
    }

    pub(crate) fn resolve(&self, entity_type: &str) -> Option<&dyn EntityDecorator> {
        fetch_or_default(&self.decorators, entity_type).map(|decorator| decorator.as_ref())
    }
}

impl fmt::Debug for DecoratorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.decorators.keys().map(String::as_str).collect();
        types.sort_unstable();
        f.debug_struct("DecoratorMap").field("types", &types).finish()
    }
}

/// Everything the exporter needs to know, supplied at construction.
#[derive(Debug)]
pub struct ExporterConfig {
    pub block_map: BlockMap,
    pub style_map: StyleMap,
    pub style_tags: StyleTagMap,
    pub decorators: DecoratorMap,
}

impl Default for ExporterConfig {
    /// The stock Draft.js mappings: headers, lists with the
    /// `public-DraftStyleDefault-*` wrappers, the standard inline styles,
    /// and a plain link decorator.
    fn default() -> Self {
        Self {
            block_map: BlockMap::new()
                .with_block("unstyled", BlockTypeOptions::new("div"))
                .with_block("header-one", BlockTypeOptions::new("h1"))
                .with_block("header-two", BlockTypeOptions::new("h2"))
                .with_block("header-three", BlockTypeOptions::new("h3"))
                .with_block("header-four", BlockTypeOptions::new("h4"))
                .with_block("header-five", BlockTypeOptions::new("h5"))
                .with_block("header-six", BlockTypeOptions::new("h6"))
                .with_block("blockquote", BlockTypeOptions::new("blockquote"))
                .with_block("code-block", BlockTypeOptions::new("pre"))
                .with_block(
                    "unordered-list-item",
                    BlockTypeOptions::new("li").with_wrapper(
                        WrapperSpec::new("ul").with_attr("class", "public-DraftStyleDefault-ul"),
                    ),
                )
                .with_block(
                    "ordered-list-item",
                    BlockTypeOptions::new("li").with_wrapper(
                        WrapperSpec::new("ol").with_attr("class", "public-DraftStyleDefault-ol"),
                    ),
                ),
            style_map: StyleMap::new()
                .with_style("BOLD", &[("fontWeight", "bold")])
                .with_style("ITALIC", &[("fontStyle", "italic")])
                .with_style("UNDERLINE", &[("textDecoration", "underline")])
                .with_style("STRIKETHROUGH", &[("textDecoration", "line-through")])
                .with_style("CODE", &[("fontFamily", "monospace")]),
            style_tags: StyleTagMap::new(),
            decorators: DecoratorMap::new()
                .with_decorator("LINK", Link::new())
                .with_decorator("default", Null),
        }
    }
}
