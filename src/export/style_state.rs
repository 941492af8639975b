//! Style Stack Machine.
//!
//! Tracks the inline styles active at the current offset as an ordered
//! multiset, and derives the CSS and semantic wrapper tags for a segment.

use crate::config::{StyleDecl, StyleMap, StyleTagMap, UnknownStylePolicy};
use crate::error::{Error, Result};

use super::commands::Command;

pub struct StyleState<'a> {
    style_map: &'a StyleMap,
    style_tags: &'a StyleTagMap,
    /// Ordered multiset of active style identifiers.
    styles: Vec<String>,
}

impl<'a> StyleState<'a> {
    pub fn new(style_map: &'a StyleMap, style_tags: &'a StyleTagMap) -> Self {
        Self {
            style_map,
            style_tags,
            styles: Vec::new(),
        }
    }

    /// Start commands append; stop commands remove the first matching
    /// occurrence. Removal is by value rather than LIFO, so malformed
    /// duplicate ranges shed one occurrence instead of the wrong style.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::StartInlineStyle(style) => self.styles.push(style.clone()),
            Command::StopInlineStyle(style) => {
                if let Some(index) = self.styles.iter().position(|active| active == style) {
                    self.styles.remove(index);
                }
            }
            _ => {}
        }
    }

    /// The declaration lists of the active styles that resolve, in stack
    /// order. Unresolved styles follow the configured policy.
    fn resolved(&self) -> Result<Vec<&'a StyleDecl>> {
        let mut declarations = Vec::new();
        for style in &self.styles {
            match self.style_map.resolve(style) {
                Some(declaration) => declarations.push(declaration),
                None => match self.style_map.policy {
                    UnknownStylePolicy::Fail => return Err(Error::UnknownStyle(style.clone())),
                    UnknownStylePolicy::Warn => {
                        log::warn!("skipping unknown style: {style}");
                    }
                    UnknownStylePolicy::Skip => {}
                },
            }
        }
        Ok(declarations)
    }

    /// The merged CSS for the active styles, or `None` when the current
    /// segment is plain text (no active style resolves).
    ///
    /// Later styles override same-named properties from earlier ones, but a
    /// property keeps its first-appearance position.
    pub fn css(&self) -> Result<Option<String>> {
        let resolved = self.resolved()?;
        if resolved.is_empty() {
            return Ok(None);
        }

        let mut merged: Vec<(&str, &str)> = Vec::new();
        for declaration in resolved {
            for (name, value) in declaration {
                match merged.iter_mut().find(|(seen, _)| *seen == name.as_str()) {
                    Some(slot) => slot.1 = value.as_str(),
                    None => merged.push((name.as_str(), value.as_str())),
                }
            }
        }

        let mut css = String::new();
        for (name, value) in merged {
            hyphenate_into(&mut css, name);
            css.push_str(": ");
            css.push_str(value);
            css.push(';');
        }
        Ok(Some(css))
    }

    /// Semantic wrapper tags for the active styles, in declared map order
    /// (not stack order), outermost first.
    pub fn wrapper_tags(&self) -> Vec<&'a str> {
        self.style_tags
            .iter()
            .filter(|(style, _)| self.styles.iter().any(|active| active.as_str() == *style))
            .map(|(_, element)| element)
            .collect()
    }
}

/// Rewrite a camelCase property name to its hyphenated CSS form.
fn hyphenate_into(out: &mut String, name: &str) {
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
}
