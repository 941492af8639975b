//! Compact HTML serialization for the arena tree.
//!
//! Output is deliberately whitespace-free: no indentation or newlines are
//! inserted, so text content round-trips exactly.

use super::{Document, NodeData, NodeId};

/// Elements serialized self-closing when they have no children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(super) fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_node(doc, doc.root(), &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.data(id) {
        NodeData::Fragment => {
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
        }
        NodeData::Element { name, attrs } => {
            out.push('<');
            out.push_str(name);
            for (attr, value) in attrs {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                escape_into(out, value);
                out.push('"');
            }
            let children = doc.children(id);
            if children.is_empty() && VOID_ELEMENTS.contains(&name.as_str()) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for &child in children {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        NodeData::Text(text) => escape_into(out, text),
    }
}

/// Escape `& ' " < >` with their named entities, appending to `out`.
///
/// Always these five, regardless of context, so leaf text stays safe for
/// downstream consumers that are sensitive to unescaped quotes. Non-ASCII
/// characters pass through untouched.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
