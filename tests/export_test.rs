//! End-to-end export tests.
//!
//! Exercises the whole pipeline through `HtmlExporter::export`: block
//! mapping, wrapper nesting, inline styles, entities, escaping, and the
//! failure modes.

use draftex::{
    AtomicRule, BlockMap, BlockTypeOptions, ContentState, DecoratorMap, Error, ExporterConfig,
    HtmlExporter, Link, StyleMap, StyleTagMap, UnknownStylePolicy, WrapperSpec,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn content(value: Value) -> ContentState {
    serde_json::from_value(value).expect("valid content state")
}

/// The configuration the original integration suite runs against.
fn test_config() -> ExporterConfig {
    ExporterConfig {
        block_map: BlockMap::new()
            .with_block("header-one", BlockTypeOptions::new("h1"))
            .with_block("unstyled", BlockTypeOptions::new("div"))
            .with_block(
                "unordered-list-item",
                BlockTypeOptions::new("li")
                    .with_wrapper(WrapperSpec::new("ul").with_attr("class", "x")),
            )
            .with_atomic_rule(
                AtomicRule::new(BlockTypeOptions::new("span").with_attr("id", "hello-world"))
                    .with_match("type", json!("checklist"))
                    .with_match("checked", json!(true)),
            )
            .with_atomic_rule(
                AtomicRule::new(
                    BlockTypeOptions::new("article")
                        .with_attr("title", "paradise")
                        .with_prefix("( ) "),
                )
                .with_match("type", json!("story"))
                .with_match("name", json!("yvonne")),
            ),
        style_map: StyleMap::new()
            .with_style("ITALIC", &[("fontStyle", "italic")])
            .with_style("BOLD", &[("fontWeight", "bold")])
            .with_policy(UnknownStylePolicy::Skip),
        style_tags: StyleTagMap::new(),
        decorators: DecoratorMap::new().with_decorator("LINK", Link::with_class("foobar-baz")),
    }
}

fn export(value: Value) -> draftex::Result<String> {
    HtmlExporter::new(test_config()).export(&content(value))
}

#[test]
fn test_empty_blocks_export_to_empty_string() {
    assert_eq!(export(json!({"entityMap": {}, "blocks": []})).unwrap(), "");
    assert_eq!(export(json!({})).unwrap(), "");
}

#[test]
fn test_single_header_block() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "5s7g9", "text": "Header", "type": "header-one", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(html, "<h1>Header</h1>");
}

#[test]
fn test_different_blocks_including_atomic_dispatch() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "5s7g9", "text": "Header", "type": "header-one", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []},
            {"key": "dem5p", "text": "some paragraph text", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": null, "entityRanges": null},
            {"key": "6udia", "text": "Hello my beautiful children", "type": "atomic", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": [],
             "data": {"type": "checklist", "checked": true}},
            {"key": "7j1l", "text": "Nice to meet me", "type": "atomic", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": [],
             "data": {"type": "story", "name": "yvonne"}},
            {"key": "jq89x", "text": "Wishful thinking", "type": "atomic", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": [], "data": {"type": "task"}}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            "<h1>Header</h1>",
            "<div>some paragraph text</div>",
            r#"<span id="hello-world">Hello my beautiful children</span>"#,
            r#"<article title="paradise">( ) Nice to meet me</article>"#,
            "<div>Wishful thinking</div>",
        )
    );
}

#[test]
fn test_inline_styles_split_segments() {
    // BOLD is deliberately absent from the map below; the skip policy drops
    // it and the segment stays plain.
    let config = ExporterConfig {
        style_map: StyleMap::new()
            .with_style("ITALIC", &[("fontStyle", "italic")])
            .with_policy(UnknownStylePolicy::Skip),
        ..test_config()
    };
    let html = HtmlExporter::new(config)
        .export(&content(json!({
            "entityMap": {},
            "blocks": [
                {"key": "dem5p", "text": "some paragraph text", "type": "unstyled", "depth": 0,
                 "inlineStyleRanges": [
                     {"offset": 0, "length": 4, "style": "ITALIC"},
                     {"offset": 5, "length": 5, "style": "BOLD"}
                 ],
                 "entityRanges": []}
            ]
        })))
        .unwrap();
    assert_eq!(
        html,
        r#"<div><span style="font-style: italic;">some</span> paragraph text</div>"#
    );
}

#[test]
fn test_overlapping_styles_merge_per_segment() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "dem5p", "text": "overlapping text!", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [
                 {"offset": 0, "length": 10, "style": "BOLD"},
                 {"offset": 5, "length": 10, "style": "ITALIC"}
             ],
             "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            r#"<span style="font-weight: bold;">overl</span>"#,
            r#"<span style="font-weight: bold;font-style: italic;">appin</span>"#,
            r#"<span style="font-style: italic;">g tex</span>"#,
            "t!",
            "</div>",
        )
    );
}

#[test]
fn test_unknown_style_fails_under_fail_policy() {
    let config = ExporterConfig {
        style_map: StyleMap::new().with_style("ITALIC", &[("fontStyle", "italic")]),
        ..test_config()
    };
    let result = HtmlExporter::new(config).export(&content(json!({
        "entityMap": {},
        "blocks": [
            {"key": "dem5p", "text": "text", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [{"offset": 0, "length": 4, "style": "BOLD"}],
             "entityRanges": []}
        ]
    })));
    assert!(matches!(result, Err(Error::UnknownStyle(s)) if s == "BOLD"));
}

#[test]
fn test_semantic_style_tags_nest_in_declared_order() {
    let config = ExporterConfig {
        style_map: StyleMap::new().with_policy(UnknownStylePolicy::Skip),
        style_tags: StyleTagMap::new()
            .with_tag("BOLD", "strong")
            .with_tag("ITALIC", "em"),
        ..test_config()
    };
    // ITALIC opens before BOLD, but the declared order still puts strong
    // outside em wherever both are active.
    let html = HtmlExporter::new(config)
        .export(&content(json!({
            "entityMap": {},
            "blocks": [
                {"key": "k", "text": "abcd", "type": "unstyled", "depth": 0,
                 "inlineStyleRanges": [
                     {"offset": 1, "length": 3, "style": "ITALIC"},
                     {"offset": 0, "length": 3, "style": "BOLD"}
                 ],
                 "entityRanges": []}
            ]
        })))
        .unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            "<strong>a</strong>",
            "<strong><em>bc</em></strong>",
            "<em>d</em>",
            "</div>",
        )
    );
}

#[test]
fn test_link_entity() {
    let html = export(json!({
        "entityMap": {
            "0": {"type": "LINK", "mutability": "MUTABLE",
                  "data": {"url": "http://example.com"}}
        },
        "blocks": [
            {"key": "dem5p", "text": "some paragraph text", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [],
             "entityRanges": [{"offset": 5, "length": 9, "key": 0}]}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        r#"<div>some <a href="http://example.com" class="foobar-baz">paragraph</a> text</div>"#
    );
}

#[test]
fn test_entity_key_given_as_text() {
    let html = export(json!({
        "entityMap": {
            "0": {"type": "LINK", "mutability": "MUTABLE",
                  "data": {"url": "http://example.com"}}
        },
        "blocks": [
            {"key": "dem5p", "text": "some paragraph text", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [],
             "entityRanges": [{"offset": 5, "length": 9, "key": "0"}]}
        ]
    }))
    .unwrap();
    assert!(html.contains(r#"<a href="http://example.com""#));
}

#[test]
fn test_crossing_entities_fail() {
    let result = export(json!({
        "entityMap": {
            "0": {"type": "LINK", "mutability": "MUTABLE",
                  "data": {"url": "http://foo.example.com"}},
            "1": {"type": "LINK", "mutability": "MUTABLE",
                  "data": {"url": "http://bar.example.com"}}
        },
        "blocks": [
            {"key": "dem5p", "text": "some paragraph text", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [],
             "entityRanges": [
                 {"offset": 5, "length": 9, "key": 0},
                 {"offset": 2, "length": 9, "key": 1}
             ]}
        ]
    }));
    assert!(matches!(result, Err(Error::InvalidEntity { .. })));
}

#[test]
fn test_nested_entities_succeed() {
    let html = export(json!({
        "entityMap": {
            "0": {"type": "LINK", "data": {"url": "http://outer.example"}},
            "1": {"type": "LINK", "data": {"url": "http://inner.example"}}
        },
        "blocks": [
            {"key": "k", "text": "abcdef", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [],
             "entityRanges": [
                 {"offset": 0, "length": 6, "key": 0},
                 {"offset": 2, "length": 2, "key": 1}
             ]}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            r#"<a href="http://outer.example" class="foobar-baz">ab"#,
            r#"<a href="http://inner.example" class="foobar-baz">cd</a>"#,
            "ef</a>",
            "</div>",
        )
    );
}

#[test]
fn test_style_and_entity_starting_at_same_offset() {
    let html = export(json!({
        "entityMap": {
            "0": {"type": "LINK", "data": {"url": "http://example.com"}}
        },
        "blocks": [
            {"key": "k", "text": "some paragraph text", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [{"offset": 5, "length": 9, "style": "BOLD"}],
             "entityRanges": [{"offset": 5, "length": 9, "key": 0}]}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>some ",
            r#"<a href="http://example.com" class="foobar-baz">"#,
            r#"<span style="font-weight: bold;">paragraph</span>"#,
            "</a> text</div>",
        )
    );
}

#[test]
fn test_wrapped_blocks_share_one_list() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "dem5p", "text": "item1", "type": "unordered-list-item", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []},
            {"key": "dem5q", "text": "item2", "type": "unordered-list-item", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(html, r#"<ul class="x"><li>item1</li><li>item2</li></ul>"#);
}

#[test]
fn test_depth_driven_list_nesting() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "a", "text": "item1", "type": "unordered-list-item", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []},
            {"key": "b", "text": "item2", "type": "unordered-list-item", "depth": 1,
             "inlineStyleRanges": [], "entityRanges": []},
            {"key": "c", "text": "item3", "type": "unordered-list-item", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<ul class="x">"#,
            "<li>item1</li>",
            r#"<ul class="x"><li>item2</li></ul>"#,
            "<li>item3</li>",
            "</ul>",
        )
    );
}

#[test]
fn test_text_is_escaped() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "k", "text": "<> Hey &", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(html, "<div>&lt;&gt; Hey &amp;</div>");

    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "k", "text": "it's \"quoted\"", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(html, "<div>it&#39;s &quot;quoted&quot;</div>");
}

#[test]
fn test_utf8_text_passes_through() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "ckf8d", "text": "Russian: Привет, мир!", "type": "unordered-list-item",
             "depth": 0, "inlineStyleRanges": [], "entityRanges": [], "data": {}},
            {"key": "fi809", "text": "Japanese: 曖昧さ回避", "type": "unordered-list-item",
             "depth": 0, "inlineStyleRanges": [], "entityRanges": [], "data": {}}
        ]
    }))
    .unwrap();
    assert_eq!(
        html,
        r#"<ul class="x"><li>Russian: Привет, мир!</li><li>Japanese: 曖昧さ回避</li></ul>"#
    );
}

#[test]
fn test_unknown_block_type_uses_fallback_and_fails_without() {
    let html = export(json!({
        "entityMap": {},
        "blocks": [
            {"key": "k", "text": "mystery", "type": "new-fangled", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    }))
    .unwrap();
    assert_eq!(html, "<div>mystery</div>");

    let config = ExporterConfig {
        block_map: BlockMap::new().with_block("header-one", BlockTypeOptions::new("h1")),
        ..test_config()
    };
    let result = HtmlExporter::new(config).export(&content(json!({
        "entityMap": {},
        "blocks": [
            {"key": "k", "text": "mystery", "type": "new-fangled", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []}
        ]
    })));
    assert!(matches!(result, Err(Error::UnknownBlockType(t)) if t == "new-fangled"));
}

#[test]
fn test_export_is_deterministic() {
    let value = json!({
        "entityMap": {
            "0": {"type": "LINK", "data": {"url": "http://example.com"}}
        },
        "blocks": [
            {"key": "a", "text": "Header", "type": "header-one", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": []},
            {"key": "b", "text": "styled and linked", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [{"offset": 0, "length": 6, "style": "BOLD"}],
             "entityRanges": [{"offset": 11, "length": 6, "key": 0}]}
        ]
    });
    assert_eq!(export(value.clone()).unwrap(), export(value).unwrap());
}

proptest! {
    /// Arbitrarily crossing (even out-of-range) style ranges never fail under
    /// a skip policy, and repeated exports are byte-identical.
    #[test]
    fn prop_style_overlap_is_tolerated_and_deterministic(
        text in "[a-zA-Z <>&']{0,30}",
        ranges in prop::collection::vec(
            (0usize..40, 0usize..40, prop::sample::select(vec!["BOLD", "ITALIC", "MYSTERY"])),
            0..5,
        ),
    ) {
        let style_ranges: Vec<Value> = ranges
            .iter()
            .map(|(offset, length, style)| {
                json!({"offset": offset, "length": length, "style": style})
            })
            .collect();
        let value = json!({
            "entityMap": {},
            "blocks": [
                {"key": "k", "text": text, "type": "unstyled", "depth": 0,
                 "inlineStyleRanges": style_ranges, "entityRanges": []}
            ]
        });
        let exporter = HtmlExporter::new(test_config());
        let first = exporter.export(&content(value.clone())).unwrap();
        let second = exporter.export(&content(value)).unwrap();
        prop_assert_eq!(first, second);
    }
}
