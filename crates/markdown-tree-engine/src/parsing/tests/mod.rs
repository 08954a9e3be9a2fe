//! Document-level tests for the parsing module.
//!
//! Exercises block classification and assembly end to end through `parse`.
//! Every result is also run through the snapshot invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseOptions,
    blocks::{CodeLine, ListItem, MarkdownNode},
    inline::{Inline, TextRun, parse_text},
    parse, parse_with_options, snapshot,
};

fn parse_checked(md: &str) -> Vec<MarkdownNode> {
    let nodes = parse(md);
    snapshot::invariants(&nodes);
    nodes
}

fn para(text: &str) -> MarkdownNode {
    MarkdownNode::Paragraph {
        inline: parse_text(text),
    }
}

fn header(level: u8, text: &str) -> MarkdownNode {
    MarkdownNode::Header {
        level,
        inline: parse_text(text),
    }
}

fn item(text: &str, indent: usize, children: Vec<ListItem>) -> ListItem {
    ListItem {
        inline: parse_text(text),
        children,
        indent,
        completed: None,
    }
}

fn task(text: &str, indent: usize, completed: bool) -> ListItem {
    ListItem {
        completed: Some(completed),
        ..item(text, indent, vec![])
    }
}

fn code(text: &str, indent: usize) -> CodeLine {
    CodeLine {
        text: text.to_string(),
        indent,
    }
}

// Blank lines

#[test]
fn three_blank_lines_make_one_break() {
    assert_eq!(
        parse_checked("a\n\n\n\nb"),
        vec![para("a"), MarkdownNode::Break { size: 3 }, para("b")]
    );
}

#[test]
fn empty_document_is_one_blank_line() {
    assert_eq!(parse_checked(""), vec![MarkdownNode::Break { size: 1 }]);
}

#[test]
fn trailing_newline_is_a_blank_line() {
    assert_eq!(
        parse_checked("a\n"),
        vec![para("a"), MarkdownNode::Break { size: 1 }]
    );
}

#[test]
fn whitespace_only_lines_are_blank() {
    assert_eq!(
        parse_checked(" \t\n  "),
        vec![MarkdownNode::Break { size: 2 }]
    );
}

// Paragraphs and headers

#[test]
fn each_line_is_its_own_paragraph() {
    assert_eq!(
        parse_checked("one\n  two  "),
        vec![para("one"), para("two")]
    );
}

#[rstest]
#[case("# Title", 1)]
#[case("## Title", 2)]
#[case("###### Title", 6)]
fn atx_headers(#[case] md: &str, #[case] level: u8) {
    assert_eq!(parse_checked(md), vec![header(level, "Title")]);
}

#[test]
fn header_inline_is_parsed() {
    assert_eq!(
        parse_checked("# **Big** deal"),
        vec![MarkdownNode::Header {
            level: 1,
            inline: vec![
                Inline::Text(TextRun {
                    bold: true,
                    ..TextRun::plain("Big")
                }),
                Inline::Text(TextRun::plain(" deal")),
            ],
        }]
    );
}

#[test]
fn setext_level_one_replaces_paragraph() {
    assert_eq!(parse_checked("Title\n====="), vec![header(1, "Title")]);
}

#[test]
fn setext_level_two_replaces_paragraph() {
    assert_eq!(parse_checked("Title\n---"), vec![header(2, "Title")]);
}

#[test]
fn dashes_without_paragraph_are_a_rule() {
    assert_eq!(
        parse_checked("\n---"),
        vec![
            MarkdownNode::Break { size: 1 },
            MarkdownNode::HorizontalRule
        ]
    );
}

#[test]
fn equals_without_paragraph_is_text() {
    assert_eq!(parse_checked("# H\n=="), vec![header(1, "H"), para("==")]);
}

#[test]
fn setext_only_promotes_immediately_preceding_paragraph() {
    assert_eq!(
        parse_checked("Title\n\n==="),
        vec![
            para("Title"),
            MarkdownNode::Break { size: 1 },
            para("===")
        ]
    );
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
#[case("  -----  ")]
fn horizontal_rules(#[case] md: &str) {
    assert_eq!(parse_checked(md), vec![MarkdownNode::HorizontalRule]);
}

// Lists

#[test]
fn nested_list_placement() {
    assert_eq!(
        parse_checked("- a\n  - b\n- c"),
        vec![MarkdownNode::List {
            items: vec![item("a", 0, vec![item("b", 2, vec![])]), item("c", 0, vec![])],
        }]
    );
}

#[test]
fn deeper_nesting_and_return_to_middle_level() {
    assert_eq!(
        parse_checked("- a\n  - b\n    - c\n  - d"),
        vec![MarkdownNode::List {
            items: vec![item(
                "a",
                0,
                vec![
                    item("b", 2, vec![item("c", 4, vec![])]),
                    item("d", 2, vec![])
                ]
            )],
        }]
    );
}

#[test]
fn all_bullet_markers_share_a_list() {
    assert_eq!(
        parse_checked("- a\n* b\n+ c"),
        vec![MarkdownNode::List {
            items: vec![item("a", 0, vec![]), item("b", 0, vec![]), item("c", 0, vec![])],
        }]
    );
}

#[test]
fn tab_indented_item_nests() {
    assert_eq!(
        parse_checked("- a\n\t- b"),
        vec![MarkdownNode::List {
            items: vec![item("a", 0, vec![item("b", 4, vec![])])],
        }]
    );
}

#[test]
fn bullet_after_paragraph_opens_list() {
    assert_eq!(
        parse_checked("intro\n- a"),
        vec![
            para("intro"),
            MarkdownNode::List {
                items: vec![item("a", 0, vec![])]
            }
        ]
    );
}

#[test]
fn blank_line_splits_lists() {
    let nodes = parse_checked("- a\n\n- b");
    assert_eq!(nodes.len(), 3);
    assert!(matches!(nodes[0], MarkdownNode::List { .. }));
    assert!(matches!(nodes[2], MarkdownNode::List { .. }));
}

#[test]
fn ordered_list_nesting() {
    assert_eq!(
        parse_checked("1. a\n   2. b\n3. c"),
        vec![MarkdownNode::OrderedList {
            items: vec![item("a", 0, vec![item("b", 3, vec![])]), item("c", 0, vec![])],
        }]
    );
}

#[test]
fn bullet_nested_under_ordered_item_keeps_one_list() {
    assert_eq!(
        parse_checked("1. a\n   - b\n2. c"),
        vec![MarkdownNode::OrderedList {
            items: vec![item("a", 0, vec![item("b", 3, vec![])]), item("c", 0, vec![])],
        }]
    );
}

#[test]
fn root_level_kind_change_starts_new_list() {
    let nodes = parse_checked("1. a\n- b");
    assert_eq!(
        nodes,
        vec![
            MarkdownNode::OrderedList {
                items: vec![item("a", 0, vec![])]
            },
            MarkdownNode::List {
                items: vec![item("b", 0, vec![])]
            },
        ]
    );
}

#[test]
fn task_list_items() {
    assert_eq!(
        parse_checked("- [ ] todo\n- [x] done"),
        vec![MarkdownNode::TaskList {
            items: vec![task("todo", 0, false), task("done", 0, true)],
        }]
    );
}

#[test]
fn bullet_nests_under_task() {
    assert_eq!(
        parse_checked("- [ ] todo\n  - detail"),
        vec![MarkdownNode::TaskList {
            items: vec![ListItem {
                children: vec![item("detail", 2, vec![])],
                ..task("todo", 0, false)
            }],
        }]
    );
}

#[test]
fn task_at_root_after_bullet_starts_new_list() {
    let nodes = parse_checked("- a\n- [x] b");
    assert_eq!(
        nodes,
        vec![
            MarkdownNode::List {
                items: vec![item("a", 0, vec![])]
            },
            MarkdownNode::TaskList {
                items: vec![task("b", 0, true)]
            },
        ]
    );
}

// Code blocks

#[test]
fn fenced_code_block() {
    assert_eq!(
        parse_checked("```rust\nfn main() {\n    println!();\n}\n```"),
        vec![MarkdownNode::CodeBlock {
            language: "rust".into(),
            lines: vec![code("fn main() {", 0), code("println!();", 4), code("}", 0)],
        }]
    );
}

#[test]
fn code_block_content_is_raw() {
    assert_eq!(
        parse_checked("```\n# not a header\n\n- not a list\n```\nafter"),
        vec![
            MarkdownNode::CodeBlock {
                language: String::new(),
                lines: vec![code("# not a header", 0), code("", 0), code("- not a list", 0)],
            },
            para("after"),
        ]
    );
}

#[test]
fn unterminated_fence_swallows_rest() {
    assert_eq!(
        parse_checked("```\na\nb"),
        vec![MarkdownNode::CodeBlock {
            language: String::new(),
            lines: vec![code("a", 0), code("b", 0)],
        }]
    );
}

#[test]
fn fence_with_language_does_not_close() {
    assert_eq!(
        parse_checked("```\n```js\n```"),
        vec![MarkdownNode::CodeBlock {
            language: String::new(),
            lines: vec![code("```js", 0)],
        }]
    );
}

// Blockquotes

#[test]
fn quote_lines_merge_into_one_blockquote() {
    assert_eq!(
        parse_checked("> one\n> two"),
        vec![MarkdownNode::Blockquote {
            children: vec![para("one"), para("two")],
            indent: 0,
        }]
    );
}

#[test]
fn quote_is_reparsed_as_document() {
    assert_eq!(
        parse_checked("> # Title\n> - a\n>   - b"),
        vec![MarkdownNode::Blockquote {
            children: vec![
                header(1, "Title"),
                MarkdownNode::List {
                    items: vec![item("a", 0, vec![item("b", 2, vec![])])],
                },
            ],
            indent: 0,
        }]
    );
}

#[test]
fn nested_quotes() {
    assert_eq!(
        parse_checked("> outer\n> > inner"),
        vec![MarkdownNode::Blockquote {
            children: vec![
                para("outer"),
                MarkdownNode::Blockquote {
                    children: vec![para("inner")],
                    indent: 0,
                },
            ],
            indent: 0,
        }]
    );
}

#[test]
fn quote_indent_is_first_line_indent() {
    let nodes = parse_checked("  > a\n> b");
    assert!(matches!(
        nodes.as_slice(),
        [MarkdownNode::Blockquote { indent: 2, children }] if children.len() == 2
    ));
}

#[test]
fn blank_line_ends_quote() {
    assert_eq!(
        parse_checked("> a\n\n> b"),
        vec![
            MarkdownNode::Blockquote {
                children: vec![para("a")],
                indent: 0
            },
            MarkdownNode::Break { size: 1 },
            MarkdownNode::Blockquote {
                children: vec![para("b")],
                indent: 0
            },
        ]
    );
}

#[test]
fn quote_setext_underline_stays_inside_quote() {
    assert_eq!(
        parse_checked("> Title\n> ==="),
        vec![MarkdownNode::Blockquote {
            children: vec![header(1, "Title")],
            indent: 0,
        }]
    );
}

#[test]
fn quote_depth_limit_flattens_to_paragraphs() {
    let options = ParseOptions {
        max_quote_depth: 1,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with_options("> > # deep", &options),
        vec![MarkdownNode::Blockquote {
            children: vec![MarkdownNode::Blockquote {
                children: vec![para("# deep")],
                indent: 0,
            }],
            indent: 0,
        }]
    );
}

#[test]
fn pathological_quote_nesting_terminates() {
    let md = "> ".repeat(500) + "x";
    let nodes = parse_checked(&md);
    assert_eq!(nodes.len(), 1);
}

#[test]
fn custom_tab_width_changes_nesting() {
    let options = ParseOptions {
        tab_width: 1,
        ..ParseOptions::default()
    };
    let nodes = parse_with_options("  - a\n\t- b", &options);
    assert_eq!(
        nodes,
        vec![MarkdownNode::List {
            items: vec![item("a", 2, vec![]), item("b", 1, vec![])],
        }]
    );
}

// Mixed documents

#[test]
fn parse_is_deterministic() {
    let md = "# T\n\n- a\n  - b\n> q\n```\nx\n```";
    assert_eq!(parse(md), parse(md));
}

#[test]
fn mixed_document() {
    let md = "# Notes\nIntro with a [link](http://e).\n\n---\n1. first\n2. second";
    let nodes = parse_checked(md);
    let kinds: Vec<_> = nodes.iter().map(MarkdownNode::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "header",
            "paragraph",
            "break",
            "horizontal-rule",
            "ordered-list"
        ]
    );
}
