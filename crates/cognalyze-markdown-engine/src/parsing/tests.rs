//! Whole-document parsing tests.
//!
//! Each case parses a small document, checks the structural invariants and
//! pins the result as an inline outline snapshot.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    FormatVersion,
    blocks::{Alignment, BlockKind},
    inline::{InlineSpan, plain_text},
    parse_blocks, parse_document, snapshot,
};

fn outline(text: &str, version: FormatVersion) -> String {
    let doc = parse_document(text, version);
    snapshot::invariants(text, &doc);
    snapshot::outline(&doc).trim_end().to_string()
}

fn plain(s: &str) -> InlineSpan {
    InlineSpan::Plain(s.to_string())
}

// Outline snapshots

#[test]
fn heading_and_formatted_paragraph() {
    let md = "# Title\nSome **bold** and *it* with `code`.";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    Heading(1) lines=0..1
      Plain "Title"
    Paragraph lines=1..2
      Plain "Some ", Bold "bold", Plain " and ", Italic "it", Plain " with ", Code "code", Plain ".""#);
}

#[test]
fn lists_group_by_marker_kind() {
    let md = "- a\n- b\n1. c\n2. d\n* e";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    List(unordered) lines=0..2
      - Plain "a"
      - Plain "b"
    List(ordered) lines=2..4
      - Plain "c"
      - Plain "d"
    List(unordered) lines=4..5
      - Plain "e""#);
}

#[test]
fn table_with_alignment_and_ragged_rows() {
    let md = "| Name | Qty |\n|:---|---:|\n| apple | **3** |\n| pear |\nafter";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    Table[left, right] lines=0..4
      header: Plain "Name" | Plain "Qty"
      row: Plain "apple" | Bold "3"
      row: Plain "pear"
    Paragraph lines=4..5
      Plain "after""#);
}

#[test]
fn blank_line_ends_table() {
    let md = "|a|b|\n|:---:|---|\n|1|2|\n\n|3|4|";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    Table[center, left] lines=0..3
      header: Plain "a" | Plain "b"
      row: Plain "1" | Plain "2"
    Spacer lines=3..4
    Paragraph lines=4..5
      Plain "|3|4|""#);
}

#[test]
fn separator_without_pipe_is_not_a_table() {
    let md = "| a |\n---";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    Paragraph lines=0..1
      Plain "| a |"
    Rule lines=1..2"#);
}

#[test]
fn table_flushes_pending_list() {
    let md = "- a\n| x |\n|---|\n| 1 |";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    List(unordered) lines=0..1
      - Plain "a"
    Table[left] lines=1..4
      header: Plain "x"
      row: Plain "1""#);
}

#[test]
fn failed_table_candidate_keeps_line_order() {
    let md = "- a\n| x |\n- b";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    List(unordered) lines=0..1
      - Plain "a"
    Paragraph lines=1..2
      Plain "| x |"
    List(unordered) lines=2..3
      - Plain "b""#);
}

#[test]
fn quote_rule_and_spacers() {
    let md = "> quote *x*\n\n***\n>";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    BlockQuote lines=0..1
      Plain "quote ", Italic "x"
    Spacer lines=1..2
    Rule lines=2..3
    Paragraph lines=3..4
      Plain ">""#);
}

#[test]
fn legacy_fences_are_single_lines() {
    let md = "```rust let x = 1;```\n```\ncode\n```";
    insta::assert_snapshot!(outline(md, FormatVersion::V1), @r#"
    CodeBlock(rust) lines=0..1
      "let x = 1;"
    CodeBlock lines=1..2
      ""
    Paragraph lines=2..3
      Plain "code"
    CodeBlock lines=3..4
      """#);
}

#[test]
fn multiline_fences_keep_raw_lines() {
    let md = "```py\nprint(1)\n  **raw**\n```\nafter";
    insta::assert_snapshot!(outline(md, FormatVersion::V2), @r#"
    CodeBlock(py) lines=0..4
      "print(1)\n  **raw**"
    Paragraph lines=4..5
      Plain "after""#);
}

#[test]
fn unterminated_multiline_fence_runs_to_end() {
    let md = "- item\n```\n| a |\n|---|";
    insta::assert_snapshot!(outline(md, FormatVersion::V2), @r#"
    List(unordered) lines=0..1
      - Plain "item"
    CodeBlock lines=1..4
      "| a |\n|---|""#);
}

#[test]
fn multiline_fence_keeps_text_on_opening_line() {
    let md = "```js console.log(1)\nmore";
    insta::assert_snapshot!(outline(md, FormatVersion::V2), @r#"
    CodeBlock(js) lines=0..2
      "console.log(1)\nmore""#);
}

#[test]
fn pipe_after_fence_tag_stays_in_code() {
    assert_eq!(
        parse_blocks("```x|y"),
        vec![BlockKind::CodeBlock {
            lang: Some("x".to_string()),
            text: "|y".to_string()
        }]
    );
    assert_eq!(
        parse_document("```x|y", FormatVersion::V2).kinds().collect::<Vec<_>>(),
        vec![&BlockKind::CodeBlock {
            lang: Some("x".to_string()),
            text: "|y".to_string()
        }]
    );
}

#[test]
fn one_line_fence_under_multiline_format() {
    let md = "```sh echo hi```\ntext";
    insta::assert_snapshot!(outline(md, FormatVersion::V2), @r#"
    CodeBlock(sh) lines=0..1
      "echo hi"
    Paragraph lines=1..2
      Plain "text""#);
}

// Direct structural assertions

#[test]
fn empty_input_has_no_blocks() {
    assert!(parse_document("", FormatVersion::V1).is_empty());
    assert!(parse_blocks("").is_empty());
}

#[test]
fn trailing_newline_yields_spacer() {
    assert_eq!(
        parse_blocks("a\n"),
        vec![
            BlockKind::Paragraph {
                text: vec![plain("a")]
            },
            BlockKind::Spacer
        ]
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(parse_blocks("# T\r\n- a\r\n- b"), parse_blocks("# T\n- a\n- b"));
}

#[test]
fn single_heading() {
    assert_eq!(
        parse_blocks("# Title"),
        vec![BlockKind::Heading {
            level: 1,
            text: vec![plain("Title")]
        }]
    );
}

#[rstest]
#[case("## Two", 2)]
#[case("### Three", 3)]
#[case("   # Indented", 1)]
fn heading_levels(#[case] input: &str, #[case] level: u8) {
    assert!(matches!(
        parse_blocks(input).as_slice(),
        [BlockKind::Heading { level: l, .. }] if *l == level
    ));
}

#[rstest]
#[case("#### Four")]
#[case("#NoSpace")]
#[case("# ")]
fn not_headings(#[case] input: &str) {
    assert!(matches!(
        parse_blocks(input).as_slice(),
        [BlockKind::Paragraph { .. }]
    ));
}

#[test]
fn three_bullets_make_one_list() {
    let blocks = parse_blocks("- a\n- b\n- c");
    assert_eq!(
        blocks,
        vec![BlockKind::List {
            ordered: false,
            items: vec![vec![plain("a")], vec![plain("b")], vec![plain("c")]],
        }]
    );
}

#[test]
fn switching_list_kind_starts_new_list() {
    let blocks = parse_blocks("- a\n1. b");
    assert_eq!(
        blocks,
        vec![
            BlockKind::List {
                ordered: false,
                items: vec![vec![plain("a")]],
            },
            BlockKind::List {
                ordered: true,
                items: vec![vec![plain("b")]],
            },
        ]
    );
}

#[test]
fn minimal_table() {
    let blocks = parse_blocks("|A|B|\n|---|---|\n|1|2|");
    assert_eq!(
        blocks,
        vec![BlockKind::Table {
            headers: vec![vec![plain("A")], vec![plain("B")]],
            alignments: vec![Alignment::Left, Alignment::Left],
            rows: vec![vec![vec![plain("1")], vec![plain("2")]]],
        }]
    );
}

#[test]
fn invalid_separator_gives_two_paragraphs() {
    let blocks = parse_blocks("|A|B|\n|not-a-separator|");
    assert_eq!(
        blocks,
        vec![
            BlockKind::Paragraph {
                text: vec![plain("|A|B|")]
            },
            BlockKind::Paragraph {
                text: vec![plain("|not-a-separator|")]
            },
        ]
    );
}

#[test]
fn bold_wins_over_inner_italic() {
    assert_eq!(
        parse_blocks("**a*b*c**"),
        vec![BlockKind::Paragraph {
            text: vec![InlineSpan::Bold("a*b*c".to_string())]
        }]
    );
}

#[test]
fn code_blocks_are_not_inline_formatted() {
    let doc = parse_document("```\n**x** `y`\n```", FormatVersion::V2);
    assert!(matches!(
        doc.kinds().collect::<Vec<_>>().as_slice(),
        [BlockKind::CodeBlock { text, .. }] if text == "**x** `y`"
    ));
}

// Property-style checks over a corpus of awkward inputs

const AWKWARD: &[&str] = &[
    "",
    "\n",
    "\n\n\n",
    "|",
    "||\n||",
    "|---|",
    "```",
    "```\n```\n```",
    "***\n---\n* * *",
    "- \n-\n1.\n1. ",
    "**unclosed *mixed `code",
    "_a_ __b__ *c* **d** `e`",
    "> **q** `c`\n>> not quote",
    "héllo **wörld** `ü`",
    "\r\n\r\n",
    "| a | b |\n| :-: | --: |\n| 1 |\n| 1 | 2 | 3 |",
    "````\nfour\n````",
];

#[rstest]
#[case(FormatVersion::V1)]
#[case(FormatVersion::V2)]
fn parsing_is_total_and_covers_every_line(#[case] version: FormatVersion) {
    for md in AWKWARD {
        let doc = parse_document(md, version);
        snapshot::invariants(md, &doc);
    }
}

#[test]
fn inline_nodes_tile_their_text() {
    for md in AWKWARD {
        for line in md.split('\n') {
            snapshot::check_inline(line);
        }
    }
}

#[rstest]
#[case("plain text", "plain text")]
#[case("**bold** and *it*", "bold and it")]
#[case("`a` __b__ _c_", "a b c")]
#[case("**a*b**c*", "a*bc*")]
#[case("unpaired * and ` stay", "unpaired * and ` stay")]
fn demarked_text_drops_only_markers(#[case] input: &str, #[case] expected: &str) {
    let doc = parse_document(input, FormatVersion::V1);
    let text = match doc.kinds().next() {
        Some(BlockKind::Paragraph { text }) => plain_text(text),
        other => panic!("expected paragraph, got {other:?}"),
    };
    assert_eq!(text, expected);
}
