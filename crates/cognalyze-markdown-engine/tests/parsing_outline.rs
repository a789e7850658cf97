use cognalyze_markdown_engine::{
    FormatVersion, Variant,
    parsing::{parse_document, snapshot},
    render_html,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn outline(md: &str, version: FormatVersion) -> String {
    let doc = parse_document(md, version);
    snapshot::invariants(md, &doc);
    snapshot::outline(&doc).trim_end().to_string()
}

#[test]
fn fixture_evaluation_summary() {
    let md = fixture("evaluation_summary");
    insta::assert_snapshot!(outline(&md, FormatVersion::V1), @r#"
    Heading(1) lines=0..1
      Plain "Executive Summary"
    Spacer lines=1..2
    Paragraph lines=2..3
      Plain "The candidate showed ", Bold "strong", Plain " analytical skills."
    Spacer lines=3..4
    Heading(2) lines=4..5
      Plain "Criteria"
    Spacer lines=5..6
    Table[left, center, right] lines=6..10
      header: Plain "Criterion" | Plain "Weight" | Plain "Score"
      row: Plain "Clarity" | Plain "40%" | Italic "8"
      row: Plain "Depth" | Plain "60%" | Code "9"
    Spacer lines=10..11
    Heading(3) lines=11..12
      Plain "Notes"
    List(unordered) lines=12..14
      - Plain "Answers were ", Bold "concise"
      - Plain "Examples were relevant"
    List(ordered) lines=14..16
      - Plain "Improve structure"
      - Plain "Cite sources"
    Spacer lines=16..17
    BlockQuote lines=17..18
      Plain "Overall a ", Italic "solid", Plain " result."
    Rule lines=18..19
    Spacer lines=19..20
    "#);
}

#[test]
fn fixture_multiline_fence() {
    let md = fixture("multiline_fence");
    insta::assert_snapshot!(outline(&md, FormatVersion::V2), @r#"
    Paragraph lines=0..1
      Plain "Setup:"
    CodeBlock(toml) lines=1..5
      "[editor]\nshow_preview = true"
    List(unordered) lines=5..6
      - Plain "done"
    Spacer lines=6..7
    "#);
}

#[test]
fn fixture_multiline_fence_under_legacy_format() {
    let md = fixture("multiline_fence");
    insta::assert_snapshot!(outline(&md, FormatVersion::V1), @r#"
    Paragraph lines=0..1
      Plain "Setup:"
    CodeBlock(toml) lines=1..2
      ""
    Paragraph lines=2..3
      Plain "[editor]"
    Paragraph lines=3..4
      Plain "show_preview = true"
    CodeBlock lines=4..5
      ""
    List(unordered) lines=5..6
      - Plain "done"
    Spacer lines=6..7
    "#);
}

/// Every variant renders the same elements, only the classes differ.
#[test]
fn variants_render_same_structure() {
    let md = fixture("evaluation_summary");
    let strip_classes = |html: String| {
        html.split("class=\"")
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    part.to_string()
                } else {
                    part.split_once('"')
                        .map(|(_, rest)| rest.to_string())
                        .unwrap_or_default()
                }
            })
            .collect::<String>()
    };

    let baseline = strip_classes(render_html(&md, Variant::Default, FormatVersion::V1));
    for variant in [Variant::Compact, Variant::Rich] {
        assert_eq!(
            strip_classes(render_html(&md, variant, FormatVersion::V1)),
            baseline
        );
    }
    assert!(baseline.contains("<strong >strong</strong>"));
}
