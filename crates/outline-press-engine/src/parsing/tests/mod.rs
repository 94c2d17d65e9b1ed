//! Scenario tests for article extraction.
//!
//! Fixtures (.md) live in `fixtures/` and are real-looking journal and page
//! documents; the remaining tests build their input inline.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::ArticleKind;
use crate::parsing::{ParseOptions, parse_document, parse_source};

const MARK: &str = "((MARK))";
const END: &str = "🏁";

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

#[test]
fn two_marker_blocks_with_fenced_code() {
    let text = "- ((MARK)) Title A\n\tcontent line\n\t```py\n\tcode();\n\t```\n- ((MARK)) Title B\n\tother content";

    let articles = parse_document(text, MARK, END);

    let titles: Vec<_> = articles.iter().map(|a| a.title()).collect();
    assert_eq!(titles, ["Title A", "Title B"]);
    assert_eq!(
        articles[0].body(),
        "  content line\n  ```py\n  code();\n  ```"
    );
    assert!(!articles[0].body().contains("Title B"));
    assert!(!articles[0].body().contains("other content"));
    assert_eq!(articles[1].body(), "  other content");
}

#[test]
fn journal_fixture() {
    let articles = parse_document(&fixture("journal_two_articles"), MARK, END);
    assert_eq!(articles.len(), 2);

    let first = &articles[0];
    assert_eq!(first.title(), "Writing a Parser");
    assert_eq!(first.kind(), ArticleKind::Block);
    assert!(!first.is_draft());
    let properties: Vec<_> = first.properties().iter().collect();
    assert_eq!(
        properties,
        [
            ("slug", "writing-a-parser"),
            ("tags", "rust, parsing"),
            ("draft", "false"),
        ]
    );
    insta::assert_snapshot!(first.body(), @r"
- Intro paragraph with [[Some-Page]]
  continues on a second line
- ## Section One
  - nested point
    - deeper point
- ```python
    def parse(line):
        return line.strip()
  ```
- Closing thought
");

    let second = &articles[1];
    assert_eq!(second.title(), "Second Article");
    assert!(second.properties().is_empty());
    assert_eq!(second.body(), "- only line");
}

#[test]
fn space_indented_fixture() {
    let articles = parse_document(&fixture("space_indented"), MARK, END);

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title(), "Spaces Article");
    assert_eq!(
        articles[0].body(),
        "- first\n  - second\n      wrapped continuation\n- third"
    );
}

#[test]
fn nested_markers_fixture() {
    let articles = parse_document(&fixture("nested_markers"), MARK, END);

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title(), "Nested Article");
    assert_eq!(articles[0].body(), "- child one\n- child two");
    assert!(!articles[0].body().contains("sibling after"));

    assert_eq!(articles[1].title(), "Draft Article");
    assert!(articles[1].is_draft());
    assert_eq!(articles[1].body(), "- wip");
}

#[test]
fn whole_file_fixture() {
    let articles = parse_document(&fixture("whole_file_page"), MARK, END);

    assert_eq!(articles.len(), 1);
    let page = &articles[0];
    assert_eq!(page.kind(), ArticleKind::WholeFile);
    assert_eq!(page.title(), "Legacy Page");
    assert_eq!(page.properties().get("date"), Some("2023-11-05"));
    assert_eq!(page.properties().get("tags"), Some("notes, archive"));
    assert_eq!(
        page.body(),
        "# Legacy Page\n\nBody text with [[A Link]] kept verbatim."
    );
}

#[rstest]
#[case("")]
#[case("\t")]
#[case("\t\t\t")]
fn fenced_code_is_only_shifted(#[case] anchor: &str) {
    let code = [
        "fn main() {",
        "    let x = 1;",
        "\tif x > 0 {",
        "",
        "- not a bullet",
        "((MARK)) not a marker",
        "}",
    ];
    let mut text = format!("{anchor}- ((MARK)) Code\n{anchor}\t- ```rust\n");
    for line in code {
        if !line.is_empty() {
            text.push_str(&format!("{anchor}\t  {line}"));
        }
        text.push('\n');
    }
    text.push_str(&format!("{anchor}\t  ```\n"));

    let articles = parse_document(&text, MARK, END);

    assert_eq!(articles.len(), 1);
    let body: Vec<_> = articles[0].body().lines().collect();
    assert_eq!(body.first(), Some(&"- ```rust"));
    assert_eq!(body.last(), Some(&"  ```"));
    let expected: Vec<String> = code
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect();
    assert_eq!(body[1..body.len() - 1], expected[..]);
}

#[test]
fn sibling_blocks_share_no_lines() {
    let text = "\
- ((MARK)) First
\t- alpha
\t\t- alpha child
- ((MARK)) Second
\t- beta
\t\t- beta child
";
    let articles = parse_document(text, MARK, END);
    assert_eq!(articles.len(), 2);

    let first: HashSet<_> = articles[0].body().lines().map(str::trim).collect();
    let second: HashSet<_> = articles[1].body().lines().map(str::trim).collect();
    assert!(first.is_disjoint(&second));
    assert!(first.contains("- alpha child"));
    assert!(second.contains("- beta child"));
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn every_property_pair_is_extracted(#[case] count: usize) {
    let mut text = String::from("- ((MARK)) Props\n\t- frontmatter\n");
    for i in 0..count {
        text.push_str(&format!("\t\t- key{i}: value {i}\n"));
    }
    text.push_str("\t- body");

    let articles = parse_document(&text, MARK, END);

    let properties = articles[0].properties();
    assert_eq!(properties.len(), count);
    for i in 0..count {
        assert_eq!(
            properties.get(&format!("key{i}")),
            Some(format!("value {i}").as_str())
        );
    }
    assert_eq!(articles[0].body(), "- body");
}

#[test]
fn end_token_hides_later_blocks() {
    let text = "- ((MARK)) A\n\t- a\n- ((MARK)) B\n\t- b\n- 🏁\n- ((MARK)) C\n\t- c";

    let articles = parse_document(text, MARK, END);

    let titles: Vec<_> = articles.iter().map(|a| a.title()).collect();
    assert_eq!(titles, ["A", "B"]);
}

#[test]
fn first_descendant_level_collapses_per_block() {
    let text = "\
- ((MARK)) Top
\t- top child
\t\t- top grandchild
- Parent
\t- ((MARK)) Deep
\t\t- deep child
\t\t\t- deep grandchild
";
    let articles = parse_document(text, MARK, END);

    assert_eq!(articles[0].body(), "- top child\n  - top grandchild");
    assert_eq!(articles[1].body(), "- deep child\n  - deep grandchild");
}

#[test]
fn whole_file_body_keeps_its_indentation() {
    let text = "---\ntitle: Kept\n---\n- item\n\t- nested\n    four spaces\n";

    let articles = parse_document(text, MARK, END);

    assert_eq!(articles[0].body(), "- item\n\t- nested\n    four spaces");
}

#[test]
fn marker_blocks_win_over_header() {
    let text = "---\ntitle: Page\n---\n- ((MARK)) Inner\n\t- content";

    let articles = parse_document(text, MARK, END);

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].kind(), ArticleKind::Block);
    assert_eq!(articles[0].title(), "Inner");
}

#[test]
fn whole_file_mode_is_opt_in() {
    let options = ParseOptions::new(MARK);
    let articles = parse_source(&fixture("whole_file_page"), "pages/legacy.md", &options);
    assert!(articles.is_empty());

    let articles = parse_source(
        &fixture("whole_file_page"),
        "pages/legacy.md",
        &options.with_whole_file(true),
    );
    assert_eq!(articles[0].source_file(), "pages/legacy.md");
}

#[test]
fn malformed_header_yields_nothing() {
    let text = "---\ntitle: Broken\nnot a property\n---\nbody";
    assert!(parse_document(text, MARK, END).is_empty());
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("- plain journal entry\n\t- no markers here")]
fn documents_without_articles(#[case] text: &str) {
    assert!(parse_document(text, MARK, END).is_empty());
}

#[test]
fn crlf_line_endings() {
    let articles = parse_document("- ((MARK)) Windows\r\n\t- a1\r\n\t- a2\r\n", MARK, END);
    assert_eq!(articles[0].title(), "Windows");
    assert_eq!(articles[0].body(), "- a1\n- a2");
}

#[test]
fn nested_marker_is_an_independent_article() {
    let text = "\
- ((MARK)) Outer
\t- intro
\t- ((MARK)) Inner
\t\t- inner child
\t- outer again
";
    let articles = parse_document(text, MARK, END);

    let titles: Vec<_> = articles.iter().map(|a| a.title()).collect();
    assert_eq!(titles, ["Outer", "Inner"]);
    assert_eq!(articles[0].body(), "- intro");
    assert_eq!(articles[1].body(), "- inner child");
    assert!(articles.iter().all(|a| !a.body().contains(MARK)));
}

#[test]
fn unindented_fence_belongs_to_the_open_block() {
    let text = "- ((MARK)) A\n\t- a1\n```\ncode();\n```\n\t- a2";

    let articles = parse_document(text, MARK, END);

    let body: Vec<_> = articles[0].body().lines().collect();
    assert!(body.contains(&"  code();"));
    assert_eq!(body.last(), Some(&"- a2"));
}

#[test]
fn end_token_inside_frontmatter_hides_later_blocks() {
    let text = "- ((MARK)) A\n\t- frontmatter\n\t\t- slug: a\n\t\t- 🏁\n- ((MARK)) B\n\t- b";

    let articles = parse_document(text, MARK, END);

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title(), "A");
}

#[test]
fn whole_file_header_is_yaml() {
    let text = "---\ntitle: Post\ndescription: >\n  first line\n  second line\nauthor: {name: Ann}\n---\nBody";

    let articles = parse_document(text, MARK, END);

    assert_eq!(articles.len(), 1);
    let properties = articles[0].properties();
    assert_eq!(
        properties.get("description"),
        Some("first line second line\n")
    );
    assert_eq!(properties.get("author"), Some("name: Ann"));
}
