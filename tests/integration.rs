//! Integration tests for chatmark.
//!
//! End-to-end scenarios through the segmenter, the inline resolver, the
//! render tree and each writer.

use chatmark_ansi::utils::visible;
use chatmark_config::{Config, Palette};
use chatmark_core::LineRange;
use chatmark_parser::{resolve_inline, segment, segment_located, Block, BlockParser, InlineSpan};
use chatmark_render::terminal::render_to_string;
use chatmark_render::{
    copy_code, render, to_json_value, Clipboard, CopyStatus, HtmlWriter, RenderBlock,
    RenderOptions, Renderer, StreamBuffer,
};

fn s(v: &str) -> String {
    v.to_string()
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

// =============================================================================
// Segmenter Scenarios
// =============================================================================

#[test]
fn test_fence_takes_precedence_over_heading() {
    let blocks = segment("```js\n# not a heading\nconsole.log(1)\n```");
    assert_eq!(
        blocks,
        vec![Block::CodeBlock {
            language: Some(s("js")),
            lines: strings(&["# not a heading", "console.log(1)"]),
        }]
    );
    assert!(!blocks.iter().any(|b| matches!(b, Block::Heading { .. })));
}

#[test]
fn test_blank_line_separates_lists() {
    assert_eq!(
        segment("- a\n- b\n\n1. x\n1. y"),
        vec![
            Block::UnorderedList {
                items: strings(&["a", "b"])
            },
            Block::OrderedList {
                items: strings(&["x", "y"])
            },
        ]
    );
}

#[test]
fn test_table_scenario() {
    assert_eq!(
        segment("|A|B|\n|-|-|\n|1|2|"),
        vec![Block::Table {
            header_cells: strings(&["A", "B"]),
            rows: vec![strings(&["1", "2"])],
        }]
    );
}

#[test]
fn test_single_row_table_becomes_paragraph() {
    assert_eq!(
        segment("|only one row|"),
        vec![Block::Paragraph {
            text: s("|only one row|")
        }]
    );
}

#[test]
fn test_unterminated_fence_keeps_lines() {
    assert_eq!(
        segment("text\n```py\nx = 1"),
        vec![
            Block::Paragraph { text: s("text") },
            Block::CodeBlock {
                language: Some(s("py")),
                lines: strings(&["x = 1"]),
            },
        ]
    );
}

#[test]
fn test_mixed_document() {
    let document = "\
# Answer

Here is the plan:

1. Read the input
2. Write the output

> Keep it short

|Step|Cost|
|---|---|
|read|1|

```python
print('done')
```
Thanks!";

    let kinds: Vec<_> = segment(document).iter().map(Block::kind).collect();
    let expected: Vec<_> = [
        Block::Heading { level: 1, text: s("Answer") },
        Block::Paragraph { text: s("Here is the plan:") },
        Block::OrderedList { items: vec![] },
        Block::BlockQuote { text: s("Keep it short") },
        Block::Table { header_cells: vec![], rows: vec![] },
        Block::CodeBlock { language: None, lines: vec![] },
        Block::Paragraph { text: s("Thanks!") },
    ]
    .iter()
    .map(Block::kind)
    .collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_line_ranges_follow_source() {
    let located = segment_located("# T\n\n- a\n- b\n```\ncode\n```\nend");
    let ranges: Vec<LineRange> = located.iter().map(|l| l.lines).collect();
    assert_eq!(
        ranges,
        vec![
            LineRange::new(0, 1),
            LineRange::new(2, 4),
            LineRange::new(4, 7),
            LineRange::new(7, 8),
        ]
    );
}

#[test]
fn test_line_by_line_matches_whole_document() {
    let document = "# T\n- a\n- b\n|x|y|\n|-|-|\n|1|2|\ntail";
    let mut parser = BlockParser::new();
    let mut blocks = Vec::new();
    for line in document.split('\n') {
        blocks.extend(parser.parse_line(line).into_iter().map(|l| l.value));
    }
    blocks.extend(parser.finalize().into_iter().map(|l| l.value));
    assert_eq!(blocks, segment(document));
}

#[test]
fn test_segment_is_idempotent() {
    let document = "## H\n* x\n* y\n> q\n```\n|not|a|table|\n```";
    assert_eq!(segment(document), segment(document));
}

// =============================================================================
// Inline Scenarios
// =============================================================================

#[test]
fn test_nested_emphasis() {
    assert_eq!(
        resolve_inline("**bold *and* nested**"),
        vec![InlineSpan::Bold(vec![
            InlineSpan::text("bold "),
            InlineSpan::Italic(vec![InlineSpan::text("and")]),
            InlineSpan::text(" nested"),
        ])]
    );
}

#[test]
fn test_unmatched_asterisk_stays_plain() {
    assert_eq!(resolve_inline("a * b"), vec![InlineSpan::text("a * b")]);
}

#[test]
fn test_code_span_is_literal() {
    assert_eq!(
        resolve_inline("run `**x**` now"),
        vec![
            InlineSpan::text("run "),
            InlineSpan::InlineCode(s("**x**")),
            InlineSpan::text(" now"),
        ]
    );
}

#[test]
fn test_link_label_is_literal() {
    assert_eq!(
        resolve_inline("see [**docs**](https://example.com)"),
        vec![
            InlineSpan::text("see "),
            InlineSpan::Link {
                label: s("**docs**"),
                url: s("https://example.com"),
            },
        ]
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_terminal_output() {
    let tree = render("## Notes\n- **one**\n- two");
    let out = visible(&render_to_string(&tree, 40, Palette::default()));
    assert_eq!(out, "  Notes\n  • one\n  • two\n");
}

#[test]
fn test_terminal_hides_unsafe_link_target() {
    let tree = render("[click](javascript:alert(1)");
    let out = render_to_string(&tree, 40, Palette::default());
    assert!(!out.contains("javascript"));
    assert_eq!(visible(&out), "  click\n");
}

#[test]
fn test_html_output() {
    let tree = render("# Hi\n|a|b|\n|-|-|\n|<x>|y|");
    assert_eq!(
        HtmlWriter::new().render_tree(&tree),
        "<h1>Hi</h1>\n<table><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>&lt;x&gt;</td><td>y</td></tr></tbody></table>\n"
    );
}

#[test]
fn test_json_output() {
    let value = to_json_value(&render("> *q*")).unwrap();
    assert_eq!(value["blocks"][0]["type"], "block_quote");
    assert_eq!(value["blocks"][0]["spans"][0]["italic"][0]["plain_text"], "q");
}

#[test]
fn test_config_drives_rendering() {
    let config: Config = toml::from_str(
        "[features]\nLineNumbers = true\nHighlight = false\n",
    )
    .unwrap();
    let tree = Renderer::new(RenderOptions::from(&config.features)).render("```js\nlet a\n```");
    let view = tree.code_blocks().next().unwrap();
    assert!(view.line_numbers);
    assert!(view.lines[0].tokens.iter().all(|t| t.is_plain()));
}

// =============================================================================
// Streaming
// =============================================================================

#[test]
fn test_stream_in_small_chunks() {
    let document = "# Title\nSome **bold** text\n- a\n- b\n```rust\nfn main() {}\n```\nbye";
    let mut buffer = StreamBuffer::default();
    let mut seen = Vec::new();

    for chunk in document.as_bytes().chunks(3) {
        buffer.push(std::str::from_utf8(chunk).unwrap());
        // Every partial render is total, even mid-markup
        let _ = buffer.render();
        seen.extend(buffer.take_new_settled());
    }
    seen.extend(buffer.finish());

    assert_eq!(seen, render(document).blocks);
}

// =============================================================================
// Clipboard
// =============================================================================

#[derive(Default)]
struct Recorder {
    copied: Vec<String>,
}

impl Clipboard for Recorder {
    fn copy(&mut self, text: &str) -> chatmark_core::Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_copy_uses_original_text() {
    let tree = Renderer::new(RenderOptions {
        line_numbers: true,
        ..RenderOptions::default()
    })
    .render("```js\nconst a = \"x\";\nlet b = 2;\n```");

    let mut recorder = Recorder::default();
    let view = tree.code_blocks().next().unwrap();
    assert_eq!(copy_code(view, &mut recorder), CopyStatus::Copied);
    assert_eq!(recorder.copied, vec![s("const a = \"x\";\nlet b = 2;")]);
}

#[test]
fn test_code_block_in_tree() {
    let tree = render("```json\n{\"a\": 1}\n```");
    assert!(matches!(
        &tree.blocks[0],
        RenderBlock::CodeBlock(view) if view.language.as_deref() == Some("json")
    ));
}
