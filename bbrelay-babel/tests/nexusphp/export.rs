use crate::common::{fixture, nodes};
use bbrelay_babel::format::Format;
use bbrelay_babel::formats::NexusPhpFormat;
use bbrelay_babel::{Alignment, Node};
use insta::assert_snapshot;

fn to_nexusphp(html: &str) -> String {
    NexusPhpFormat
        .serialize(&nodes(html))
        .expect("nexusphp serialization")
}

#[test]
fn fieldset_quote() {
    assert_snapshot!(
        to_nexusphp(&fixture("nexusphp_fieldset.html")),
        @"[quote=Quote: Bob]Hi there[/quote]"
    );
}

#[test]
fn quote_header() {
    assert_snapshot!(
        to_nexusphp(&fixture("nexusphp_quoteheader.html")),
        @"[quote=Carol]msg[/quote]"
    );
}

#[test]
fn code_block_is_spliced() {
    assert_snapshot!(to_nexusphp(&fixture("nexusphp_code.html")), @"x = 1 after");
}

#[test]
fn styled_spans() {
    assert_snapshot!(
        to_nexusphp(&fixture("styled_spans.html")),
        @"[color=#ff0000][b]red[/b][/color] [size=4]big[/size] [center]mid[/center]"
    );
}

#[test]
fn collapse_and_spoiler() {
    assert_snapshot!(
        to_nexusphp(&fixture("gazelle_hidden_table.html")),
        @"[hide=Spoiler][b]X[/b][/hide]"
    );
    assert_snapshot!(
        to_nexusphp(r#"<span class="mask">s</span>"#),
        @"[mask]s[/mask]"
    );
}

#[test]
fn headings_become_sizes() {
    assert_snapshot!(to_nexusphp("<h1>a</h1><h6>b</h6>"), @"[size=7]a[/size][size=2]b[/size]");
}

#[test]
fn code_becomes_monospace_font() {
    assert_snapshot!(to_nexusphp("<code>x</code>"), @"[font=monospace]x[/font]");
}

#[test]
fn nested_lists_are_indented() {
    assert_snapshot!(
        to_nexusphp("<ul><li>a<ol><li>b</li><li>c</li></ol></li><li>d</li></ul>"),
        @r"
[*] a
    [*] 1. b
    [*] 2. c
[*] d
"
    );
}

#[test]
fn unsupported_alignment_keeps_content() {
    let out = NexusPhpFormat
        .serialize(&[Node::align(Alignment::Right, vec![Node::text("r")])])
        .unwrap();
    assert_eq!(out, "r");
}

#[test]
fn markup_in_text_is_broken_with_zero_width_spaces() {
    let out = to_nexusphp("use [b]this[/b]");
    assert_eq!(out, "use [\u{200B}b\u{200B}]this[\u{200B}/b\u{200B}]");
}

#[test]
fn tag_split_across_spans_is_escaped() {
    let out = to_nexusphp("<span>[b</span><span>]bold</span>");
    assert_eq!(out, "[\u{200B}b\u{200B}]bold");

    let out = NexusPhpFormat
        .serialize(&[Node::underline(vec![Node::text("[/"), Node::text("u]")])])
        .unwrap();
    assert_eq!(out, "[u][\u{200B}/u\u{200B}][/u]");
}
