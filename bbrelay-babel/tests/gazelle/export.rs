use crate::common::{fixture, nodes};
use bbrelay_babel::format::Format;
use bbrelay_babel::formats::GazelleFormat;
use bbrelay_babel::{Alignment, Node};
use insta::assert_snapshot;

fn to_gazelle(html: &str) -> String {
    GazelleFormat
        .serialize(&nodes(html))
        .expect("gazelle serialization")
}

#[test]
fn bold() {
    assert_snapshot!(to_gazelle("<b>Hi</b>"), @"[b]Hi[/b]");
}

#[test]
fn named_quote() {
    assert_snapshot!(
        to_gazelle(&fixture("gazelle_named_quote.html")),
        @"[quote=Alice]Hello [b]world[/b][/quote]Thanks!"
    );
}

#[test]
fn spoiler_collapse() {
    assert_snapshot!(to_gazelle(&fixture("gazelle_spoiler.html")), @r"
[hide=Tracklist]1. Intro
2. Outro[/hide][b]Enjoy[/b]
");
}

#[test]
fn hidden_table() {
    assert_snapshot!(
        to_gazelle(&fixture("gazelle_hidden_table.html")),
        @"[hide=Spoiler][b]X[/b][/hide]"
    );
}

#[test]
fn styled_spans() {
    assert_snapshot!(
        to_gazelle(&fixture("styled_spans.html")),
        @"[color=#ff0000][b]red[/b][/color] [size=4]big[/size] [align=center]mid[/align]"
    );
}

#[test]
fn release_table() {
    assert_snapshot!(
        to_gazelle(&fixture("release_table.html")),
        @"[align=center]Tracks[/align][table][tr][td]#[/td][td]Title[/td][/tr][tr][td]1[/td][td]Intro[/td][/tr][/table]"
    );
}

#[test]
fn lists_use_star_and_hash_items() {
    assert_snapshot!(to_gazelle("<ul><li>a</li><li>b</li></ul>"), @r"
[*]a
[*]b
");
    assert_snapshot!(to_gazelle("<ol><li>one</li><li>two</li></ol>"), @r"
[#]one
[#]two
");
}

#[test]
fn spoiler_and_masks_become_hide() {
    let out = GazelleFormat
        .serialize(&[
            Node::spoiler(vec![Node::text("s")]),
            Node::collapse("", vec![Node::text("c")]),
        ])
        .unwrap();
    assert_eq!(out, "[hide]s[/hide][hide]c[/hide]");
}

#[test]
fn text_with_markup_is_plain_wrapped() {
    assert_snapshot!(
        to_gazelle("write [b]bold[/b] like this"),
        @"[plain]write [b]bold[/b] like this[/plain]"
    );
}

#[test]
fn literal_plain_close_stays_inside_the_wrapper() {
    assert_snapshot!(
        to_gazelle("see [/plain][b]x"),
        @"[plain]see [[/plain][plain]/plain][b]x[/plain]"
    );
}

#[test]
fn tag_split_across_spans_is_escaped() {
    assert_snapshot!(
        to_gazelle("<span>[b</span><span>]bold</span>"),
        @"[plain][b]bold[/plain]"
    );
    let out = GazelleFormat
        .serialize(&[Node::text("[b"), Node::text("]bold")])
        .unwrap();
    assert_eq!(out, "[plain][b]bold[/plain]");
}

#[test]
fn images_carry_alt_as_content() {
    let out = GazelleFormat
        .serialize(&[Node::image("https://i.test/a.png", "cover")])
        .unwrap();
    assert_eq!(out, "[img=https://i.test/a.png]cover[/img]");
}

#[test]
fn heading_and_alignment_keep_values() {
    let out = GazelleFormat
        .serialize(&[
            Node::heading(2, vec![Node::text("h")]),
            Node::align(Alignment::Right, vec![Node::text("r")]),
            Node::horizontal_rule(),
        ])
        .unwrap();
    assert_eq!(out, "[h=2]h[/h][align=right]r[/align][hr]");
}
