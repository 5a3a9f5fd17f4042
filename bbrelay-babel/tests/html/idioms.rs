use crate::common::{fixture, import, nodes};
use bbrelay_babel::Node;

#[test]
fn named_quote_consumes_siblings_up_to_the_blockquote() {
    let imported = nodes(&fixture("gazelle_named_quote.html"));
    assert_eq!(
        imported,
        vec![
            Node::quote(
                "Alice",
                vec![Node::text("Hello "), Node::bold(vec![Node::text("world")])]
            ),
            Node::text("Thanks! "),
        ]
    );
}

#[test]
fn named_quote_body_is_imported_once() {
    let imported = nodes(
        r#"<a onclick="QuoteJump(event, '1')"><strong>A</strong></a><span>x</span><blockquote>body</blockquote>"#,
    );
    assert_eq!(imported, vec![Node::quote("A", vec![Node::text("body")])]);
}

#[test]
fn spoiler_collapse_skips_the_toggle_trailer() {
    let imported = nodes(&fixture("gazelle_spoiler.html"));
    assert_eq!(
        imported,
        vec![
            Node::collapse("Tracklist", vec![Node::text("1. Intro\n2. Outro")]),
            Node::bold(vec![Node::text("Enjoy")]),
            Node::text(" "),
        ]
    );
}

#[test]
fn bold_without_toggle_is_plain_bold() {
    let imported = nodes(r#"<strong>T</strong>: <a href="/x">link</a>"#);
    assert_eq!(
        imported,
        vec![
            Node::bold(vec![Node::text("T")]),
            Node::text(": "),
            Node::link("https://tracker.test/x", vec![Node::text("link")]),
        ]
    );
}

#[test]
fn hidden_table_becomes_collapse() {
    let imported = nodes(&fixture("gazelle_hidden_table.html"));
    assert_eq!(
        imported[0],
        Node::collapse("Spoiler", vec![Node::bold(vec![Node::text("X")])])
    );
}

#[test]
fn code_block_splices_the_body() {
    let imported = nodes(&fixture("nexusphp_code.html"));
    assert_eq!(imported, vec![Node::text("x = 1 after ")]);
}

#[test]
fn code_block_with_hidden_main_splices_both_parts() {
    let imported = nodes(
        r#"<div class="codetop">Code</div><div>head</div><div><div class="codemain">tail</div></div><b>z</b>"#,
    );
    assert_eq!(
        imported,
        vec![
            Node::text("headtail"),
            Node::bold(vec![Node::text("z")]),
        ]
    );
}

#[test]
fn fieldset_legend_titles_the_quote() {
    let imported = nodes(&fixture("nexusphp_fieldset.html"));
    assert_eq!(
        imported[0],
        Node::quote("Quote: Bob", vec![Node::text("Hi there")])
    );
}

#[test]
fn fieldset_without_legend_is_untitled() {
    let imported = nodes("<fieldset>plain</fieldset>");
    assert_eq!(imported, vec![Node::quote("", vec![Node::text("plain")])]);
}

#[test]
fn quote_header_pairs_with_next_blockquote() {
    let imported = nodes(&fixture("nexusphp_quoteheader.html"));
    assert_eq!(imported[0], Node::quote("Carol", vec![Node::text("msg")]));
}

#[test]
fn mature_warnings_are_skipped() {
    let import = import(r#"<div class="mature">NSFW</div>ok"#);
    assert_eq!(import.nodes, vec![Node::text("ok")]);
    assert!(import.diagnostics.is_empty());
}

#[test]
fn masked_span_becomes_spoiler() {
    let imported = nodes(r#"<span class="mask">secret</span>"#);
    assert_eq!(imported, vec![Node::spoiler(vec![Node::text("secret")])]);
}

#[test]
fn sub_paragraph_becomes_heading() {
    let imported = nodes(r#"<p class="sub">Notes</p>"#);
    assert_eq!(imported, vec![Node::heading(2, vec![Node::text("Notes")])]);
}

#[test]
fn list_icon_becomes_empty_item() {
    let imported = nodes(r#"<img class="listicon" src="/i.png">one"#);
    assert_eq!(
        imported,
        vec![Node::list_item(vec![]), Node::text("one")]
    );
}
