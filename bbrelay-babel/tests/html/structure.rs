use crate::common::{fixture, nodes};
use bbrelay_babel::{Alignment, Node};

#[test]
fn line_breaks_join_text() {
    assert_eq!(nodes("a<br>b"), vec![Node::text("a\nb")]);
}

#[test]
fn whitespace_runs_collapse() {
    assert_eq!(nodes("a \n\t  b"), vec![Node::text("a b")]);
}

#[test]
fn pre_keeps_text_verbatim() {
    assert_eq!(
        nodes("<pre>a   b\n  c</pre>"),
        vec![Node::pre("", vec![Node::text("a   b\n  c")])]
    );
}

#[test]
fn lists_hold_one_item_per_child() {
    assert_eq!(
        nodes("<ul><li>a</li><li>b</li></ul>"),
        vec![Node::unordered_list(vec![
            Node::list_item(vec![Node::text("a")]),
            Node::list_item(vec![Node::text("b")]),
        ])]
    );
    assert_eq!(
        nodes("<ol><li>x</li></ol>"),
        vec![Node::ordered_list(vec![Node::list_item(vec![Node::text("x")])])]
    );
}

#[test]
fn tables_keep_head_and_body_rows() {
    let imported = nodes(&fixture("release_table.html"));
    let cell = |text: &str| Node::table_cell(vec![Node::text(text)]);
    assert_eq!(
        imported[..2],
        [
            Node::align(Alignment::Center, vec![Node::text("Tracks")]),
            Node::table(vec![
                Node::table_row(vec![cell("#"), cell("Title")]),
                Node::table_row(vec![cell("1"), cell("Intro")]),
            ]),
        ]
    );
}

#[test]
fn headings_keep_their_level() {
    assert_eq!(
        nodes("<h3>Notes</h3>"),
        vec![Node::heading(3, vec![Node::text("Notes")])]
    );
}

#[test]
fn images_resolve_and_keep_alt() {
    assert_eq!(
        nodes(r#"<img src="static/c.jpg" alt="cover"><hr>"#),
        vec![
            Node::image("https://tracker.test/static/c.jpg", "cover"),
            Node::horizontal_rule(),
        ]
    );
}

#[test]
fn absolute_links_are_kept() {
    assert_eq!(
        nodes(r#"<a href="magnet://x">m</a>"#),
        vec![Node::link("magnet://x", vec![Node::text("m")])]
    );
}

#[test]
fn blockquote_and_q_are_untitled_quotes() {
    assert_eq!(
        nodes("<blockquote>a</blockquote><q>b</q>"),
        vec![
            Node::quote("", vec![Node::text("a")]),
            Node::quote("", vec![Node::text("b")]),
        ]
    );
}
