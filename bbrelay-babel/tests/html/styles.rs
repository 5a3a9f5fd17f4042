use crate::common::{fixture, import, nodes};
use bbrelay_babel::{Alignment, Diagnostic, Node};

#[test]
fn styled_spans_fold_innermost_first() {
    let imported = nodes(&fixture("styled_spans.html"));
    assert_eq!(
        imported,
        vec![
            Node::color("#ff0000", vec![Node::bold(vec![Node::text("red")])]),
            Node::text(" "),
            Node::size(4, vec![Node::text("big")]),
            Node::text(" "),
            Node::align(Alignment::Center, vec![Node::text("mid")]),
            Node::text(" "),
        ]
    );
}

#[test]
fn every_recognized_layer_in_rule_order() {
    let imported = nodes(
        r#"<span style="text-align: right; color: blue; font-family: Arial; text-decoration: underline; font-style: italic; font-weight: 700" class="size-9">x</span>"#,
    );
    let expected = Node::align(
        Alignment::Right,
        vec![Node::color(
            "blue",
            vec![Node::size(
                7,
                vec![Node::font(
                    "arial",
                    vec![Node::underline(vec![Node::italic(vec![Node::bold(
                        vec![Node::text("x")],
                    )])])],
                )],
            )],
        )],
    );
    assert_eq!(imported, vec![expected]);
}

#[test]
fn light_weight_is_not_bold() {
    let import = import(r#"<span style="font-weight: 400">x</span>"#);
    assert_eq!(import.nodes, vec![Node::text("x")]);
}

#[test]
fn font_size_without_class_is_reported() {
    let import = import(r#"<span style="font-size: 18px; color: red">x</span>"#);
    assert_eq!(import.nodes, vec![Node::color("red", vec![Node::text("x")])]);
    assert_eq!(
        import.diagnostics,
        vec![Diagnostic::UnrecognizedFontSize {
            element: r#"<span style="font-size: 18px; color: red">"#.to_string(),
            value: "18px".to_string(),
        }]
    );
}

#[test]
fn font_family_around_pre_unwraps() {
    let imported = nodes(r#"<div style="font-family: monospace"><pre>a  b</pre></div>"#);
    assert_eq!(imported, vec![Node::pre("", vec![Node::text("a  b")])]);
}

#[test]
fn font_element_layers_face_innermost() {
    let imported = nodes(r#"<font face="Arial" size="5" color="green">x</font>"#);
    assert_eq!(
        imported,
        vec![Node::font(
            "green",
            vec![Node::font(
                "5",
                vec![Node::font("Arial", vec![Node::text("x")])]
            )]
        )]
    );
}

#[test]
fn paragraphs_break_lines() {
    let imported = nodes("a<p>b</p>c");
    assert_eq!(imported, vec![Node::text("a\nb\nc")]);
}

#[test]
fn styled_paragraph_keeps_its_wrapper() {
    let imported = nodes(r#"<p style="text-align: center">b</p>"#);
    assert_eq!(
        imported,
        vec![
            Node::text("\n"),
            Node::align(Alignment::Center, vec![Node::text("b")]),
            Node::text("\n"),
        ]
    );
}

#[test]
fn tag_shortcuts() {
    let imported = nodes("<em>i</em><ins>u</ins><del>s</del><tt>c</tt><sup>p</sup><sub>b</sub>");
    assert_eq!(
        imported,
        vec![
            Node::italic(vec![Node::text("i")]),
            Node::underline(vec![Node::text("u")]),
            Node::strikethrough(vec![Node::text("s")]),
            Node::code(vec![Node::text("c")]),
            Node::superscript(vec![Node::text("p")]),
            Node::subscript(vec![Node::text("b")]),
        ]
    );
}

#[test]
fn center_and_marquee_align() {
    let imported = nodes("<center>a</center><marquee>b</marquee>");
    assert_eq!(
        imported,
        vec![
            Node::align(Alignment::Center, vec![Node::text("a")]),
            Node::align(Alignment::Center, vec![Node::text("b")]),
        ]
    );
}

#[test]
fn unwrapped_spans_join_the_surrounding_text() {
    assert_eq!(nodes("a <span>b</span> c"), vec![Node::text("a b c")]);
    assert_eq!(
        nodes("<span>[b</span><span>]bold</span>"),
        vec![Node::text("[b]bold")]
    );
    assert_eq!(
        nodes(r#"x<font color="">y</font>"#),
        vec![Node::text("xy")]
    );
}

#[test]
fn font_shorthand_is_read_like_its_longhands() {
    let import = import(r#"<span style="font: italic bold 14px serif">x</span>"#);
    assert_eq!(
        import.nodes,
        vec![Node::font(
            "serif",
            vec![Node::italic(vec![Node::bold(vec![Node::text("x")])])]
        )]
    );
    assert!(matches!(
        import.diagnostics.as_slice(),
        [Diagnostic::UnrecognizedFontSize { value, .. }] if value == "14px"
    ));
}
