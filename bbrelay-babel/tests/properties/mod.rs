//! Property tests for the dialect serializers.

use bbrelay_babel::common::markup::{contains_tag, BRACKET_TAG};
use bbrelay_babel::format::Format;
use bbrelay_babel::formats::{GazelleFormat, NexusPhpFormat};
use bbrelay_babel::Node;
use proptest::prelude::*;

const PLAIN_OPEN: &str = "[plain]";
const PLAIN_CLOSE: &str = "[/plain]";

/// Text rich in bracket syntax.
fn markup_text() -> impl Strategy<Value = String> {
    "[a-z0-9 \\[\\]/=*#]{0,40}"
}

/// Bracket-heavy text with literal `[plain]` wrappers and tags mixed in.
fn wrapper_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z \\[\\]/]{0,8}",
            Just(PLAIN_CLOSE.to_string()),
            Just(PLAIN_OPEN.to_string()),
            Just("[b]".to_string()),
            Just("[/b]".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

/// Short fragments that spell tags only once they are joined.
fn split_text() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[bi/\\[\\] ]{0,4}", 1..8)
}

/// Reads Gazelle output the way the site does: `[plain]` runs up to the
/// first `[/plain]` are literal. Returns the literal text and every tag
/// left live outside those runs.
fn read_gazelle(out: &str) -> (String, Vec<String>) {
    let mut literal = String::new();
    let mut live = Vec::new();
    let mut rest = out;
    loop {
        let (outside, inside) = match rest.find(PLAIN_OPEN) {
            Some(open) => (&rest[..open], Some(&rest[open + PLAIN_OPEN.len()..])),
            None => (rest, None),
        };
        live.extend(BRACKET_TAG.find_iter(outside).map(|m| m.as_str().to_string()));
        literal.push_str(&BRACKET_TAG.replace_all(outside, ""));
        let Some(inside) = inside else {
            break;
        };
        match inside.find(PLAIN_CLOSE) {
            Some(close) => {
                literal.push_str(&inside[..close]);
                rest = &inside[close + PLAIN_CLOSE.len()..];
            }
            None => {
                literal.push_str(inside);
                break;
            }
        }
    }
    (literal, live)
}

fn expected_gazelle(text: &str) -> &str {
    if contains_tag(text) {
        text
    } else {
        text.trim()
    }
}

fn texts(parts: &[String]) -> Vec<Node> {
    parts.iter().map(|part| Node::text(part.as_str())).collect()
}

proptest! {
    #[test]
    fn heading_levels_map_to_valid_sizes(level in 1i64..=7) {
        let out = NexusPhpFormat
            .serialize(&[Node::heading(level, vec![Node::text("t")])])
            .unwrap();
        let expected = format!("[size={}]t[/size]", 8 - level);
        prop_assert_eq!(&out, &expected);
        prop_assert!((1..=8).contains(&(8 - level)));
    }

    #[test]
    fn gazelle_text_reads_back_literally(text in markup_text()) {
        let out = GazelleFormat.serialize(&[Node::text(text.clone())]).unwrap();
        let (literal, live) = read_gazelle(&out);
        prop_assert!(live.is_empty(), "live tags {:?} in {:?}", live, out);
        prop_assert_eq!(literal.as_str(), expected_gazelle(&text));
    }

    #[test]
    fn gazelle_plain_wrapper_cannot_be_closed_from_text(text in wrapper_text()) {
        let out = GazelleFormat.serialize(&[Node::text(text.clone())]).unwrap();
        let (literal, live) = read_gazelle(&out);
        prop_assert!(live.is_empty(), "live tags {:?} in {:?}", live, out);
        prop_assert_eq!(literal.as_str(), expected_gazelle(&text));
    }

    #[test]
    fn gazelle_only_emits_tags_from_the_tree(parts in split_text()) {
        let joined = parts.concat();
        let out = GazelleFormat
            .serialize(&[Node::bold(texts(&parts))])
            .unwrap();
        let (literal, live) = read_gazelle(&out);
        prop_assert_eq!(live, vec!["[b]".to_string(), "[/b]".to_string()]);
        prop_assert_eq!(literal, joined);
    }

    #[test]
    fn nexusphp_escaping_is_invisible(text in markup_text()) {
        let out = NexusPhpFormat.serialize(&[Node::text(text.clone())]).unwrap();
        prop_assert_eq!(out.replace('\u{200B}', ""), text.trim());
        prop_assert!(!BRACKET_TAG.is_match(&out), "raw tag survived in {:?}", out);
    }

    #[test]
    fn nexusphp_escapes_text_inside_elements(text in markup_text()) {
        let out = NexusPhpFormat
            .serialize(&[Node::bold(vec![Node::text(text.clone())])])
            .unwrap();
        let inner = out
            .strip_prefix("[b]")
            .and_then(|rest| rest.strip_suffix("[/b]"))
            .map(|inner| inner.replace('\u{200B}', ""));
        prop_assert_eq!(inner, Some(text));
    }

    #[test]
    fn nexusphp_only_emits_tags_from_the_tree(parts in split_text()) {
        let joined = parts.concat();
        let out = NexusPhpFormat
            .serialize(&[Node::italic(texts(&parts))])
            .unwrap();
        let live: Vec<_> = BRACKET_TAG.find_iter(&out).map(|m| m.as_str()).collect();
        prop_assert_eq!(live, vec!["[i]", "[/i]"]);
        prop_assert_eq!(out.replace('\u{200B}', ""), format!("[i]{joined}[/i]"));
    }
}
