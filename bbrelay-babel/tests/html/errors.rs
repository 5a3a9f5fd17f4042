use crate::common::base;
use bbrelay_babel::formats::import_fragment;
use bbrelay_babel::{FormatError, Idiom, ImportError};

fn import_error(html: &str) -> ImportError {
    match import_fragment(html, &base()) {
        Err(FormatError::Import(err)) => err,
        other => panic!("expected an import error, got {other:?}"),
    }
}

#[test]
fn quote_header_without_blockquote() {
    let err = import_error(r#"<div class="quoteheader">Carol</div><p>no quote</p>"#);
    assert!(matches!(
        err,
        ImportError::MissingCounterpart {
            idiom: Idiom::QuoteHeader,
            ..
        }
    ));
}

#[test]
fn spoiler_toggle_without_body() {
    let err = import_error(
        r#"<strong>T</strong>: <a href="javascript:void(0);" onclick="BBCode.spoiler(this);">Show</a>"#,
    );
    match err {
        ImportError::MissingCounterpart { idiom, element } => {
            assert_eq!(idiom, Idiom::SpoilerCollapse);
            assert_eq!(element, "<strong>");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn code_top_without_body() {
    let err = import_error(r#"<div class="codetop">Code</div> "#);
    assert!(matches!(
        err,
        ImportError::MissingCounterpart {
            idiom: Idiom::CodeBlock,
            ..
        }
    ));
}

#[test]
fn hidden_table_with_a_single_row() {
    let err = import_error(r#"<table class="hide"><tr><td>Only title</td></tr></table>"#);
    assert!(matches!(
        err,
        ImportError::MissingCounterpart {
            idiom: Idiom::HiddenTable,
            ..
        }
    ));
}

#[test]
fn foreign_elements_are_unsupported() {
    let err = import_error(r#"<svg><circle r="1"></circle></svg>"#);
    assert!(matches!(err, ImportError::UnsupportedNode { .. }));
}

#[test]
fn errors_display_the_offending_element() {
    let err = import_error(r#"<div class="quoteheader">Carol</div>"#);
    let message = err.to_string();
    assert!(message.contains("quoteheader"), "{message}");
}
