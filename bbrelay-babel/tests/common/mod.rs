//! Shared helpers for the integration tests.

use bbrelay_babel::formats::import_fragment;
use bbrelay_babel::{Import, Node};
use std::fs;
use std::path::PathBuf;
use url::Url;

pub const BASE_URL: &str = "https://tracker.test/torrents.php?id=1";

pub fn base() -> Url {
    Url::parse(BASE_URL).expect("base URL to parse")
}

/// Reads `tests/fixtures/<name>`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
}

pub fn import(html: &str) -> Import {
    import_fragment(html, &base()).expect("fragment to import")
}

pub fn nodes(html: &str) -> Vec<Node> {
    import(html).nodes
}
