//! Format implementations
//!
//! This module contains all format implementations that convert between the
//! canonical tree and text representations.

pub mod gazelle;
pub mod html;
pub mod nexusphp;
pub mod tree;

pub use gazelle::GazelleFormat;
pub use html::{import_element, import_fragment, Diagnostic, HtmlFormat, Import};
pub use nexusphp::NexusPhpFormat;
pub use tree::TreeFormat;
