//! HTML import tests
//!
//! Theme idioms are exercised through fixtures; element and style rules
//! through inline fragments.

mod errors;
mod idioms;
mod styles;
mod structure;
