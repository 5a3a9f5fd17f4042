//! Gazelle dialect tests
//!
//! Import theme fixtures and check the BBCode a Gazelle site receives.

mod export;
