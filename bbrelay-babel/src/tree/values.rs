//! Scalar value types carried by value-views.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An integer clamped into the closed range `LO..=HI`.
///
/// Out-of-range input is clamped, never rejected: markup scraped from a page
/// routinely carries `size0` or `size9` classes and those still mean "smallest"
/// and "largest".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bounded<const LO: u8, const HI: u8>(u8);

impl<const LO: u8, const HI: u8> Bounded<LO, HI> {
    pub const MIN: u8 = LO;
    pub const MAX: u8 = HI;

    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(LO as i64, HI as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl<const LO: u8, const HI: u8> fmt::Display for Bounded<LO, HI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font size token, `1..=8`.
pub type Size = Bounded<1, 8>;

/// Heading level, `1..=7`.
pub type HeadingLevel = Bounded<1, 7>;

/// Block alignment. Only these three literals are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported alignment '{0}'")]
pub struct UnknownAlignment(pub String);

impl FromStr for Alignment {
    type Err = UnknownAlignment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(UnknownAlignment(other.to_string())),
        }
    }
}

/// Borrowed view of a node's scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Str(&'a str),
    Int(u8),
}

impl Value<'_> {
    /// Integer values are never empty; strings are empty when they have no characters.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}
