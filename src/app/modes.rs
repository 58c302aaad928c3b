//! Slot identifiers and the selection policies.
//!
//! - [`Slot`]: the left (1) or right (2) comparison position
//! - [`LookupMissPolicy`]: what a selection of an unknown name does
//! - [`InitialSelection`]: what the slots hold before the first event

use crate::domain::error::CompareError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// One of the two comparison positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    /// Both slots, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Zero-based index into the selection array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// One-based number used by host events and element ids.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = CompareError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            other => Err(CompareError::InvalidSlot(other)),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Resolution of a selection whose name is not in the catalog.
///
/// Either way the miss is logged for the operator and never surfaces in the
/// rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LookupMissPolicy {
    /// Leave the slot as it was and skip the render.
    #[default]
    #[serde(rename = "keep")]
    KeepPrevious,
    /// Clear the slot and render the empty state.
    #[serde(rename = "unset")]
    Unset,
}

impl FromStr for LookupMissPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keep" => Ok(Self::KeepPrevious),
            "unset" => Ok(Self::Unset),
            other => Err(format!("unknown lookup miss policy `{other}` (expected `keep` or `unset`)")),
        }
    }
}

/// Slot contents at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialSelection {
    /// Both slots start unset.
    Unset,
    /// Slots start on the first two catalog entries (only the left one if
    /// the catalog has a single entry).
    #[default]
    FirstTwo,
}

impl FromStr for InitialSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "unset" => Ok(Self::Unset),
            "first-two" => Ok(Self::FirstTwo),
            other => Err(format!("unknown initial selection `{other}` (expected `unset` or `first-two`)")),
        }
    }
}
