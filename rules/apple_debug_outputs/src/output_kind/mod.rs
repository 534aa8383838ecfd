//! Debug output kinds.
//!
//! Each kind has exactly one identifier string, and that string is what
//! scripts see as the inner key of `outputs_map`. The identifiers are a
//! stable external contract: [`OutputKind::as_str`] is the only place they
//! are spelled out.

use std::fmt;
use std::str::FromStr;

use crate::DebugOutputsError;

/// A category of per-architecture debug artifact.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum OutputKind {
    /// A bitcode symbol map, per architecture.
    BitcodeSymbols,
    /// A single-architecture DWARF binary with debug symbols.
    DsymBinary,
    /// A single-architecture linkmap.
    Linkmap,
}

impl OutputKind {
    /// Every output kind, in declaration order.
    pub const ALL: &'static [OutputKind] = &[
        OutputKind::BitcodeSymbols,
        OutputKind::DsymBinary,
        OutputKind::Linkmap,
    ];

    /// Number of output kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// The identifier used as the inner key of `outputs_map`.
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputKind::BitcodeSymbols => "bitcode_symbols",
            OutputKind::DsymBinary => "dsym_binary",
            OutputKind::Linkmap => "linkmap",
        }
    }

    /// Short human-readable description, used in provider docs.
    pub const fn description(self) -> &'static str {
        match self {
            OutputKind::BitcodeSymbols => "bitcode symbol map",
            OutputKind::DsymBinary => "DWARF binary with debug symbols",
            OutputKind::Linkmap => "linker map",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an identifier like `"dsym_binary"`.
///
/// Case-insensitive and whitespace-trimmed, so `"DSYM_BINARY"` also parses.
/// Derived from [`OutputKind::ALL`] and [`OutputKind::as_str`].
impl FromStr for OutputKind {
    type Err = DebugOutputsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| DebugOutputsError::UnknownOutputKind(s.to_owned()))
    }
}

/// Serialized as its identifier string.
#[cfg(feature = "serde")]
impl serde::Serialize for OutputKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts anything [`FromStr`] accepts.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OutputKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
