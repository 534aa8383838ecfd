//! The frozen debug outputs record.
//!
//! `DebugOutputs` is exposed to scripts as the `AppleDebugOutputs` provider
//! with a single `outputs_map` field:
//!
//! ```text
//! { "arm64": { "bitcode_symbols": <file>, "dsym_binary": <file> } }
//! ```
//!
//! # Immutability
//!
//! The record owns its map outright and only hands out shared references.
//! There is no setter, no `&mut` accessor, and no interior mutability, so a
//! built record is safe to read from any number of threads whenever `A` is.

use rustc_hash::FxHashMap;

use crate::{DebugOutputsBuilder, DebugOutputsError, OutputKind};

/// Output kind identifier → artifact, for a single architecture.
pub type OutputsByKind<A> = FxHashMap<String, A>;

/// Architecture → output kind identifier → artifact.
pub type OutputsMap<A> = FxHashMap<String, OutputsByKind<A>>;

/// Debug outputs of an Apple binary, keyed by architecture.
///
/// `A` is the host build system's artifact reference; this crate never
/// inspects it. Created only by [`DebugOutputsBuilder::build`], by
/// collecting `(arch, kind, artifact)` triples, or by a checked conversion
/// from a raw [`OutputsMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugOutputs<A> {
    outputs: OutputsMap<A>,
}

impl<A> DebugOutputs<A> {
    /// Start accumulating outputs for a new record.
    #[inline]
    pub fn builder() -> DebugOutputsBuilder<A> {
        DebugOutputsBuilder::new()
    }

    /// Wrap an already-assembled map. Only the builder calls this.
    pub(crate) fn from_map(outputs: OutputsMap<A>) -> Self {
        DebugOutputs { outputs }
    }

    /// The full `{ arch: { output_kind: artifact } }` map.
    #[inline]
    pub fn outputs_map(&self) -> &OutputsMap<A> {
        &self.outputs
    }

    /// All outputs recorded for `arch`, keyed by output kind identifier.
    pub fn outputs_for(&self, arch: &str) -> Option<&OutputsByKind<A>> {
        self.outputs.get(arch)
    }

    /// The artifact of `kind` recorded for `arch`, if any.
    pub fn output(&self, arch: &str, kind: OutputKind) -> Option<&A> {
        self.outputs_for(arch)?.get(kind.as_str())
    }

    /// Architectures with at least one output, in no particular order.
    pub fn architectures(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    /// Number of architectures.
    #[inline]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// True when no architecture has outputs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl<A> Default for DebugOutputs<A> {
    fn default() -> Self {
        DebugOutputs {
            outputs: FxHashMap::default(),
        }
    }
}

impl<S, A> FromIterator<(S, OutputKind, A)> for DebugOutputs<A>
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, OutputKind, A)>>(iter: I) -> Self {
        let mut builder = DebugOutputsBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

/// Rebuild a record from a raw map, e.g. one read back from another process.
///
/// Every entry goes through the builder: inner keys must parse as
/// [`OutputKind`] identifiers, architectures must not be blank, and an
/// architecture with no outputs is rejected.
impl<A> TryFrom<OutputsMap<A>> for DebugOutputs<A> {
    type Error = DebugOutputsError;

    fn try_from(map: OutputsMap<A>) -> Result<Self, Self::Error> {
        let mut builder = DebugOutputsBuilder::new();
        for (arch, by_kind) in map {
            if by_kind.is_empty() {
                return Err(DebugOutputsError::NoOutputs(arch));
            }
            for (kind, artifact) in by_kind {
                let kind: OutputKind = kind.parse()?;
                builder.try_add_output(arch.as_str(), kind, artifact)?;
            }
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for DebugOutputs<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.outputs, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for DebugOutputs<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = <OutputsMap<A> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        DebugOutputs::try_from(map).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
