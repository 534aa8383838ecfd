//! Accumulates debug outputs and freezes them into a [`DebugOutputs`].
//!
//! The builder owns its staging map exclusively. [`DebugOutputsBuilder::build`]
//! consumes the builder and moves that map into the record, so nothing
//! added afterwards can ever be observed through a built record. Callers
//! that want several snapshots clone the builder first.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{DebugOutputs, DebugOutputsError, OutputKind, OutputsMap};

/// Builder for [`DebugOutputs`].
///
/// Adding the same `(arch, kind)` pair twice keeps the last artifact.
#[derive(Clone, Debug)]
pub struct DebugOutputsBuilder<A> {
    staging: OutputsMap<A>,
}

impl<A> DebugOutputsBuilder<A> {
    /// Create an empty builder.
    pub fn new() -> Self {
        DebugOutputsBuilder {
            staging: FxHashMap::default(),
        }
    }

    /// Add an output, returning the builder for chaining.
    ///
    /// `arch` is any architecture string, e.g. `arm64` or `armv7`.
    #[must_use]
    pub fn add_output(mut self, arch: impl Into<String>, kind: OutputKind, artifact: A) -> Self {
        self.insert_output(arch, kind, artifact);
        self
    }

    /// Add an output in place. Same semantics as [`add_output`](Self::add_output).
    pub fn insert_output(
        &mut self,
        arch: impl Into<String>,
        kind: OutputKind,
        artifact: A,
    ) -> &mut Self {
        let arch = arch.into();
        trace!(%arch, kind = kind.as_str(), "adding debug output");
        let previous = self
            .staging
            .entry(arch)
            .or_default()
            .insert(kind.as_str().to_owned(), artifact);
        if previous.is_some() {
            trace!(kind = kind.as_str(), "replaced earlier output");
        }
        self
    }

    /// Add an output after checking that `arch` is not blank.
    ///
    /// On error the builder is left unchanged.
    pub fn try_add_output(
        &mut self,
        arch: impl Into<String>,
        kind: OutputKind,
        artifact: A,
    ) -> Result<&mut Self, DebugOutputsError> {
        let arch = arch.into();
        if arch.trim().is_empty() {
            return Err(DebugOutputsError::EmptyArchitecture);
        }
        Ok(self.insert_output(arch, kind, artifact))
    }

    /// Number of architectures staged so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.staging.len()
    }

    /// True when nothing has been staged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.staging.is_empty()
    }

    /// Freeze the staged outputs into a record.
    #[tracing::instrument(level = "debug", skip_all, fields(architectures = self.staging.len()))]
    pub fn build(self) -> DebugOutputs<A> {
        let mut outputs = self.staging;
        let mut total = 0;
        for by_kind in outputs.values_mut() {
            by_kind.shrink_to_fit();
            total += by_kind.len();
        }
        outputs.shrink_to_fit();
        tracing::debug!(outputs = total, "froze debug outputs");
        DebugOutputs::from_map(outputs)
    }
}

impl<A> Default for DebugOutputsBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Extend<(S, OutputKind, A)> for DebugOutputsBuilder<A>
where
    S: Into<String>,
{
    fn extend<I: IntoIterator<Item = (S, OutputKind, A)>>(&mut self, iter: I) {
        for (arch, kind, artifact) in iter {
            self.insert_output(arch, kind, artifact);
        }
    }
}
