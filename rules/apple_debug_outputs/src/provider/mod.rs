//! Scripting-layer surface.
//!
//! Build scripts see a record as a named provider with struct-like fields.
//! They pattern-match on [`Provider::NAME`] and read fields by name, so both
//! the name and the field names are stable.

use crate::{DebugOutputs, OutputsMap};

/// Stable name scripts use to recognize the debug outputs provider.
pub const PROVIDER_NAME: &str = "AppleDebugOutputs";

/// The only field the debug outputs provider exposes.
pub const OUTPUTS_MAP_FIELD: &str = "outputs_map";

/// A read-only record exposed to build scripts under a stable name.
pub trait Provider {
    /// Name scripts match on.
    const NAME: &'static str;
    /// One-line description shown in generated documentation.
    const DOC: &'static str;
    /// Names of the struct-like fields scripts can read.
    const FIELDS: &'static [&'static str];
}

impl<A> Provider for DebugOutputs<A> {
    const NAME: &'static str = PROVIDER_NAME;
    const DOC: &'static str = "A provider that holds debug outputs of an apple_binary target.";
    const FIELDS: &'static [&'static str] = &[OUTPUTS_MAP_FIELD];
}

impl<A> DebugOutputs<A> {
    /// Field lookup as performed by the scripting layer.
    ///
    /// `outputs_map` is a dictionary of `{ arch: { output_kind: file } }`,
    /// where `arch` is an architecture such as `arm64` or `armv7` and
    /// `output_kind` is an identifier such as `bitcode_symbols` or
    /// `dsym_binary`. Unknown names yield `None`.
    pub fn field(&self, name: &str) -> Option<&OutputsMap<A>> {
        (name == OUTPUTS_MAP_FIELD).then_some(self.outputs_map())
    }
}
