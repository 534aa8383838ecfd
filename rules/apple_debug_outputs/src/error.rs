//! Errors from the validated entry points.
//!
//! Building a record from trusted inputs never fails; these only surface
//! when parsing an output kind identifier, using
//! [`DebugOutputsBuilder::try_add_output`](crate::DebugOutputsBuilder::try_add_output),
//! or converting an untrusted map into a record.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugOutputsError {
    /// The string is not one of the known output kind identifiers.
    #[error("unknown debug output kind `{0}` (expected one of: bitcode_symbols, dsym_binary, linkmap)")]
    UnknownOutputKind(String),

    /// An output was added for an empty or whitespace-only architecture.
    #[error("architecture name must not be empty")]
    EmptyArchitecture,

    /// An architecture entry carries no outputs at all.
    #[error("architecture `{0}` has no debug outputs")]
    NoOutputs(String),
}
