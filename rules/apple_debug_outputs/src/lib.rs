//! Apple Debug Outputs - per-architecture debug artifact provider
//!
//! After a multi-architecture Apple binary is linked, each slice leaves
//! behind its own debug artifacts: a bitcode symbol map, a DWARF binary
//! carrying debug symbols, and a linker map. This crate records where those
//! artifacts live so downstream rules can ask "what is the dSYM binary for
//! `arm64`?" without knowing how the binary rule produced it.
//!
//! # Shape
//!
//! ```text
//! { arch: { output_kind: artifact, output_kind: artifact, ... }, ... }
//! ```
//!
//! - `arch` is any architecture string (`arm64`, `armv7`, `x86_64`, ...)
//! - `output_kind` is one of the fixed identifiers in [`OutputKind`]
//! - `artifact` is an opaque reference supplied by the host build system
//!
//! # Lifecycle
//!
//! A [`DebugOutputsBuilder`] accumulates outputs and is consumed by
//! [`DebugOutputsBuilder::build`], which produces a frozen [`DebugOutputs`].
//! The record exposes no mutation, so it can be read from any number of
//! threads once built.
//!
//! ```
//! use apple_debug_outputs::{DebugOutputs, OutputKind};
//!
//! let outputs = DebugOutputs::builder()
//!     .add_output("arm64", OutputKind::BitcodeSymbols, "arm64.bcsymbolmap")
//!     .add_output("arm64", OutputKind::DsymBinary, "arm64.dwarf")
//!     .build();
//!
//! assert_eq!(
//!     outputs.output("arm64", OutputKind::DsymBinary),
//!     Some(&"arm64.dwarf")
//! );
//! ```

mod builder;
mod error;
mod output_kind;
mod provider;
mod record;
mod tracing_setup;

pub use builder::DebugOutputsBuilder;
pub use error::DebugOutputsError;
pub use output_kind::OutputKind;
pub use provider::{Provider, OUTPUTS_MAP_FIELD, PROVIDER_NAME};
pub use record::{DebugOutputs, OutputsByKind, OutputsMap};
pub use tracing_setup::init_tracing;
