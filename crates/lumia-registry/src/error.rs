//! Error types for registry operations.

use thiserror::Error;

/// Errors raised by [`TargetRegistry`](crate::TargetRegistry) mutations.
///
/// These are configuration errors in caller code and surface synchronously
/// at the offending call; the per-tick resolution path never produces them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A target definition was registered without a usable id.
    #[error("target definition is missing an id")]
    MissingId,
}
