//! Error types for the host boundary.

use thiserror::Error;

/// Errors raised while driving the asset-emission phase.
///
/// Plugin-level failures (a custom template erroring out) are not wrapped
/// here; they propagate untranslated through `anyhow` so the host reports
/// the original message.
#[derive(Error, Debug)]
pub enum HostError {
    /// A callback-protocol hook returned without calling its completion
    /// handle, so the build can never be finalized.
    #[error("emit hook '{hook}' dropped its completion handle without signaling")]
    CompletionDropped {
        /// Name of the offending hook.
        hook: String,
    },
}
