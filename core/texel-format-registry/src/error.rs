//! Error types for registry lookups and size computations.

use thiserror::Error;

/// Errors reported by the fallible registry entry points.
///
/// Most accessors are infallible by contract (passing [`Format::None`] is a
/// caller bug and asserts instead); these variants exist for the paths that
/// deal with untrusted input: raw ordinals from persisted data and 32-bit
/// bounded size math.
///
/// [`Format::None`]: crate::Format::None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The ordinal does not name a catalog entry (sentinel, or at/past the
    /// terminal count).
    #[error("ordinal {0} does not name a valid pixel format")]
    InvalidFormat(u32),

    /// The computed image size does not fit the bounded 32-bit result.
    #[error("image size {actual} bytes exceeds the 32-bit limit")]
    SizeOverflow {
        /// The true size in bytes, as computed by the 64-bit path.
        actual: u64,
    },
}
