//! Error types for quill-office-core

use thiserror::Error;

use crate::host::HostError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the facade engine
#[derive(Debug, Error)]
pub enum Error {
    /// No usable object reference where a live one is required
    #[error("null handle: got {got} where a live object reference was required")]
    NullHandle { got: String },

    /// Member access on a facade after it was disposed
    #[error("use after dispose: {interface}.{member}")]
    UseAfterDispose {
        interface: &'static str,
        member: &'static str,
    },

    /// The registry cannot produce an implementation for the requested interface
    #[error("cannot resolve {interface}: {reason}")]
    ResolutionFailure { interface: String, reason: String },

    /// A resource-owning member produced a value that cannot be wrapped
    /// into its declared facade type
    #[error("cannot wrap {property} as {target}: got {value}")]
    WrapFailure {
        property: &'static str,
        target: String,
        value: String,
    },

    /// Collection indexed access outside `[1, count]`
    #[error("index {index} out of range (collection has {count} elements, valid indices 1..={count})")]
    IndexOutOfRange { index: u32, count: u32 },

    /// The host rejected an operation; the host's own diagnostic is the source
    #[error("host rejected {interface}.{operation}: {source}")]
    Host {
        interface: &'static str,
        operation: String,
        #[source]
        source: HostError,
    },
}

impl Error {
    /// Wrap a host failure with the facade interface and operation it occurred in
    pub fn host(interface: &'static str, operation: impl Into<String>, source: HostError) -> Self {
        Error::Host {
            interface,
            operation: operation.into(),
            source,
        }
    }
}
