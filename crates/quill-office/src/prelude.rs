//! Prelude module - common imports for quill-office users
//!
//! ```rust
//! use quill_office::prelude::*;
//! ```

pub use crate::{
    connect,
    standard_registry,
    // Facade surface
    Application,
    Document,
    DocumentKind,
    Documents,
    Sheet,
    Sheets,
    // Engine types
    Dispose,
    Error,
    Host,
    HostSession,
    HostValue,
    MemoryHost,
    Result,
};
