//! # quill-office
//!
//! Typed automation facades for driving office document hosts from Rust.
//!
//! The host application (a document/spreadsheet/presentation editor suite)
//! owns every object and reference-counts it; quill-office wraps each one in
//! a typed facade that owns exactly one acquisition and gives it back
//! deterministically. Facades are resolved through a registry built once at
//! startup, and every backend — the in-memory [`MemoryHost`], the subprocess
//! bridge in `quill-office-bridge` — drives the same engine.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use quill_office::prelude::*;
//!
//! # fn main() -> quill_office::Result<()> {
//! // An in-memory host standing in for the real application.
//! let host = Rc::new(MemoryHost::new());
//! let app = host.add_object("office.Application");
//! host.put(app, "Name", HostValue::Text("Quill Office".into()));
//! host.put(app, "Visible", HostValue::Bool(false));
//! let docs = host.add_collection("office.Documents", "office.Document");
//! host.put(app, "Documents", HostValue::Object(docs));
//! host.set_root(app);
//!
//! let session = connect(Rc::clone(&host));
//! let app = Application::connect(&session)?;
//!
//! assert_eq!(app.name()?, "Quill Office");
//! let report = app.documents().add()?;
//! assert_eq!(app.documents().count()?, 1);
//!
//! drop(report);
//! drop(app);
//! assert_eq!(host.outstanding(), 0);
//! # Ok(())
//! # }
//! ```

use std::rc::Rc;

pub mod descriptors;
pub mod facades;
pub mod prelude;
pub mod registry;

pub use facades::{Application, Document, DocumentKind, Documents, Sheet, Sheets};
pub use registry::standard_registry;

// Re-export engine types
pub use quill_office_core::{
    AnyFacade, CollectionFacade, CollectionIter, Dispose, Error, FacadeDescriptor, FacadeRegistry,
    FacadeType, Handle, Host, HostError, HostSession, HostValue, MemoryHost, MethodBehavior,
    ObjectFacade, PropertyDescriptor, RawHandle, Registration, ResourceKind, Result,
};

/// Open a session over `host` with the standard registry installed.
pub fn connect(host: impl Host + 'static) -> Rc<HostSession> {
    HostSession::new(host, standard_registry())
}
