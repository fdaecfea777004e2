//! # quill-office-core
//!
//! The handle-lifecycle and dynamic-wrapping engine behind the quill-office
//! facade layer.
//!
//! The external automation host owns every object and reference-counts it;
//! this crate supplies the machinery every typed wrapper is built from:
//! - [`Handle`] — one owned acquisition of one host object, released exactly
//!   once (drop is the release path; explicit [`Dispose`] for deterministic
//!   teardown)
//! - [`FacadeDescriptor`] — declarative metadata mapping an interface onto a
//!   host type and its members
//! - [`FacadeRegistry`] and [`HostSession`] — interface-to-constructor
//!   resolution around raw acquisitions
//! - [`CollectionFacade`] — 1-based indexed access and lazy iteration over
//!   sequence-shaped objects
//! - [`MemoryHost`] — a scriptable in-memory backend for tests and offline
//!   development
//!
//! Sessions are shared via `Rc`, so every facade is `!Send`: the host's
//! thread-affinity requirement is enforced by the compiler rather than
//! checked at runtime.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use quill_office_core::{
//!     Dispose, FacadeDescriptor, FacadeRegistry, FacadeType, HostSession, HostValue, MemoryHost,
//!     ObjectFacade, PropertyDescriptor, ResourceKind,
//! };
//!
//! struct Document {
//!     state: ObjectFacade,
//! }
//!
//! static DOCUMENT: FacadeDescriptor = FacadeDescriptor {
//!     interface: "Document",
//!     host_type: "office.Document",
//!     kind: ResourceKind::Object,
//!     properties: &[PropertyDescriptor {
//!         name: "Name",
//!         host_name: "Name",
//!         owns_handle: false,
//!         enum_like: false,
//!     }],
//! };
//!
//! impl FacadeType for Document {
//!     const DESCRIPTOR: &'static FacadeDescriptor = &DOCUMENT;
//!
//!     fn from_state(state: ObjectFacade) -> quill_office_core::Result<Self> {
//!         Ok(Self { state })
//!     }
//! }
//!
//! impl Dispose for Document {
//!     fn dispose(&self) {
//!         self.state.dispose();
//!     }
//!
//!     fn is_disposed(&self) -> bool {
//!         self.state.is_disposed()
//!     }
//! }
//!
//! # fn main() -> quill_office_core::Result<()> {
//! let host = Rc::new(MemoryHost::new());
//! let raw = host.add_object("office.Document");
//! host.put(raw, "Name", HostValue::Text("Report".into()));
//! host.set_root(raw);
//!
//! let mut registry = FacadeRegistry::new();
//! registry.register::<Document>();
//! let session = HostSession::new(Rc::clone(&host), registry);
//!
//! let doc: Document = HostSession::root(&session)?;
//! assert_eq!(doc.state.get_text("Name")?, "Report");
//!
//! drop(doc);
//! assert_eq!(host.outstanding(), 0);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod descriptor;
pub mod error;
pub mod facade;
pub mod handle;
pub mod host;
pub mod mem;
pub mod registry;
pub mod session;

// Re-exports for convenience
pub use collection::{CollectionFacade, CollectionIter};
pub use descriptor::{FacadeDescriptor, PropertyDescriptor, ResourceKind};
pub use error::{Error, Result};
pub use facade::{Dispose, ObjectFacade};
pub use handle::Handle;
pub use host::{Host, HostError, HostValue, RawHandle};
pub use mem::{MemoryHost, MethodBehavior};
pub use registry::{AnyFacade, FacadeRegistry, FacadeType, Registration};
pub use session::HostSession;
