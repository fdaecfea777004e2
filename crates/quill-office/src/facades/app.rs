//! The application root facade.

use std::rc::Rc;

use quill_office_core::{Dispose, FacadeDescriptor, FacadeType, HostSession, ObjectFacade, Result};

use crate::descriptors;
use crate::facades::document::{Document, Documents};

/// The automation root: the host application itself.
///
/// Wraps the open-documents collection eagerly at construction time; that
/// child is owned by the application facade and disposed with it.
pub struct Application {
    documents: Documents,
    state: ObjectFacade,
}

impl Application {
    /// Acquire the host's application object over `session`.
    pub fn connect(session: &Rc<HostSession>) -> Result<Application> {
        HostSession::root(session)
    }

    /// The host application's display name.
    pub fn name(&self) -> Result<String> {
        self.state.get_text("Name")
    }

    pub fn visible(&self) -> Result<bool> {
        self.state.get_bool("Visible")
    }

    pub fn set_visible(&self, visible: bool) -> Result<()> {
        self.state.set_bool("Visible", visible)
    }

    /// The open-documents collection, wrapped when the application facade was
    /// built.
    pub fn documents(&self) -> &Documents {
        &self.documents
    }

    /// The document currently in focus.
    ///
    /// Each call hands the caller a facade owning a fresh acquisition; fails
    /// with a null-handle error when no document is open.
    pub fn active_document(&self) -> Result<Document> {
        self.state.get_facade("ActiveDocument")
    }
}

impl FacadeType for Application {
    const DESCRIPTOR: &'static FacadeDescriptor = &descriptors::APPLICATION;

    fn from_state(state: ObjectFacade) -> Result<Self> {
        let documents = state.get_facade("Documents")?;
        Ok(Self { documents, state })
    }
}

impl Dispose for Application {
    fn dispose(&self) {
        // Owned children first, then the application's own acquisition.
        self.documents.dispose();
        self.state.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }
}
