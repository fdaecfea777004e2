//! Document facades: the open-documents collection and single documents.

use quill_office_core::{
    CollectionFacade, CollectionIter, Dispose, Error, FacadeDescriptor, FacadeType, HostValue,
    ObjectFacade, Result,
};

use crate::descriptors;
use crate::facades::sheet::Sheets;

/// What kind of editor a document belongs to.
///
/// Remapped from the host's private numbering; values the host reports
/// outside this range surface as host shape errors, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Spreadsheet,
    Presentation,
}

impl TryFrom<i32> for DocumentKind {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, i32> {
        match value {
            0 => Ok(DocumentKind::Text),
            1 => Ok(DocumentKind::Spreadsheet),
            2 => Ok(DocumentKind::Presentation),
            other => Err(other),
        }
    }
}

/// The collection of documents the host has open.
pub struct Documents {
    items: CollectionFacade,
}

impl Documents {
    /// The number of open documents, as the host reports it right now.
    pub fn count(&self) -> Result<u32> {
        self.items.count()
    }

    /// The document at `index` (1-based). The returned facade owns a fresh
    /// acquisition.
    pub fn get(&self, index: u32) -> Result<Document> {
        self.items.item(index)
    }

    /// Lazily iterate the open documents, one facade per step.
    pub fn iter(&self) -> CollectionIter<'_, Document> {
        self.items.iter()
    }

    /// Create a new empty document in the host. The caller owns the result.
    pub fn add(&self) -> Result<Document> {
        let value = self.items.state().invoke("Add", &[])?;
        self.items.state().wrap_value("Add", value)
    }

    /// Open a document from a host-side location string.
    pub fn open(&self, location: &str) -> Result<Document> {
        let value = self
            .items
            .state()
            .invoke("Open", &[HostValue::Text(location.to_string())])?;
        self.items.state().wrap_value("Open", value)
    }

    /// Close and remove the document at `index` (1-based).
    ///
    /// Facades resolved before the removal keep the handles they own and are
    /// not re-pointed; the indices of later elements shift down by one.
    pub fn remove(&self, index: u32) -> Result<()> {
        let count = self.count()?;
        if index == 0 || index > count {
            return Err(Error::IndexOutOfRange { index, count });
        }
        self.items
            .state()
            .invoke("Remove", &[HostValue::Int(i64::from(index))])?;
        Ok(())
    }

    /// Close every open document.
    pub fn clear(&self) -> Result<()> {
        self.items.state().invoke("Clear", &[])?;
        Ok(())
    }
}

impl FacadeType for Documents {
    const DESCRIPTOR: &'static FacadeDescriptor = &descriptors::DOCUMENTS;

    fn from_state(state: ObjectFacade) -> Result<Self> {
        Ok(Self {
            items: CollectionFacade::new(state),
        })
    }
}

impl Dispose for Documents {
    fn dispose(&self) {
        self.items.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.items.is_disposed()
    }
}

/// One open document.
#[derive(Debug)]
pub struct Document {
    state: ObjectFacade,
}

impl Document {
    pub fn name(&self) -> Result<String> {
        self.state.get_text("Name")
    }

    /// Which editor the document belongs to.
    pub fn kind(&self) -> Result<DocumentKind> {
        self.state.get_enum("Kind")
    }

    /// Whether the host considers the document unmodified since the last
    /// save.
    pub fn saved(&self) -> Result<bool> {
        self.state.get_bool("Saved")
    }

    pub fn save(&self) -> Result<()> {
        self.state.invoke("Save", &[])?;
        Ok(())
    }

    /// Close the document in the host and release this facade's acquisition.
    pub fn close(self) -> Result<()> {
        self.state.invoke("Close", &[])?;
        self.state.dispose();
        Ok(())
    }

    /// The document's sheet collection. The caller owns the result.
    ///
    /// Only spreadsheet documents have one; for other kinds the host rejects
    /// the access and the rejection surfaces as a host error.
    pub fn sheets(&self) -> Result<Sheets> {
        self.state.get_facade("Sheets")
    }
}

impl FacadeType for Document {
    const DESCRIPTOR: &'static FacadeDescriptor = &descriptors::DOCUMENT;

    fn from_state(state: ObjectFacade) -> Result<Self> {
        Ok(Self { state })
    }
}

impl Dispose for Document {
    fn dispose(&self) {
        self.state.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_remap() {
        assert_eq!(DocumentKind::try_from(0), Ok(DocumentKind::Text));
        assert_eq!(DocumentKind::try_from(1), Ok(DocumentKind::Spreadsheet));
        assert_eq!(DocumentKind::try_from(2), Ok(DocumentKind::Presentation));
        assert_eq!(DocumentKind::try_from(3), Err(3));
        assert_eq!(DocumentKind::try_from(-1), Err(-1));
    }
}
