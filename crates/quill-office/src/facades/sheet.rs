//! Sheet facades for spreadsheet documents.

use quill_office_core::{
    CollectionFacade, CollectionIter, Dispose, Error, FacadeDescriptor, FacadeType, HostValue,
    ObjectFacade, Result,
};

use crate::descriptors;

/// A spreadsheet document's sheet collection.
#[derive(Debug)]
pub struct Sheets {
    items: CollectionFacade,
}

impl Sheets {
    pub fn count(&self) -> Result<u32> {
        self.items.count()
    }

    /// The sheet at `index` (1-based). The returned facade owns a fresh
    /// acquisition.
    pub fn get(&self, index: u32) -> Result<Sheet> {
        self.items.item(index)
    }

    pub fn iter(&self) -> CollectionIter<'_, Sheet> {
        self.items.iter()
    }

    /// Append a new sheet named `name`. The caller owns the result.
    pub fn add(&self, name: &str) -> Result<Sheet> {
        let value = self
            .items
            .state()
            .invoke("Add", &[HostValue::Text(name.to_string())])?;
        self.items.state().wrap_value("Add", value)
    }

    /// Remove the sheet at `index` (1-based).
    ///
    /// Facades resolved before the removal keep the handles they own; the
    /// indices of later elements shift down by one.
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
}

impl FacadeType for Sheets {
    const DESCRIPTOR: &'static FacadeDescriptor = &descriptors::SHEETS;

    fn from_state(state: ObjectFacade) -> Result<Self> {
        Ok(Self {
            items: CollectionFacade::new(state),
        })
    }
}

impl Dispose for Sheets {
    fn dispose(&self) {
        self.items.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.items.is_disposed()
    }
}

/// One sheet of a spreadsheet document.
#[derive(Debug)]
pub struct Sheet {
    state: ObjectFacade,
}

impl Sheet {
    pub fn name(&self) -> Result<String> {
        self.state.get_text("Name")
    }

    pub fn set_name(&self, name: &str) -> Result<()> {
        self.state.set_text("Name", name)
    }

    /// The sheet's 1-based position in its collection, as the host reports
    /// it. Not updated when other sheets are removed ahead of it.
    pub fn index(&self) -> Result<i64> {
        self.state.get_i64("Index")
    }

    pub fn visible(&self) -> Result<bool> {
        self.state.get_bool("Visible")
    }

    pub fn set_visible(&self, visible: bool) -> Result<()> {
        self.state.set_bool("Visible", visible)
    }
}

impl FacadeType for Sheet {
    const DESCRIPTOR: &'static FacadeDescriptor = &descriptors::SHEET;

    fn from_state(state: ObjectFacade) -> Result<Self> {
        Ok(Self { state })
    }
}

impl Dispose for Sheet {
    fn dispose(&self) {
        self.state.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }
}
