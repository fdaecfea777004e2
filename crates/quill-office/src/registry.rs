//! The standard registry: every built-in facade interface, registered once.

use once_cell::sync::Lazy;
use quill_office_core::FacadeRegistry;

use crate::facades::{Application, Document, Documents, Sheet, Sheets};

static STANDARD: Lazy<FacadeRegistry> = Lazy::new(|| {
    let mut registry = FacadeRegistry::new();
    registry
        .register::<Application>()
        .register::<Documents>()
        .register::<Document>()
        .register::<Sheets>()
        .register::<Sheet>();
    registry
});

/// The registry with the standard facade surface registered.
///
/// Built once per process; each call hands back a copy that a session can
/// own (and extend before installing, if an application registers its own
/// facade interfaces).
pub fn standard_registry() -> FacadeRegistry {
    STANDARD.clone()
}
