//! Descriptor tables for the standard facade surface.
//!
//! Each table is the single source of truth for how one interface maps onto
//! the host: the host type it wraps, and per property the host-side member
//! name, whether the getter transfers ownership of a new acquisition, and
//! whether the raw value is one of the host's private enumerations.
//!
//! A property that can yield a live object MUST be marked `owns_handle`.
//! Nothing checks these tables at compile time; getting a flag wrong is a
//! silent leak or an over-release at runtime.

use quill_office_core::{FacadeDescriptor, PropertyDescriptor, ResourceKind};

// ============================================================================
// Application — the automation root.
// ============================================================================

pub static APPLICATION: FacadeDescriptor = FacadeDescriptor {
    interface: "Application",
    host_type: "office.Application",
    kind: ResourceKind::Object,
    properties: &[
        PropertyDescriptor {
            name: "Name",
            host_name: "Name",
            owns_handle: false,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "Visible",
            host_name: "Visible",
            owns_handle: false,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "Documents",
            host_name: "Documents",
            owns_handle: true,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "ActiveDocument",
            host_name: "ActiveDocument",
            owns_handle: true,
            enum_like: false,
        },
    ],
};

// ============================================================================
// Documents — the open-documents collection.
// Elements are office.Document; Add/Open/Remove/Clear are host verbs.
// ============================================================================

pub static DOCUMENTS: FacadeDescriptor = FacadeDescriptor {
    interface: "Documents",
    host_type: "office.Documents",
    kind: ResourceKind::Collection,
    properties: &[PropertyDescriptor {
        name: "Count",
        host_name: "Count",
        owns_handle: false,
        enum_like: false,
    }],
};

// ============================================================================
// Document
// Kind is the host's private DocumentKind enumeration (0 = text,
// 1 = spreadsheet, 2 = presentation). Sheets exists only on spreadsheet
// documents; the host rejects it elsewhere.
// ============================================================================

pub static DOCUMENT: FacadeDescriptor = FacadeDescriptor {
    interface: "Document",
    host_type: "office.Document",
    kind: ResourceKind::Object,
    properties: &[
        PropertyDescriptor {
            name: "Name",
            host_name: "Name",
            owns_handle: false,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "Kind",
            host_name: "Kind",
            owns_handle: false,
            enum_like: true,
        },
        PropertyDescriptor {
            name: "Saved",
            host_name: "Saved",
            owns_handle: false,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "Sheets",
            host_name: "Sheets",
            owns_handle: true,
            enum_like: false,
        },
    ],
};

// ============================================================================
// Sheets — a spreadsheet document's sheet collection.
// ============================================================================

pub static SHEETS: FacadeDescriptor = FacadeDescriptor {
    interface: "Sheets",
    host_type: "office.Sheets",
    kind: ResourceKind::Collection,
    properties: &[PropertyDescriptor {
        name: "Count",
        host_name: "Count",
        owns_handle: false,
        enum_like: false,
    }],
};

// ============================================================================
// Sheet
// ============================================================================

pub static SHEET: FacadeDescriptor = FacadeDescriptor {
    interface: "Sheet",
    host_type: "office.Sheet",
    kind: ResourceKind::Object,
    properties: &[
        PropertyDescriptor {
            name: "Name",
            host_name: "Name",
            owns_handle: false,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "Index",
            host_name: "Index",
            owns_handle: false,
            enum_like: false,
        },
        PropertyDescriptor {
            name: "Visible",
            host_name: "Visible",
            owns_handle: false,
            enum_like: false,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owning_properties_are_declared() {
        assert!(APPLICATION.owns_handle("Documents"));
        assert!(APPLICATION.owns_handle("ActiveDocument"));
        assert!(DOCUMENT.owns_handle("Sheets"));
        assert!(!DOCUMENT.owns_handle("Name"));
        assert!(!SHEET.owns_handle("Index"));
    }

    #[test]
    fn test_enum_properties_are_declared() {
        assert!(DOCUMENT.enum_like("Kind"));
        assert!(!DOCUMENT.enum_like("Saved"));
    }

    #[test]
    fn test_collection_kinds() {
        assert_eq!(DOCUMENTS.kind, ResourceKind::Collection);
        assert_eq!(SHEETS.kind, ResourceKind::Collection);
        assert_eq!(DOCUMENT.kind, ResourceKind::Object);
    }
}
