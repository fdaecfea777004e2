//! Factory/resolver behavior: registry lookups, type verification, wrap
//! failures, and resolution determinism.

mod common;

use std::any::Any;

use common::{office_fixture, Fixture};
use pretty_assertions::assert_eq;
use quill_office::prelude::*;
use quill_office::{
    FacadeDescriptor, FacadeType, Handle, ObjectFacade, PropertyDescriptor, RawHandle,
    ResourceKind,
};

/// A facade type deliberately left out of the standard registry.
#[derive(Debug)]
struct Chart {
    state: ObjectFacade,
}

static CHART: FacadeDescriptor = FacadeDescriptor {
    interface: "Chart",
    host_type: "office.Chart",
    kind: ResourceKind::Object,
    properties: &[PropertyDescriptor {
        name: "Title",
        host_name: "Title",
        owns_handle: false,
        enum_like: false,
    }],
};

impl FacadeType for Chart {
    const DESCRIPTOR: &'static FacadeDescriptor = &CHART;

    fn from_state(state: ObjectFacade) -> Result<Self> {
        Ok(Self { state })
    }
}

impl Dispose for Chart {
    fn dispose(&self) {
        self.state.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }
}

/// Hand out an already-acquired handle for a fixture object.
fn handle_for(fx: &Fixture, raw: RawHandle) -> Handle {
    fx.host.add_refs(raw, 1);
    Handle::new(fx.session.clone(), HostValue::Object(raw)).unwrap()
}

#[test]
fn test_unregistered_interface_fails_resolution() {
    let fx = office_fixture();
    let chart_obj = fx.host.add_object("office.Chart");
    let handle = handle_for(&fx, chart_obj);

    match fx.session.resolve::<Chart>(handle).unwrap_err() {
        Error::ResolutionFailure { interface, .. } => assert_eq!(interface, "Chart"),
        other => panic!("expected resolution failure, got {other}"),
    }
    // The failed resolution did not leak the acquisition.
    assert_eq!(fx.host.refs(chart_obj), 0);
}

#[test]
fn test_unknown_name_fails_resolution() {
    let fx = office_fixture();
    let handle = handle_for(&fx, fx.budget);

    match fx.session.resolve_by_name("Chart", handle).unwrap_err() {
        Error::ResolutionFailure { interface, .. } => assert_eq!(interface, "Chart"),
        other => panic!("expected resolution failure, got {other}"),
    }
}

#[test]
fn test_concrete_type_mismatch_fails_resolution() {
    let fx = office_fixture();
    let handle = handle_for(&fx, fx.sheets);

    // A sheet collection is not a document.
    match fx.session.resolve::<Document>(handle).unwrap_err() {
        Error::ResolutionFailure { interface, reason } => {
            assert_eq!(interface, "Document");
            assert!(reason.contains("office.Sheets"), "reason: {reason}");
        }
        other => panic!("expected resolution failure, got {other}"),
    }
    assert_eq!(fx.host.refs(fx.sheets), 0);
}

#[test]
fn test_wrap_failure_on_non_object_value() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();

    // The host hands back a primitive where an owning property promised an
    // object.
    fx.host
        .put(fx.app, "ActiveDocument", HostValue::Text("oops".into()));
    match app.active_document().unwrap_err() {
        Error::WrapFailure {
            property, target, ..
        } => {
            assert_eq!(property, "ActiveDocument");
            assert_eq!(target, "Document");
        }
        other => panic!("expected wrap failure, got {other}"),
    }
}

#[test]
fn test_wrap_failure_on_wrong_host_type() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();

    // An object, but of the wrong concrete type for the declared target.
    fx.host
        .put(fx.app, "ActiveDocument", HostValue::Object(fx.sheets));
    match app.active_document().unwrap_err() {
        Error::WrapFailure {
            property, target, ..
        } => {
            assert_eq!(property, "ActiveDocument");
            assert_eq!(target, "Document");
        }
        other => panic!("expected wrap failure, got {other}"),
    }
    // The stray acquisition made while probing the value was given back.
    assert_eq!(fx.host.refs(fx.sheets), 0);
}

#[test]
fn test_resolution_is_deterministic() {
    let fx = office_fixture();

    let first = fx
        .session
        .resolve_by_name("Document", handle_for(&fx, fx.budget))
        .unwrap();
    let second = fx
        .session
        .resolve_by_name("Document", handle_for(&fx, fx.budget))
        .unwrap();

    // Same registration, same concrete implementation, same descriptor.
    assert_eq!(first.as_any().type_id(), second.as_any().type_id());
    assert!(std::ptr::eq(first.descriptor(), second.descriptor()));
}

#[test]
fn test_resolve_by_name_constructs_the_typed_facade() {
    let fx = office_fixture();
    let facade = fx
        .session
        .resolve_by_name("Document", handle_for(&fx, fx.budget))
        .unwrap();
    assert_eq!(facade.descriptor().interface, "Document");

    let doc: Box<dyn Any> = facade.into_any();
    let doc = doc.downcast::<Document>().expect("not a Document");
    assert_eq!(doc.name().unwrap(), "Budget.ods");
}

#[test]
fn test_resolutions_own_independent_acquisitions() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();

    let first = app.documents().get(1).unwrap();
    let second = app.documents().get(1).unwrap();
    assert_eq!(fx.host.refs(fx.budget), 2);
    assert_eq!(first.name().unwrap(), second.name().unwrap());
}

#[test]
fn test_registry_is_inspectable() {
    let registry = standard_registry();
    let mut interfaces: Vec<_> = registry.descriptors().map(|d| d.interface).collect();
    interfaces.sort_unstable();
    assert_eq!(
        interfaces,
        vec!["Application", "Document", "Documents", "Sheet", "Sheets"]
    );

    // Every collection interface declares its Count mapping.
    for descriptor in registry.descriptors() {
        if descriptor.kind == ResourceKind::Collection {
            assert!(descriptor.property("Count").is_some());
        }
    }
}
