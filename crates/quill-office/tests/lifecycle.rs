//! Handle lifecycle: fail-fast construction, idempotent disposal,
//! use-after-dispose, and the uniform release policy.

mod common;

use common::office_fixture;
use pretty_assertions::assert_eq;
use quill_office::prelude::*;
use quill_office::{Handle, HostError};

#[test]
fn test_null_handle_rejected_at_construction() {
    let fx = office_fixture();

    for value in [HostValue::Void, HostValue::Object(0)] {
        let err = Handle::new(fx.session.clone(), value).unwrap_err();
        assert!(matches!(err, Error::NullHandle { .. }), "got {err}");
    }

    // A primitive is not a handle either.
    let err = Handle::new(fx.session.clone(), HostValue::Int(5)).unwrap_err();
    assert!(matches!(err, Error::NullHandle { .. }));
}

#[test]
fn test_absent_active_document_is_null_handle() {
    let fx = office_fixture();
    fx.host.put(fx.app, "ActiveDocument", HostValue::Void);

    let app = Application::connect(&fx.session).unwrap();
    let err = app.active_document().unwrap_err();
    assert!(matches!(err, Error::NullHandle { .. }), "got {err}");
}

#[test]
fn test_dispose_is_idempotent() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    let doc = app.documents().get(1).unwrap();

    doc.dispose();
    assert!(doc.is_disposed());
    let attempts = fx.host.release_attempts();

    // The second dispose never reaches the host.
    doc.dispose();
    assert!(doc.is_disposed());
    assert_eq!(fx.host.release_attempts(), attempts);
}

#[test]
fn test_use_after_dispose_on_every_member() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    let doc = app.documents().get(1).unwrap();

    doc.dispose();
    assert!(matches!(
        doc.name().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
    assert!(matches!(
        doc.kind().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
    assert!(matches!(
        doc.saved().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
    assert!(matches!(
        doc.save().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
    assert!(matches!(
        doc.sheets().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));

    app.dispose();
    assert!(matches!(
        app.name().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
    assert!(matches!(
        app.active_document().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
    // The eagerly-owned child went down with the parent.
    assert!(app.documents().is_disposed());
    assert!(matches!(
        app.documents().count().unwrap_err(),
        Error::UseAfterDispose { .. }
    ));
}

#[test]
fn test_drop_releases_everything() {
    let fx = office_fixture();
    {
        let app = Application::connect(&fx.session).unwrap();
        let doc = app.documents().get(1).unwrap();
        let sheets = doc.sheets().unwrap();
        let _sheet = sheets.get(2).unwrap();
        assert!(fx.host.outstanding() > 0);
    }
    assert_eq!(fx.host.outstanding(), 0);
}

#[test]
fn test_release_drains_to_zero() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    let doc = app.documents().get(1).unwrap();
    assert_eq!(fx.host.refs(fx.budget), 1);

    // Host-side extra references on the same object: one dispose must keep
    // releasing until the host reports none left.
    fx.host.add_refs(fx.budget, 2);
    let attempts = fx.host.release_attempts();
    doc.dispose();
    assert_eq!(fx.host.refs(fx.budget), 0);
    assert_eq!(fx.host.release_attempts() - attempts, 3);
}

#[test]
fn test_release_failure_is_swallowed() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();

    // Two facades over the same host object, each owning an acquisition.
    let first = app.documents().get(1).unwrap();
    let second = app.documents().get(1).unwrap();
    assert_eq!(fx.host.refs(fx.budget), 2);

    // Draining to zero takes the second facade's count with it — the host
    // does not distinguish the acquisitions.
    first.dispose();
    assert_eq!(fx.host.refs(fx.budget), 0);

    // The second facade's release now fails host-side; disposal swallows it.
    second.dispose();
    assert!(second.is_disposed());
}

#[test]
fn test_dispose_parent_then_leak_free() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    app.dispose();
    assert_eq!(fx.host.outstanding(), 0);
}

#[test]
fn test_enum_remapping() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    let doc = app.documents().get(1).unwrap();
    assert_eq!(doc.kind().unwrap(), DocumentKind::Spreadsheet);

    // Hosts sometimes hand enum members back as plain integers.
    fx.host.put(fx.budget, "Kind", HostValue::Int(2));
    assert_eq!(doc.kind().unwrap(), DocumentKind::Presentation);

    // A value outside the public enum's range is a host shape error.
    fx.host.put(fx.budget, "Kind", HostValue::Enum(9));
    assert!(matches!(doc.kind().unwrap_err(), Error::Host { .. }));
}

#[test]
fn test_passthrough_and_methods() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    assert_eq!(app.name().unwrap(), "Quill Office");

    assert!(!app.visible().unwrap());
    app.set_visible(true).unwrap();
    assert!(app.visible().unwrap());

    let doc = app.documents().get(1).unwrap();
    assert!(!doc.saved().unwrap());
    doc.save().unwrap();
    assert!(doc.saved().unwrap());
}

#[test]
fn test_host_rejection_propagates_with_context() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();

    // The text document has no sheet collection; the host's rejection comes
    // back wrapped with the facade interface, not swallowed.
    let notes = app.documents().get(2).unwrap();
    assert_eq!(notes.kind().unwrap(), DocumentKind::Text);
    match notes.sheets().unwrap_err() {
        Error::Host {
            interface, source, ..
        } => {
            assert_eq!(interface, "Document");
            assert!(matches!(source, HostError::UnknownMember(_)));
        }
        other => panic!("expected host error, got {other}"),
    }
}

#[test]
fn test_close_consumes_and_releases() {
    let fx = office_fixture();
    let app = Application::connect(&fx.session).unwrap();
    let doc = app.documents().get(1).unwrap();

    doc.close().unwrap();
    drop(app);
    assert_eq!(fx.host.outstanding(), 0);
}
