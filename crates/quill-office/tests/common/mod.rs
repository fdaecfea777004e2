//! Shared fixture: an in-memory host scripted to look like a small office
//! suite, and a session with the standard registry installed.
#![allow(dead_code)]

use std::rc::Rc;

use quill_office::{connect, HostSession, HostValue, MemoryHost, MethodBehavior, RawHandle};

pub struct Fixture {
    pub host: Rc<MemoryHost>,
    pub session: Rc<HostSession>,
    pub app: RawHandle,
    pub docs: RawHandle,
    pub budget: RawHandle,
    pub sheets: RawHandle,
    pub sheet_handles: Vec<RawHandle>,
}

/// One application with one open spreadsheet ("Budget.ods", three sheets)
/// and one open text document ("Notes.odt", no sheet collection).
pub fn office_fixture() -> Fixture {
    let host = Rc::new(MemoryHost::new());

    let app = host.add_object("office.Application");
    host.put(app, "Name", HostValue::Text("Quill Office".into()));
    host.put(app, "Visible", HostValue::Bool(false));
    host.set_root(app);

    let docs = host.add_collection("office.Documents", "office.Document");
    host.put(app, "Documents", HostValue::Object(docs));

    let budget = host.add_object("office.Document");
    host.put(budget, "Name", HostValue::Text("Budget.ods".into()));
    host.put(budget, "Kind", HostValue::Enum(1));
    host.put(budget, "Saved", HostValue::Bool(false));
    host.script(
        budget,
        "Save",
        MethodBehavior::SetProperty("Saved", HostValue::Bool(true)),
    );
    host.script(budget, "Close", MethodBehavior::Noop);
    host.push(docs, budget);

    let sheets = host.add_collection("office.Sheets", "office.Sheet");
    host.put(budget, "Sheets", HostValue::Object(sheets));

    let mut sheet_handles = Vec::new();
    for (i, name) in ["Overview", "Income", "Expenses"].iter().enumerate() {
        let sheet = host.add_object("office.Sheet");
        host.put(sheet, "Name", HostValue::Text((*name).to_string()));
        host.put(sheet, "Index", HostValue::Int(i as i64 + 1));
        host.put(sheet, "Visible", HostValue::Bool(true));
        host.push(sheets, sheet);
        sheet_handles.push(sheet);
    }

    let notes = host.add_object("office.Document");
    host.put(notes, "Name", HostValue::Text("Notes.odt".into()));
    host.put(notes, "Kind", HostValue::Enum(0));
    host.put(notes, "Saved", HostValue::Bool(true));
    host.script(notes, "Close", MethodBehavior::Noop);
    host.push(docs, notes);

    host.put(app, "ActiveDocument", HostValue::Object(budget));

    let session = connect(Rc::clone(&host));

    Fixture {
        host,
        session,
        app,
        docs,
        budget,
        sheets,
        sheet_handles,
    }
}
