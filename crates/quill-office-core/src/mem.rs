//! In-memory host backend.
//!
//! `MemoryHost` models the external automation application as a plain object
//! table: per-object acquisition counts, property maps, collection elements,
//! and scripted method behaviors. It backs the test suites and offline
//! development, and doubles as the leak oracle — [`MemoryHost::outstanding`]
//! reports how many acquisitions clients still hold.
//!
//! The built-in verbs mirror the automation surface real hosts expose on
//! sequence objects: `Item` (1-based element access), `Add`, `Remove`,
//! `Clear`. Everything else is scripted per object via [`MethodBehavior`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::host::{Host, HostError, HostValue, RawHandle};

/// Scripted behavior for one host method on one object.
#[derive(Debug, Clone)]
pub enum MethodBehavior {
    /// Succeed, set a property, return void.
    SetProperty(&'static str, HostValue),
    /// Succeed, return a copy of a property's value.
    ReturnProperty(&'static str),
    /// Succeed and do nothing.
    Noop,
    /// Reject with the given diagnostic.
    Fail(&'static str),
}

#[derive(Debug)]
struct MemObject {
    type_name: String,
    /// Acquisitions currently held by clients.
    refs: u32,
    props: HashMap<String, HostValue>,
    /// `Some` for collection objects.
    elements: Option<Vec<RawHandle>>,
    /// Type the built-in `Add` verb instantiates.
    element_type: Option<String>,
    methods: HashMap<String, MethodBehavior>,
}

#[derive(Debug, Default)]
struct Inner {
    objects: HashMap<RawHandle, MemObject>,
    next: RawHandle,
    root: RawHandle,
    release_attempts: u64,
}

impl Inner {
    fn object(&self, raw: RawHandle) -> Result<&MemObject, HostError> {
        self.objects.get(&raw).ok_or(HostError::UnknownHandle(raw))
    }

    fn object_mut(&mut self, raw: RawHandle) -> Result<&mut MemObject, HostError> {
        self.objects
            .get_mut(&raw)
            .ok_or(HostError::UnknownHandle(raw))
    }

    fn acquire(&mut self, raw: RawHandle) -> Result<(), HostError> {
        self.object_mut(raw)?.refs += 1;
        Ok(())
    }

    /// Hand a value out across the boundary: object references count as a
    /// fresh acquisition.
    fn hand_out(&mut self, value: HostValue) -> Result<HostValue, HostError> {
        if let HostValue::Object(target) = value {
            if target != 0 {
                self.acquire(target)?;
            }
        }
        Ok(value)
    }

    fn alloc(
        &mut self,
        type_name: &str,
        elements: Option<Vec<RawHandle>>,
        element_type: Option<&str>,
    ) -> RawHandle {
        self.next += 1;
        let raw = self.next;
        self.objects.insert(
            raw,
            MemObject {
                type_name: type_name.to_string(),
                refs: 0,
                props: HashMap::new(),
                elements,
                element_type: element_type.map(str::to_string),
                methods: HashMap::new(),
            },
        );
        raw
    }
}

/// A scriptable in-memory [`Host`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    inner: RefCell<Inner>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a singular object. The returned handle is not yet acquired by
    /// any client.
    pub fn add_object(&self, type_name: &str) -> RawHandle {
        self.inner.borrow_mut().alloc(type_name, None, None)
    }

    /// Create a collection object whose built-in `Add` verb instantiates
    /// `element_type`.
    pub fn add_collection(&self, type_name: &str, element_type: &str) -> RawHandle {
        self.inner
            .borrow_mut()
            .alloc(type_name, Some(Vec::new()), Some(element_type))
    }

    /// Designate the application-root object handed out by [`Host::root`].
    pub fn set_root(&self, raw: RawHandle) {
        self.inner.borrow_mut().root = raw;
    }

    /// Define or overwrite a property.
    pub fn put(&self, raw: RawHandle, name: &str, value: HostValue) {
        if let Ok(obj) = self.inner.borrow_mut().object_mut(raw) {
            obj.props.insert(name.to_string(), value);
        }
    }

    /// Append an element to a collection object.
    pub fn push(&self, collection: RawHandle, element: RawHandle) {
        if let Ok(obj) = self.inner.borrow_mut().object_mut(collection) {
            if let Some(elements) = obj.elements.as_mut() {
                elements.push(element);
            }
        }
    }

    /// Script a method on one object.
    pub fn script(&self, raw: RawHandle, method: &str, behavior: MethodBehavior) {
        if let Ok(obj) = self.inner.borrow_mut().object_mut(raw) {
            obj.methods.insert(method.to_string(), behavior);
        }
    }

    /// Model host-side extra references on an object, forcing clients to
    /// drain more than one release before the count reaches zero.
    pub fn add_refs(&self, raw: RawHandle, extra: u32) {
        if let Ok(obj) = self.inner.borrow_mut().object_mut(raw) {
            obj.refs += extra;
        }
    }

    /// Acquisitions clients still hold on one object.
    pub fn refs(&self, raw: RawHandle) -> u32 {
        self.inner
            .borrow()
            .objects
            .get(&raw)
            .map(|o| o.refs)
            .unwrap_or(0)
    }

    /// Acquisitions clients still hold across all objects. Zero means no
    /// leaks.
    pub fn outstanding(&self) -> u32 {
        self.inner.borrow().objects.values().map(|o| o.refs).sum()
    }

    /// Total number of release calls this host has received, successful or
    /// not.
    pub fn release_attempts(&self) -> u64 {
        self.inner.borrow().release_attempts
    }
}

impl Host for MemoryHost {
    fn root(&self) -> Result<HostValue, HostError> {
        let mut inner = self.inner.borrow_mut();
        let root = inner.root;
        if root == 0 {
            return Err(HostError::Rejected("no application object".to_string()));
        }
        inner.hand_out(HostValue::Object(root))
    }

    fn type_name(&self, raw: RawHandle) -> Result<String, HostError> {
        Ok(self.inner.borrow().object(raw)?.type_name.clone())
    }

    fn get_property(&self, raw: RawHandle, name: &str) -> Result<HostValue, HostError> {
        let mut inner = self.inner.borrow_mut();
        let obj = inner.object(raw)?;
        if name == "Count" {
            if let Some(elements) = &obj.elements {
                return Ok(HostValue::Int(elements.len() as i64));
            }
        }
        let value = obj
            .props
            .get(name)
            .cloned()
            .ok_or_else(|| HostError::UnknownMember(name.to_string()))?;
        inner.hand_out(value)
    }

    fn set_property(&self, raw: RawHandle, name: &str, value: HostValue) -> Result<(), HostError> {
        let mut inner = self.inner.borrow_mut();
        let obj = inner.object_mut(raw)?;
        if !obj.props.contains_key(name) {
            return Err(HostError::UnknownMember(name.to_string()));
        }
        obj.props.insert(name.to_string(), value);
        Ok(())
    }

    fn invoke(
        &self,
        raw: RawHandle,
        method: &str,
        args: &[HostValue],
    ) -> Result<HostValue, HostError> {
        let mut inner = self.inner.borrow_mut();
        let obj = inner.object(raw)?;

        // Built-in collection verbs.
        if obj.elements.is_some() {
            match method {
                "Item" => {
                    let index = args
                        .first()
                        .and_then(HostValue::as_i64)
                        .ok_or_else(|| HostError::Rejected("Item expects an index".to_string()))?;
                    let elements = inner.object(raw)?.elements.as_ref().unwrap();
                    if index < 1 || index as usize > elements.len() {
                        return Err(HostError::Rejected(format!("index {index} out of range")));
                    }
                    let target = elements[index as usize - 1];
                    return inner.hand_out(HostValue::Object(target));
                }
                "Add" => {
                    let element_type = inner
                        .object(raw)?
                        .element_type
                        .clone()
                        .ok_or_else(|| HostError::Rejected("collection cannot add".to_string()))?;
                    let element = inner.alloc(&element_type, None, None);
                    if let Some(HostValue::Text(name)) = args.first() {
                        let name = name.clone();
                        inner
                            .object_mut(element)?
                            .props
                            .insert("Name".to_string(), HostValue::Text(name));
                    }
                    inner
                        .object_mut(raw)?
                        .elements
                        .as_mut()
                        .unwrap()
                        .push(element);
                    return inner.hand_out(HostValue::Object(element));
                }
                "Remove" => {
                    let index = args
                        .first()
                        .and_then(HostValue::as_i64)
                        .ok_or_else(|| HostError::Rejected("Remove expects an index".to_string()))?;
                    let obj = inner.object_mut(raw)?;
                    let elements = obj.elements.as_mut().unwrap();
                    if index < 1 || index as usize > elements.len() {
                        return Err(HostError::Rejected(format!("index {index} out of range")));
                    }
                    // The removed object stays in the table; clients may
                    // still hold acquisitions on it.
                    elements.remove(index as usize - 1);
                    return Ok(HostValue::Void);
                }
                "Clear" => {
                    inner.object_mut(raw)?.elements.as_mut().unwrap().clear();
                    return Ok(HostValue::Void);
                }
                _ => {}
            }
        }

        let behavior = inner
            .object(raw)?
            .methods
            .get(method)
            .cloned()
            .ok_or_else(|| HostError::UnknownMember(method.to_string()))?;
        match behavior {
            MethodBehavior::SetProperty(name, value) => {
                inner
                    .object_mut(raw)?
                    .props
                    .insert(name.to_string(), value);
                Ok(HostValue::Void)
            }
            MethodBehavior::ReturnProperty(name) => {
                let value = inner
                    .object(raw)?
                    .props
                    .get(name)
                    .cloned()
                    .ok_or_else(|| HostError::UnknownMember(name.to_string()))?;
                inner.hand_out(value)
            }
            MethodBehavior::Noop => Ok(HostValue::Void),
            MethodBehavior::Fail(message) => Err(HostError::Rejected(message.to_string())),
        }
    }

    fn release(&self, raw: RawHandle) -> Result<u32, HostError> {
        let mut inner = self.inner.borrow_mut();
        inner.release_attempts += 1;
        let obj = inner.object_mut(raw)?;
        if obj.refs == 0 {
            return Err(HostError::Rejected(format!(
                "object {raw} has no outstanding acquisitions"
            )));
        }
        obj.refs -= 1;
        Ok(obj.refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_acquires() {
        let host = MemoryHost::new();
        let app = host.add_object("office.Application");
        host.set_root(app);

        assert_eq!(host.refs(app), 0);
        let value = host.root().unwrap();
        assert_eq!(value, HostValue::Object(app));
        assert_eq!(host.refs(app), 1);
    }

    #[test]
    fn test_object_property_acquires_target() {
        let host = MemoryHost::new();
        let app = host.add_object("office.Application");
        let doc = host.add_object("office.Document");
        host.put(app, "ActiveDocument", HostValue::Object(doc));

        host.get_property(app, "ActiveDocument").unwrap();
        assert_eq!(host.refs(doc), 1);
    }

    #[test]
    fn test_release_accounting() {
        let host = MemoryHost::new();
        let doc = host.add_object("office.Document");
        host.add_refs(doc, 2);

        assert_eq!(host.release(doc).unwrap(), 1);
        assert_eq!(host.release(doc).unwrap(), 0);
        assert!(matches!(
            host.release(doc),
            Err(HostError::Rejected(_))
        ));
    }

    #[test]
    fn test_collection_verbs() {
        let host = MemoryHost::new();
        let sheets = host.add_collection("office.Sheets", "office.Sheet");
        let s1 = host.add_object("office.Sheet");
        host.push(sheets, s1);

        assert_eq!(
            host.get_property(sheets, "Count").unwrap(),
            HostValue::Int(1)
        );
        assert_eq!(
            host.invoke(sheets, "Item", &[HostValue::Int(1)]).unwrap(),
            HostValue::Object(s1)
        );
        assert!(host.invoke(sheets, "Item", &[HostValue::Int(2)]).is_err());

        let added = host
            .invoke(sheets, "Add", &[HostValue::Text("Data".to_string())])
            .unwrap();
        let added = added.as_object().unwrap();
        assert_eq!(
            host.get_property(sheets, "Count").unwrap(),
            HostValue::Int(2)
        );
        assert_eq!(
            host.get_property(added, "Name").unwrap(),
            HostValue::Text("Data".to_string())
        );

        host.invoke(sheets, "Remove", &[HostValue::Int(1)]).unwrap();
        assert_eq!(
            host.get_property(sheets, "Count").unwrap(),
            HostValue::Int(1)
        );
        // The removed object is still addressable by holders of a handle.
        assert_eq!(host.type_name(s1).unwrap(), "office.Sheet");
    }

    #[test]
    fn test_scripted_methods() {
        let host = MemoryHost::new();
        let doc = host.add_object("office.Document");
        host.put(doc, "Saved", HostValue::Bool(false));
        host.script(doc, "Save", MethodBehavior::SetProperty("Saved", HostValue::Bool(true)));
        host.script(doc, "Print", MethodBehavior::Fail("no printer"));

        host.invoke(doc, "Save", &[]).unwrap();
        assert_eq!(
            host.get_property(doc, "Saved").unwrap(),
            HostValue::Bool(true)
        );
        assert!(matches!(
            host.invoke(doc, "Print", &[]),
            Err(HostError::Rejected(_))
        ));
        assert!(matches!(
            host.invoke(doc, "Bogus", &[]),
            Err(HostError::UnknownMember(_))
        ));
    }
}
