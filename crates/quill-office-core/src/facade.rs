//! Facade state and the disposal protocol.
//!
//! Every typed wrapper embeds one [`ObjectFacade`]: a handle plus the
//! interface's descriptor. The accessors here implement the three member
//! patterns every wrapper is built from — typed passthrough, enum remapping,
//! and ownership-transferring wrap — all guarded by the disposed check.

use std::rc::Rc;

use crate::descriptor::FacadeDescriptor;
use crate::error::{Error, Result};
use crate::handle::Handle;
use crate::host::{HostError, HostValue, RawHandle};
use crate::registry::FacadeType;
use crate::session::HostSession;

/// Explicit disposal protocol.
///
/// `dispose` is idempotent: only the first call releases anything. Wrappers
/// that hold eagerly-created children dispose them first, then their own
/// state. Dropping a facade disposes it implicitly; `dispose` exists for
/// callers that want deterministic teardown while the value is still alive.
pub trait Dispose {
    fn dispose(&self);
    fn is_disposed(&self) -> bool;
}

/// The state every facade wrapper embeds: one owned handle and the
/// interface's declarative metadata.
#[derive(Debug)]
pub struct ObjectFacade {
    handle: Handle,
    descriptor: &'static FacadeDescriptor,
}

impl ObjectFacade {
    pub fn new(handle: Handle, descriptor: &'static FacadeDescriptor) -> Self {
        Self { handle, descriptor }
    }

    pub fn descriptor(&self) -> &'static FacadeDescriptor {
        self.descriptor
    }

    pub fn session(&self) -> &Rc<HostSession> {
        self.handle.session()
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// The live raw handle, or `UseAfterDispose` naming the member being
    /// accessed.
    fn raw(&self, member: &'static str) -> Result<RawHandle> {
        self.handle.get().ok_or(Error::UseAfterDispose {
            interface: self.descriptor.interface,
            member,
        })
    }

    fn host_err(&self, operation: String, source: HostError) -> Error {
        Error::Host {
            interface: self.descriptor.interface,
            operation,
            source,
        }
    }

    fn shape_err(&self, member: &'static str, expected: &'static str, got: &HostValue) -> Error {
        self.host_err(
            format!("get {member}"),
            HostError::Shape {
                expected,
                got: got.kind().to_string(),
            },
        )
    }

    // ------------------------------------------------------------------
    // Raw member access
    // ------------------------------------------------------------------

    /// Read a member's raw value.
    pub fn get_raw(&self, property: &'static str) -> Result<HostValue> {
        let raw = self.raw(property)?;
        let host_name = self.descriptor.host_name(property);
        self.session()
            .host()
            .get_property(raw, host_name)
            .map_err(|source| self.host_err(format!("get {host_name}"), source))
    }

    /// Write a member's raw value.
    pub fn set_raw(&self, property: &'static str, value: HostValue) -> Result<()> {
        let raw = self.raw(property)?;
        let host_name = self.descriptor.host_name(property);
        self.session()
            .host()
            .set_property(raw, host_name, value)
            .map_err(|source| self.host_err(format!("set {host_name}"), source))
    }

    /// Call a host method on the wrapped object.
    pub fn invoke(&self, method: &'static str, args: &[HostValue]) -> Result<HostValue> {
        let raw = self.raw(method)?;
        self.session()
            .host()
            .invoke(raw, method, args)
            .map_err(|source| self.host_err(format!("{method}()"), source))
    }

    // ------------------------------------------------------------------
    // Typed passthrough
    // ------------------------------------------------------------------

    pub fn get_bool(&self, property: &'static str) -> Result<bool> {
        let v = self.get_raw(property)?;
        v.as_bool()
            .ok_or_else(|| self.shape_err(property, "bool", &v))
    }

    pub fn get_i64(&self, property: &'static str) -> Result<i64> {
        let v = self.get_raw(property)?;
        v.as_i64()
            .ok_or_else(|| self.shape_err(property, "int", &v))
    }

    pub fn get_f64(&self, property: &'static str) -> Result<f64> {
        let v = self.get_raw(property)?;
        v.as_f64()
            .ok_or_else(|| self.shape_err(property, "float", &v))
    }

    pub fn get_text(&self, property: &'static str) -> Result<String> {
        let v = self.get_raw(property)?;
        match v {
            HostValue::Text(s) => Ok(s),
            other => Err(self.shape_err(property, "text", &other)),
        }
    }

    pub fn set_bool(&self, property: &'static str, value: bool) -> Result<()> {
        self.set_raw(property, HostValue::Bool(value))
    }

    pub fn set_i64(&self, property: &'static str, value: i64) -> Result<()> {
        self.set_raw(property, HostValue::Int(value))
    }

    pub fn set_f64(&self, property: &'static str, value: f64) -> Result<()> {
        self.set_raw(property, HostValue::Float(value))
    }

    pub fn set_text(&self, property: &'static str, value: &str) -> Result<()> {
        self.set_raw(property, HostValue::Text(value.to_string()))
    }

    // ------------------------------------------------------------------
    // Enum remapping
    // ------------------------------------------------------------------

    /// Read an enum-like member and remap it to the facade's public enum.
    ///
    /// Values outside the public enum's range surface as a host shape error:
    /// the host produced something the declared mapping cannot represent.
    pub fn get_enum<E>(&self, property: &'static str) -> Result<E>
    where
        E: TryFrom<i32>,
    {
        let v = self.get_raw(property)?;
        let n = v
            .as_enum()
            .ok_or_else(|| self.shape_err(property, "enum", &v))?;
        E::try_from(n).map_err(|_| self.shape_err(property, "a known enum value", &v))
    }

    // ------------------------------------------------------------------
    // Ownership-transferring wrap
    // ------------------------------------------------------------------

    /// Read a resource-owning property and wrap the result as `T`.
    ///
    /// The property must be declared `owns_handle` in the descriptor table;
    /// an undeclared or non-owning property is a wrap failure, not a leak.
    /// The returned facade owns a fresh acquisition — releasing it is the
    /// caller's responsibility, not this facade's.
    pub fn get_facade<T: FacadeType>(&self, property: &'static str) -> Result<T> {
        let raw = self.raw(property)?;
        let Some(prop) = self.descriptor.property(property) else {
            return Err(Error::WrapFailure {
                property,
                target: T::DESCRIPTOR.interface.to_string(),
                value: "a property missing from the descriptor table".to_string(),
            });
        };
        if !prop.owns_handle {
            return Err(Error::WrapFailure {
                property,
                target: T::DESCRIPTOR.interface.to_string(),
                value: "a property not declared as resource-owning".to_string(),
            });
        }
        let value = self
            .session()
            .host()
            .get_property(raw, prop.host_name)
            .map_err(|source| self.host_err(format!("get {}", prop.host_name), source))?;
        self.wrap_value(property, value)
    }

    /// Wrap an object-valued host result (property read or method return)
    /// into its declared facade type.
    ///
    /// Void and zero references fail with `NullHandle`; any other shape the
    /// target cannot be built from — a non-object value, or an object of a
    /// different concrete host type — fails with `WrapFailure` naming the
    /// member and the declared target.
    pub fn wrap_value<T: FacadeType>(&self, member: &'static str, value: HostValue) -> Result<T> {
        match value {
            HostValue::Void | HostValue::Object(0) => Err(Error::NullHandle {
                got: value.to_string(),
            }),
            HostValue::Object(_) => {
                let session = self.session().clone();
                let handle = Handle::new(session, value)?;
                let concrete = self
                    .session()
                    .type_name_of(&handle, T::DESCRIPTOR.interface)?;
                if concrete != T::DESCRIPTOR.host_type {
                    // Dropping the handle here releases the stray acquisition.
                    return Err(Error::WrapFailure {
                        property: member,
                        target: T::DESCRIPTOR.interface.to_string(),
                        value: format!("a host object of type {concrete}"),
                    });
                }
                self.session().construct::<T>(handle)
            }
            other => Err(Error::WrapFailure {
                property: member,
                target: T::DESCRIPTOR.interface.to_string(),
                value: format!("a {} value ({other})", other.kind()),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Disposal
    // ------------------------------------------------------------------

    pub fn dispose(&self) {
        self.handle.release();
    }

    pub fn is_disposed(&self) -> bool {
        self.handle.is_released()
    }
}
