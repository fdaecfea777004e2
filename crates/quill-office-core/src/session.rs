//! Session management: one live connection to a host backend.
//!
//! A [`HostSession`] owns the boxed [`Host`] backend and the finished
//! [`FacadeRegistry`], and is shared via `Rc` by every handle and facade it
//! produces. `Rc` is a deliberate choice, not a convenience: the host
//! requires all handle operations to happen on the thread that opened the
//! connection, and an `Rc`-shared session makes every facade `!Send`, so a
//! cross-thread call is rejected by the compiler instead of corrupting the
//! host.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::facade::ObjectFacade;
use crate::handle::Handle;
use crate::host::Host;
use crate::registry::{AnyFacade, FacadeRegistry, FacadeType};

/// A live connection to a host backend.
pub struct HostSession {
    host: Box<dyn Host>,
    registry: FacadeRegistry,
}

impl HostSession {
    /// Wrap a backend and a finished registry into a session.
    pub fn new(host: impl Host + 'static, registry: FacadeRegistry) -> Rc<Self> {
        Rc::new(Self {
            host: Box::new(host),
            registry,
        })
    }

    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    pub fn registry(&self) -> &FacadeRegistry {
        &self.registry
    }

    /// Acquire the application-root object and resolve it as `T`.
    pub fn root<T: FacadeType>(session: &Rc<Self>) -> Result<T> {
        let value = session
            .host
            .root()
            .map_err(|source| Error::host("Host", "root", source))?;
        let handle = Handle::new(Rc::clone(session), value)?;
        session.resolve(handle)
    }

    /// Resolve a raw acquisition into the typed facade `T`.
    ///
    /// The returned facade's handle is exactly the one supplied. Resolving
    /// two acquisitions of the same underlying host object yields two
    /// independent facades; whether the host coalesces their reference
    /// counts is host-defined and not guaranteed by this engine.
    pub fn resolve<T: FacadeType>(&self, handle: Handle) -> Result<T> {
        let entry = self.registry.get::<T>().ok_or_else(|| Error::ResolutionFailure {
            interface: T::DESCRIPTOR.interface.to_string(),
            reason: "interface is not registered".to_string(),
        })?;
        let descriptor = entry.descriptor();
        let concrete = self.type_name_of(&handle, descriptor.interface)?;
        if concrete != descriptor.host_type {
            return Err(Error::ResolutionFailure {
                interface: descriptor.interface.to_string(),
                reason: format!(
                    "host object is a {concrete}, expected {}",
                    descriptor.host_type
                ),
            });
        }
        tracing::trace!(interface = descriptor.interface, "resolved facade");
        T::from_state(ObjectFacade::new(handle, descriptor))
    }

    /// Type-erased resolution by interface name.
    pub fn resolve_by_name(&self, interface: &str, handle: Handle) -> Result<Box<dyn AnyFacade>> {
        let entry = self
            .registry
            .by_name(interface)
            .ok_or_else(|| Error::ResolutionFailure {
                interface: interface.to_string(),
                reason: "interface is not registered".to_string(),
            })?;
        let descriptor = entry.descriptor();
        let concrete = self.type_name_of(&handle, descriptor.interface)?;
        if concrete != descriptor.host_type {
            return Err(Error::ResolutionFailure {
                interface: descriptor.interface.to_string(),
                reason: format!(
                    "host object is a {concrete}, expected {}",
                    descriptor.host_type
                ),
            });
        }
        entry.construct(ObjectFacade::new(handle, descriptor))
    }

    /// Construct `T` around a handle whose concrete type has already been
    /// checked by the caller. Still verifies registration, so an unregistered
    /// interface is a resolution failure on every path.
    pub(crate) fn construct<T: FacadeType>(&self, handle: Handle) -> Result<T> {
        if !self.registry.contains::<T>() {
            return Err(Error::ResolutionFailure {
                interface: T::DESCRIPTOR.interface.to_string(),
                reason: "interface is not registered".to_string(),
            });
        }
        T::from_state(ObjectFacade::new(handle, T::DESCRIPTOR))
    }

    /// The host's concrete type name for a live handle.
    pub(crate) fn type_name_of(&self, handle: &Handle, interface: &'static str) -> Result<String> {
        let raw = handle.get().ok_or(Error::UseAfterDispose {
            interface,
            member: "type_name",
        })?;
        self.host
            .type_name(raw)
            .map_err(|source| Error::host(interface, "type_name", source))
    }
}

impl std::fmt::Debug for HostSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostSession")
            .field("registered_interfaces", &self.registry.len())
            .finish()
    }
}
