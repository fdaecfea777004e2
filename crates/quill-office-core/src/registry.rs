//! The interface-to-constructor registry behind facade resolution.
//!
//! Instead of deriving implementation types from interface names at runtime,
//! every facade interface is registered up front: its descriptor plus a
//! constructor function. Resolution is then a hash lookup, and an
//! unregistered interface is a defined error rather than a reflective miss.
//!
//! A registry is built once at startup and installed into a
//! [`HostSession`](crate::session::HostSession); it is immutable afterwards.

use std::any::{Any, TypeId};

use ahash::AHashMap;

use crate::descriptor::FacadeDescriptor;
use crate::error::Result;
use crate::facade::{Dispose, ObjectFacade};

/// A typed facade wrapper constructible from engine state.
///
/// Implementations embed the [`ObjectFacade`] they are handed; the state's
/// handle is exactly the one the caller supplied, with no copying or extra
/// wrapping layers.
pub trait FacadeType: Sized + 'static {
    /// The declarative metadata for this interface.
    const DESCRIPTOR: &'static FacadeDescriptor;

    /// Build the wrapper around already-verified engine state.
    ///
    /// Fallible because wrappers may eagerly resolve owned children.
    fn from_state(state: ObjectFacade) -> Result<Self>;
}

/// Type-erased facade surface, for the by-name resolution path.
pub trait AnyFacade: Dispose + Any {
    fn descriptor(&self) -> &'static FacadeDescriptor;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> AnyFacade for T
where
    T: FacadeType + Dispose,
{
    fn descriptor(&self) -> &'static FacadeDescriptor {
        T::DESCRIPTOR
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl std::fmt::Debug for dyn AnyFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyFacade")
            .field("interface", &self.descriptor().interface)
            .finish()
    }
}

/// One registered interface: its descriptor and constructor.
#[derive(Clone)]
pub struct Registration {
    descriptor: &'static FacadeDescriptor,
    construct: fn(ObjectFacade) -> Result<Box<dyn AnyFacade>>,
}

impl Registration {
    pub fn descriptor(&self) -> &'static FacadeDescriptor {
        self.descriptor
    }

    pub(crate) fn construct(&self, state: ObjectFacade) -> Result<Box<dyn AnyFacade>> {
        (self.construct)(state)
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("interface", &self.descriptor.interface)
            .field("host_type", &self.descriptor.host_type)
            .finish()
    }
}

/// Maps facade interfaces to their descriptors and constructors.
#[derive(Debug, Clone, Default)]
pub struct FacadeRegistry {
    by_type: AHashMap<TypeId, Registration>,
    by_name: AHashMap<&'static str, TypeId>,
}

impl FacadeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a facade interface. Registering a second type under the same
    /// interface name replaces the earlier registration.
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: FacadeType + Dispose,
    {
        fn build<T: FacadeType + Dispose>(state: ObjectFacade) -> Result<Box<dyn AnyFacade>> {
            Ok(Box::new(T::from_state(state)?))
        }

        let id = TypeId::of::<T>();
        if let Some(old) = self.by_name.insert(T::DESCRIPTOR.interface, id) {
            if old != id {
                self.by_type.remove(&old);
            }
        }
        self.by_type.insert(
            id,
            Registration {
                descriptor: T::DESCRIPTOR,
                construct: build::<T>,
            },
        );
        self
    }

    pub fn get<T: FacadeType>(&self) -> Option<&Registration> {
        self.by_type.get(&TypeId::of::<T>())
    }

    pub fn by_name(&self, interface: &str) -> Option<&Registration> {
        self.by_name.get(interface).and_then(|id| self.by_type.get(id))
    }

    pub fn contains<T: FacadeType>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Iterate the registered descriptors. This is the inspectable metadata
    /// surface: tooling and tests can audit every mapping without touching a
    /// host.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static FacadeDescriptor> + '_ {
        self.by_type.values().map(|r| r.descriptor)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
