//! Declarative metadata describing how facade interfaces map onto host objects.
//!
//! Each facade interface carries one [`FacadeDescriptor`]: the host type it
//! wraps, whether it is singular or a collection, and a table of
//! [`PropertyDescriptor`] entries. The tables are plain `'static` data so they
//! can be inspected and tested without constructing a single facade.
//!
//! The table answers exactly three questions per property, and the resolver
//! and generic accessors rely on the answers being correct:
//! 1. which host-side member name the property maps to,
//! 2. whether the getter transfers ownership of a newly acquired object,
//! 3. whether the raw value needs remapping from a host-private enumeration.

/// Whether an interface wraps a single host object or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Object,
    Collection,
}

/// How one facade property maps onto a host member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Facade-side property name.
    pub name: &'static str,
    /// Host-side member name.
    pub host_name: &'static str,
    /// The getter hands back a freshly acquired object whose release becomes
    /// the caller's responsibility. A property that can yield a live object
    /// MUST set this, or the acquisition leaks silently.
    pub owns_handle: bool,
    /// The raw value is one of the host's private enumerations and must be
    /// remapped to the facade's public enum.
    pub enum_like: bool,
}

/// Metadata for one facade interface.
#[derive(Debug)]
pub struct FacadeDescriptor {
    /// Facade-side interface name, e.g. `"Document"`.
    pub interface: &'static str,
    /// The host's concrete type name this interface wraps, e.g.
    /// `"office.Document"`.
    pub host_type: &'static str,
    pub kind: ResourceKind,
    pub properties: &'static [PropertyDescriptor],
}

impl FacadeDescriptor {
    /// Look up a property by its facade-side name.
    pub fn property(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Host-side member name for a facade property. Properties absent from
    /// the table pass through under their facade-side name.
    pub fn host_name(&self, name: &'static str) -> &'static str {
        self.property(name).map(|p| p.host_name).unwrap_or(name)
    }

    /// Whether the property's getter transfers ownership of a new object.
    /// Undeclared properties never do.
    pub fn owns_handle(&self, name: &str) -> bool {
        self.property(name).map(|p| p.owns_handle).unwrap_or(false)
    }

    /// Whether the property's raw value needs enum remapping.
    pub fn enum_like(&self, name: &str) -> bool {
        self.property(name).map(|p| p.enum_like).unwrap_or(false)
    }
}
