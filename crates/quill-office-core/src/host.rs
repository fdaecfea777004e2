//! The host boundary: raw handles, untyped values, and the backend trait.
//!
//! A host is the external automation application (a document/spreadsheet/
//! presentation editor suite) seen as an object table addressed by opaque
//! handles. Backends implement [`Host`]; everything above this module is
//! backend-agnostic.

use thiserror::Error;

/// Identifier the host mints for one externally-owned object.
///
/// `0` is reserved: no live object is ever numbered zero, and a zero object
/// reference coming back from the host means "nothing here".
pub type RawHandle = u64;

/// An untyped value crossing the host boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Void,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A value of one of the host's private enumerations.
    Enum(i32),
    /// A reference to an externally-owned object. Receiving one transfers a
    /// fresh acquisition to the caller, who becomes responsible for its
    /// release.
    Object(RawHandle),
}

impl HostValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HostValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Enumeration payload. Hosts are inconsistent about whether enum-valued
    /// members come back as `Enum` or plain `Int`, so both are accepted.
    pub fn as_enum(&self) -> Option<i32> {
        match self {
            HostValue::Enum(n) => Some(*n),
            HostValue::Int(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<RawHandle> {
        match self {
            HostValue::Object(raw) => Some(*raw),
            _ => None,
        }
    }

    /// Short label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            HostValue::Void => "void",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Text(_) => "text",
            HostValue::Enum(_) => "enum",
            HostValue::Object(_) => "object",
        }
    }
}

impl std::fmt::Display for HostValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostValue::Void => write!(f, "<void>"),
            HostValue::Bool(b) => write!(f, "{b}"),
            HostValue::Int(n) => write!(f, "{n}"),
            HostValue::Float(n) => write!(f, "{n}"),
            HostValue::Text(s) => write!(f, "{s}"),
            HostValue::Enum(n) => write!(f, "enum({n})"),
            HostValue::Object(raw) => write!(f, "object#{raw}"),
        }
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        HostValue::Bool(b)
    }
}

impl From<i64> for HostValue {
    fn from(n: i64) -> Self {
        HostValue::Int(n)
    }
}

impl From<f64> for HostValue {
    fn from(n: f64) -> Self {
        HostValue::Float(n)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::Text(s.to_string())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::Text(s)
    }
}

/// Failures reported by a host backend.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("unknown handle: {0}")]
    UnknownHandle(RawHandle),

    #[error("unknown member: {0}")]
    UnknownMember(String),

    #[error("operation rejected by host: {0}")]
    Rejected(String),

    #[error("host returned {got} where {expected} was expected")]
    Shape {
        expected: &'static str,
        got: String,
    },

    #[error("transport failure: {0}")]
    Transport(String),
}

/// A host backend.
///
/// Every `HostValue::Object` a method of this trait hands back represents a
/// fresh acquisition the caller must eventually give back via [`Host::release`].
/// The engine never assumes two acquisitions of the same underlying object
/// share a reference count; whether the host coalesces them is host-defined.
pub trait Host {
    /// The application-root object.
    fn root(&self) -> Result<HostValue, HostError>;

    /// The host's concrete type name for a live object, e.g. `"office.Document"`.
    fn type_name(&self, raw: RawHandle) -> Result<String, HostError>;

    /// Read a member. Object-valued results are freshly acquired.
    fn get_property(&self, raw: RawHandle, name: &str) -> Result<HostValue, HostError>;

    /// Write a member.
    fn set_property(&self, raw: RawHandle, name: &str, value: HostValue) -> Result<(), HostError>;

    /// Call a method. Object-valued results are freshly acquired.
    fn invoke(&self, raw: RawHandle, method: &str, args: &[HostValue])
        -> Result<HostValue, HostError>;

    /// Give back one acquisition of `raw`. Returns the number of acquisitions
    /// the host still tracks for the object after this one.
    fn release(&self, raw: RawHandle) -> Result<u32, HostError>;
}

/// Delegation so a backend can be shared between a session and a test or
/// diagnostic observer.
impl<H: Host + ?Sized> Host for std::rc::Rc<H> {
    fn root(&self) -> Result<HostValue, HostError> {
        (**self).root()
    }

    fn type_name(&self, raw: RawHandle) -> Result<String, HostError> {
        (**self).type_name(raw)
    }

    fn get_property(&self, raw: RawHandle, name: &str) -> Result<HostValue, HostError> {
        (**self).get_property(raw, name)
    }

    fn set_property(&self, raw: RawHandle, name: &str, value: HostValue) -> Result<(), HostError> {
        (**self).set_property(raw, name, value)
    }

    fn invoke(
        &self,
        raw: RawHandle,
        method: &str,
        args: &[HostValue],
    ) -> Result<HostValue, HostError> {
        (**self).invoke(raw, method, args)
    }

    fn release(&self, raw: RawHandle) -> Result<u32, HostError> {
        (**self).release(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(HostValue::Bool(true).as_bool(), Some(true));
        assert_eq!(HostValue::Int(7).as_i64(), Some(7));
        assert_eq!(HostValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(HostValue::Text("x".into()).as_str(), Some("x"));
        assert_eq!(HostValue::Object(3).as_object(), Some(3));
        assert_eq!(HostValue::Void.as_bool(), None);
        assert_eq!(HostValue::Int(1).as_f64(), None);
    }

    #[test]
    fn test_enum_accepts_int_payload() {
        assert_eq!(HostValue::Enum(2).as_enum(), Some(2));
        assert_eq!(HostValue::Int(2).as_enum(), Some(2));
        assert_eq!(HostValue::Int(i64::MAX).as_enum(), None);
        assert_eq!(HostValue::Text("2".into()).as_enum(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(HostValue::Void.to_string(), "<void>");
        assert_eq!(HostValue::Object(12).to_string(), "object#12");
        assert_eq!(HostValue::Enum(1).to_string(), "enum(1)");
    }
}
