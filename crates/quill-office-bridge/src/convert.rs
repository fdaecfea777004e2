//! Conversions between the engine's boundary values and the wire format.

use quill_office_core::HostValue;
use quill_office_protocol::WireValue;

pub(crate) fn to_wire(value: &HostValue) -> WireValue {
    match value {
        HostValue::Void => WireValue::Void,
        HostValue::Bool(b) => WireValue::Bool(*b),
        HostValue::Int(n) => WireValue::Int(*n),
        HostValue::Float(n) => WireValue::Float(*n),
        HostValue::Text(s) => WireValue::Text(s.clone()),
        HostValue::Enum(n) => WireValue::Enum(*n),
        HostValue::Object(raw) => WireValue::Object(*raw),
    }
}

pub(crate) fn from_wire(value: WireValue) -> HostValue {
    match value {
        WireValue::Void => HostValue::Void,
        WireValue::Bool(b) => HostValue::Bool(b),
        WireValue::Int(n) => HostValue::Int(n),
        WireValue::Float(n) => HostValue::Float(n),
        WireValue::Text(s) => HostValue::Text(s),
        WireValue::Enum(n) => HostValue::Enum(n),
        WireValue::Object(raw) => HostValue::Object(raw),
    }
}
