//! Shared protocol types for communication between the client library and
//! the automation bridge process that sits next to the host application.
//!
//! The protocol is JSON-over-stdio: one JSON object per line in each
//! direction. Object references are plain `u64` handles minted by the bridge;
//! handle `0` is reserved for "nothing".

use serde::{Deserialize, Serialize};

/// A command sent from the client to the bridge process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Monotonically increasing request ID for correlating responses.
    pub id: u64,
    /// The command to execute.
    #[serde(flatten)]
    pub command: Command,
}

/// Commands the client can send to the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "params")]
pub enum Command {
    /// Attach to the host application, starting it if necessary.
    Init,

    /// Acquire the application-root object.
    Root,

    /// The host's concrete type name for an object.
    TypeName { handle: u64 },

    /// Read a member.
    GetProperty { handle: u64, name: String },

    /// Write a member.
    SetProperty {
        handle: u64,
        name: String,
        value: WireValue,
    },

    /// Call a method.
    Invoke {
        handle: u64,
        method: String,
        args: Vec<WireValue>,
    },

    /// Give back one acquisition of an object.
    Release { handle: u64 },

    /// Shut down the bridge: release everything and detach from the host.
    Shutdown,
}

/// A value crossing the bridge.
///
/// Tagged explicitly — integers, enum payloads, and object handles are all
/// JSON numbers, so an untagged representation could not tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v", rename_all = "snake_case")]
pub enum WireValue {
    Void,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A value of one of the host's private enumerations.
    Enum(i32),
    /// An object reference. `0` means "nothing".
    Object(u64),
}

/// A response sent from the bridge back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// The request ID this response corresponds to.
    pub id: u64,
    /// The result of the command.
    #[serde(flatten)]
    pub result: ResponseResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ResponseResult {
    #[serde(rename = "ok")]
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<ResponseData>,
    },
    #[serde(rename = "error")]
    Error { message: String },
}

/// Data returned in successful responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    /// A member read or method return value.
    Value { value: WireValue },
    /// A concrete type name.
    TypeName { name: String },
    /// Acquisitions the bridge still tracks after a release.
    Remaining { remaining: u32 },
}

impl WireValue {
    pub fn is_void(&self) -> bool {
        matches!(self, WireValue::Void)
    }

    pub fn as_object(&self) -> Option<u64> {
        match self {
            WireValue::Object(h) => Some(*h),
            _ => None,
        }
    }
}

impl std::fmt::Display for WireValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireValue::Void => write!(f, "<void>"),
            WireValue::Bool(b) => write!(f, "{b}"),
            WireValue::Int(n) => write!(f, "{n}"),
            WireValue::Float(n) => write!(f, "{n}"),
            WireValue::Text(s) => write!(f, "{s}"),
            WireValue::Enum(n) => write!(f, "enum({n})"),
            WireValue::Object(h) => write!(f, "object#{h}"),
        }
    }
}
