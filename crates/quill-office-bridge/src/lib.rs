//! Subprocess automation bridge backend.
//!
//! The bridge is a small executable shipped alongside the host application;
//! it owns the actual automation connection and speaks the
//! [`quill_office_protocol`] JSON-lines protocol on stdin/stdout. This crate
//! spawns it and implements [`Host`](quill_office_core::Host) on top, so the
//! engine and every typed facade stay byte-identical between the in-memory
//! backend and a live host.

mod bridge;
mod config;
mod convert;

pub use bridge::{BridgeError, BridgeHost};
pub use config::BridgeConfig;
