//! Owned acquisitions of externally-owned objects.
//!
//! A [`Handle`] is the unit of ownership in the engine: exactly one
//! acquisition of one host object. Dropping the handle is the release path;
//! an explicit, idempotent [`Handle::release`] exists for callers that want
//! deterministic teardown ahead of drop.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::host::{HostValue, RawHandle};
use crate::session::HostSession;

/// One owned acquisition of one host object.
///
/// Never null: construction fails fast unless handed a non-zero object
/// reference. After release the stored reference is cleared, so accidental
/// use fails with a defined error instead of corrupting host state.
pub struct Handle {
    session: Rc<HostSession>,
    raw: Cell<Option<RawHandle>>,
}

impl Handle {
    /// Take ownership of a freshly acquired object reference.
    ///
    /// Fails with [`Error::NullHandle`] unless `value` is a non-zero
    /// `HostValue::Object`.
    pub fn new(session: Rc<HostSession>, value: HostValue) -> Result<Self> {
        match value {
            HostValue::Object(raw) if raw != 0 => Ok(Self {
                session,
                raw: Cell::new(Some(raw)),
            }),
            other => Err(Error::NullHandle {
                got: other.to_string(),
            }),
        }
    }

    /// The session this acquisition belongs to.
    pub fn session(&self) -> &Rc<HostSession> {
        &self.session
    }

    /// The raw handle, or `None` once released.
    pub fn get(&self) -> Option<RawHandle> {
        self.raw.get()
    }

    pub fn is_released(&self) -> bool {
        self.raw.get().is_none()
    }

    /// Give the acquisition back to the host. Idempotent: only the first call
    /// reaches the host.
    ///
    /// Release is uniform across all resource kinds: the host is asked to
    /// release until it reports zero outstanding references for the object.
    /// A release failure is logged and swallowed, never propagated — this
    /// runs on teardown paths where an error has nowhere to go. The cost of
    /// that trade-off is a leak when the host persistently refuses.
    pub fn release(&self) {
        let Some(raw) = self.raw.take() else {
            return;
        };
        loop {
            match self.session.host().release(raw) {
                Ok(0) => break,
                Ok(remaining) => {
                    tracing::trace!(raw, remaining, "released one reference, draining");
                }
                Err(err) => {
                    tracing::warn!(raw, error = %err, "failed to release host object; leaking");
                    break;
                }
            }
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.raw.get() {
            Some(raw) => write!(f, "Handle({raw})"),
            None => write!(f, "Handle(<released>)"),
        }
    }
}
