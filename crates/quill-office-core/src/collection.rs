//! Collection facades: 1-based indexed access and lazy iteration over
//! sequence-shaped host objects.
//!
//! The host owns the sequence and may mutate it at any time, so nothing here
//! is cached: `count` re-reads the host on every call and `item` validates
//! against the count observed at call time. Iteration captures the bound once
//! when it starts and re-queries the element accessor per position; if the
//! host mutates the sequence mid-iteration, the host's own error surfaces
//! through the iterator's `Result` items.

use std::marker::PhantomData;

use crate::descriptor::ResourceKind;
use crate::error::{Error, Result};
use crate::facade::ObjectFacade;
use crate::host::{HostError, HostValue};
use crate::registry::FacadeType;

/// Facade state for a sequence-shaped host object.
///
/// Indexing is 1-based: valid indices are `1..=count`. Index `0` and
/// `count + 1` fail with [`Error::IndexOutOfRange`], never a silent clamp
/// and never an undefined host crash.
#[derive(Debug)]
pub struct CollectionFacade {
    state: ObjectFacade,
}

impl CollectionFacade {
    pub fn new(state: ObjectFacade) -> Self {
        debug_assert_eq!(state.descriptor().kind, ResourceKind::Collection);
        Self { state }
    }

    pub fn state(&self) -> &ObjectFacade {
        &self.state
    }

    /// The number of elements the host reports right now. Never cached: two
    /// calls may disagree if the host mutated the sequence in between.
    pub fn count(&self) -> Result<u32> {
        let n = self.state.get_i64("Count")?;
        u32::try_from(n).map_err(|_| {
            Error::Host {
                interface: self.state.descriptor().interface,
                operation: "get Count".to_string(),
                source: HostError::Shape {
                    expected: "a non-negative count",
                    got: n.to_string(),
                },
            }
        })
    }

    /// Resolve the element at `index` (1-based) into its facade type.
    ///
    /// Each call asks the host for the element again and hands the caller a
    /// facade owning a fresh acquisition.
    pub fn item<T: FacadeType>(&self, index: u32) -> Result<T> {
        let count = self.count()?;
        if index == 0 || index > count {
            return Err(Error::IndexOutOfRange { index, count });
        }
        let value = self.state.invoke("Item", &[HostValue::Int(i64::from(index))])?;
        self.state.wrap_value("Item", value)
    }

    /// Lazily iterate the elements, resolving one facade per step.
    ///
    /// The bound is captured when the first element is requested; the
    /// sequence is restartable by calling `iter` again, which re-queries the
    /// host from scratch.
    pub fn iter<T: FacadeType>(&self) -> CollectionIter<'_, T> {
        CollectionIter {
            items: self,
            next: 1,
            end: None,
            _marker: PhantomData,
        }
    }

    pub fn dispose(&self) {
        self.state.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }
}

/// Lazy iterator over a [`CollectionFacade`]'s elements.
pub struct CollectionIter<'a, T: FacadeType> {
    items: &'a CollectionFacade,
    next: u32,
    /// Bound captured when iteration started; `None` before the first step.
    end: Option<u32>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: FacadeType> Iterator for CollectionIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = match self.end {
            Some(end) => end,
            None => match self.items.count() {
                Ok(n) => {
                    self.end = Some(n);
                    n
                }
                Err(err) => {
                    self.end = Some(0);
                    return Some(Err(err));
                }
            },
        };
        if self.next > end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.items.item::<T>(index))
    }
}
