//! The output-buffer allocation capability.
//!
//! Output buffers are the only allocations the core makes on behalf of the
//! caller, and every one of them is approved by a [`BufferAlloc`] first.
//! Modeling the allocator as a parameter instead of ambient global state
//! lets embedders budget memory and lets tests inject failure at an exact
//! byte count.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Grants or refuses output-buffer allocations.
///
/// The dispatcher consults the capability before creating each output
/// buffer; a refusal surfaces as [`Error::AllocationFailure`] naming the
/// call site, before any output is produced. Implementations may track a
/// running total across calls.
pub trait BufferAlloc {
    /// Approve an allocation of `bytes` bytes.
    fn grant(&mut self, bytes: usize) -> bool;
}

/// The default capability: every request is granted and served by the
/// global allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAlloc;

impl BufferAlloc for SystemAlloc {
    fn grant(&mut self, _bytes: usize) -> bool {
        true
    }
}

/// Allocate a zero-initialized output buffer of `len` samples through the
/// capability, attributing any failure to `site`.
pub(crate) fn alloc_samples<T: Clone + Default>(
    alloc: &mut dyn BufferAlloc,
    len: usize,
    site: &'static str,
) -> Result<Vec<T>> {
    let bytes = len.saturating_mul(core::mem::size_of::<T>());
    if !alloc.grant(bytes) {
        return Err(Error::AllocationFailure(site));
    }
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure(site))?;
    buffer.resize(len, T::default());
    Ok(buffer)
}
