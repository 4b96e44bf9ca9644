// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape identity.

use core::fmt;

/// An opaque handle naming a shape on a [`DrawingSurface`](crate::surface::DrawingSurface).
///
/// Handles are allocated by an [`IdGenerator`] and never reused by it. Copying
/// a shape always produces a fresh handle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u32);

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeId({})", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequential [`ShapeId`] allocator.
///
/// The generator is injected wherever shapes are created (normally through a
/// [`Canvas`](crate::canvas::Canvas)) instead of living in a global counter,
/// so independent canvases and tests never share identity state.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    next: u32,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Creates a generator whose first handle is `ShapeId(1)`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a generator whose first handle is `ShapeId(first)`.
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocates the next handle.
    ///
    /// # Panics
    ///
    /// Panics if all `u32` handles have been handed out.
    pub fn allocate(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .unwrap_or_else(|| panic!("ShapeId space exhausted"));
        id
    }

    /// Returns the handle the next [`allocate`](Self::allocate) call will produce.
    #[must_use]
    pub const fn peek(&self) -> ShapeId {
        ShapeId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.allocate(), ShapeId(1));
        assert_eq!(ids.allocate(), ShapeId(2));
        assert_eq!(ids.peek(), ShapeId(3));
    }

    #[test]
    fn generators_are_independent() {
        let mut a = IdGenerator::new();
        let mut b = IdGenerator::starting_at(100);
        assert_eq!(a.allocate(), ShapeId(1));
        assert_eq!(b.allocate(), ShapeId(100));
        assert_eq!(a.allocate(), ShapeId(2));
    }
}
