// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for composite layout.
//!
//! This module provides a [`TraceSink`] trait with one method per layout
//! event. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! A [`Canvas`](crate::canvas::Canvas) owns the tracer; composite operations
//! emit through it as they run.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::error::CompositeError;
use crate::geom::ShapeBox;
use crate::id::ShapeId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which composite operation an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutOp {
    /// `add_shape` / `add_shapes`.
    Add,
    /// `set_size` and friends.
    Resize,
    /// `set_position` and the `move_*` helpers.
    Move,
    /// Z-order changes.
    Restack,
    /// `copy`.
    Copy,
}

/// How a group was restacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RestackKind {
    /// Every member moved directly above an anchor.
    RaiseAbove,
    /// Every member moved directly below an anchor.
    LowerBelow,
    /// Every member moved to the top.
    RaiseToTop,
    /// Every member moved to the bottom.
    LowerToBottom,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a member joins a composite.
#[derive(Clone, Copy, Debug)]
pub struct PartAddedEvent<'a> {
    /// Composite name.
    pub group: &'a str,
    /// Handle of the composite's copy of the shape.
    pub member: ShapeId,
    /// Box of the new member.
    pub member_bounds: ShapeBox,
    /// Composite box after the addition.
    pub group_bounds: ShapeBox,
    /// Whether the composite box grew, forcing the other parts to be refit.
    pub grew: bool,
}

/// Emitted after a successful resize.
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent<'a> {
    /// Composite name.
    pub group: &'a str,
    /// Width passed by the caller.
    pub requested_width: i32,
    /// Height passed by the caller.
    pub requested_height: i32,
    /// Composite box after the resize (zero extents coerced to one).
    pub bounds: ShapeBox,
    /// Number of members updated.
    pub parts: usize,
}

/// Emitted after a successful move.
#[derive(Clone, Copy, Debug)]
pub struct MoveEvent<'a> {
    /// Composite name.
    pub group: &'a str,
    /// Horizontal translation applied to every member.
    pub dx: i32,
    /// Vertical translation applied to every member.
    pub dy: i32,
    /// Composite box after the move.
    pub bounds: ShapeBox,
}

/// Emitted after a group was restacked.
#[derive(Clone, Copy, Debug)]
pub struct RestackEvent<'a> {
    /// Composite name.
    pub group: &'a str,
    /// What kind of restack happened.
    pub kind: RestackKind,
    /// Resolved anchor handle, for relative restacks.
    pub anchor: Option<ShapeId>,
    /// Number of members moved.
    pub moved: usize,
}

/// Emitted after a composite was copied.
#[derive(Clone, Copy, Debug)]
pub struct CopyEvent<'a> {
    /// Name of the source composite.
    pub source: &'a str,
    /// Name of the new composite.
    pub copy: &'a str,
    /// Number of members copied.
    pub parts: usize,
}

/// Emitted when an operation is refused.
#[derive(Clone, Copy, Debug)]
pub struct RejectedEvent<'a> {
    /// Composite name.
    pub group: &'a str,
    /// Refused operation.
    pub op: LayoutOp,
    /// Why it was refused.
    pub error: CompositeError,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from composite layout.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a member joins a composite.
    fn on_part_added(&mut self, e: &PartAddedEvent<'_>) {
        _ = e;
    }

    /// Called after a successful resize.
    fn on_resize(&mut self, e: &ResizeEvent<'_>) {
        _ = e;
    }

    /// Called after a successful move.
    fn on_move(&mut self, e: &MoveEvent<'_>) {
        _ = e;
    }

    /// Called after a group was restacked.
    fn on_restack(&mut self, e: &RestackEvent<'_>) {
        _ = e;
    }

    /// Called after a composite was copied.
    fn on_copy(&mut self, e: &CopyEvent<'_>) {
        _ = e;
    }

    /// Called when an operation is refused.
    fn on_rejected(&mut self, e: &RejectedEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PartAddedEvent`].
    #[inline]
    pub fn part_added(&mut self, e: &PartAddedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_part_added(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MoveEvent`].
    #[inline]
    pub fn moved(&mut self, e: &MoveEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_move(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RestackEvent`].
    #[inline]
    pub fn restack(&mut self, e: &RestackEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_restack(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CopyEvent`].
    #[inline]
    pub fn copied(&mut self, e: &CopyEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_copy(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RejectedEvent`].
    #[inline]
    pub fn rejected(&mut self, e: &RejectedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resize() -> ResizeEvent<'static> {
        ResizeEvent {
            group: "robot",
            requested_width: 0,
            requested_height: 40,
            bounds: ShapeBox::new(0, 0, 1, 40),
            parts: 3,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_resize(&sample_resize());
        sink.on_rejected(&RejectedEvent {
            group: "robot",
            op: LayoutOp::Resize,
            error: CompositeError::NotSealed,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.resize(&sample_resize());
        tracer.moved(&MoveEvent {
            group: "robot",
            dx: 1,
            dy: 2,
            bounds: ShapeBox::new(1, 2, 3, 4),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            resized: Vec<i32>,
        }
        impl TraceSink for RecordingSink {
            fn on_resize(&mut self, e: &ResizeEvent<'_>) {
                self.resized.push(e.requested_height);
            }
        }

        let mut sink = RecordingSink {
            resized: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.resize(&sample_resize());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.resized, &[40]);
    }
}
