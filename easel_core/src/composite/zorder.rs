// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking a composite relative to other items on a surface.
//!
//! Stacking order always comes from the surface; a composite keeps no order
//! of its own. Group moves go one member at a time in an order that keeps
//! the members' stacking relative to each other.

use alloc::vec::Vec;

use crate::canvas::Canvas;
use crate::id::ShapeId;
use crate::shape::{Paintable, Shape};
use crate::surface::DrawingSurface;
use crate::trace::{RestackEvent, RestackKind};

use super::{Composite, Member};

/// What to stack something relative to.
#[derive(Clone, Copy, Debug)]
pub enum ZAnchor<'a> {
    /// A single drawn item.
    Shape(ShapeId),
    /// A composite: its highest member when raising above it, its lowest
    /// when lowering below it.
    Composite(&'a Composite),
}

impl ZAnchor<'_> {
    /// The handle to raise above, if anything is drawn.
    #[must_use]
    pub fn highest(&self, surface: &dyn DrawingSurface) -> Option<ShapeId> {
        match self {
            Self::Shape(id) => surface.draw_order().contains(id).then_some(*id),
            Self::Composite(c) => c.highest_member(surface),
        }
    }

    /// The handle to lower below, if anything is drawn.
    #[must_use]
    pub fn lowest(&self, surface: &dyn DrawingSurface) -> Option<ShapeId> {
        match self {
            Self::Shape(id) => surface.draw_order().contains(id).then_some(*id),
            Self::Composite(c) => c.lowest_member(surface),
        }
    }
}

impl From<ShapeId> for ZAnchor<'_> {
    fn from(id: ShapeId) -> Self {
        Self::Shape(id)
    }
}

impl From<&Shape> for ZAnchor<'_> {
    fn from(shape: &Shape) -> Self {
        Self::Shape(shape.id())
    }
}

impl From<&Member> for ZAnchor<'_> {
    fn from(member: &Member) -> Self {
        Self::Shape(member.id())
    }
}

impl<'a> From<&'a Composite> for ZAnchor<'a> {
    fn from(composite: &'a Composite) -> Self {
        Self::Composite(composite)
    }
}

impl Composite {
    /// Drawn member handles, bottom to top.
    #[must_use]
    pub fn members_in_draw_order(&self, surface: &dyn DrawingSurface) -> Vec<ShapeId> {
        surface
            .draw_order()
            .into_iter()
            .filter(|id| self.contains(*id))
            .collect()
    }

    /// The topmost drawn member.
    #[must_use]
    pub fn highest_member(&self, surface: &dyn DrawingSurface) -> Option<ShapeId> {
        surface
            .draw_order()
            .into_iter()
            .rev()
            .find(|id| self.contains(*id))
    }

    /// The bottommost drawn member.
    #[must_use]
    pub fn lowest_member(&self, surface: &dyn DrawingSurface) -> Option<ShapeId> {
        surface
            .draw_order()
            .into_iter()
            .find(|id| self.contains(*id))
    }

    /// Puts every member directly above `anchor`, keeping their relative
    /// order. Returns how many members moved.
    ///
    /// Nothing happens if the anchor has nothing drawn or resolves to one of
    /// this composite's own members.
    pub fn raise_above<S: DrawingSurface>(
        &self,
        anchor: ZAnchor<'_>,
        canvas: &mut Canvas<'_, S>,
    ) -> usize {
        let Some(target) = anchor.highest(&canvas.surface) else {
            return 0;
        };
        if self.contains(target) {
            return 0;
        }
        let ids = self.members_in_draw_order(&canvas.surface);
        for &id in ids.iter().rev() {
            canvas.surface.raise_above(id, target);
        }
        self.restacked(canvas, RestackKind::RaiseAbove, Some(target), ids.len());
        ids.len()
    }

    /// Puts every member directly below `anchor`, keeping their relative
    /// order. Returns how many members moved.
    ///
    /// Nothing happens if the anchor has nothing drawn or resolves to one of
    /// this composite's own members.
    pub fn lower_below<S: DrawingSurface>(
        &self,
        anchor: ZAnchor<'_>,
        canvas: &mut Canvas<'_, S>,
    ) -> usize {
        let Some(target) = anchor.lowest(&canvas.surface) else {
            return 0;
        };
        if self.contains(target) {
            return 0;
        }
        let ids = self.members_in_draw_order(&canvas.surface);
        for &id in &ids {
            canvas.surface.lower_below(id, target);
        }
        self.restacked(canvas, RestackKind::LowerBelow, Some(target), ids.len());
        ids.len()
    }

    /// Moves every member to the top of the draw order, keeping their
    /// relative order.
    pub fn raise_to_top<S: DrawingSurface>(&self, canvas: &mut Canvas<'_, S>) -> usize {
        let ids = self.members_in_draw_order(&canvas.surface);
        for &id in &ids {
            canvas.surface.raise_to_top(id);
        }
        self.restacked(canvas, RestackKind::RaiseToTop, None, ids.len());
        ids.len()
    }

    /// Moves every member to the bottom of the draw order, keeping their
    /// relative order.
    pub fn lower_to_bottom<S: DrawingSurface>(&self, canvas: &mut Canvas<'_, S>) -> usize {
        let ids = self.members_in_draw_order(&canvas.surface);
        for &id in ids.iter().rev() {
            canvas.surface.lower_to_bottom(id);
        }
        self.restacked(canvas, RestackKind::LowerToBottom, None, ids.len());
        ids.len()
    }

    fn restacked<S: DrawingSurface>(
        &self,
        canvas: &mut Canvas<'_, S>,
        kind: RestackKind,
        anchor: Option<ShapeId>,
        moved: usize,
    ) {
        canvas.surface.present();
        canvas.tracer.restack(&RestackEvent {
            group: &self.name,
            kind,
            anchor,
            moved,
        });
    }
}
