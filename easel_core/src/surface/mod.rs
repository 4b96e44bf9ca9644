// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface contract.
//!
//! A drawing surface is whatever actually puts pixels on screen: a GUI
//! toolkit canvas, an SVG writer, a test double. The layout engine never
//! decides *how* something is drawn; it only hands the surface a
//! [`Drawable`] keyed by a [`ShapeId`] and asks it to reorder handles.
//!
//! # Draw order
//!
//! [`DrawingSurface::draw_order`] is reported **back-to-front**: index 0 is
//! the bottom-most item, the last element is drawn on top of everything else.
//! New items are drawn on top.
//!
//! # Batching
//!
//! Layout operations touch many shapes at once. They update every member
//! first, re-[`draw`](DrawingSurface::draw) each one, then call
//! [`present`](DrawingSurface::present) exactly once, so a surface that
//! defers its real redraw to `present` never shows a half-resized group.

mod display_list;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Ellipse, Point, Rect};

use crate::color::Color;
use crate::id::ShapeId;

pub use display_list::{Damage, DisplayList};

/// The geometry of one item on a drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A filled axis-aligned rectangle.
    Rect(Rect),
    /// A filled ellipse inscribed in its bounding rectangle.
    Ellipse(Ellipse),
    /// A filled polygon, listed vertex by vertex.
    Polygon([Point; 3]),
    /// A text run anchored at `origin`.
    Text {
        /// Anchor point.
        origin: Point,
        /// Displayed text.
        text: String,
    },
}

/// Everything a surface needs to render one item.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    /// Geometry.
    pub primitive: Primitive,
    /// Fill color.
    pub color: Color,
}

/// Receives draw and z-order requests from shapes and composites.
///
/// Operations naming a handle the surface does not know are ignored, as are
/// requests to place an item relative to itself.
pub trait DrawingSurface {
    /// Draws `item` under handle `id`.
    ///
    /// An unknown handle is created on top of the draw order; a known one is
    /// updated in place without changing its stacking position.
    fn draw(&mut self, id: ShapeId, item: Drawable);

    /// Removes `id` from the surface. Returns whether it was present.
    fn erase(&mut self, id: ShapeId) -> bool;

    /// Returns every handle on the surface, back-to-front.
    fn draw_order(&self) -> Vec<ShapeId>;

    /// Moves `id` directly above `anchor`.
    fn raise_above(&mut self, id: ShapeId, anchor: ShapeId);

    /// Moves `id` directly below `anchor`.
    fn lower_below(&mut self, id: ShapeId, anchor: ShapeId);

    /// Moves `id` to the top of the draw order.
    fn raise_to_top(&mut self, id: ShapeId);

    /// Moves `id` to the bottom of the draw order.
    fn lower_to_bottom(&mut self, id: ShapeId);

    /// Flushes a batch of changes to the screen.
    fn present(&mut self) {}
}
