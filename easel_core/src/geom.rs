// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer layout boxes.
//!
//! Shapes live on an integer grid with the origin in the top-left corner of
//! the surface; `x` grows to the right and `y` grows downward. Fractional
//! layout values produced by composite resizing are rounded back onto the
//! grid with ties away from zero (kurbo's `round`), so `2.5` becomes `3` and
//! `-2.5` becomes `-3`.

use kurbo::{Point, Rect, Size};

/// An axis-aligned box on the integer grid.
///
/// `(x, y)` is the top-left corner. Width and height are unsigned, so a box
/// can never have negative extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShapeBox {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl ShapeBox {
    /// Creates a box from its top-left corner and extent.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge (exclusive), widened so it cannot overflow.
    #[inline]
    #[must_use]
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Returns the bottom edge (exclusive), widened so it cannot overflow.
    #[inline]
    #[must_use]
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Returns the smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: span(x, self.right().max(other.right())),
            height: span(y, self.bottom().max(other.bottom())),
        }
    }

    /// Returns whether `other` lies entirely inside `self` (edges included).
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns the same box moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Converts to a kurbo rectangle for painting.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size(
            Point::new(f64::from(self.x), f64::from(self.y)),
            Size::new(f64::from(self.width), f64::from(self.height)),
        )
    }
}

/// Length from `start` to `end`, clamped into `u32`.
fn span(start: i32, end: i64) -> u32 {
    u32::try_from(end - i64::from(start)).unwrap_or(u32::MAX)
}

/// Rounds a fractional position onto the grid.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates, which is the clamping we want"
)]
pub(crate) fn round_point(x: f64, y: f64) -> (i32, i32) {
    let p = Point::new(x, y).round();
    (p.x as i32, p.y as i32)
}

/// Rounds a fractional extent onto the grid; negative values clamp to zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates, which is the clamping we want"
)]
pub(crate) fn round_size(width: f64, height: f64) -> (u32, u32) {
    let s = Size::new(width, height).round();
    (s.width as u32, s.height as u32)
}
