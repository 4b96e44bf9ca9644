// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::color::Color;
use crate::direction::Direction8;
use crate::geom::ShapeBox;
use crate::id::{IdGenerator, ShapeId};
use crate::surface::{Drawable, Primitive};

use super::{Copyable, Paintable};

/// A filled triangle inscribed in its bounding box.
///
/// The [`direction`](Self::direction) names where the main vertex points.
/// For the main directions the apex sits in the middle of that side; for
/// diagonal directions the triangle is the half of the box cut along the
/// diagonal that keeps the named corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    id: ShapeId,
    bounds: ShapeBox,
    color: Color,
    direction: Direction8,
}

impl Triangle {
    /// Creates a triangle with a fresh identity from `ids`.
    #[must_use]
    pub fn new(
        ids: &mut IdGenerator,
        bounds: ShapeBox,
        color: Color,
        direction: Direction8,
    ) -> Self {
        Self {
            id: ids.allocate(),
            bounds,
            color,
            direction,
        }
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns where the main vertex points.
    #[must_use]
    pub fn direction(&self) -> Direction8 {
        self.direction
    }

    /// Turns the main vertex towards `direction`.
    pub fn set_direction(&mut self, direction: Direction8) {
        self.direction = direction;
    }

    /// Returns the three vertices on the surface.
    ///
    /// [`Direction8::Nowhere`] is drawn like [`Direction8::North`].
    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        let r = self.bounds.to_rect();
        let (x0, y0, x1, y1) = (r.x0, r.y0, r.x1, r.y1);
        let mx = (x0 + x1) / 2.0;
        let my = (y0 + y1) / 2.0;
        let p = Point::new;
        match self.direction {
            Direction8::North | Direction8::Nowhere => [p(mx, y0), p(x1, y1), p(x0, y1)],
            Direction8::NorthEast => [p(x1, y0), p(x1, y1), p(x0, y0)],
            Direction8::East => [p(x0, y0), p(x1, my), p(x0, y1)],
            Direction8::SouthEast => [p(x1, y0), p(x1, y1), p(x0, y1)],
            Direction8::South => [p(x0, y0), p(x1, y0), p(mx, y1)],
            Direction8::SouthWest => [p(x0, y0), p(x1, y1), p(x0, y1)],
            Direction8::West => [p(x1, y0), p(x1, y1), p(x0, my)],
            Direction8::NorthWest => [p(x0, y0), p(x1, y0), p(x0, y1)],
        }
    }
}

boxed_shape!(Triangle);

impl Paintable for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn drawable(&self) -> Drawable {
        Drawable {
            primitive: Primitive::Polygon(self.vertices()),
            color: self.color,
        }
    }
}

impl Copyable for Triangle {
    fn copy(&self, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.allocate(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Resizable;

    fn triangle(direction: Direction8) -> Triangle {
        let mut ids = IdGenerator::new();
        Triangle::new(&mut ids, ShapeBox::new(0, 0, 100, 50), Color::YELLOW, direction)
    }

    #[test]
    fn north_apex_is_top_center() {
        let v = triangle(Direction8::North).vertices();
        assert_eq!(v[0], Point::new(50.0, 0.0));
        assert_eq!(v[1], Point::new(100.0, 50.0));
        assert_eq!(v[2], Point::new(0.0, 50.0));
    }

    #[test]
    fn west_apex_is_left_middle() {
        let v = triangle(Direction8::West).vertices();
        assert_eq!(v[2], Point::new(0.0, 25.0));
    }

    #[test]
    fn nowhere_draws_like_north() {
        assert_eq!(
            triangle(Direction8::Nowhere).vertices(),
            triangle(Direction8::North).vertices()
        );
    }

    #[test]
    fn vertices_follow_resize() {
        let mut t = triangle(Direction8::South);
        t.set_size(10, 10);
        assert_eq!(t.vertices()[2], Point::new(5.0, 10.0));
    }

    #[test]
    fn copy_keeps_direction() {
        let mut ids = IdGenerator::starting_at(10);
        let t = triangle(Direction8::NorthWest);
        let c = t.copy(&mut ids);
        assert_eq!(c.direction(), Direction8::NorthWest);
        assert_eq!(c.id(), ShapeId(10));
    }
}
