// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::color::Color;
use crate::geom::ShapeBox;
use crate::id::{IdGenerator, ShapeId};
use crate::surface::{Drawable, Primitive};

use super::{Copyable, Paintable};

/// A filled axis-aligned rectangle. Its position is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    id: ShapeId,
    bounds: ShapeBox,
    color: Color,
}

impl Rectangle {
    /// Creates a rectangle with a fresh identity from `ids`.
    #[must_use]
    pub fn new(ids: &mut IdGenerator, bounds: ShapeBox, color: Color) -> Self {
        Self {
            id: ids.allocate(),
            bounds,
            color,
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
}

boxed_shape!(Rectangle);

impl Paintable for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn drawable(&self) -> Drawable {
        Drawable {
            primitive: Primitive::Rect(self.bounds.to_rect()),
            color: self.color,
        }
    }
}

impl Copyable for Rectangle {
    fn copy(&self, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.allocate(),
            ..self.clone()
        }
    }
}
