// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Ellipse as KurboEllipse;

use crate::color::Color;
use crate::geom::ShapeBox;
use crate::id::{IdGenerator, ShapeId};
use crate::surface::{Drawable, Primitive};

use super::{Copyable, Paintable};

/// A filled ellipse inscribed in its bounding box.
///
/// Position and size refer to the bounding box, not the curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    id: ShapeId,
    bounds: ShapeBox,
    color: Color,
}

impl Ellipse {
    /// Creates an ellipse with a fresh identity from `ids`.
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

boxed_shape!(Ellipse);

impl Paintable for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn drawable(&self) -> Drawable {
        Drawable {
            primitive: Primitive::Ellipse(KurboEllipse::from_rect(self.bounds.to_rect())),
            color: self.color,
        }
    }
}

impl Copyable for Ellipse {
    fn copy(&self, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.allocate(),
            ..self.clone()
        }
    }
}
