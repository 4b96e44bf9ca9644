// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::color::Color;
use crate::error::CompositeError;
use crate::geom::ShapeBox;
use crate::id::{IdGenerator, ShapeId};
use crate::shape::{
    Copyable, Ellipse, Paintable, Positionable, Rectangle, Resizable, Shape, Triangle,
};
use crate::surface::Drawable;

/// A shape that can be laid out proportionally inside a composite.
///
/// Only shapes with an extent qualify; text labels are refused.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    /// An ellipse.
    Ellipse(Ellipse),
    /// A rectangle.
    Rectangle(Rectangle),
    /// A triangle.
    Triangle(Triangle),
}

impl Member {
    /// Checks that `shape` may join a composite without copying it.
    pub(crate) fn check(shape: &Shape) -> Result<(), CompositeError> {
        match shape {
            Shape::Ellipse(_) | Shape::Rectangle(_) | Shape::Triangle(_) => Ok(()),
            Shape::Text(_) => Err(CompositeError::InvalidMember { kind: shape.kind() }),
        }
    }

    /// Makes a member out of a copy of `shape`, with a fresh identity.
    pub fn copy_from(shape: &Shape, ids: &mut IdGenerator) -> Result<Self, CompositeError> {
        match shape {
            Shape::Ellipse(s) => Ok(Self::Ellipse(s.copy(ids))),
            Shape::Rectangle(s) => Ok(Self::Rectangle(s.copy(ids))),
            Shape::Triangle(s) => Ok(Self::Triangle(s.copy(ids))),
            Shape::Text(_) => Err(CompositeError::InvalidMember { kind: shape.kind() }),
        }
    }

    /// Human-readable kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ellipse(_) => "ellipse",
            Self::Rectangle(_) => "rectangle",
            Self::Triangle(_) => "triangle",
        }
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Ellipse(s) => s.color(),
            Self::Rectangle(s) => s.color(),
            Self::Triangle(s) => s.color(),
        }
    }

    /// Returns an owned [`Shape`] with the same identity and geometry.
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        self.clone().into()
    }

    fn inner(&self) -> &dyn Resizable {
        match self {
            Self::Ellipse(s) => s,
            Self::Rectangle(s) => s,
            Self::Triangle(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Resizable {
        match self {
            Self::Ellipse(s) => s,
            Self::Rectangle(s) => s,
            Self::Triangle(s) => s,
        }
    }
}

impl Positionable for Member {
    fn position(&self) -> (i32, i32) {
        self.inner().position()
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.inner_mut().set_position(x, y);
    }
}

impl Resizable for Member {
    fn size(&self) -> (u32, u32) {
        self.inner().size()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.inner_mut().set_size(width, height);
    }

    fn bounds(&self) -> ShapeBox {
        self.inner().bounds()
    }
}

impl Paintable for Member {
    fn id(&self) -> ShapeId {
        match self {
            Self::Ellipse(s) => s.id(),
            Self::Rectangle(s) => s.id(),
            Self::Triangle(s) => s.id(),
        }
    }

    fn drawable(&self) -> Drawable {
        match self {
            Self::Ellipse(s) => s.drawable(),
            Self::Rectangle(s) => s.drawable(),
            Self::Triangle(s) => s.drawable(),
        }
    }
}

impl Copyable for Member {
    fn copy(&self, ids: &mut IdGenerator) -> Self {
        match self {
            Self::Ellipse(s) => Self::Ellipse(s.copy(ids)),
            Self::Rectangle(s) => Self::Rectangle(s.copy(ids)),
            Self::Triangle(s) => Self::Triangle(s.copy(ids)),
        }
    }
}

impl From<Member> for Shape {
    fn from(m: Member) -> Self {
        match m {
            Member::Ellipse(s) => Self::Ellipse(s),
            Member::Rectangle(s) => Self::Rectangle(s),
            Member::Triangle(s) => Self::Triangle(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction8;
    use crate::shape::Text;

    #[test]
    fn text_is_refused() {
        let mut ids = IdGenerator::new();
        let text: Shape = Text::new(&mut ids, 0, 0, "label").into();
        let before = ids.peek();
        assert_eq!(
            Member::copy_from(&text, &mut ids),
            Err(CompositeError::InvalidMember { kind: "text" })
        );
        assert_eq!(ids.peek(), before, "no identity spent on a refused shape");
    }

    #[test]
    fn copy_from_keeps_geometry_and_style() {
        let mut ids = IdGenerator::new();
        let b = ShapeBox::new(1, 2, 3, 4);
        let tri: Shape = Triangle::new(&mut ids, b, Color::GREEN, Direction8::East).into();
        let member = Member::copy_from(&tri, &mut ids).unwrap();
        assert_ne!(member.id(), tri.id());
        assert_eq!(member.bounds(), b);
        assert_eq!(member.color(), Color::GREEN);
        assert_eq!(member.kind(), "triangle");
        match member.to_shape() {
            Shape::Triangle(t) => assert_eq!(t.direction(), Direction8::East),
            other => panic!("unexpected {other:?}"),
        }
    }
}
