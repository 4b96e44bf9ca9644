// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive shapes and their capability traits.
//!
//! Shapes are plain values: an identity ([`ShapeId`]), geometry, and a fill
//! color. Capabilities are split into narrow traits so that code which only
//! moves things does not need to know how they are resized or painted:
//!
//! - [`Positionable`]: read and change the top-left position.
//! - [`Resizable`]: read and change the extent (implies [`Positionable`]).
//! - [`Paintable`]: produce a [`Drawable`] and hand it to a surface.
//! - [`Copyable`]: produce an independent copy with a fresh identity.
//!
//! [`Ellipse`], [`Rectangle`] and [`Triangle`] implement all four. [`Text`]
//! has no extent and therefore does not implement [`Resizable`]. [`Shape`] is
//! the tagged variant over the closed set.
//!
//! Changing a shape value does not redraw it. Call
//! [`Paintable::paint`] (or [`Canvas::paint`](crate::canvas::Canvas::paint))
//! afterwards; composites do this for their members in one batch.

/// Implements [`Positionable`] and [`Resizable`] for shapes that store their
/// geometry in a `bounds: ShapeBox` field.
macro_rules! boxed_shape {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::shape::Positionable for $ty {
                fn position(&self) -> (i32, i32) {
                    (self.bounds.x, self.bounds.y)
                }

                fn set_position(&mut self, x: i32, y: i32) {
                    self.bounds.x = x;
                    self.bounds.y = y;
                }
            }

            impl $crate::shape::Resizable for $ty {
                fn size(&self) -> (u32, u32) {
                    (self.bounds.width, self.bounds.height)
                }

                fn set_size(&mut self, width: u32, height: u32) {
                    self.bounds.width = width;
                    self.bounds.height = height;
                }

                fn bounds(&self) -> $crate::geom::ShapeBox {
                    self.bounds
                }
            }
        )+
    };
}

mod ellipse;
mod rectangle;
mod text;
mod triangle;

use core::fmt;

use crate::color::Color;
use crate::geom::ShapeBox;
use crate::id::{IdGenerator, ShapeId};
use crate::surface::{Drawable, DrawingSurface};

pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use text::Text;
pub use triangle::Triangle;

/// Something with a top-left position.
pub trait Positionable {
    /// Returns the top-left corner.
    fn position(&self) -> (i32, i32);

    /// Moves the top-left corner to `(x, y)`.
    fn set_position(&mut self, x: i32, y: i32);

    /// Sets only the horizontal coordinate.
    fn set_x(&mut self, x: i32) {
        let (_, y) = self.position();
        self.set_position(x, y);
    }

    /// Sets only the vertical coordinate.
    fn set_y(&mut self, y: i32) {
        let (x, _) = self.position();
        self.set_position(x, y);
    }

    /// Moves by `(dx, dy)`.
    fn move_by(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.position();
        self.set_position(x.saturating_add(dx), y.saturating_add(dy));
    }

    /// Moves up by `length`.
    fn move_up_by(&mut self, length: i32) {
        self.move_by(0, length.saturating_neg());
    }

    /// Moves down by `length`.
    fn move_down_by(&mut self, length: i32) {
        self.move_by(0, length);
    }

    /// Moves left by `length`.
    fn move_left_by(&mut self, length: i32) {
        self.move_by(length.saturating_neg(), 0);
    }

    /// Moves right by `length`.
    fn move_right_by(&mut self, length: i32) {
        self.move_by(length, 0);
    }
}

/// Something with a position and an extent.
pub trait Resizable: Positionable {
    /// Returns `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Changes the extent, keeping the top-left corner.
    fn set_size(&mut self, width: u32, height: u32);

    /// Sets only the width.
    fn set_width(&mut self, width: u32) {
        let (_, height) = self.size();
        self.set_size(width, height);
    }

    /// Sets only the height.
    fn set_height(&mut self, height: u32) {
        let (width, _) = self.size();
        self.set_size(width, height);
    }

    /// Returns the current box.
    fn bounds(&self) -> ShapeBox {
        let (x, y) = self.position();
        let (width, height) = self.size();
        ShapeBox::new(x, y, width, height)
    }
}

/// Something that can be drawn on a [`DrawingSurface`].
pub trait Paintable {
    /// The handle under which this shape is drawn.
    fn id(&self) -> ShapeId;

    /// What the surface should draw for the current state.
    fn drawable(&self) -> Drawable;

    /// Draws (or redraws) the shape on `surface`.
    fn paint(&self, surface: &mut dyn DrawingSurface) {
        surface.draw(self.id(), self.drawable());
    }
}

/// Something that can produce an independent copy of itself.
pub trait Copyable: Sized {
    /// Returns a deep copy with a fresh identity from `ids`.
    fn copy(&self, ids: &mut IdGenerator) -> Self;
}

/// Any primitive shape.
///
/// `Clone` is a snapshot that keeps the same [`ShapeId`], so the clone and
/// the original name one drawn item. Use [`Copyable::copy`] for a second,
/// independent shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// An ellipse.
    Ellipse(Ellipse),
    /// A rectangle.
    Rectangle(Rectangle),
    /// A triangle.
    Triangle(Triangle),
    /// A text label.
    Text(Text),
}

impl Shape {
    /// Human-readable kind name, e.g. `"rectangle"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ellipse(_) => "ellipse",
            Self::Rectangle(_) => "rectangle",
            Self::Triangle(_) => "triangle",
            Self::Text(_) => "text",
        }
    }

    /// Returns the shape's extent, or `None` for text.
    #[must_use]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.as_resizable().map(|r| r.size())
    }

    /// Returns the shape's box, or `None` for text.
    #[must_use]
    pub fn bounds(&self) -> Option<ShapeBox> {
        self.as_resizable().map(|r| r.bounds())
    }

    /// Views the shape as [`Resizable`] if it has an extent.
    #[must_use]
    pub fn as_resizable(&self) -> Option<&dyn Resizable> {
        match self {
            Self::Ellipse(s) => Some(s),
            Self::Rectangle(s) => Some(s),
            Self::Triangle(s) => Some(s),
            Self::Text(_) => None,
        }
    }

    /// Mutable counterpart of [`as_resizable`](Self::as_resizable).
    #[must_use]
    pub fn as_resizable_mut(&mut self) -> Option<&mut dyn Resizable> {
        match self {
            Self::Ellipse(s) => Some(s),
            Self::Rectangle(s) => Some(s),
            Self::Triangle(s) => Some(s),
            Self::Text(_) => None,
        }
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Ellipse(s) => s.color(),
            Self::Rectangle(s) => s.color(),
            Self::Triangle(s) => s.color(),
            Self::Text(s) => s.color(),
        }
    }

    /// Changes the fill color.
    pub fn set_color(&mut self, color: Color) {
        match self {
            Self::Ellipse(s) => s.set_color(color),
            Self::Rectangle(s) => s.set_color(color),
            Self::Triangle(s) => s.set_color(color),
            Self::Text(s) => s.set_color(color),
        }
    }
}

impl Positionable for Shape {
    fn position(&self) -> (i32, i32) {
        match self {
            Self::Ellipse(s) => s.position(),
            Self::Rectangle(s) => s.position(),
            Self::Triangle(s) => s.position(),
            Self::Text(s) => s.position(),
        }
    }

    fn set_position(&mut self, x: i32, y: i32) {
        match self {
            Self::Ellipse(s) => s.set_position(x, y),
            Self::Rectangle(s) => s.set_position(x, y),
            Self::Triangle(s) => s.set_position(x, y),
            Self::Text(s) => s.set_position(x, y),
        }
    }
}

impl Paintable for Shape {
    fn id(&self) -> ShapeId {
        match self {
            Self::Ellipse(s) => s.id(),
            Self::Rectangle(s) => s.id(),
            Self::Triangle(s) => s.id(),
            Self::Text(s) => s.id(),
        }
    }

    fn drawable(&self) -> Drawable {
        match self {
            Self::Ellipse(s) => s.drawable(),
            Self::Rectangle(s) => s.drawable(),
            Self::Triangle(s) => s.drawable(),
            Self::Text(s) => s.drawable(),
        }
    }
}

impl Copyable for Shape {
    fn copy(&self, ids: &mut IdGenerator) -> Self {
        match self {
            Self::Ellipse(s) => Self::Ellipse(s.copy(ids)),
            Self::Rectangle(s) => Self::Rectangle(s.copy(ids)),
            Self::Triangle(s) => Self::Triangle(s.copy(ids)),
            Self::Text(s) => Self::Text(s.copy(ids)),
        }
    }
}

/// `rectangle #3 at (10, 20) size 30x40 color #ff0000`
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.position();
        write!(f, "{} {} at ({x}, {y})", self.kind(), self.id())?;
        match self {
            Self::Text(t) => write!(f, " text {:?}", t.text())?,
            _ => {
                if let Some((width, height)) = self.size() {
                    write!(f, " size {width}x{height}")?;
                }
            }
        }
        write!(f, " color {}", self.color())
    }
}

impl From<Ellipse> for Shape {
    fn from(s: Ellipse) -> Self {
        Self::Ellipse(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Self::Rectangle(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Self::Triangle(s)
    }
}

impl From<Text> for Shape {
    fn from(s: Text) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::surface::{DisplayList, Primitive};

    fn sample(ids: &mut IdGenerator) -> Shape {
        Rectangle::new(ids, ShapeBox::new(10, 20, 30, 40), Color::RED).into()
    }

    #[test]
    fn copy_gets_new_identity_and_same_geometry() {
        let mut ids = IdGenerator::new();
        let original = sample(&mut ids);
        let copy = original.copy(&mut ids);
        assert_ne!(original.id(), copy.id());
        assert_eq!(original.bounds(), copy.bounds());
        assert_eq!(original.color(), copy.color());
    }

    #[test]
    fn copy_is_independent() {
        let mut ids = IdGenerator::new();
        let original = sample(&mut ids);
        let mut copy = original.copy(&mut ids);
        copy.move_by(5, 5);
        copy.set_color(Color::BLUE);
        assert_eq!(original.position(), (10, 20));
        assert_eq!(original.color(), Color::RED);
    }

    #[test]
    fn step_moves_follow_screen_axes() {
        let mut ids = IdGenerator::new();
        let mut shape = sample(&mut ids);
        shape.move_up_by(50);
        assert_eq!(shape.position(), (10, -30));
        shape.move_right_by(100);
        assert_eq!(shape.position(), (110, -30));
        shape.move_down_by(25);
        shape.move_left_by(10);
        assert_eq!(shape.position(), (100, -5));
        assert_eq!(shape.size(), Some((30, 40)));
    }

    #[test]
    fn step_moves_saturate() {
        let mut ids = IdGenerator::new();
        let mut shape: Shape = Text::new(&mut ids, i32::MIN + 1, 0, "edge").into();
        shape.move_left_by(i32::MIN);
        assert_eq!(shape.position(), (0, 0));
        shape.move_left_by(i32::MAX);
        shape.move_left_by(5);
        assert_eq!(shape.position(), (i32::MIN, 0));
    }

    #[test]
    fn display_lists_kind_box_and_color() {
        let mut ids = IdGenerator::new();
        let rect = sample(&mut ids);
        assert_eq!(
            rect.to_string(),
            "rectangle #1 at (10, 20) size 30x40 color #ff0000"
        );
        let label: Shape = Text::new(&mut ids, 5, 6, "hi").into();
        assert_eq!(label.to_string(), "text #2 at (5, 6) text \"hi\" color #000000");
    }

    #[test]
    fn clone_keeps_identity() {
        let mut ids = IdGenerator::new();
        let shape = sample(&mut ids);
        assert_eq!(shape.clone().id(), shape.id());
        assert_ne!(shape.copy(&mut ids).id(), shape.id());
    }

    #[test]
    fn text_has_no_extent() {
        let mut ids = IdGenerator::new();
        let mut text: Shape = Text::new(&mut ids, 5, 5, "hello").into();
        assert_eq!(text.size(), None);
        assert!(text.as_resizable_mut().is_none());
        assert_eq!(text.kind(), "text");
    }

    #[test]
    fn set_x_and_set_y_keep_other_axis() {
        let mut ids = IdGenerator::new();
        let mut shape = sample(&mut ids);
        shape.set_x(0);
        assert_eq!(shape.position(), (0, 20));
        shape.set_y(-4);
        assert_eq!(shape.position(), (0, -4));
    }

    #[test]
    fn resizing_through_trait_object() {
        let mut ids = IdGenerator::new();
        let mut shape = sample(&mut ids);
        if let Some(r) = shape.as_resizable_mut() {
            r.set_width(7);
            r.set_height(9);
        }
        assert_eq!(shape.bounds(), Some(ShapeBox::new(10, 20, 7, 9)));
    }

    #[test]
    fn paint_draws_under_own_id() {
        let mut ids = IdGenerator::new();
        let shape = sample(&mut ids);
        let mut list = DisplayList::new();
        shape.paint(&mut list);
        let drawn = list.drawable(shape.id()).map(|d| d.primitive.clone());
        assert_eq!(
            drawn,
            Some(Primitive::Rect(ShapeBox::new(10, 20, 30, 40).to_rect()))
        );
    }
}
