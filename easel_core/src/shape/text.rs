// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;

use crate::color::Color;
use crate::id::{IdGenerator, ShapeId};
use crate::surface::{Drawable, Primitive};

use super::{Copyable, Paintable, Positionable};

/// A text label anchored at a point.
///
/// Text has no extent of its own (the surface decides how large the glyphs
/// are), so it cannot be resized and cannot join a composite.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    id: ShapeId,
    x: i32,
    y: i32,
    text: String,
    color: Color,
}

impl Text {
    /// Creates a black label with a fresh identity from `ids`.
    #[must_use]
    pub fn new(ids: &mut IdGenerator, x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            id: ids.allocate(),
            x,
            y,
            text: text.into(),
            color: Color::BLACK,
        }
    }

    /// Returns the displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the text color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Positionable for Text {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl Paintable for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn drawable(&self) -> Drawable {
        Drawable {
            primitive: Primitive::Text {
                origin: Point::new(f64::from(self.x), f64::from(self.y)),
                text: self.text.clone(),
            },
            color: self.color,
        }
    }
}

impl Copyable for Text {
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

    #[test]
    fn set_text_redraws_with_new_content() {
        let mut ids = IdGenerator::new();
        let mut label = Text::new(&mut ids, 3, 4, "text");
        label.set_text("hello");
        let Primitive::Text { origin, text } = label.drawable().primitive else {
            panic!("text should paint as a text primitive");
        };
        assert_eq!(origin, Point::new(3.0, 4.0));
        assert_eq!(text, "hello");
    }
}
