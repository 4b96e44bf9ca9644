// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The context shapes and composites are created and laid out in.
//!
//! A [`Canvas`] bundles the pieces every layout operation needs:
//!
//! - the [`DrawingSurface`] shapes are painted on,
//! - the [`IdGenerator`] that hands out shape identities,
//! - the [`LayoutConfig`] used for default sizes and move steps,
//! - a [`Tracer`] for diagnostics.
//!
//! ```rust
//! use easel_core::canvas::Canvas;
//! use easel_core::color::Color;
//! use easel_core::composite::{Composite, Item};
//! use easel_core::surface::DisplayList;
//!
//! # fn main() -> Result<(), easel_core::error::CompositeError> {
//! let mut canvas = Canvas::new(DisplayList::new());
//! let head = canvas.rectangle(100, 50, 50, 50, Color::RED);
//! let cap = canvas.triangle(100, 25, 50, 25, Color::GREEN);
//!
//! let mut robot = Composite::new("robot");
//! robot.add_shapes(&[Item::from(&head), Item::from(&cap)], &mut canvas)?;
//! robot.seal()?;
//! robot.move_right(&mut canvas)?;
//! assert_eq!(robot.position(), (125, 25));
//! # Ok(())
//! # }
//! ```

use alloc::string::String;

use crate::color::Color;
use crate::composite::ZAnchor;
use crate::config::LayoutConfig;
use crate::direction::Direction8;
use crate::geom::ShapeBox;
use crate::id::IdGenerator;
use crate::shape::{Ellipse, Paintable, Positionable, Rectangle, Shape, Text, Triangle};
use crate::surface::DrawingSurface;
use crate::trace::{TraceSink, Tracer};

/// A drawing surface together with identity allocation, configuration and
/// tracing.
#[derive(Debug)]
pub struct Canvas<'t, S> {
    pub(crate) surface: S,
    pub(crate) ids: IdGenerator,
    pub(crate) config: LayoutConfig,
    pub(crate) tracer: Tracer<'t>,
}

impl<S: DrawingSurface> Canvas<'_, S> {
    /// Creates a canvas with the default configuration and no tracing.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, LayoutConfig::default())
    }

    /// Creates a canvas with an explicit configuration.
    #[must_use]
    pub fn with_config(surface: S, config: LayoutConfig) -> Self {
        Self {
            surface,
            ids: IdGenerator::new(),
            config,
            tracer: Tracer::none(),
        }
    }
}

impl<'t, S: DrawingSurface> Canvas<'t, S> {
    /// Routes trace events to `sink`.
    #[must_use]
    pub fn with_tracer(mut self, sink: &'t mut dyn TraceSink) -> Self {
        self.tracer = Tracer::new(sink);
        self
    }

    /// Replaces the identity allocator.
    #[must_use]
    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the drawing surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the canvas and returns its surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns the identity allocator.
    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Returns the layout configuration.
    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Returns the tracer, e.g. to emit events from caller code.
    pub fn tracer_mut(&mut self) -> &mut Tracer<'t> {
        &mut self.tracer
    }

    // -- Factories (paint what they create) --

    /// Creates and paints a rectangle.
    pub fn rectangle(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Shape {
        let shape = Rectangle::new(&mut self.ids, ShapeBox::new(x, y, width, height), color);
        self.adopt(shape.into())
    }

    /// Creates and paints an ellipse.
    pub fn ellipse(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Shape {
        let shape = Ellipse::new(&mut self.ids, ShapeBox::new(x, y, width, height), color);
        self.adopt(shape.into())
    }

    /// Creates and paints a triangle pointing north.
    pub fn triangle(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Shape {
        self.triangle_towards(x, y, width, height, color, Direction8::North)
    }

    /// Creates and paints a triangle whose apex points towards `direction`.
    pub fn triangle_towards(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
        direction: Direction8,
    ) -> Shape {
        let shape = Triangle::new(
            &mut self.ids,
            ShapeBox::new(x, y, width, height),
            color,
            direction,
        );
        self.adopt(shape.into())
    }

    /// Creates and paints a text label.
    pub fn text(&mut self, x: i32, y: i32, text: impl Into<String>) -> Shape {
        let shape = Text::new(&mut self.ids, x, y, text);
        self.adopt(shape.into())
    }

    /// Creates and paints a red rectangle of the default size at the origin.
    pub fn default_rectangle(&mut self) -> Shape {
        let (w, h) = self.config.default_shape_size();
        self.rectangle(0, 0, w, h, Color::RED)
    }

    /// Creates and paints a blue ellipse of the default size at the origin.
    pub fn default_ellipse(&mut self) -> Shape {
        let (w, h) = self.config.default_shape_size();
        self.ellipse(0, 0, w, h, Color::BLUE)
    }

    /// Creates and paints a yellow north-pointing triangle of the default size
    /// at the origin.
    pub fn default_triangle(&mut self) -> Shape {
        let (w, h) = self.config.default_shape_size();
        self.triangle(0, 0, w, h, Color::YELLOW)
    }

    // -- Single-shape surface operations --

    /// Draws or redraws `shape`.
    pub fn paint(&mut self, shape: &impl Paintable) {
        shape.paint(&mut self.surface);
        self.surface.present();
    }

    /// Removes `shape` from the surface. Returns whether it was drawn.
    pub fn erase(&mut self, shape: &impl Paintable) -> bool {
        let erased = self.surface.erase(shape.id());
        self.surface.present();
        erased
    }

    /// Moves `shape` to the top of the draw order.
    pub fn raise_to_top(&mut self, shape: &impl Paintable) {
        self.surface.raise_to_top(shape.id());
        self.surface.present();
    }

    /// Moves `shape` to the bottom of the draw order.
    pub fn lower_to_bottom(&mut self, shape: &impl Paintable) {
        self.surface.lower_to_bottom(shape.id());
        self.surface.present();
    }

    /// Moves `shape` directly above `anchor`. For a composite anchor, its
    /// highest drawn member is used; an anchor with nothing drawn is a no-op.
    pub fn raise_above(&mut self, shape: &impl Paintable, anchor: ZAnchor<'_>) {
        if let Some(target) = anchor.highest(&self.surface) {
            self.surface.raise_above(shape.id(), target);
            self.surface.present();
        }
    }

    /// Moves `shape` directly below `anchor`. For a composite anchor, its
    /// lowest drawn member is used; an anchor with nothing drawn is a no-op.
    pub fn lower_below(&mut self, shape: &impl Paintable, anchor: ZAnchor<'_>) {
        if let Some(target) = anchor.lowest(&self.surface) {
            self.surface.lower_below(shape.id(), target);
            self.surface.present();
        }
    }

    // -- Single-shape step moves --

    /// Moves `shape` up by [`LayoutConfig::default_step`] and redraws it.
    pub fn move_up(&mut self, shape: &mut (impl Positionable + Paintable)) {
        shape.move_up_by(self.config.default_step);
        self.paint(&*shape);
    }

    /// Moves `shape` down by [`LayoutConfig::default_step`] and redraws it.
    pub fn move_down(&mut self, shape: &mut (impl Positionable + Paintable)) {
        shape.move_down_by(self.config.default_step);
        self.paint(&*shape);
    }

    /// Moves `shape` left by [`LayoutConfig::default_step`] and redraws it.
    pub fn move_left(&mut self, shape: &mut (impl Positionable + Paintable)) {
        shape.move_left_by(self.config.default_step);
        self.paint(&*shape);
    }

    /// Moves `shape` right by [`LayoutConfig::default_step`] and redraws it.
    pub fn move_right(&mut self, shape: &mut (impl Positionable + Paintable)) {
        shape.move_right_by(self.config.default_step);
        self.paint(&*shape);
    }

    fn adopt(&mut self, shape: Shape) -> Shape {
        shape.paint(&mut self.surface);
        self.surface.present();
        shape
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::id::ShapeId;
    use crate::surface::DisplayList;

    #[test]
    fn factories_allocate_ids_and_paint() {
        let mut canvas = Canvas::new(DisplayList::new());
        let r = canvas.default_rectangle();
        let e = canvas.default_ellipse();
        let t = canvas.default_triangle();
        let label = canvas.text(5, 5, "hi");
        assert_eq!(
            canvas.surface().draw_order(),
            vec![r.id(), e.id(), t.id(), label.id()]
        );
        assert_eq!(r.id(), ShapeId(1));
        assert_eq!(r.bounds(), Some(ShapeBox::new(0, 0, 100, 50)));
    }

    #[test]
    fn repaint_after_mutation() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut r = canvas.rectangle(0, 0, 10, 10, Color::RED);
        r.move_by(5, 0);
        canvas.paint(&r);
        let drawn = canvas.surface().drawable(r.id()).cloned();
        assert_eq!(drawn, Some(r.drawable()));
    }

    #[test]
    fn step_moves_use_the_canvas_config_and_redraw() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut r = canvas.rectangle(100, 100, 10, 10, Color::RED);
        canvas.move_up(&mut r);
        canvas.move_left(&mut r);
        assert_eq!(r.position(), (75, 75));
        assert_eq!(canvas.surface().drawable(r.id()), Some(&r.drawable()));

        let config = LayoutConfig {
            default_step: 10,
            shape_step: 50,
        };
        let mut canvas = Canvas::with_config(DisplayList::new(), config);
        let mut t = canvas.text(0, 0, "hi");
        let presents = canvas.surface().present_count();
        canvas.move_right(&mut t);
        canvas.move_down(&mut t);
        assert_eq!(t.position(), (10, 10));
        assert_eq!(canvas.surface().present_count(), presents + 2);
        assert_eq!(canvas.surface().drawable(t.id()), Some(&t.drawable()));
    }

    #[test]
    fn single_shape_restacking() {
        let mut canvas = Canvas::new(DisplayList::new());
        let a = canvas.default_rectangle();
        let b = canvas.default_ellipse();
        let c = canvas.default_triangle();

        canvas.raise_above(&a, ZAnchor::from(&b));
        assert_eq!(canvas.surface().draw_order(), vec![b.id(), a.id(), c.id()]);

        canvas.lower_below(&c, ZAnchor::from(&b));
        assert_eq!(canvas.surface().draw_order(), vec![c.id(), b.id(), a.id()]);

        canvas.raise_to_top(&c);
        canvas.lower_to_bottom(&a);
        assert_eq!(canvas.surface().draw_order(), vec![a.id(), b.id(), c.id()]);
    }

    #[test]
    fn erase_removes_from_surface() {
        let mut canvas = Canvas::new(DisplayList::new());
        let r = canvas.default_rectangle();
        assert!(canvas.erase(&r));
        assert!(!canvas.erase(&r), "already erased");
        assert!(canvas.surface().is_empty());
    }

    #[test]
    fn config_drives_default_sizes() {
        let config = LayoutConfig {
            default_step: 10,
            shape_step: 20,
        };
        let mut canvas = Canvas::with_config(DisplayList::new(), config);
        let e = canvas.default_ellipse();
        assert_eq!(e.bounds(), Some(ShapeBox::new(0, 0, 40, 20)));
    }
}
