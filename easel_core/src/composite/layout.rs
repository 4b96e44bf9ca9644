// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizing and moving sealed composites.

use crate::canvas::Canvas;
use crate::error::CompositeError;
use crate::geom::ShapeBox;
use crate::surface::DrawingSurface;
use crate::trace::{LayoutOp, MoveEvent, ResizeEvent};

use super::Composite;

impl Composite {
    /// Resizes the composite, replaying every member's fractions against the
    /// new extent.
    ///
    /// Members land at `round(x + dx * width, y + dy * height)` with size
    /// `round(dw * width, dh * height)`. The box keeps its top-left corner; a
    /// zero extent is stored as one so later resizes stay well defined.
    ///
    /// All members are updated before any is redrawn, and the surface is
    /// presented once.
    pub fn set_size<S: DrawingSurface>(
        &mut self,
        width: i32,
        height: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        if !self.is_sealed() {
            return Err(self.reject(&mut canvas.tracer, LayoutOp::Resize, CompositeError::NotSealed));
        }
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            let error = CompositeError::InvalidDimension { width, height };
            return Err(self.reject(&mut canvas.tracer, LayoutOp::Resize, error));
        };

        let (x, y) = self.position();
        for part in &mut self.parts {
            let target = part.replay(x, y, w, h);
            part.apply(target);
        }
        self.bounds = ShapeBox::new(x, y, w.max(1), h.max(1));
        self.repaint(&mut canvas.surface);

        canvas.tracer.resize(&ResizeEvent {
            group: &self.name,
            requested_width: width,
            requested_height: height,
            bounds: self.bounds,
            parts: self.parts.len(),
        });
        Ok(())
    }

    /// Resizes horizontally, keeping the current height.
    pub fn set_width<S: DrawingSurface>(
        &mut self,
        width: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        let height = i32::try_from(self.bounds.height).unwrap_or(i32::MAX);
        self.set_size(width, height, canvas)
    }

    /// Resizes vertically, keeping the current width.
    pub fn set_height<S: DrawingSurface>(
        &mut self,
        height: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        let width = i32::try_from(self.bounds.width).unwrap_or(i32::MAX);
        self.set_size(width, height, canvas)
    }

    /// Moves the composite so its top-left corner is at `(x, y)`.
    ///
    /// Every member is shifted by the same integer delta, so relative
    /// placement is exact. Moving to the current position changes nothing.
    ///
    /// A delta too large for `i32` is clamped, and the box origin moves by
    /// the clamped amount too, so members and box never disagree.
    pub fn set_position<S: DrawingSurface>(
        &mut self,
        x: i32,
        y: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        if !self.is_sealed() {
            return Err(self.reject(&mut canvas.tracer, LayoutOp::Move, CompositeError::NotSealed));
        }
        let dx = clamped_delta(self.bounds.x, x);
        let dy = clamped_delta(self.bounds.y, y);
        for part in &mut self.parts {
            part.translate(dx, dy);
        }
        self.bounds = self.bounds.translated(dx, dy);
        self.repaint(&mut canvas.surface);

        canvas.tracer.moved(&MoveEvent {
            group: &self.name,
            dx,
            dy,
            bounds: self.bounds,
        });
        Ok(())
    }

    /// Moves horizontally, keeping the vertical position.
    pub fn set_x<S: DrawingSurface>(
        &mut self,
        x: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.set_position(x, self.bounds.y, canvas)
    }

    /// Moves vertically, keeping the horizontal position.
    pub fn set_y<S: DrawingSurface>(
        &mut self,
        y: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.set_position(self.bounds.x, y, canvas)
    }

    /// Moves up by `length`.
    pub fn move_up_by<S: DrawingSurface>(
        &mut self,
        length: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.set_position(self.bounds.x, self.bounds.y.saturating_sub(length), canvas)
    }

    /// Moves down by `length`.
    pub fn move_down_by<S: DrawingSurface>(
        &mut self,
        length: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.set_position(self.bounds.x, self.bounds.y.saturating_add(length), canvas)
    }

    /// Moves left by `length`.
    pub fn move_left_by<S: DrawingSurface>(
        &mut self,
        length: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.set_position(self.bounds.x.saturating_sub(length), self.bounds.y, canvas)
    }

    /// Moves right by `length`.
    pub fn move_right_by<S: DrawingSurface>(
        &mut self,
        length: i32,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.set_position(self.bounds.x.saturating_add(length), self.bounds.y, canvas)
    }

    /// Moves up by the configured step.
    pub fn move_up<S: DrawingSurface>(
        &mut self,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.move_up_by(self.config.default_step, canvas)
    }

    /// Moves down by the configured step.
    pub fn move_down<S: DrawingSurface>(
        &mut self,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.move_down_by(self.config.default_step, canvas)
    }

    /// Moves left by the configured step.
    pub fn move_left<S: DrawingSurface>(
        &mut self,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.move_left_by(self.config.default_step, canvas)
    }

    /// Moves right by the configured step.
    pub fn move_right<S: DrawingSurface>(
        &mut self,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<(), CompositeError> {
        self.move_right_by(self.config.default_step, canvas)
    }
}

/// `to - from`, clamped to the `i32` range.
fn clamped_delta(from: i32, to: i32) -> i32 {
    let delta = i64::from(to) - i64::from(from);
    i32::try_from(delta).unwrap_or(if delta < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::color::Color;
    use crate::composite::{Composite, Item};
    use crate::config::LayoutConfig;
    use crate::geom::ShapeBox;
    use crate::shape::Resizable;
    use crate::surface::DisplayList;

    use super::*;

    fn boxes(c: &Composite) -> Vec<ShapeBox> {
        c.members().map(Resizable::bounds).collect()
    }

    fn pair(canvas: &mut Canvas<'_, DisplayList>) -> Composite {
        let r = canvas.rectangle(0, 0, 100, 50, Color::RED);
        let e = canvas.ellipse(50, 25, 50, 50, Color::BLUE);
        Composite::build("pair", &[Item::from(&r), Item::from(&e)], canvas).unwrap()
    }

    #[test]
    fn negative_size_is_refused_without_redraw() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        let before = boxes(&c);
        _ = canvas.surface_mut().take_damage();
        let presents = canvas.surface().present_count();

        assert_eq!(
            c.set_size(-1, 10, &mut canvas),
            Err(CompositeError::InvalidDimension {
                width: -1,
                height: 10
            })
        );
        assert_eq!(boxes(&c), before);
        assert_eq!(c.bounds(), ShapeBox::new(0, 0, 100, 75));
        assert_eq!(canvas.surface().present_count(), presents);
        assert!(canvas.surface_mut().take_damage().is_empty());
    }

    #[test]
    fn zero_size_collapses_members_and_keeps_a_unit_box() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        c.set_size(0, 0, &mut canvas).unwrap();
        assert_eq!(c.bounds(), ShapeBox::new(0, 0, 1, 1));
        assert!(boxes(&c).iter().all(|b| b.width == 0 && b.height == 0));

        c.set_size(100, 75, &mut canvas).unwrap();
        assert_eq!(
            boxes(&c),
            vec![ShapeBox::new(0, 0, 100, 50), ShapeBox::new(50, 25, 50, 50)]
        );
    }

    #[test]
    fn resize_redraws_once() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        _ = canvas.surface_mut().take_damage();
        let presents = canvas.surface().present_count();

        c.set_width(200, &mut canvas).unwrap();
        assert_eq!(canvas.surface().present_count(), presents + 1);
        let damage = canvas.surface_mut().take_damage();
        assert_eq!(damage.geometry.len(), 2);
        assert_eq!(c.size(), (200, 75));
    }

    #[test]
    fn repeated_resize_is_stable() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        c.set_size(37, 91, &mut canvas).unwrap();
        let first = boxes(&c);
        c.set_size(37, 91, &mut canvas).unwrap();
        assert_eq!(boxes(&c), first);
    }

    #[test]
    fn set_height_keeps_width() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        c.set_height(150, &mut canvas).unwrap();
        assert_eq!(c.size(), (100, 150));
        assert_eq!(boxes(&c)[0], ShapeBox::new(0, 0, 100, 100));
    }

    #[test]
    fn set_position_is_exact_and_idempotent() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        c.set_position(-13, 7, &mut canvas).unwrap();
        let first = boxes(&c);
        assert_eq!(
            first,
            vec![ShapeBox::new(-13, 7, 100, 50), ShapeBox::new(37, 32, 50, 50)]
        );
        c.set_position(-13, 7, &mut canvas).unwrap();
        assert_eq!(boxes(&c), first);
        assert_eq!(c.position(), (-13, 7));
    }

    #[test]
    fn step_moves_use_the_composite_config() {
        let mut canvas = Canvas::new(DisplayList::new());
        let r = canvas.default_rectangle();
        let mut c = Composite::with_config("stepper", LayoutConfig::new().with_default_step(10));
        c.add_shape(&r, &mut canvas).unwrap();
        c.seal().unwrap();

        c.move_right(&mut canvas).unwrap();
        c.move_down(&mut canvas).unwrap();
        assert_eq!(c.position(), (10, 10));
        c.move_left(&mut canvas).unwrap();
        c.move_up(&mut canvas).unwrap();
        assert_eq!(c.position(), (0, 0));
        c.move_right_by(3, &mut canvas).unwrap();
        c.move_down_by(4, &mut canvas).unwrap();
        c.move_left_by(1, &mut canvas).unwrap();
        c.move_up_by(1, &mut canvas).unwrap();
        assert_eq!(boxes(&c), vec![ShapeBox::new(2, 3, 100, 50)]);
    }

    #[test]
    fn oversized_move_keeps_members_on_the_box() {
        let mut canvas = Canvas::new(DisplayList::new());
        let r = canvas.rectangle(i32::MIN + 10, 0, 10, 10, Color::RED);
        let mut c = Composite::build("far", &[Item::from(&r)], &mut canvas).unwrap();

        c.set_position(i32::MAX - 100, 0, &mut canvas).unwrap();
        assert_eq!(c.bounds(), ShapeBox::new(9, 0, 10, 10));
        assert_eq!(boxes(&c), vec![c.bounds()]);

        c.set_position(i32::MAX - 100, 0, &mut canvas).unwrap();
        assert_eq!(c.position(), (i32::MAX - 100, 0));
        assert_eq!(boxes(&c), vec![c.bounds()]);
    }

    #[test]
    fn set_x_and_set_y() {
        let mut canvas = Canvas::new(DisplayList::new());
        let mut c = pair(&mut canvas);
        c.set_x(5, &mut canvas).unwrap();
        c.set_y(6, &mut canvas).unwrap();
        assert_eq!(c.position(), (5, 6));
        assert_eq!(boxes(&c)[1], ShapeBox::new(55, 31, 50, 50));
    }

    #[test]
    fn moves_require_a_sealed_composite() {
        let mut canvas = Canvas::new(DisplayList::new());
        let r = canvas.default_rectangle();
        let mut c = Composite::new("open");
        c.add_shape(&r, &mut canvas).unwrap();
        assert_eq!(c.move_up(&mut canvas), Err(CompositeError::NotSealed));
        assert_eq!(c.set_width(3, &mut canvas), Err(CompositeError::NotSealed));
        assert_eq!(c.position(), (0, 0));
    }
}
