// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-member layout records.

use crate::geom::{ShapeBox, round_point, round_size};
use crate::id::IdGenerator;
use crate::shape::{Copyable, Positionable, Resizable};

use super::Member;

/// One member of a composite together with its place in the composite's box.
///
/// Offsets (`dx`, `dy`) and extents (`dw`, `dh`) are stored as fractions of
/// the owner's width and height. The owner's box is always passed in
/// explicitly; a part never refers back to its composite.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    member: Member,
    dx: f64,
    dy: f64,
    dw: f64,
    dh: f64,
}

impl Part {
    /// Creates a part for `member`, measured against `owner`.
    pub(crate) fn new(member: Member, owner: ShapeBox) -> Self {
        let mut part = Self {
            member,
            dx: 0.0,
            dy: 0.0,
            dw: 0.0,
            dh: 0.0,
        };
        part.refit(owner);
        part
    }

    /// The composite's own copy of the shape.
    #[must_use]
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Horizontal offset as a fraction of the owner's width.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Vertical offset as a fraction of the owner's height.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Width as a fraction of the owner's width.
    #[must_use]
    pub fn dw(&self) -> f64 {
        self.dw
    }

    /// Height as a fraction of the owner's height.
    #[must_use]
    pub fn dh(&self) -> f64 {
        self.dh
    }

    /// A part with a fresh copy of the member and the same fractions.
    pub(crate) fn copy(&self, ids: &mut IdGenerator) -> Self {
        Self {
            member: self.member.copy(ids),
            ..*self
        }
    }

    /// Recomputes the fractions from the member's current absolute box.
    ///
    /// The member itself is not touched.
    pub(crate) fn refit(&mut self, owner: ShapeBox) {
        let b = self.member.bounds();
        self.dx = fraction(f64::from(b.x) - f64::from(owner.x), owner.width);
        self.dy = fraction(f64::from(b.y) - f64::from(owner.y), owner.height);
        self.dw = fraction(f64::from(b.width), owner.width);
        self.dh = fraction(f64::from(b.height), owner.height);
    }

    /// Where the member lands in a box at `(x, y)` of size `width` by
    /// `height`, rounded onto the grid.
    #[must_use]
    pub fn replay(&self, x: i32, y: i32, width: u32, height: u32) -> ShapeBox {
        let (w, h) = (f64::from(width), f64::from(height));
        let (px, py) = round_point(
            f64::from(x) + self.dx * w,
            f64::from(y) + self.dy * h,
        );
        let (pw, ph) = round_size(self.dw * w, self.dh * h);
        ShapeBox::new(px, py, pw, ph)
    }

    /// Moves and resizes the member to `target`.
    pub(crate) fn apply(&mut self, target: ShapeBox) {
        self.member.set_position(target.x, target.y);
        self.member.set_size(target.width, target.height);
    }

    /// Shifts the member by an exact integer delta.
    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.member.move_by(dx, dy);
    }
}

/// `num / den`, or `0.0` on a zero-extent axis.
fn fraction(num: f64, den: u32) -> f64 {
    if den == 0 { 0.0 } else { num / f64::from(den) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::shape::Rectangle;

    fn member(ids: &mut IdGenerator, b: ShapeBox) -> Member {
        Member::Rectangle(Rectangle::new(ids, b, Color::RED))
    }

    #[test]
    fn fractions_are_relative_to_owner() {
        let mut ids = IdGenerator::new();
        let owner = ShapeBox::new(0, 0, 100, 75);
        let part = Part::new(member(&mut ids, ShapeBox::new(50, 25, 50, 50)), owner);
        assert_eq!(part.dx(), 0.5);
        assert!((part.dy() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(part.dw(), 0.5);
        assert!((part.dh() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_extent_axis_gives_zero_fractions() {
        let mut ids = IdGenerator::new();
        let owner = ShapeBox::new(10, 10, 0, 20);
        let part = Part::new(member(&mut ids, ShapeBox::new(10, 15, 0, 5)), owner);
        assert_eq!(part.dx(), 0.0);
        assert_eq!(part.dw(), 0.0);
        assert_eq!(part.dy(), 0.25);
        assert_eq!(part.dh(), 0.25);
    }

    #[test]
    fn replay_against_own_owner_is_identity() {
        let mut ids = IdGenerator::new();
        let owner = ShapeBox::new(-7, 3, 91, 37);
        let b = ShapeBox::new(12, 9, 33, 17);
        let part = Part::new(member(&mut ids, b), owner);
        assert_eq!(part.replay(owner.x, owner.y, owner.width, owner.height), b);
    }

    #[test]
    fn replay_scales_and_rounds() {
        let mut ids = IdGenerator::new();
        let owner = ShapeBox::new(0, 0, 100, 75);
        let part = Part::new(member(&mut ids, ShapeBox::new(50, 25, 50, 50)), owner);
        assert_eq!(part.replay(0, 0, 50, 150), ShapeBox::new(25, 50, 25, 100));
    }

    #[test]
    fn apply_and_translate_touch_only_the_member() {
        let mut ids = IdGenerator::new();
        let owner = ShapeBox::new(0, 0, 10, 10);
        let mut part = Part::new(member(&mut ids, owner), owner);
        part.apply(ShapeBox::new(1, 2, 3, 4));
        part.translate(-1, -2);
        assert_eq!(part.member().bounds(), ShapeBox::new(0, 0, 3, 4));
        assert_eq!((part.dw(), part.dh()), (1.0, 1.0));
    }
}
