// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite shapes: named groups laid out as one unit.
//!
//! A [`Composite`] owns its own copies of the shapes it was built from. Each
//! copy is wrapped in a [`Part`] that remembers where the member sits inside
//! the composite's bounding box, as fractions of the box's width and height.
//! Resizing the composite replays those fractions against the new box, so the
//! group keeps its proportions no matter how often it is resized.
//!
//! # Lifecycle
//!
//! A composite starts out **building**: members may be added with
//! [`add_shape`](Composite::add_shape) and [`add_shapes`](Composite::add_shapes),
//! and the bounding box grows to fit them. [`seal`](Composite::seal) freezes
//! membership; only then may the group be moved or resized.
//!
//! | Operation | Building | Sealed |
//! |---|---|---|
//! | `add_shape`, `add_shapes` | allowed | [`Sealed`](CompositeError::Sealed) |
//! | `seal` | needs one part, else [`EmptyGroup`](CompositeError::EmptyGroup) | [`AlreadySealed`](CompositeError::AlreadySealed) |
//! | `set_size`, `set_position`, `move_*` | [`NotSealed`](CompositeError::NotSealed) | allowed |
//! | `copy`, z-order, `paint`, `remove` | allowed | allowed |
//!
//! A refused operation leaves the composite unchanged, draws nothing, and
//! reports a [`RejectedEvent`](crate::trace::RejectedEvent).
//!
//! # Growth
//!
//! When a new member sticks out of the current box, the box grows to the
//! union and every existing part is refit from its member's current absolute
//! box. Members themselves never move while a composite is being built.

mod item;
mod layout;
mod member;
mod part;
mod zorder;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::CompositeError;
use crate::geom::ShapeBox;
use crate::id::ShapeId;
use crate::shape::{Paintable, Resizable, Shape};
use crate::surface::DrawingSurface;
use crate::trace::{CopyEvent, LayoutOp, PartAddedEvent, RejectedEvent, Tracer};

pub use item::Item;
pub use member::Member;
pub use part::Part;
pub use zorder::ZAnchor;

/// Where a composite is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Members may still be added.
    #[default]
    Building,
    /// Membership is frozen; layout operations are allowed.
    Sealed,
}

/// A named group of shapes that is moved and resized as one.
///
/// `Clone` takes a snapshot with the same member [`ShapeId`]s, so a clone
/// and its source drive the same drawn items. [`copy`](Self::copy) makes a
/// second group with fresh identities.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    name: String,
    bounds: ShapeBox,
    parts: Vec<Part>,
    phase: Phase,
    config: LayoutConfig,
}

impl Composite {
    /// Creates an empty composite with the default configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, LayoutConfig::default())
    }

    /// Creates an empty composite with an explicit configuration.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: LayoutConfig) -> Self {
        Self {
            name: name.into(),
            bounds: ShapeBox::default(),
            parts: Vec::new(),
            phase: Phase::Building,
            config,
        }
    }

    /// Creates a composite from `items` and seals it.
    ///
    /// The composite uses the canvas' configuration.
    pub fn build<S: DrawingSurface>(
        name: impl Into<String>,
        items: &[Item<'_>],
        canvas: &mut Canvas<'_, S>,
    ) -> Result<Self, CompositeError> {
        let mut composite = Self::with_config(name, canvas.config);
        composite.add_shapes(items, canvas)?;
        composite.seal()?;
        Ok(composite)
    }

    // -- Membership --

    /// Adds a copy of `shape` and paints it. Returns the copy's handle.
    ///
    /// The caller's `shape` is left alone; later changes to it do not affect
    /// the composite.
    pub fn add_shape<S: DrawingSurface>(
        &mut self,
        shape: &Shape,
        canvas: &mut Canvas<'_, S>,
    ) -> Result<ShapeId, CompositeError> {
        if self.is_sealed() {
            return Err(self.reject(&mut canvas.tracer, LayoutOp::Add, CompositeError::Sealed));
        }
        let member = Member::copy_from(shape, &mut canvas.ids)
            .map_err(|e| self.reject(&mut canvas.tracer, LayoutOp::Add, e))?;
        let id = member.id();
        member.paint(&mut canvas.surface);
        self.push(member, &mut canvas.tracer);
        canvas.surface.present();
        Ok(id)
    }

    /// Adds copies of every shape in `items`, in depth-first order.
    ///
    /// Every item is checked before anything is added, so a refused shape
    /// anywhere in the tree leaves the composite unchanged. Returns the number
    /// of members added.
    pub fn add_shapes<S: DrawingSurface>(
        &mut self,
        items: &[Item<'_>],
        canvas: &mut Canvas<'_, S>,
    ) -> Result<usize, CompositeError> {
        if self.is_sealed() {
            return Err(self.reject(&mut canvas.tracer, LayoutOp::Add, CompositeError::Sealed));
        }
        let sources =
            item::flatten(items).map_err(|e| self.reject(&mut canvas.tracer, LayoutOp::Add, e))?;
        for source in &sources {
            let member = source.copy(&mut canvas.ids)?;
            member.paint(&mut canvas.surface);
            self.push(member, &mut canvas.tracer);
        }
        canvas.surface.present();
        Ok(sources.len())
    }

    /// Freezes membership and enables layout operations.
    pub fn seal(&mut self) -> Result<(), CompositeError> {
        match self.phase {
            Phase::Sealed => Err(CompositeError::AlreadySealed),
            Phase::Building if self.parts.is_empty() => Err(CompositeError::EmptyGroup),
            Phase::Building => {
                self.phase = Phase::Sealed;
                Ok(())
            }
        }
    }

    /// Returns an unsealed composite holding fresh copies of every member,
    /// painted on the canvas.
    ///
    /// The copy keeps this composite's box, proportions and configuration.
    /// Without `new_name` it is called `"<name> - copy"`.
    pub fn copy<S: DrawingSurface>(
        &self,
        new_name: Option<&str>,
        canvas: &mut Canvas<'_, S>,
    ) -> Self {
        let name = match new_name {
            Some(name) => String::from(name),
            None => alloc::format!("{} - copy", self.name),
        };
        let parts: Vec<Part> = self
            .parts
            .iter()
            .map(|part| part.copy(&mut canvas.ids))
            .collect();
        for part in &parts {
            part.member().paint(&mut canvas.surface);
        }
        canvas.surface.present();
        canvas.tracer.copied(&CopyEvent {
            source: &self.name,
            copy: &name,
            parts: parts.len(),
        });
        Self {
            name,
            bounds: self.bounds,
            parts,
            phase: Phase::Building,
            config: self.config,
        }
    }

    // -- Painting --

    /// Draws every member and presents once.
    pub fn paint<S: DrawingSurface>(&self, canvas: &mut Canvas<'_, S>) {
        self.repaint(&mut canvas.surface);
    }

    /// Erases every member from the surface. Returns how many were drawn.
    pub fn remove<S: DrawingSurface>(&self, canvas: &mut Canvas<'_, S>) -> usize {
        let erased = self
            .parts
            .iter()
            .filter(|part| canvas.surface.erase(part.member().id()))
            .count();
        canvas.surface.present();
        erased
    }

    // -- Queries --

    /// The composite's name. Names need not be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the composite has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether [`seal`](Self::seal) has succeeded.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.phase == Phase::Sealed
    }

    /// The bounding box.
    #[must_use]
    pub fn bounds(&self) -> ShapeBox {
        self.bounds
    }

    /// Top-left corner of the bounding box.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.bounds.x, self.bounds.y)
    }

    /// `(width, height)` of the bounding box.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.bounds.width, self.bounds.height)
    }

    /// The configuration this composite moves with.
    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.parts.iter().map(Part::member)
    }

    /// Member handles in insertion order.
    pub fn member_ids(&self) -> impl Iterator<Item = ShapeId> {
        self.members().map(Paintable::id)
    }

    /// Whether `id` is one of this composite's members.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.member_ids().any(|m| m == id)
    }

    /// Parts in insertion order, with their fractions.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    // -- Internals --

    /// Appends `member`, growing the box and refitting existing parts if
    /// needed.
    fn push(&mut self, member: Member, tracer: &mut Tracer<'_>) {
        let member_bounds = member.bounds();
        let grew = if self.parts.is_empty() {
            self.bounds = member_bounds;
            false
        } else {
            let grown = self.bounds.union(member_bounds);
            let grew = grown != self.bounds;
            if grew {
                self.bounds = grown;
                for part in &mut self.parts {
                    part.refit(grown);
                }
            }
            grew
        };
        let id = member.id();
        self.parts.push(Part::new(member, self.bounds));
        tracer.part_added(&PartAddedEvent {
            group: &self.name,
            member: id,
            member_bounds,
            group_bounds: self.bounds,
            grew,
        });
    }

    fn repaint(&self, surface: &mut impl DrawingSurface) {
        for part in &self.parts {
            part.member().paint(surface);
        }
        surface.present();
    }

    fn reject(&self, tracer: &mut Tracer<'_>, op: LayoutOp, error: CompositeError) -> CompositeError {
        tracer.rejected(&RejectedEvent {
            group: &self.name,
            op,
            error,
        });
        error
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multishape {} with {} parts", self.name, self.parts.len())
    }
}
