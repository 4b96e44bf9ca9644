// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration.

/// Tunables shared by shapes and composites.
///
/// A [`Canvas`](crate::canvas::Canvas) hands its config to every shape it
/// creates; a [`Composite`](crate::composite::Composite) keeps its own copy so
/// its `move_*` helpers do not depend on global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Distance covered by the argument-less `move_*` helpers.
    pub default_step: i32,
    /// Grid unit used for default shape sizes (`2 * step` by `step`).
    pub shape_step: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Default step length for `move_*` helpers.
    pub const DEFAULT_STEP: i32 = 25;
    /// Default grid unit for shape sizes.
    pub const SHAPE_STEP: u32 = 50;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_step: Self::DEFAULT_STEP,
            shape_step: Self::SHAPE_STEP,
        }
    }

    /// Returns a copy with a different move step.
    #[must_use]
    pub const fn with_default_step(self, default_step: i32) -> Self {
        Self {
            default_step,
            ..self
        }
    }

    /// Default `(width, height)` for rectangles, ellipses and triangles.
    #[must_use]
    pub const fn default_shape_size(&self) -> (u32, u32) {
        (self.shape_step.saturating_mul(2), self.shape_step)
    }
}
