// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill colors.
//!
//! Only plain RGB values live here. Mapping human-readable color names to
//! values is the drawing surface's business.

use core::fmt;

/// An opaque RGB fill color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Blue, the default ellipse fill.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Light cream, the usual canvas background.
    pub const CREAMY: Self = Self::rgb(255, 255, 204);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Red, the default rectangle fill.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Steel gray.
    pub const STEELY: Self = Self::rgb(176, 196, 222);
    /// Yellow, the default triangle fill.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Creates a color from its channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Lowercase hex, `#rrggbb`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
