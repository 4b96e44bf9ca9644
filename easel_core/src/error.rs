// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite layout errors.

use thiserror::Error;

/// Why a composite operation was refused.
///
/// Every variant is raised before any member is touched, so a failed call
/// leaves the composite and the drawing surface exactly as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CompositeError {
    /// Members were added after the composite was sealed.
    #[error("cannot add a shape after the composite has been sealed")]
    Sealed,

    /// `seal` was called twice.
    #[error("the composite is already sealed")]
    AlreadySealed,

    /// A layout operation was attempted while the composite was still being built.
    #[error("an unfinished composite cannot be moved or resized")]
    NotSealed,

    /// `seal` was called on a composite with no members.
    #[error("a composite needs at least one part")]
    EmptyGroup,

    /// A negative size was requested.
    #[error("dimensions may not be negative: width={width}, height={height}")]
    InvalidDimension {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// A shape that cannot be laid out proportionally was offered as a member.
    #[error("a {kind} cannot be a composite member")]
    InvalidMember {
        /// Kind of the rejected shape.
        kind: &'static str,
    },
}
