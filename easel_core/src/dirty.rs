// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants for the [`DisplayList`](crate::surface::DisplayList).
//!
//! Each channel is an independent category of change. All channels are
//! local-only: display-list items have no parent/child relationships, so
//! marking one item never dirties another.
//!
//! Callers never query dirty state directly.
//! [`DisplayList::take_damage`](crate::surface::DisplayList::take_damage)
//! drains every channel into a [`Damage`](crate::surface::Damage) record.

use understory_dirty::Channel;

/// Item geometry changed (moved, resized, re-shaped, or newly drawn).
pub const GEOMETRY: Channel = Channel::new(0);

/// Item fill color changed.
pub const STYLE: Channel = Channel::new(1);

/// Item moved within the draw order.
pub const ORDER: Channel = Channel::new(2);
