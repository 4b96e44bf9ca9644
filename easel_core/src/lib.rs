// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes, composite layout, and a drawing-surface contract for a teaching
//! canvas.
//!
//! `easel_core` lets a program build simple pictures out of rectangles,
//! ellipses, triangles and text, group shapes into named composites, and move
//! and resize those composites as one unit while every member keeps its
//! proportional place. It is `no_std` compatible (with `alloc`) and never
//! draws anything itself: rendering goes through a [`DrawingSurface`]
//! implementation supplied by the caller.
//!
//! # Architecture
//!
//! ```text
//!   Canvas::rectangle() / ellipse() / ...  ──► Shape ──► paint ──┐
//!                                                                ▼
//!   Composite::add_shapes() ──► Part (member copy + fractions)   DrawingSurface
//!          │                                                     ▲    │
//!          ▼                                                     │    ▼
//!   seal() ──► set_size() / set_position() ──► repaint + present ┘  DisplayList
//!                                                                   ::take_damage()
//! ```
//!
//! **[`shape`]**: Primitive shapes and the narrow capability traits they
//! implement ([`Positionable`](shape::Positionable),
//! [`Resizable`](shape::Resizable), [`Paintable`](shape::Paintable),
//! [`Copyable`](shape::Copyable)).
//!
//! **[`composite`]**: Named groups with proportional resize, integer-exact
//! moves, a building/sealed lifecycle, and group z-order operations.
//!
//! **[`surface`]**: The [`DrawingSurface`] trait and [`DisplayList`], an
//! in-memory surface with struct-of-arrays storage and damage reporting.
//!
//! **[`dirty`]**: Dirty channels used by the display list, via
//! `understory_dirty`.
//!
//! **[`canvas`]**: Bundles a surface with identity allocation, configuration
//! and tracing; all shape factories live here.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! layout instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! [`DrawingSurface`]: surface::DrawingSurface
//! [`DisplayList`]: surface::DisplayList

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod canvas;
pub mod color;
pub mod composite;
pub mod config;
pub mod direction;
pub mod dirty;
pub mod error;
pub mod geom;
pub mod id;
pub mod shape;
pub mod surface;
pub mod trace;
