// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, JSON logging, and display-list snapshots for easel
//! diagnostics.
//!
//! This crate provides [`TraceSink`](easel_core::trace::TraceSink)
//! implementations and inspection helpers for development:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`]: one JSON object per event, for tooling.
//! - [`snapshot::display_list_json`]: dumps a
//!   [`DisplayList`](easel_core::surface::DisplayList) in draw order.

pub mod json;
pub mod pretty;
pub mod snapshot;
