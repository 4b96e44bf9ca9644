// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use easel_core::geom::ShapeBox;
use easel_core::trace::{
    CopyEvent, LayoutOp, MoveEvent, PartAddedEvent, RejectedEvent, ResizeEvent, RestackEvent,
    RestackKind, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn op_name(op: LayoutOp) -> &'static str {
    match op {
        LayoutOp::Add => "add",
        LayoutOp::Resize => "resize",
        LayoutOp::Move => "move",
        LayoutOp::Restack => "restack",
        LayoutOp::Copy => "copy",
    }
}

pub(crate) fn restack_name(kind: RestackKind) -> &'static str {
    match kind {
        RestackKind::RaiseAbove => "raise_above",
        RestackKind::LowerBelow => "lower_below",
        RestackKind::RaiseToTop => "raise_to_top",
        RestackKind::LowerToBottom => "lower_to_bottom",
    }
}

struct Boxed(ShapeBox);

impl std::fmt::Display for Boxed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b = self.0;
        write!(f, "({},{} {}x{})", b.x, b.y, b.width, b.height)
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_part_added(&mut self, e: &PartAddedEvent<'_>) {
        let grew = if e.grew { " grew" } else { "" };
        let _ = writeln!(
            self.writer,
            "[add] {} member={} at {} box={}{grew}",
            e.group,
            e.member,
            Boxed(e.member_bounds),
            Boxed(e.group_bounds),
        );
    }

    fn on_resize(&mut self, e: &ResizeEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[resize] {} requested={}x{} box={} parts={}",
            e.group,
            e.requested_width,
            e.requested_height,
            Boxed(e.bounds),
            e.parts,
        );
    }

    fn on_move(&mut self, e: &MoveEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[move] {} by=({},{}) box={}",
            e.group,
            e.dx,
            e.dy,
            Boxed(e.bounds),
        );
    }

    fn on_restack(&mut self, e: &RestackEvent<'_>) {
        let anchor = match e.anchor {
            Some(id) => format!(" anchor={id}"),
            None => String::new(),
        };
        let _ = writeln!(
            self.writer,
            "[restack] {} {}{anchor} moved={}",
            e.group,
            restack_name(e.kind),
            e.moved,
        );
    }

    fn on_copy(&mut self, e: &CopyEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[copy] {} -> {} parts={}",
            e.source, e.copy, e.parts,
        );
    }

    fn on_rejected(&mut self, e: &RejectedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[rejected] {} {}: {}",
            e.group,
            op_name(e.op),
            e.error,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::error::CompositeError;
    use easel_core::id::ShapeId;

    #[test]
    fn pretty_print_part_added() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_part_added(&PartAddedEvent {
            group: "robot",
            member: ShapeId(7),
            member_bounds: ShapeBox::new(50, 25, 50, 50),
            group_bounds: ShapeBox::new(0, 0, 100, 75),
            grew: true,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[add] robot member=#7"), "got: {output}");
        assert!(output.contains("box=(0,0 100x75) grew"), "got: {output}");
    }

    #[test]
    fn pretty_print_rejected() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_rejected(&RejectedEvent {
            group: "robot",
            op: LayoutOp::Resize,
            error: CompositeError::InvalidDimension {
                width: -1,
                height: 10,
            },
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[rejected] robot resize:"), "got: {output}");
        assert!(output.contains("width=-1"), "got: {output}");
    }

    #[test]
    fn pretty_print_restack_without_anchor() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_restack(&RestackEvent {
            group: "g",
            kind: RestackKind::RaiseToTop,
            anchor: None,
            moved: 3,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[restack] g raise_to_top moved=3\n");
    }
}
