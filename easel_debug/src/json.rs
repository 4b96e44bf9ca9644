// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON Lines trace output.
//!
//! [`JsonLinesSink`] writes one JSON object per event, each on its own line,
//! so logs can be filtered with line-oriented tools or loaded as a table.
//! Every object carries an `"event"` key naming the event kind.

use std::io::Write;

use serde_json::{Value, json};

use easel_core::geom::ShapeBox;
use easel_core::trace::{
    CopyEvent, MoveEvent, PartAddedEvent, RejectedEvent, ResizeEvent, RestackEvent, TraceSink,
};

use crate::pretty::{op_name, restack_name};

/// Writes one JSON object per trace event.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

pub(crate) fn box_json(b: ShapeBox) -> Value {
    json!({ "x": b.x, "y": b.y, "width": b.width, "height": b.height })
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_part_added(&mut self, e: &PartAddedEvent<'_>) {
        self.emit(&json!({
            "event": "part_added",
            "group": e.group,
            "member": e.member.0,
            "member_bounds": box_json(e.member_bounds),
            "group_bounds": box_json(e.group_bounds),
            "grew": e.grew,
        }));
    }

    fn on_resize(&mut self, e: &ResizeEvent<'_>) {
        self.emit(&json!({
            "event": "resize",
            "group": e.group,
            "requested": [e.requested_width, e.requested_height],
            "bounds": box_json(e.bounds),
            "parts": e.parts,
        }));
    }

    fn on_move(&mut self, e: &MoveEvent<'_>) {
        self.emit(&json!({
            "event": "move",
            "group": e.group,
            "dx": e.dx,
            "dy": e.dy,
            "bounds": box_json(e.bounds),
        }));
    }

    fn on_restack(&mut self, e: &RestackEvent<'_>) {
        self.emit(&json!({
            "event": "restack",
            "group": e.group,
            "kind": restack_name(e.kind),
            "anchor": e.anchor.map(|id| id.0),
            "moved": e.moved,
        }));
    }

    fn on_copy(&mut self, e: &CopyEvent<'_>) {
        self.emit(&json!({
            "event": "copy",
            "source": e.source,
            "copy": e.copy,
            "parts": e.parts,
        }));
    }

    fn on_rejected(&mut self, e: &RejectedEvent<'_>) {
        self.emit(&json!({
            "event": "rejected",
            "group": e.group,
            "op": op_name(e.op),
            "error": e.error.to_string(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::canvas::Canvas;
    use easel_core::color::Color;
    use easel_core::composite::{Composite, Item};
    use easel_core::surface::DisplayList;

    fn lines(bytes: Vec<u8>) -> Vec<Value> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn records_a_layout_session() {
        let mut sink = JsonLinesSink::new(Vec::<u8>::new());
        {
            let mut canvas = Canvas::new(DisplayList::new()).with_tracer(&mut sink);
            let r = canvas.rectangle(0, 0, 100, 50, Color::RED);
            let e = canvas.ellipse(50, 25, 50, 50, Color::BLUE);
            let mut c =
                Composite::build("pair", &[Item::from(&r), Item::from(&e)], &mut canvas).unwrap();
            c.set_size(50, 150, &mut canvas).unwrap();
            assert!(c.set_size(-1, 0, &mut canvas).is_err());
        }
        let events = lines(sink.into_inner());
        let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["part_added", "part_added", "resize", "rejected"]);
        assert_eq!(events[1]["grew"], true);
        assert_eq!(events[1]["group_bounds"]["height"], 75);
        assert_eq!(events[2]["bounds"]["height"], 150);
        assert_eq!(events[3]["op"], "resize");
    }

    #[test]
    fn restack_anchor_is_null_when_absent() {
        let mut sink = JsonLinesSink::new(Vec::<u8>::new());
        sink.on_restack(&RestackEvent {
            group: "g",
            kind: easel_core::trace::RestackKind::LowerToBottom,
            anchor: None,
            moved: 1,
        });
        let events = lines(sink.into_inner());
        assert!(events[0]["anchor"].is_null());
        assert_eq!(events[0]["kind"], "lower_to_bottom");
    }
}
