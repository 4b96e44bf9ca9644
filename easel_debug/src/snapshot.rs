// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-list snapshots.
//!
//! [`display_list_json`] turns a [`DisplayList`] into a JSON array, one
//! object per item, bottom-most first. Handy for golden-file tests and for
//! eyeballing what a layout produced.

use serde_json::{Value, json};

use easel_core::surface::{DisplayList, Drawable, DrawingSurface, Primitive};

/// Serializes every item on `list`, back-to-front.
#[must_use]
pub fn display_list_json(list: &DisplayList) -> Value {
    let items = list
        .draw_order()
        .into_iter()
        .filter_map(|id| {
            list.drawable(id).map(|d| {
                let mut item = drawable_json(d);
                item["id"] = json!(id.0);
                item
            })
        })
        .collect();
    Value::Array(items)
}

fn drawable_json(d: &Drawable) -> Value {
    let color = d.color.to_string();
    match &d.primitive {
        Primitive::Rect(r) => json!({
            "kind": "rect",
            "color": color,
            "x0": r.x0, "y0": r.y0, "x1": r.x1, "y1": r.y1,
        }),
        Primitive::Ellipse(e) => {
            let c = e.center();
            let radii = e.radii();
            json!({
                "kind": "ellipse",
                "color": color,
                "cx": c.x, "cy": c.y, "rx": radii.x, "ry": radii.y,
            })
        }
        Primitive::Polygon(points) => json!({
            "kind": "polygon",
            "color": color,
            "points": points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        }),
        Primitive::Text { origin, text } => json!({
            "kind": "text",
            "color": color,
            "x": origin.x, "y": origin.y,
            "text": text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::canvas::Canvas;
    use easel_core::color::Color;

    #[test]
    fn snapshot_follows_draw_order() {
        let mut canvas = Canvas::new(DisplayList::new());
        let r = canvas.rectangle(0, 0, 100, 50, Color::RED);
        let label = canvas.text(10, 20, "hi");
        canvas.lower_to_bottom(&label);
        let list = canvas.into_surface();

        let snap = display_list_json(&list);
        let items = snap.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["kind"], "text");
        assert_eq!(items[0]["text"], "hi");
        assert_eq!(items[1]["kind"], "rect");
        assert_eq!(items[1]["x1"], 100.0);
        assert_eq!(items[1]["id"], json!(easel_core::shape::Paintable::id(&r).0));
    }

    #[test]
    fn empty_list_is_an_empty_array() {
        assert_eq!(display_list_json(&DisplayList::new()), json!([]));
    }

    #[test]
    fn colors_are_hex() {
        let mut canvas = Canvas::new(DisplayList::new());
        canvas.rectangle(0, 0, 1, 1, Color::rgb(255, 0, 16));
        assert_eq!(display_list_json(canvas.surface())[0]["color"], "#ff0010");
    }
}
