// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds two small scenes on an in-memory display list and prints every
//! layout event, followed by a JSON snapshot of the final display list.
//!
//! ```text
//! cargo run -p robot_demo
//! ```

use easel_core::canvas::Canvas;
use easel_core::color::Color;
use easel_core::composite::{Composite, Item};
use easel_core::error::CompositeError;
use easel_core::shape::Positionable;
use easel_core::surface::DisplayList;
use easel_debug::pretty::PrettyPrintSink;
use easel_debug::snapshot::display_list_json;

fn loose_shapes(canvas: &mut Canvas<'_, DisplayList>) {
    let mut r = canvas.default_rectangle();
    let mut t = canvas.default_triangle();
    r.move_up_by(50);
    t.move_right_by(100);
    canvas.paint(&r);
    canvas.paint(&t);
    canvas.move_down(&mut r);
    println!("{r}\n{t}");
    canvas.erase(&r);
    canvas.erase(&t);
}

fn nested_groups(canvas: &mut Canvas<'_, DisplayList>) -> Result<(), CompositeError> {
    let rect = canvas.default_rectangle();
    let oval = canvas.ellipse(10, 10, 80, 35, Color::BLUE);
    let tri = canvas.default_triangle();
    let mut m1 = Composite::build(
        "m1",
        &[Item::from(&rect), Item::from(&oval), Item::from(&tri)],
        canvas,
    )?;
    for shape in [&rect, &oval, &tri] {
        canvas.erase(shape);
    }

    let mut m2 = Composite::new("m2");
    m2.add_shapes(&[Item::from(&m1)], canvas)?;
    m1.set_size(120, 30, canvas)?;
    m1.set_position(100, 75, canvas)?;
    m2.add_shapes(&[Item::from(&m1)], canvas)?;
    m1.set_size(20, 20, canvas)?;
    m1.set_position(150, 100, canvas)?;
    m2.seal()?;
    println!("{m1}\n{m2}");
    Ok(())
}

fn robot(canvas: &mut Canvas<'_, DisplayList>) -> Result<Composite, CompositeError> {
    let cap = canvas.triangle(100, 25, 50, 25, Color::GREEN);
    let head = canvas.rectangle(100, 50, 50, 50, Color::RED);
    let body = canvas.rectangle(75, 100, 100, 125, Color::CYAN);
    let left_hand = canvas.rectangle(50, 100, 25, 100, Color::STEELY);
    let right_hand = canvas.rectangle(175, 100, 25, 100, Color::STEELY);
    let left_wheel = canvas.ellipse(75, 225, 50, 50, Color::BLACK);
    let right_wheel = canvas.ellipse(125, 225, 50, 50, Color::BLACK);
    let parts = [
        &cap,
        &head,
        &body,
        &left_hand,
        &right_hand,
        &left_wheel,
        &right_wheel,
    ];

    let items: Vec<Item<'_>> = parts.iter().copied().map(Item::from).collect();
    let mut robot = Composite::build("robot", &items, canvas)?;
    for shape in parts {
        canvas.erase(shape);
    }
    robot.move_right_by(200, canvas)?;

    // A negative size is refused and shows up as a rejected event.
    if let Err(e) = robot.set_size(-1, 100, canvas) {
        println!("refused: {e}");
    }

    let mut twin = robot.copy(None, canvas);
    twin.seal()?;
    twin.set_size(75, 125, canvas)?;
    twin.move_down_by(150, canvas)?;
    twin.lower_to_bottom(canvas);
    println!("{robot}\n{twin}");
    Ok(robot)
}

fn main() -> Result<(), CompositeError> {
    let mut sink = PrettyPrintSink::with_writer(std::io::stdout());
    let mut canvas = Canvas::new(DisplayList::new()).with_tracer(&mut sink);

    loose_shapes(&mut canvas);
    nested_groups(&mut canvas)?;
    let robot = robot(&mut canvas)?;
    println!("robot box: {:?}", robot.bounds());

    let list = canvas.into_surface();
    println!("{:#}", display_list_json(&list));
    Ok(())
}
