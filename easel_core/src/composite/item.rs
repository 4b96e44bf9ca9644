// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::CompositeError;
use crate::id::IdGenerator;
use crate::shape::{Copyable, Shape};

use super::{Composite, Member};

/// Something that can be added to a composite in bulk.
///
/// Items nest freely; a composite contributes copies of its members, never
/// itself.
#[derive(Clone, Debug)]
pub enum Item<'a> {
    /// A single shape.
    Shape(&'a Shape),
    /// Every member of another composite.
    Composite(&'a Composite),
    /// A nested collection.
    Group(Vec<Item<'a>>),
}

impl<'a> From<&'a Shape> for Item<'a> {
    fn from(shape: &'a Shape) -> Self {
        Self::Shape(shape)
    }
}

impl<'a> From<&'a Composite> for Item<'a> {
    fn from(composite: &'a Composite) -> Self {
        Self::Composite(composite)
    }
}

impl<'a> From<Vec<Item<'a>>> for Item<'a> {
    fn from(items: Vec<Item<'a>>) -> Self {
        Self::Group(items)
    }
}

/// A flattened, not yet copied, member source.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Source<'a> {
    Shape(&'a Shape),
    Member(&'a Member),
}

impl Source<'_> {
    pub(crate) fn copy(self, ids: &mut IdGenerator) -> Result<Member, CompositeError> {
        match self {
            Self::Shape(shape) => Member::copy_from(shape, ids),
            Self::Member(member) => Ok(member.copy(ids)),
        }
    }
}

/// Flattens `items` depth-first and checks every leaf.
///
/// Nothing is copied, so a refusal leaves no trace.
pub(crate) fn flatten<'a>(items: &[Item<'a>]) -> Result<Vec<Source<'a>>, CompositeError> {
    let mut out = Vec::new();
    flatten_into(items, &mut out)?;
    Ok(out)
}

fn flatten_into<'a>(items: &[Item<'a>], out: &mut Vec<Source<'a>>) -> Result<(), CompositeError> {
    for item in items {
        match item {
            Item::Shape(shape) => {
                Member::check(shape)?;
                out.push(Source::Shape(*shape));
            }
            Item::Composite(composite) => out.extend(composite.members().map(Source::Member)),
            Item::Group(nested) => flatten_into(nested, out)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::color::Color;
    use crate::geom::ShapeBox;
    use crate::shape::{Paintable, Rectangle, Text};

    fn rect(ids: &mut IdGenerator, x: i32) -> Shape {
        Rectangle::new(ids, ShapeBox::new(x, 0, 10, 10), Color::RED).into()
    }

    #[test]
    fn nested_groups_flatten_in_order() {
        let mut ids = IdGenerator::new();
        let a = rect(&mut ids, 0);
        let b = rect(&mut ids, 10);
        let c = rect(&mut ids, 20);
        let items = [
            Item::from(&a),
            Item::Group(vec![Item::Group(vec![Item::from(&b)]), Item::from(&c)]),
        ];
        let ids_in_order: Vec<_> = flatten(&items)
            .unwrap()
            .into_iter()
            .map(|s| match s {
                Source::Shape(s) => s.id(),
                Source::Member(m) => m.id(),
            })
            .collect();
        assert_eq!(ids_in_order, vec![a.id(), b.id(), c.id()]);
    }

    #[test]
    fn text_anywhere_refuses_everything() {
        let mut ids = IdGenerator::new();
        let a = rect(&mut ids, 0);
        let label: Shape = Text::new(&mut ids, 0, 0, "x").into();
        let items = [Item::from(&a), Item::Group(vec![Item::from(&label)])];
        assert_eq!(
            flatten(&items).unwrap_err(),
            CompositeError::InvalidMember { kind: "text" }
        );
    }
}
