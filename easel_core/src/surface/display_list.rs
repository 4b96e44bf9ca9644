// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory drawing surface.
//!
//! [`DisplayList`] keeps every drawn item in struct-of-arrays slots linked
//! into a back-to-front list. Slots of erased items are recycled through a
//! free list. Mutations mark the matching [`dirty`](crate::dirty) channel;
//! [`take_damage`](DisplayList::take_damage) drains the channels so a real
//! renderer can repaint only what changed.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use super::{Drawable, DrawingSurface};
use crate::dirty;
use crate::id::ShapeId;

/// Sentinel value indicating "no slot" in link fields.
const INVALID: u32 = u32::MAX;

/// The set of changes accumulated since the last [`DisplayList::take_damage`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Damage {
    /// Items whose geometry changed, including newly drawn ones.
    pub geometry: Vec<ShapeId>,
    /// Items whose color changed.
    pub style: Vec<ShapeId>,
    /// Items that moved within the draw order.
    pub restacked: Vec<ShapeId>,
    /// Items drawn for the first time.
    pub added: Vec<ShapeId>,
    /// Items erased.
    pub removed: Vec<ShapeId>,
    /// Whether the draw order changed at all.
    pub order_changed: bool,
}

impl Damage {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.style.clear();
        self.restacked.clear();
        self.added.clear();
        self.removed.clear();
        self.order_changed = false;
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
            && self.style.is_empty()
            && self.restacked.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && !self.order_changed
    }
}

/// A back-to-front list of drawables, usable as a [`DrawingSurface`].
#[derive(Debug)]
pub struct DisplayList {
    // -- Order (back-to-front) --
    pub(crate) next: Vec<u32>,
    pub(crate) prev: Vec<u32>,
    pub(crate) bottom: u32,
    pub(crate) top: u32,

    // -- Content --
    pub(crate) ids: Vec<ShapeId>,
    pub(crate) items: Vec<Option<Drawable>>,
    pub(crate) index: BTreeMap<ShapeId, u32>,

    // -- Allocation --
    pub(crate) free_list: Vec<u32>,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<ShapeId>,
    pub(crate) pending_removed: Vec<ShapeId>,
    pub(crate) order_dirty: bool,
    pub(crate) presents: u64,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    /// Creates an empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Vec::new(),
            prev: Vec::new(),
            bottom: INVALID,
            top: INVALID,
            ids: Vec::new(),
            items: Vec::new(),
            index: BTreeMap::new(),
            free_list: Vec::new(),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
            order_dirty: false,
            presents: 0,
        }
    }

    /// Returns the number of items on the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns whether `id` is currently drawn.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the current drawable of `id`, if drawn.
    #[must_use]
    pub fn drawable(&self, id: ShapeId) -> Option<&Drawable> {
        let slot = *self.index.get(&id)?;
        self.items[slot as usize].as_ref()
    }

    /// Returns how many times [`present`](DrawingSurface::present) was called.
    #[must_use]
    pub fn present_count(&self) -> u64 {
        self.presents
    }

    /// Drains all dirty channels and returns what changed.
    pub fn take_damage(&mut self) -> Damage {
        let mut damage = Damage::default();
        self.take_damage_into(&mut damage);
        damage
    }

    /// Like [`take_damage`](Self::take_damage), but reuses a caller-provided
    /// buffer to avoid allocation.
    pub fn take_damage_into(&mut self, damage: &mut Damage) {
        damage.clear();

        let geometry: Vec<u32> = self
            .dirty
            .drain(dirty::GEOMETRY)
            .deterministic()
            .run()
            .collect();
        damage.geometry.extend(geometry.iter().map(|&s| self.ids[s as usize]));

        let style: Vec<u32> = self
            .dirty
            .drain(dirty::STYLE)
            .deterministic()
            .run()
            .collect();
        damage.style.extend(style.iter().map(|&s| self.ids[s as usize]));

        let restacked: Vec<u32> = self
            .dirty
            .drain(dirty::ORDER)
            .deterministic()
            .run()
            .collect();
        damage
            .restacked
            .extend(restacked.iter().map(|&s| self.ids[s as usize]));

        core::mem::swap(&mut self.pending_added, &mut damage.added);
        core::mem::swap(&mut self.pending_removed, &mut damage.removed);
        damage.order_changed = core::mem::take(&mut self.order_dirty);
    }

    // -- Internal helpers --

    /// Claims a slot for `id`, reusing a freed one when possible.
    fn allocate(&mut self, id: ShapeId, item: Drawable) -> u32 {
        let slot = if let Some(slot) = self.free_list.pop() {
            self.ids[slot as usize] = id;
            self.items[slot as usize] = Some(item);
            self.next[slot as usize] = INVALID;
            self.prev[slot as usize] = INVALID;
            slot
        } else {
            let slot = u32::try_from(self.ids.len())
                .unwrap_or_else(|_| panic!("display list slot space exhausted"));
            self.ids.push(id);
            self.items.push(Some(item));
            self.next.push(INVALID);
            self.prev.push(INVALID);
            slot
        };
        self.index.insert(id, slot);
        slot
    }

    /// Detaches `slot` from the order list.
    fn unlink(&mut self, slot: u32) {
        let prev = self.prev[slot as usize];
        let next = self.next[slot as usize];

        if prev != INVALID {
            self.next[prev as usize] = next;
        } else {
            // Was the bottom item.
            self.bottom = next;
        }

        if next != INVALID {
            self.prev[next as usize] = prev;
        } else {
            // Was the top item.
            self.top = prev;
        }

        self.prev[slot as usize] = INVALID;
        self.next[slot as usize] = INVALID;
    }

    /// Links a detached `slot` directly above `below` (or at the bottom if
    /// `below` is [`INVALID`]).
    fn link_above(&mut self, slot: u32, below: u32) {
        let above = if below == INVALID {
            self.bottom
        } else {
            self.next[below as usize]
        };

        self.prev[slot as usize] = below;
        self.next[slot as usize] = above;

        if below == INVALID {
            self.bottom = slot;
        } else {
            self.next[below as usize] = slot;
        }

        if above == INVALID {
            self.top = slot;
        } else {
            self.prev[above as usize] = slot;
        }
    }

    /// Looks up the slots of two distinct known handles.
    fn slot_pair(&self, id: ShapeId, anchor: ShapeId) -> Option<(u32, u32)> {
        if id == anchor {
            return None;
        }
        Some((*self.index.get(&id)?, *self.index.get(&anchor)?))
    }

    fn mark_restacked(&mut self, slot: u32) {
        self.dirty.mark(slot, dirty::ORDER);
        self.order_dirty = true;
    }
}

impl DrawingSurface for DisplayList {
    fn draw(&mut self, id: ShapeId, item: Drawable) {
        if let Some(&slot) = self.index.get(&id) {
            let current = self.items[slot as usize].as_ref();
            let geometry_changed = current.is_none_or(|c| c.primitive != item.primitive);
            let style_changed = current.is_none_or(|c| c.color != item.color);
            self.items[slot as usize] = Some(item);
            if geometry_changed {
                self.dirty.mark(slot, dirty::GEOMETRY);
            }
            if style_changed {
                self.dirty.mark(slot, dirty::STYLE);
            }
            return;
        }

        let slot = self.allocate(id, item);
        let top = self.top;
        self.link_above(slot, top);
        self.pending_added.push(id);
        self.dirty.mark(slot, dirty::GEOMETRY);
        self.order_dirty = true;
    }

    fn erase(&mut self, id: ShapeId) -> bool {
        let Some(slot) = self.index.remove(&id) else {
            return false;
        };
        self.unlink(slot);
        self.dirty.remove_key(slot);
        self.items[slot as usize] = None;
        self.free_list.push(slot);
        self.pending_removed.push(id);
        self.order_dirty = true;
        true
    }

    fn draw_order(&self) -> Vec<ShapeId> {
        let mut order = Vec::with_capacity(self.index.len());
        let mut slot = self.bottom;
        while slot != INVALID {
            order.push(self.ids[slot as usize]);
            slot = self.next[slot as usize];
        }
        order
    }

    fn raise_above(&mut self, id: ShapeId, anchor: ShapeId) {
        let Some((slot, anchor_slot)) = self.slot_pair(id, anchor) else {
            return;
        };
        self.unlink(slot);
        self.link_above(slot, anchor_slot);
        self.mark_restacked(slot);
    }

    fn lower_below(&mut self, id: ShapeId, anchor: ShapeId) {
        let Some((slot, anchor_slot)) = self.slot_pair(id, anchor) else {
            return;
        };
        self.unlink(slot);
        let below = self.prev[anchor_slot as usize];
        self.link_above(slot, below);
        self.mark_restacked(slot);
    }

    fn raise_to_top(&mut self, id: ShapeId) {
        let Some(&slot) = self.index.get(&id) else {
            return;
        };
        if slot == self.top {
            return;
        }
        self.unlink(slot);
        let top = self.top;
        self.link_above(slot, top);
        self.mark_restacked(slot);
    }

    fn lower_to_bottom(&mut self, id: ShapeId) {
        let Some(&slot) = self.index.get(&id) else {
            return;
        };
        if slot == self.bottom {
            return;
        }
        self.unlink(slot);
        self.link_above(slot, INVALID);
        self.mark_restacked(slot);
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}
