// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Body arena
//!
//! The `BodySet` owns every body of a scene. Bodies live in slots indexed
//! by their handle; a slot's generation is bumped when its body is dropped,
//! which invalidates outstanding handles. A separate list keeps insertion
//! order, which is the order bodies are ticked and indexed in.

use super::{BodyHandle, RigidBody};

struct Slot<I> {
    generation: u32,
    body: Option<RigidBody<I>>,
}

/// Owning storage for bodies with generational handles
pub struct BodySet<I = ()> {
    slots: Vec<Slot<I>>,
    free_slots: Vec<u32>,
    order: Vec<BodyHandle>,
}

impl<I> BodySet<I> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty set with room for `capacity` bodies
    pub fn with_capacity(capacity: usize) -> Self {
        BodySet {
            slots: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of a body and return its handle
    pub fn insert(&mut self, body: RigidBody<I>) -> BodyHandle {
        let handle = match self.free_slots.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.body = Some(body);
                BodyHandle::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    body: Some(body),
                });
                BodyHandle::new(index, 0)
            }
        };
        self.order.push(handle);
        handle
    }

    fn slot(&self, handle: BodyHandle) -> Option<&Slot<I>> {
        self.slots
            .get(handle.slot() as usize)
            .filter(|slot| slot.generation == handle.generation())
    }

    /// Check if a handle still refers to a body in this set
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.slot(handle).map_or(false, |slot| slot.body.is_some())
    }

    /// Get a body, or `None` if the handle is stale
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody<I>> {
        self.slot(handle).and_then(|slot| slot.body.as_ref())
    }

    /// Get a body mutably, or `None` if the handle is stale
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody<I>> {
        self.slots
            .get_mut(handle.slot() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.body.as_mut())
    }

    /// Borrow two distinct bodies mutably at once
    ///
    /// Returns `None` if either handle is stale or both name the same body.
    pub fn get_pair_mut(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Option<(&mut RigidBody<I>, &mut RigidBody<I>)> {
        if a.slot() == b.slot() || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (i, j) = (a.slot() as usize, b.slot() as usize);
        let (first, second) = if i < j {
            let (low, high) = self.slots.split_at_mut(j);
            (&mut low[i], &mut high[0])
        } else {
            let (low, high) = self.slots.split_at_mut(i);
            (&mut high[0], &mut low[j])
        };
        Some((first.body.as_mut()?, second.body.as_mut()?))
    }

    /// Whether the body is marked for removal
    ///
    /// Stale handles count as removed: their body is already gone.
    pub fn is_removed(&self, handle: BodyHandle) -> bool {
        self.get(handle).map_or(true, RigidBody::is_removed)
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set holds no bodies
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle of the body at `index` in insertion order
    pub fn handle_at(&self, index: usize) -> Option<BodyHandle> {
        self.order.get(index).copied()
    }

    /// Handles in insertion order
    pub fn handles(&self) -> &[BodyHandle] {
        &self.order
    }

    /// Iterate bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody<I>)> + '_ {
        self.order
            .iter()
            .filter_map(move |&handle| self.get(handle).map(|body| (handle, body)))
    }

    /// Iterate bodies mutably in insertion order
    ///
    /// Builds a per-slot table of borrows on each call. Per-tick loops
    /// should use [`for_each_mut`](Self::for_each_mut).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut RigidBody<I>)> + '_ {
        let mut by_slot: Vec<Option<&mut RigidBody<I>>> =
            self.slots.iter_mut().map(|slot| slot.body.as_mut()).collect();
        self.order.iter().filter_map(move |&handle| {
            by_slot[handle.slot() as usize]
                .take()
                .map(|body| (handle, body))
        })
    }

    /// Call `f` on every body in insertion order
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(BodyHandle, &mut RigidBody<I>),
    {
        for &handle in &self.order {
            let body = self
                .slots
                .get_mut(handle.slot() as usize)
                .filter(|slot| slot.generation == handle.generation())
                .and_then(|slot| slot.body.as_mut());
            if let Some(body) = body {
                f(handle, body);
            }
        }
    }

    /// Drop the body behind `handle` and invalidate the handle
    fn release(&mut self, handle: BodyHandle) -> Option<RigidBody<I>> {
        let slot = self
            .slots
            .get_mut(handle.slot() as usize)
            .filter(|slot| slot.generation == handle.generation())?;
        let body = slot.body.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(handle.slot());
        Some(body)
    }

    /// Tick every body in insertion order and reap the removed ones
    ///
    /// A body is ticked even on the frame it is reaped. Returns the handles
    /// of the reaped bodies in the order they were dropped.
    pub(crate) fn tick_and_reap(&mut self, dt: f64) -> Vec<BodyHandle> {
        let mut reaped = Vec::new();
        let mut index = 0;
        while index < self.order.len() {
            let handle = self.order[index];
            let removed = match self.get_mut(handle) {
                Some(body) => {
                    body.tick(dt);
                    body.is_removed()
                }
                None => true,
            };
            if removed {
                // Stay on this index: the next body shifts into it
                self.order.remove(index);
                drop(self.release(handle));
                reaped.push(handle);
            } else {
                index += 1;
            }
        }
        reaped
    }
}

impl<I> Default for BodySet<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Color;
    use crate::geometry::Polygon;
    use crate::math::Vector2;

    fn body_at(x: f64) -> RigidBody<u32> {
        let shape = Polygon::new(vec![
            Vector2::new(x - 1.0, -1.0),
            Vector2::new(x + 1.0, -1.0),
            Vector2::new(x + 1.0, 1.0),
            Vector2::new(x - 1.0, 1.0),
        ])
        .unwrap();
        RigidBody::new(shape, 1.0, Color::BLACK)
    }

    #[test]
    fn test_insertion_order() {
        let mut set = BodySet::new();
        let a = set.insert(body_at(0.0));
        let b = set.insert(body_at(10.0));
        assert_eq!(set.handle_at(0), Some(a));
        assert_eq!(set.handle_at(1), Some(b));
        assert_eq!(set.handle_at(2), None);
    }

    #[test]
    fn test_reap_invalidates_handle() {
        let mut set = BodySet::new();
        let a = set.insert(body_at(0.0));
        let b = set.insert(body_at(10.0));
        set.get_mut(a).unwrap().remove();

        let reaped = set.tick_and_reap(0.1);
        assert_eq!(reaped, vec![a]);
        assert_eq!(set.len(), 1);
        assert!(!set.contains(a));
        assert!(set.get(a).is_none());
        assert!(set.is_removed(a));
        assert_eq!(set.handle_at(0), Some(b));
    }

    #[test]
    fn test_slot_reuse_bumps_generation() {
        let mut set = BodySet::new();
        let a = set.insert(body_at(0.0));
        set.get_mut(a).unwrap().remove();
        set.tick_and_reap(0.1);

        let c = set.insert(body_at(5.0));
        assert_eq!(c.slot(), a.slot());
        assert_ne!(c.generation(), a.generation());
        assert!(set.get(a).is_none());
        assert!(set.get(c).is_some());
    }

    #[test]
    fn test_consecutive_removals_are_not_skipped() {
        let mut set = BodySet::new();
        let handles: Vec<_> = (0..5).map(|i| set.insert(body_at(i as f64 * 3.0))).collect();
        set.get_mut(handles[1]).unwrap().remove();
        set.get_mut(handles[2]).unwrap().remove();
        set.get_mut(handles[4]).unwrap().remove();

        let reaped = set.tick_and_reap(0.1);
        assert_eq!(reaped, vec![handles[1], handles[2], handles[4]]);
        assert_eq!(set.handles(), &[handles[0], handles[3]]);
    }

    #[test]
    fn test_get_pair_mut() {
        let mut set = BodySet::new();
        let a = set.insert(body_at(0.0));
        let b = set.insert(body_at(10.0));

        let (first, second) = set.get_pair_mut(b, a).unwrap();
        first.add_force(Vector2::new(1.0, 0.0));
        second.add_force(Vector2::new(-1.0, 0.0));
        assert_eq!(set.get(b).unwrap().net_force(), Vector2::new(1.0, 0.0));
        assert_eq!(set.get(a).unwrap().net_force(), Vector2::new(-1.0, 0.0));

        assert!(set.get_pair_mut(a, a).is_none());
    }

    #[test]
    fn test_iter_mut_follows_insertion_order() {
        let mut set = BodySet::new();
        let a = set.insert(body_at(0.0));
        let b = set.insert(body_at(10.0));
        set.get_mut(a).unwrap().remove();
        set.tick_and_reap(0.0);
        // Reuses the first slot but comes last in order
        let c = set.insert(body_at(20.0));

        let visited: Vec<_> = set.iter_mut().map(|(handle, _)| handle).collect();
        assert_eq!(visited, vec![b, c]);
    }

    #[test]
    fn test_for_each_mut_follows_insertion_order() {
        let mut set = BodySet::new();
        let a = set.insert(body_at(0.0));
        let b = set.insert(body_at(10.0));
        set.get_mut(a).unwrap().remove();
        set.tick_and_reap(0.0);
        let c = set.insert(body_at(20.0));

        let mut visited = Vec::new();
        set.for_each_mut(|handle, body| {
            body.add_force(Vector2::new(1.0, 0.0));
            visited.push(handle);
        });
        assert_eq!(visited, vec![b, c]);
        assert_eq!(set.get(c).unwrap().net_force(), Vector2::new(1.0, 0.0));
    }
}
