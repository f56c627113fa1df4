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
//! The scene and its tick protocol

use std::collections::HashSet;

use super::{ForceCreator, SceneConfig};
use crate::body::{BodyHandle, BodySet, RigidBody};
use crate::math::Vector2;

struct ForceEntry<I> {
    creator: Box<dyn ForceCreator<I>>,
    /// `None` for creators that are never collected
    dependents: Option<Vec<BodyHandle>>,
}

impl<I> ForceEntry<I> {
    fn depends_on_removed(&self, bodies: &BodySet<I>) -> bool {
        self.dependents
            .as_ref()
            .map_or(false, |handles| handles.iter().any(|&h| bodies.is_removed(h)))
    }
}

type CameraOffset<I> = Box<dyn FnMut(&RigidBody<I>) -> Vector2>;
type CameraMover<I> = Box<dyn FnMut(Vector2, &RigidBody<I>) -> Vector2>;

struct CameraManagement<I> {
    offset: CameraOffset<I>,
    mover: CameraMover<I>,
}

/// A collection of bodies and the force creators that act on them
///
/// The scene exclusively owns its bodies and force creators. Each
/// [`tick`](Scene::tick) runs four phases in order:
///
/// 1. every force creator is applied, in registration order
/// 2. force creators that depend on a removed body are dropped
/// 3. every body is integrated, and bodies marked removed are dropped
/// 4. if a focal body is set, the camera moves every body
///
/// Bodies are addressed by [`BodyHandle`], or by index in insertion order.
/// Indices shift down when an earlier body is reaped; handles do not, and a
/// handle to a reaped body stays detectably stale.
pub struct Scene<I = ()> {
    bodies: BodySet<I>,
    forces: Vec<ForceEntry<I>>,
    camera: Option<CameraManagement<I>>,
    focal_body: Option<BodyHandle>,
    /// Bodies already warned about for non-finite forces
    non_finite_reported: HashSet<BodyHandle>,
    config: SceneConfig,
}

impl<I> Scene<I> {
    /// Create an empty scene with the default configuration
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create an empty scene with a custom configuration
    pub fn with_config(config: SceneConfig) -> Self {
        Scene {
            bodies: BodySet::with_capacity(config.body_capacity),
            forces: Vec::with_capacity(config.force_capacity),
            camera: None,
            focal_body: None,
            non_finite_reported: HashSet::new(),
            config,
        }
    }

    /// Get the scene's configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Take ownership of a body and return its handle
    pub fn add_body(&mut self, body: RigidBody<I>) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Get a body by handle, or `None` if it has been reaped
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody<I>> {
        self.bodies.get(handle)
    }

    /// Get a body mutably by handle, or `None` if it has been reaped
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody<I>> {
        self.bodies.get_mut(handle)
    }

    /// Handle of the body at `index` in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `index >= body_count()`.
    pub fn handle_at(&self, index: usize) -> BodyHandle {
        match self.bodies.handle_at(index) {
            Some(handle) => handle,
            None => panic!("Body index out of range"),
        }
    }

    /// Get the body at `index` in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `index >= body_count()`.
    pub fn get_body(&self, index: usize) -> &RigidBody<I> {
        let handle = self.handle_at(index);
        match self.bodies.get(handle) {
            Some(body) => body,
            None => panic!("Body index out of range"),
        }
    }

    /// Get the body at `index` in insertion order, mutably
    ///
    /// # Panics
    ///
    /// Panics if `index >= body_count()`.
    pub fn get_body_mut(&mut self, index: usize) -> &mut RigidBody<I> {
        let handle = self.handle_at(index);
        match self.bodies.get_mut(handle) {
            Some(body) => body,
            None => panic!("Body index out of range"),
        }
    }

    /// Number of bodies, including those marked removed but not yet reaped
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of registered force creators
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// All bodies in the scene
    pub fn bodies(&self) -> &BodySet<I> {
        &self.bodies
    }

    /// All bodies in the scene, mutably
    pub fn bodies_mut(&mut self) -> &mut BodySet<I> {
        &mut self.bodies
    }

    /// Mark the body at `index` for removal
    ///
    /// # Panics
    ///
    /// Panics if `index >= body_count()`.
    #[deprecated(note = "call `remove()` on the body instead")]
    pub fn remove_body(&mut self, index: usize) {
        self.get_body_mut(index).remove();
    }

    /// Mark every body for removal; they are reaped on the next tick
    pub fn remove_all(&mut self) {
        self.bodies.for_each_mut(|_, body| body.remove());
    }

    /// Register a force creator that is never collected
    pub fn add_force_creator<F>(&mut self, creator: F)
    where
        F: ForceCreator<I> + 'static,
    {
        self.forces.push(ForceEntry {
            creator: Box::new(creator),
            dependents: None,
        });
    }

    /// Register a force creator that is collected once any of `dependents` is removed
    pub fn add_bodies_force_creator<F>(&mut self, creator: F, dependents: Vec<BodyHandle>)
    where
        F: ForceCreator<I> + 'static,
    {
        self.forces.push(ForceEntry {
            creator: Box::new(creator),
            dependents: Some(dependents),
        });
    }

    /// Install the camera callbacks
    ///
    /// `offset` computes the camera movement from the focal body, and
    /// `mover` turns that offset into a per-body movement. Replaces any
    /// previously installed callbacks.
    pub fn add_camera_management<O, M>(&mut self, offset: O, mover: M)
    where
        O: FnMut(&RigidBody<I>) -> Vector2 + 'static,
        M: FnMut(Vector2, &RigidBody<I>) -> Vector2 + 'static,
    {
        self.camera = Some(CameraManagement {
            offset: Box::new(offset),
            mover: Box::new(mover),
        });
    }

    /// Set or clear the body the camera tracks
    pub fn set_focal_body(&mut self, focal_body: Option<BodyHandle>) {
        self.focal_body = focal_body;
    }

    /// The body the camera tracks, if any
    pub fn focal_body(&self) -> Option<BodyHandle> {
        self.focal_body
    }

    /// Advance the scene by `dt` seconds
    ///
    /// # Panics
    ///
    /// Panics if `dt` is negative or not finite.
    pub fn tick(&mut self, dt: f64) {
        assert!(
            dt >= 0.0 && dt.is_finite(),
            "Timestep must be non-negative and finite"
        );
        self.apply_forces();
        self.collect_forces();
        self.integrate_and_reap(dt);
        self.move_camera();
    }

    fn apply_forces(&mut self) {
        for entry in self.forces.iter_mut() {
            entry.creator.apply(&mut self.bodies);
        }
        if self.config.warn_on_non_finite {
            // Warn once per body until its accumulators are finite again
            for (handle, body) in self.bodies.iter() {
                if body.net_force().is_finite() && body.net_impulse().is_finite() {
                    self.non_finite_reported.remove(&handle);
                } else if self.non_finite_reported.insert(handle) {
                    log::warn!(
                        "Non-finite force {} or impulse {} accumulated on {}",
                        body.net_force(),
                        body.net_impulse(),
                        handle
                    );
                }
            }
        }
    }

    fn collect_forces(&mut self) {
        let bodies = &self.bodies;
        let log_cleanup = self.config.log_cleanup;
        let before = self.forces.len();
        self.forces.retain(|entry| {
            let collect = entry.depends_on_removed(bodies);
            if collect && log_cleanup {
                log::debug!("Collecting force creator {}", entry.creator.name());
            }
            !collect
        });
        let collected = before - self.forces.len();
        if log_cleanup && collected > 0 {
            log::debug!("Collected {} force creator(s)", collected);
        }
    }

    fn integrate_and_reap(&mut self, dt: f64) {
        let reaped = self.bodies.tick_and_reap(dt);
        if reaped.is_empty() {
            return;
        }
        if self.config.log_cleanup {
            log::debug!("Reaped {} body(ies)", reaped.len());
        }
        for handle in &reaped {
            self.non_finite_reported.remove(handle);
        }
        if let Some(focal) = self.focal_body {
            if reaped.contains(&focal) {
                log::warn!("Focal body {} was removed; camera tracking stopped", focal);
                self.focal_body = None;
            }
        }
    }

    fn move_camera(&mut self) {
        let (Some(focal), Some(camera)) = (self.focal_body, self.camera.as_mut()) else {
            return;
        };
        let Some(focal_body) = self.bodies.get(focal) else {
            log::trace!("Focal body {} is stale; skipping camera", focal);
            return;
        };
        let offset = (camera.offset)(focal_body);
        self.bodies.for_each_mut(|_, body| {
            let movement = (camera.mover)(offset, body);
            body.adjust_for_camera(movement);
        });
    }
}

impl<I> Default for Scene<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{CameraMode, Color};
    use crate::geometry::Polygon;
    use crate::scene::follow_camera_mover;
    use std::cell::Cell;
    use std::rc::Rc;

    fn square_at(center: Vector2) -> RigidBody {
        let shape = Polygon::new(vec![
            center + Vector2::new(-1.0, -1.0),
            center + Vector2::new(1.0, -1.0),
            center + Vector2::new(1.0, 1.0),
            center + Vector2::new(-1.0, 1.0),
        ])
        .unwrap();
        RigidBody::new(shape, 1.0, Color::BLACK)
    }

    #[test]
    fn test_scene_creation() {
        let scene: Scene = Scene::new();
        assert_eq!(scene.body_count(), 0);
        assert_eq!(scene.force_count(), 0);
        assert!(scene.focal_body().is_none());
        assert_eq!(scene.config().body_capacity, 32);
    }

    #[test]
    fn test_index_access() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_at(Vector2::ZERO));
        let b = scene.add_body(square_at(Vector2::new(5.0, 0.0)));
        assert_eq!(scene.handle_at(0), a);
        assert_eq!(scene.handle_at(1), b);
        assert!(scene.get_body(1).centroid().approx_eq(Vector2::new(5.0, 0.0), 1e-12));
    }

    #[test]
    #[should_panic(expected = "Body index out of range")]
    fn test_get_body_out_of_range() {
        let scene: Scene = Scene::new();
        scene.get_body(0);
    }

    #[test]
    #[should_panic(expected = "Timestep must be non-negative and finite")]
    fn test_negative_timestep() {
        let mut scene: Scene = Scene::new();
        scene.tick(-1.0);
    }

    #[test]
    fn test_force_phase_precedes_integration() {
        let mut scene = Scene::new();
        let handle = scene.add_body(square_at(Vector2::ZERO));
        scene.add_force_creator(move |bodies: &mut BodySet| {
            if let Some(body) = bodies.get_mut(handle) {
                body.add_impulse(Vector2::new(2.0, 0.0));
            }
        });
        scene.tick(1.0);
        let body = scene.body(handle).unwrap();
        assert_eq!(body.velocity(), Vector2::new(2.0, 0.0));
        assert!(body.centroid().approx_eq(Vector2::new(1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_creator_without_dependents_survives() {
        let mut scene = Scene::new();
        let handle = scene.add_body(square_at(Vector2::ZERO));
        scene.add_force_creator(|_: &mut BodySet| {});
        scene.body_mut(handle).unwrap().remove();
        scene.tick(0.1);
        assert_eq!(scene.body_count(), 0);
        assert_eq!(scene.force_count(), 1);
    }

    #[test]
    fn test_dependent_creator_runs_once_more_then_collected() {
        let calls = Rc::new(Cell::new(0));
        let mut scene = Scene::new();
        let handle = scene.add_body(square_at(Vector2::ZERO));
        let counter = Rc::clone(&calls);
        scene.add_bodies_force_creator(
            move |bodies: &mut BodySet| {
                counter.set(counter.get() + 1);
                if let Some(body) = bodies.get_mut(handle) {
                    body.remove();
                }
            },
            vec![handle],
        );

        scene.tick(0.1);
        assert_eq!(calls.get(), 1);
        assert_eq!(scene.force_count(), 0);
        assert_eq!(scene.body_count(), 0);

        scene.tick(0.1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_remove_all() {
        let mut scene = Scene::new();
        for i in 0..4 {
            scene.add_body(square_at(Vector2::new(i as f64 * 3.0, 0.0)));
        }
        scene.remove_all();
        assert_eq!(scene.body_count(), 4);
        scene.tick(0.0);
        assert_eq!(scene.body_count(), 0);
    }

    #[test]
    #[allow(deprecated)]
    fn test_remove_body_by_index() {
        let mut scene = Scene::new();
        scene.add_body(square_at(Vector2::ZERO));
        let keep = scene.add_body(square_at(Vector2::new(5.0, 0.0)));
        scene.remove_body(0);
        assert!(scene.get_body(0).is_removed());
        scene.tick(0.0);
        assert_eq!(scene.body_count(), 1);
        assert_eq!(scene.handle_at(0), keep);
    }

    #[test]
    fn test_camera_moves_following_bodies() {
        let mut scene = Scene::new();
        let focal = scene.add_body(square_at(Vector2::new(10.0, 0.0)));
        let mut follower = square_at(Vector2::new(0.0, 5.0));
        follower.set_camera_mode(CameraMode::Follow);
        let follower = scene.add_body(follower);

        scene.add_camera_management(|body: &RigidBody| -body.centroid(), follow_camera_mover);
        scene.set_focal_body(Some(focal));
        scene.tick(0.0);

        // Locked focal body stays, the follower shifts by the offset
        assert!(scene.body(focal).unwrap().centroid().approx_eq(Vector2::new(10.0, 0.0), 1e-12));
        assert!(scene
            .body(follower)
            .unwrap()
            .centroid()
            .approx_eq(Vector2::new(-10.0, 5.0), 1e-12));
    }

    #[test]
    fn test_focal_body_cleared_when_reaped() {
        let mut scene = Scene::new();
        let focal = scene.add_body(square_at(Vector2::ZERO));
        scene.add_camera_management(|body: &RigidBody| body.centroid(), follow_camera_mover);
        scene.set_focal_body(Some(focal));
        scene.body_mut(focal).unwrap().remove();
        scene.tick(0.1);
        assert!(scene.focal_body().is_none());
    }

    #[test]
    fn test_non_finite_warning_once_per_body() {
        let mut scene = Scene::new();
        let handle = scene.add_body(square_at(Vector2::ZERO));
        let poison = Rc::new(Cell::new(true));
        let flag = Rc::clone(&poison);
        scene.add_force_creator(move |bodies: &mut BodySet| {
            if flag.get() {
                if let Some(body) = bodies.get_mut(handle) {
                    body.add_force(Vector2::new(f64::NAN, 0.0));
                }
            }
        });

        scene.tick(0.1);
        assert!(scene.non_finite_reported.contains(&handle));
        scene.tick(0.1);
        assert_eq!(scene.non_finite_reported.len(), 1);

        // Re-armed once the force is finite again
        poison.set(false);
        scene.tick(0.1);
        assert!(scene.non_finite_reported.is_empty());

        poison.set(true);
        scene.tick(0.1);
        scene.body_mut(handle).unwrap().remove();
        scene.tick(0.1);
        assert!(scene.non_finite_reported.is_empty());
    }
}
