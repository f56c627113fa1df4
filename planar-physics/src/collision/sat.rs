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
//! Separating Axis Theorem
//!
//! Two convex polygons are disjoint exactly when some edge normal of one of
//! them separates their projections. Each edge of each shape contributes a
//! candidate axis; both shapes' vertices are projected onto it and the two
//! scalar ranges compared.
//!
//! When every axis of both shapes shows overlap, the axis with the smallest
//! overlap is reported. That axis is the direction of least penetration
//! (the minimum translation vector heuristic) and is what collision
//! responses push along.
//!
//! # Contact
//!
//! Range tests are inclusive, so shapes that exactly touch along an edge
//! or at a vertex are reported as colliding.
//!
//! # Non-convex shapes
//!
//! The test runs on any vertex list but is only exact for convex shapes;
//! for concave shapes it can report overlap inside a concavity.
//!
//! # Repeated vertices
//!
//! Consecutive duplicate vertices form zero-length edges. They contribute
//! no axis, so a closed vertex list that repeats its first vertex at the end
//! behaves like the open one.

use crate::geometry::Polygon;
use crate::math::Vector2;

/// Result of a collision query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Whether the shapes overlap (touching counts)
    pub collided: bool,
    /// Edge normal of the resolving axis when `collided`, otherwise the
    /// first separating axis found. Not normalized.
    pub axis: Vector2,
    /// Overlap length along `axis`; 0.0 when not collided
    pub overlap: f64,
}

impl CollisionInfo {
    fn separated(axis: Vector2) -> Self {
        CollisionInfo {
            collided: false,
            axis,
            overlap: 0.0,
        }
    }
}

/// Closed scalar interval of projections
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn contains(&self, point: f64) -> bool {
        self.min <= point && point <= self.max
    }

    /// Either endpoint of `self` lies inside `other`
    fn reaches_into(&self, other: &Range) -> bool {
        other.contains(self.min) || other.contains(self.max)
    }

    /// Checked in both directions so that a range fully containing the
    /// other still counts
    fn intersects(&self, other: &Range) -> bool {
        self.reaches_into(other) || other.reaches_into(self)
    }

    fn overlap(&self, other: &Range) -> f64 {
        if !self.intersects(other) {
            return 0.0;
        }
        (self.max.min(other.max) - self.min.max(other.min)).abs()
    }
}

/// Outcome of testing a single axis
#[derive(Debug, Clone, Copy)]
struct AxisTest {
    axis: Vector2,
    intersects: bool,
    overlap: f64,
}

/// Length of the projection of `vertex` onto `axis`, negative when the
/// projection points away from `axis`
fn signed_projection(axis: Vector2, vertex: Vector2) -> f64 {
    vertex.dot(axis) / axis.magnitude()
}

fn projection_range(polygon: &Polygon, axis: Vector2) -> Range {
    let mut projections = polygon.vertices().iter().map(|&v| signed_projection(axis, v));
    // Validated polygons always have vertices
    let first = projections.next().unwrap_or(0.0);
    projections.fold(Range { min: first, max: first }, |range, p| Range {
        min: range.min.min(p),
        max: range.max.max(p),
    })
}

fn test_axis(shape_a: &Polygon, shape_b: &Polygon, edge: (Vector2, Vector2)) -> AxisTest {
    let axis = (edge.0 - edge.1).perpendicular();
    let range_a = projection_range(shape_a, axis);
    let range_b = projection_range(shape_b, axis);
    AxisTest {
        axis,
        intersects: range_a.intersects(&range_b),
        overlap: range_a.overlap(&range_b),
    }
}

/// Keeps the incumbent only when it is strictly smaller, so ties go to the
/// challenger
fn smaller_overlap(incumbent: AxisTest, challenger: AxisTest) -> AxisTest {
    if incumbent.overlap < challenger.overlap {
        incumbent
    } else {
        challenger
    }
}

/// Scan the edge normals of `shape_a`
///
/// Returns the first separating axis, or the minimum-overlap axis if none
/// separates. Zero-length edges (repeated vertices) have no normal and are
/// skipped.
fn scan_axes(shape_a: &Polygon, shape_b: &Polygon) -> AxisTest {
    let mut best: Option<AxisTest> = None;
    for edge in shape_a.edges().filter(|(start, end)| start != end) {
        let test = test_axis(shape_a, shape_b, edge);
        if !test.intersects {
            return test;
        }
        best = Some(match best {
            None => test,
            Some(incumbent) => smaller_overlap(incumbent, test),
        });
    }
    best.unwrap_or(AxisTest {
        axis: Vector2::ZERO,
        intersects: false,
        overlap: 0.0,
    })
}

/// Test two polygons for overlap
///
/// # Examples
///
/// ```
/// use planar_physics::collision::find_collision;
/// use planar_physics::geometry::Polygon;
/// use planar_physics::math::Vector2;
///
/// let square = |cx: f64| Polygon::new(vec![
///     Vector2::new(cx - 1.0, -1.0),
///     Vector2::new(cx + 1.0, -1.0),
///     Vector2::new(cx + 1.0, 1.0),
///     Vector2::new(cx - 1.0, 1.0),
/// ]).unwrap();
///
/// assert!(find_collision(&square(0.0), &square(1.5)).collided);
/// assert!(!find_collision(&square(0.0), &square(2.5)).collided);
/// ```
pub fn find_collision(shape_a: &Polygon, shape_b: &Polygon) -> CollisionInfo {
    let from_a = scan_axes(shape_a, shape_b);
    if !from_a.intersects {
        return CollisionInfo::separated(from_a.axis);
    }
    let from_b = scan_axes(shape_b, shape_a);
    if !from_b.intersects {
        return CollisionInfo::separated(from_b.axis);
    }

    let best = smaller_overlap(from_a, from_b);
    CollisionInfo {
        collided: true,
        axis: best.axis,
        overlap: best.overlap,
    }
}
