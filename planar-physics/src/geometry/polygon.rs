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
//! Simple polygons stored as ordered vertex lists
//!
//! Area and centroid use the shoelace formula. Winding order is not
//! normalized: the signed area is positive for counterclockwise vertex
//! lists and negative for clockwise ones, while [`Polygon::area`] always
//! reports the absolute value.

use crate::error::{PhysicsError, Result};
use crate::math::Vector2;

/// Scale factor applied to the shoelace sum to obtain the area
const AREA_SCALE: f64 = 0.5;

/// Scale factor applied to the weighted vertex sums to obtain the centroid
const CENTROID_SCALE: f64 = 1.0 / 6.0;

/// An ordered list of at least three vertices describing a simple polygon
///
/// Translate and rotate mutate the vertices in place. Both are rigid
/// motions, so a polygon that passed validation at construction keeps a
/// non-zero area and a well-defined centroid.
///
/// # Examples
///
/// ```
/// use planar_physics::geometry::Polygon;
/// use planar_physics::math::Vector2;
///
/// let triangle = Polygon::new(vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(4.0, 3.0),
/// ]).unwrap();
/// assert_eq!(triangle.area(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2>,
}

impl Polygon {
    /// Create a validated polygon
    ///
    /// # Errors
    ///
    /// Rejects fewer than three vertices, non-finite coordinates, and shapes
    /// whose area is negligible relative to their bounding box, which have no
    /// well-defined centroid.
    pub fn new(vertices: Vec<Vector2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PhysicsError::NonFiniteVertex { index });
        }

        let polygon = Polygon { vertices };
        let area = polygon.area();
        let extent = polygon.extent();
        if area <= f64::EPSILON * extent * extent {
            return Err(PhysicsError::DegeneratePolygon { area });
        }
        Ok(polygon)
    }

    /// Larger side of the axis-aligned bounding box
    fn extent(&self) -> f64 {
        let (mut min, mut max) = (self.vertices[0], self.vertices[0]);
        for v in &self.vertices[1..] {
            min = Vector2::new(min.x.min(v.x), min.y.min(v.y));
            max = Vector2::new(max.x.max(v.x), max.y.max(v.y));
        }
        (max.x - min.x).max(max.y - min.y)
    }

    /// Create a polygon without validation
    ///
    /// The centroid of a degenerate polygon is undefined (NaN); callers
    /// using this constructor accept that.
    pub fn new_unchecked(vertices: Vec<Vector2>) -> Self {
        Polygon { vertices }
    }

    /// Borrow the vertices in order
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for validated polygons
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs `(v[i], v[i + 1])`, wrapping the last
    /// vertex back to the first
    pub fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed shoelace area (positive for counterclockwise winding)
    pub fn signed_area(&self) -> f64 {
        AREA_SCALE * self.edges().map(|(a, b)| a.cross(b)).sum::<f64>()
    }

    /// Absolute area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid
    ///
    /// Divides by six times the signed area, so the result does not depend
    /// on winding order. NaN for degenerate polygons.
    pub fn centroid(&self) -> Vector2 {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (a, b) in self.edges() {
            let det = a.cross(b);
            cx += (a.x + b.x) * det;
            cy += (a.y + b.y) * det;
        }
        Vector2::new(cx, cy).scale(CENTROID_SCALE / self.signed_area())
    }

    /// Add `delta` to every vertex
    pub fn translate(&mut self, delta: Vector2) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Rotate every vertex counterclockwise by `angle` radians about `pivot`
    pub fn rotate(&mut self, angle: f64, pivot: Vector2) {
        for v in &mut self.vertices {
            *v = (*v - pivot).rotate(angle) + pivot;
        }
    }
}

impl From<Polygon> for Vec<Vector2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}
