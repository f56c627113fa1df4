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
//! All-pairs collision queries over a batch of shapes
//!
//! With the `parallel` feature the outer loop is split across the rayon
//! thread pool. Results are returned in the same order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{find_collision, CollisionInfo};
use crate::geometry::Polygon;

/// A colliding pair found by [`find_all_collisions`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPair {
    /// Index of the first shape, always less than `second`
    pub first: usize,
    /// Index of the second shape
    pub second: usize,
    /// Solver result for `(shapes[first], shapes[second])`
    pub info: CollisionInfo,
}

fn collisions_with_later(shapes: &[Polygon], first: usize) -> impl Iterator<Item = CollisionPair> + '_ {
    (first + 1..shapes.len()).filter_map(move |second| {
        let info = find_collision(&shapes[first], &shapes[second]);
        info.collided.then_some(CollisionPair { first, second, info })
    })
}

/// Test every unordered pair of `shapes` and return the colliding ones
///
/// Pairs are ordered by `first`, then by `second`.
pub fn find_all_collisions(shapes: &[Polygon]) -> Vec<CollisionPair> {
    #[cfg(feature = "parallel")]
    {
        (0..shapes.len())
            .into_par_iter()
            .flat_map_iter(|first| collisions_with_later(shapes, first))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..shapes.len())
            .flat_map(|first| collisions_with_later(shapes, first))
            .collect()
    }
}
