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
//! Error types for fallible construction
//!
//! Precondition violations on hot paths (bad indices, invalid mass passed to
//! a panicking constructor) are programmer errors and panic. The fallible
//! constructors report the same conditions through [`PhysicsError`].

use thiserror::Error;

/// Errors produced when validating shapes and bodies
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A polygon needs at least three vertices
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied
        count: usize,
    },

    /// A polygon with (near) zero area has no defined centroid
    #[error("polygon is degenerate (area {area:e})")]
    DegeneratePolygon {
        /// Absolute area of the rejected polygon
        area: f64,
    },

    /// A vertex coordinate was NaN or infinite
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Position of the offending vertex
        index: usize,
    },

    /// Mass must be positive, or `f64::INFINITY` for immovable bodies
    #[error("invalid mass {mass}: must be positive (use f64::INFINITY for immovable bodies)")]
    InvalidMass {
        /// The rejected mass
        mass: f64,
    },
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, PhysicsError>;
