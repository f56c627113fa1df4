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
//! Body handles
//!
//! Handles are lightweight references to bodies owned by a [`BodySet`].
//! They carry a generation so a handle to a body that has since been
//! reaped is detected instead of silently aliasing a newer body that reused
//! the same slot.
//!
//! [`BodySet`]: super::BodySet

use std::fmt;

/// Generational reference to a body in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        BodyHandle { index, generation }
    }

    /// Slot index inside the owning set
    ///
    /// This is not the body's position in insertion order.
    pub fn slot(&self) -> u32 {
        self.index
    }

    /// Get the generation number
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({}, gen: {})", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = BodyHandle::new(42, 1);
        assert_eq!(handle.slot(), 42);
        assert_eq!(handle.generation(), 1);
        assert_eq!(handle.to_string(), "Body(42, gen: 1)");
    }

    #[test]
    fn test_handle_equality() {
        let h1 = BodyHandle::new(1, 0);
        let h2 = BodyHandle::new(1, 0);
        let h3 = BodyHandle::new(1, 1);
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
    }
}
