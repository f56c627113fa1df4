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
//! Opaque body color

/// RGB color with components in `[0, 1]`
///
/// Physics never reads the color; it is carried for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// White
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from its channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }
}
