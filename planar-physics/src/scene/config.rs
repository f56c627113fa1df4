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
//! Scene configuration

/// Configuration for scene storage and diagnostics
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Number of bodies to reserve room for up front
    pub body_capacity: usize,
    /// Number of force creators to reserve room for up front
    pub force_capacity: usize,
    /// Whether to log force collection and body reaping at debug level
    pub log_cleanup: bool,
    /// Whether to warn (once per body) when a force creator leaves a NaN or infinite force on it
    pub warn_on_non_finite: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            body_capacity: 32,
            force_capacity: 64,
            log_cleanup: false,
            warn_on_non_finite: true,
        }
    }
}

impl SceneConfig {
    /// Create a configuration with custom capacities
    pub fn new(body_capacity: usize, force_capacity: usize) -> Self {
        SceneConfig {
            body_capacity,
            force_capacity,
            ..Self::default()
        }
    }

    /// Enable debug logging of force collection and body reaping
    pub fn with_cleanup_logging(mut self) -> Self {
        self.log_cleanup = true;
        self
    }

    /// Silence warnings about non-finite forces
    pub fn without_non_finite_warnings(mut self) -> Self {
        self.warn_on_non_finite = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.body_capacity, 32);
        assert_eq!(config.force_capacity, 64);
        assert!(!config.log_cleanup);
        assert!(config.warn_on_non_finite);
    }

    #[test]
    fn test_builder() {
        let config = SceneConfig::new(4, 8)
            .with_cleanup_logging()
            .without_non_finite_warnings();
        assert_eq!(config.body_capacity, 4);
        assert_eq!(config.force_capacity, 8);
        assert!(config.log_cleanup);
        assert!(!config.warn_on_non_finite);
    }
}
