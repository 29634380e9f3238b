//! Game configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Parameters for a new game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension (size x size)
    pub size: usize,
    /// Tiles spawned after each slide that leaves an empty cell
    pub bricks_per_step: usize,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            bricks_per_step: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize, bricks_per_step: usize) -> Self {
        Self {
            size,
            bricks_per_step,
            seed: None,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_bricks_per_step(mut self, bricks_per_step: usize) -> Self {
        self.bricks_per_step = bricks_per_step;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}
