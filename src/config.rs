use crate::error::EngineError;
use crate::grid::Grid;
use crate::patterns;
use serde::{Deserialize, Serialize};

fn default_size() -> usize {
    20
}

fn default_speed_ms() -> u64 {
    200
}

/// Host-facing simulator settings.
///
/// These are the knobs a host exposes to the user (grid size selection,
/// step interval, starting configuration); the engine itself only takes the
/// resolved values.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulatorConfig {
    /// Side length of the grid.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Milliseconds between generations while playing.
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
    /// Starting pattern, either a preset name from the `patterns` module or
    /// full pattern text. A pattern carries its own size, so it takes
    /// precedence over `size` and `density`.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Probability for each cell to start alive. When absent the grid
    /// starts empty.
    #[serde(default)]
    pub density: Option<f64>,
    /// Seed for the random starting grid.
    #[serde(default)]
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            speed_ms: default_speed_ms(),
            pattern: None,
            density: None,
            seed: 0,
        }
    }
}

impl SimulatorConfig {
    pub fn from_json(contents: &str) -> Result<SimulatorConfig, EngineError> {
        serde_json::from_str(contents).map_err(|error| EngineError::InvalidConfig(error.to_string()))
    }

    /// Builds the starting grid these settings describe.
    pub fn build_grid(&self) -> Result<Grid, EngineError> {
        if let Some(pattern) = &self.pattern {
            let contents = patterns::by_name(pattern).unwrap_or(pattern.as_str());
            return Grid::parse(contents);
        }

        if let Some(density) = self.density {
            return Grid::random(self.size, density, self.seed);
        }

        Grid::new(self.size)
    }
}
