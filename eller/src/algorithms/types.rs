use serde::{Deserialize, Serialize};

use super::GeneratorError;

/// How the final row of the maze is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Every row, the last included, goes through the right-wall and bottom-wall passes. The
    /// last row then gets closed from below.
    ///
    /// The last row can end up with internal walls that split it, so not every cell is
    /// guaranteed to be reachable.
    #[default]
    Standard,
    /// The last row skips both passes: it only gets its side boundaries and a closed bottom,
    /// so it's one open corridor. Use this when everything has to be reachable.
    BottomRowEmpty,
}

/// Tunables of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Chance of keeping two neighbouring sets apart with a right wall.
    #[serde(default = "default_prob")]
    pub right_wall_prob: f32,
    /// Chance of closing a cell from below, applied to every cell of a run but one.
    #[serde(default = "default_prob")]
    pub bottom_wall_prob: f32,
    #[serde(default)]
    pub mode: GenerationMode,
    /// Used for deterministic generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_prob() -> f32 {
    0.5
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            right_wall_prob: default_prob(),
            bottom_wall_prob: default_prob(),
            mode: GenerationMode::default(),
            seed: None,
        }
    }
}

impl GeneratorParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn right_wall_prob(mut self, value: f32) -> Self {
        self.right_wall_prob = value;
        self
    }

    pub fn bottom_wall_prob(mut self, value: f32) -> Self {
        self.bottom_wall_prob = value;
        self
    }

    pub fn mode(mut self, value: GenerationMode) -> Self {
        self.mode = value;
        self
    }

    pub fn seed(mut self, value: Option<u64>) -> Self {
        self.seed = value;
        self
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        fn check(name: &'static str, value: f32) -> Result<(), GeneratorError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(GeneratorError::InvalidProbability(name, value))
            }
        }

        check("right_wall_prob", self.right_wall_prob)?;
        check("bottom_wall_prob", self.bottom_wall_prob)?;

        if self.right_wall_prob == 1.0 {
            log::warn!("right_wall_prob is 1, sets will never merge horizontally");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_even() {
        let params = GeneratorParams::default();
        assert_eq!(params.right_wall_prob, 0.5);
        assert_eq!(params.bottom_wall_prob, 0.5);
        assert_eq!(params.mode, GenerationMode::Standard);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn out_of_range_probabilities() {
        let params = GeneratorParams::new().right_wall_prob(1.5);
        assert!(matches!(
            params.validate(),
            Err(GeneratorError::InvalidProbability("right_wall_prob", _))
        ));

        let params = GeneratorParams::new().bottom_wall_prob(f32::NAN);
        assert!(matches!(
            params.validate(),
            Err(GeneratorError::InvalidProbability("bottom_wall_prob", _))
        ));
    }

    #[test]
    fn edge_probabilities_are_valid() {
        let params = GeneratorParams::new()
            .right_wall_prob(0.0)
            .bottom_wall_prob(1.0);
        assert!(params.validate().is_ok());
    }
}
