use serde::{Deserialize, Serialize};

use crate::{
    algorithms::GeneratorError,
    dims::{Dims, WorldPos},
};

/// Dimensions and placement of the maze on the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width of the maze, in cells.
    pub width: i32,
    /// Height of the maze, in cells.
    pub height: i32,
    /// Size of a single maze cell, in tiles.
    pub cell_size: i32,
    /// World position of maze cell `(0, 0)`.
    #[serde(default)]
    pub origin: WorldPos,
}

impl GridConfig {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin: WorldPos::default(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<WorldPos>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn size(&self) -> Dims {
        Dims(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !self.size().all_positive() {
            return Err(GeneratorError::InvalidSize(self.size()));
        }

        if self.cell_size < 1 {
            return Err(GeneratorError::InvalidCellSize(self.cell_size));
        }

        Ok(())
    }

    pub fn to_grid(&self, coords: Dims) -> Dims {
        maze_to_grid(coords, self.cell_size, self.origin)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(10, 10, 2)
    }
}

/// Maps maze-space coordinates onto the tile grid.
pub fn maze_to_grid(coords: Dims, cell_size: i32, origin: WorldPos) -> Dims {
    coords * cell_size + origin.floor()
}
