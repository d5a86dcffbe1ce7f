pub mod steps;
pub mod types;

use rand::{thread_rng, Rng, SeedableRng as _};
use thiserror::Error;

use crate::{
    cell::SetIdCounter,
    dims::Dims,
    grid::GridConfig,
    progress::ProgressHandle,
    row::Row,
    surface::{TilePalette, TileSurface, WallRenderer},
    wall::{Wall, WallSink},
};
pub use types::*;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid maze size {0:?}, both dimensions must be at least 1")]
    InvalidSize(Dims),
    #[error("Invalid cell size {0}, must be at least 1")]
    InvalidCellSize(i32),
    #[error("Probability {0} must be within [0, 1], got {1}")]
    InvalidProbability(&'static str, f32),
    #[error("Row is empty")]
    EmptyRow,
    #[error("Ran out of set ids")]
    SetIdOverflow,
    #[error("Tile palette is empty")]
    EmptyPalette,
}

/// Summary of a finished generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Seed of the run, if it was seeded by the generator itself.
    pub seed: Option<u64>,
    pub rows: usize,
    pub set_ids_issued: u32,
    pub walls: usize,
}

/// Drives the row-by-row sweep of Eller's algorithm over the whole maze.
#[derive(Debug, Clone)]
pub struct Generator {
    grid: GridConfig,
    params: GeneratorParams,
}

impl Generator {
    pub fn new(grid: GridConfig, params: GeneratorParams) -> Result<Self, GeneratorError> {
        grid.validate()?;
        params.validate()?;
        Ok(Self { grid, params })
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    fn seed(&self) -> u64 {
        self.params.seed.unwrap_or_else(|| thread_rng().gen())
    }

    /// Generates the maze from the configured (or a random) seed, sending walls to the sink.
    pub fn generate<S: WallSink>(
        &self,
        sink: S,
        progress: &ProgressHandle,
    ) -> Result<GenerationReport, GeneratorError> {
        let seed = self.seed();
        let mut rng = Random::seed_from_u64(seed);

        let report = self.generate_with_rng(&mut rng, sink, progress)?;
        Ok(GenerationReport {
            seed: Some(seed),
            ..report
        })
    }

    /// Generates the maze straight onto a tile surface.
    ///
    /// Tile variants are drawn from a stream split off the main one, so the palette doesn't
    /// affect the layout of the maze.
    pub fn generate_tiles<T: TileSurface>(
        &self,
        surface: T,
        palette: TilePalette,
        progress: &ProgressHandle,
    ) -> Result<(T, GenerationReport), GeneratorError> {
        let seed = self.seed();
        let mut rng = Random::seed_from_u64(seed);
        let mut tile_rng = rng.clone();
        tile_rng.long_jump();

        let mut renderer = WallRenderer::new(surface, self.grid, palette, tile_rng);
        let report = self.generate_with_rng(&mut rng, &mut renderer, progress)?;

        Ok((
            renderer.into_surface(),
            GenerationReport {
                seed: Some(seed),
                ..report
            },
        ))
    }

    /// Generates the maze using the given random source.
    pub fn generate_with_rng<R, S>(
        &self,
        rng: &mut R,
        sink: S,
        progress: &ProgressHandle,
    ) -> Result<GenerationReport, GeneratorError>
    where
        R: Rng + ?Sized,
        S: WallSink,
    {
        let Dims(width, height) = self.grid.size();
        let height = height as usize;
        let GeneratorParams {
            right_wall_prob,
            bottom_wall_prob,
            mode,
            ..
        } = self.params;

        log::info!("Generating {}x{} maze ({:?})", width, height, mode);
        progress.lock().restart(height);

        let mut sink = Counted::new(sink);
        let mut ids = SetIdCounter::new();
        let mut row = Row::first(width, &mut ids)?;

        steps::top_boundary(&row, &mut sink)?;

        match mode {
            GenerationMode::Standard => {
                for i in 0..height {
                    row = steps::right_wall_pass(row, right_wall_prob, rng, &mut sink)?;
                    row = steps::bottom_wall_pass(row, bottom_wall_prob, rng, &mut sink)?;

                    row = if i == height - 1 {
                        steps::close_bottom(row, &mut sink)?
                    } else {
                        steps::advance_row(row, &mut ids)?
                    };

                    progress.lock().done = i + 1;
                    log::debug!("Row {} done, {} set ids issued", i, ids.issued());
                }
            }
            GenerationMode::BottomRowEmpty => {
                for i in 0..height - 1 {
                    row = steps::right_wall_pass(row, right_wall_prob, rng, &mut sink)?;
                    row = steps::bottom_wall_pass(row, bottom_wall_prob, rng, &mut sink)?;
                    row = steps::advance_row(row, &mut ids)?;

                    progress.lock().done = i + 1;
                    log::debug!("Row {} done, {} set ids issued", i, ids.issued());
                }

                steps::left_boundary(&row, &mut sink)?;
                row = steps::close_bottom(row, &mut sink)?;
                steps::right_boundary(&row, &mut sink)?;
            }
        }

        progress.lock().finish();

        let report = GenerationReport {
            seed: None,
            rows: height,
            set_ids_issued: ids.issued(),
            walls: sink.count,
        };
        log::info!(
            "Maze done: {} walls, {} set ids issued",
            report.walls,
            report.set_ids_issued
        );

        Ok(report)
    }
}

struct Counted<S> {
    inner: S,
    count: usize,
}

impl<S> Counted<S> {
    fn new(inner: S) -> Self {
        Self { inner, count: 0 }
    }
}

impl<S: WallSink> WallSink for Counted<S> {
    fn place_wall(&mut self, wall: Wall) {
        self.count += 1;
        self.inner.place_wall(wall);
    }
}
