#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

use rand::{seq::SliceRandom as _, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::GeneratorError,
    dims::Dims,
    grid::GridConfig,
    wall::{Wall, WallSink},
};

/// Index of a wall tile variant. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileVariant(pub u16);

/// Anything tiles can be written onto.
pub trait TileSurface {
    fn set_tile(&mut self, pos: Dims, tile: TileVariant);
}

impl<S: TileSurface + ?Sized> TileSurface for &mut S {
    fn set_tile(&mut self, pos: Dims, tile: TileVariant) {
        (**self).set_tile(pos, tile);
    }
}

/// Sparse in-memory tile surface.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    tiles: HashMap<Dims, TileVariant>,
    writes: usize,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Dims) -> Option<TileVariant> {
        self.tiles.get(&pos).copied()
    }

    pub fn is_wall(&self, pos: Dims) -> bool {
        self.tiles.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total number of writes, overwrites included.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dims, TileVariant)> + '_ {
        self.tiles.iter().map(|(&pos, &tile)| (pos, tile))
    }

    /// Smallest rectangle containing every tile, as `(min, max)` inclusive corners.
    pub fn bounds(&self) -> Option<(Dims, Dims)> {
        let mut iter = self.tiles.keys();
        let first = *iter.next()?;

        Some(iter.fold((first, first), |(min, max), pos| {
            (
                Dims(min.0.min(pos.0), min.1.min(pos.1)),
                Dims(max.0.max(pos.0), max.1.max(pos.1)),
            )
        }))
    }
}

impl TileSurface for TileMap {
    fn set_tile(&mut self, pos: Dims, tile: TileVariant) {
        self.tiles.insert(pos, tile);
        self.writes += 1;
    }
}

/// Wall tile variants to choose from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TileVariant>", into = "Vec<TileVariant>")]
pub struct TilePalette {
    variants: Vec<TileVariant>,
}

impl TilePalette {
    pub fn new(variants: Vec<TileVariant>) -> Result<Self, GeneratorError> {
        if variants.is_empty() {
            return Err(GeneratorError::EmptyPalette);
        }

        Ok(Self { variants })
    }

    /// Palette of `count` variants, numbered from 0.
    pub fn numbered(count: u16) -> Result<Self, GeneratorError> {
        Self::new((0..count).map(TileVariant).collect())
    }

    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> TileVariant {
        *self
            .variants
            .choose(rng)
            .expect("palette is never empty")
    }
}

impl TryFrom<Vec<TileVariant>> for TilePalette {
    type Error = GeneratorError;

    fn try_from(variants: Vec<TileVariant>) -> Result<Self, Self::Error> {
        Self::new(variants)
    }
}

impl From<TilePalette> for Vec<TileVariant> {
    fn from(palette: TilePalette) -> Self {
        palette.variants
    }
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            variants: vec![TileVariant(0)],
        }
    }
}

/// Turns wall decisions into strips of tiles.
///
/// A right wall covers `cell_size` tiles, a bottom wall `cell_size + 1` so it also fills the
/// corner where it meets a right wall.
pub struct WallRenderer<S, R> {
    surface: S,
    grid: GridConfig,
    palette: TilePalette,
    rng: R,
}

impl<S: TileSurface, R: Rng> WallRenderer<S, R> {
    pub fn new(surface: S, grid: GridConfig, palette: TilePalette, rng: R) -> Self {
        Self {
            surface,
            grid,
            palette,
            rng,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Vertical strip right of the grid position.
    pub fn place_right_wall_at(&mut self, grid_pos: Dims) {
        let Dims(x, y) = grid_pos;
        for i in 0..self.grid.cell_size {
            let tile = self.palette.pick(&mut self.rng);
            self.surface.set_tile(Dims(x + self.grid.cell_size, y + i), tile);
        }
    }

    /// Horizontal strip starting at the grid position.
    pub fn place_bottom_wall_at(&mut self, grid_pos: Dims) {
        let Dims(x, y) = grid_pos;
        for i in 0..=self.grid.cell_size {
            let tile = self.palette.pick(&mut self.rng);
            self.surface.set_tile(Dims(x + i, y), tile);
        }
    }
}

impl<S: TileSurface, R: Rng> WallSink for WallRenderer<S, R> {
    fn place_wall(&mut self, wall: Wall) {
        match wall {
            Wall::Right(cell) => self.place_right_wall_at(self.grid.to_grid(cell)),
            Wall::Bottom(cell) => self.place_bottom_wall_at(self.grid.to_grid(cell)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::{algorithms::Random, dims::WorldPos};

    fn renderer(cell_size: i32) -> WallRenderer<TileMap, Random> {
        WallRenderer::new(
            TileMap::new(),
            GridConfig::new(4, 4, cell_size).with_origin(WorldPos(0.5, 0.5)),
            TilePalette::numbered(3).unwrap(),
            Random::seed_from_u64(1),
        )
    }

    #[test]
    fn right_wall_is_vertical_strip() {
        let mut r = renderer(3);
        r.place_wall(Wall::Right(Dims(1, -1)));

        let map = r.into_surface();
        assert_eq!(map.len(), 3);
        // cell (1, -1) sits at grid (3, -3); the wall is one cell further right
        for y in -3..0 {
            assert!(map.is_wall(Dims(6, y)));
        }
    }

    #[test]
    fn bottom_wall_covers_corner() {
        let mut r = renderer(3);
        r.place_wall(Wall::Bottom(Dims(0, 0)));

        let map = r.into_surface();
        assert_eq!(map.len(), 4);
        for x in 0..=3 {
            assert!(map.is_wall(Dims(x, 0)));
        }
        assert_eq!(map.bounds(), Some((Dims(0, 0), Dims(3, 0))));
    }

    #[test]
    fn tiles_come_from_palette() {
        let mut r = renderer(5);
        for x in 0..4 {
            r.place_bottom_wall(Dims(x, 0));
        }

        let map = r.into_surface();
        assert!(map.iter().all(|(_, t)| t.0 < 3));
        assert_eq!(map.writes(), 24);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            TilePalette::new(vec![]),
            Err(GeneratorError::EmptyPalette)
        ));
    }
}
