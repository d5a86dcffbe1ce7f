use eller::{dims::Dims, grid::GridConfig, progress::ProgressHandle};
use rand::{seq::SliceRandom as _, Rng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Player,
    Key,
    Boss,
}

impl MarkerKind {
    pub fn glyph(self) -> char {
        match self {
            MarkerKind::Player => '@',
            MarkerKind::Key => 'k',
            MarkerKind::Boss => 'B',
        }
    }
}

/// Something placed into a finished maze, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub pos: Dims,
}

/// Grid position in the middle of a maze cell.
///
/// With a cell size of 1 there's no room between the walls and this lands on a wall tile.
pub fn cell_center(grid: &GridConfig, cell: Dims) -> Dims {
    let half = grid.cell_size / 2;
    grid.to_grid(cell) + Dims(half, half)
}

/// Puts the player into the top left cell, the key into a random cell of the last row and the
/// boss into any other free cell. The boss is left out when the maze has no room for it.
///
/// Returns `None` while the maze is still being generated.
pub fn spawn_markers<R: Rng + ?Sized>(
    progress: &ProgressHandle,
    grid: &GridConfig,
    rng: &mut R,
) -> Option<Vec<Marker>> {
    if !progress.is_done() {
        log::warn!("Maze isn't finished yet, not spawning anything");
        return None;
    }

    let player = Dims(0, 0);
    let key = Dims(rng.gen_range(0..grid.width), 1 - grid.height);
    log::debug!("Spawning player at {:?}, key at {:?}", player, key);

    let mut markers = vec![
        Marker {
            kind: MarkerKind::Player,
            pos: cell_center(grid, player),
        },
        Marker {
            kind: MarkerKind::Key,
            pos: cell_center(grid, key),
        },
    ];

    let free: Vec<_> = Dims::iter_fill(Dims(0, 1 - grid.height), Dims(grid.width, 1))
        .filter(|&cell| cell != player && cell != key)
        .collect();
    match free.choose(rng) {
        Some(&boss) => {
            log::debug!("Spawning boss at {:?}", boss);
            markers.push(Marker {
                kind: MarkerKind::Boss,
                pos: cell_center(grid, boss),
            });
        }
        None => log::warn!("No free cell left for the boss"),
    }

    Some(markers)
}

#[cfg(test)]
mod tests {
    use eller::{algorithms::Random, dims::WorldPos};
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn nothing_spawns_before_generation_finishes() {
        let progress = ProgressHandle::new();
        progress.lock().restart(5);
        let mut rng = Random::seed_from_u64(0);

        assert!(spawn_markers(&progress, &GridConfig::default(), &mut rng).is_none());
    }

    #[test]
    fn markers_land_inside_cells() {
        let progress = ProgressHandle::new();
        progress.lock().finish();
        let grid = GridConfig::new(6, 4, 4).with_origin(WorldPos(1.0, 1.0));
        let mut rng = Random::seed_from_u64(0);

        for _ in 0..20 {
            let markers = spawn_markers(&progress, &grid, &mut rng).unwrap();
            assert_eq!(markers[0].kind, MarkerKind::Player);
            assert_eq!(markers[0].pos, Dims(3, 3));

            let key = markers[1];
            assert_eq!(key.kind, MarkerKind::Key);
            // last row is maze y = -3, so grid y = -12 + 1 + 2
            assert_eq!(key.pos.1, -9);
            assert!((3..24).contains(&key.pos.0));
            assert_eq!((key.pos.0 - 3) % 4, 0);
        }
    }

    #[test]
    fn boss_takes_a_free_cell() {
        let progress = ProgressHandle::new();
        progress.lock().finish();
        let grid = GridConfig::new(3, 3, 2);
        let mut rng = Random::seed_from_u64(4);

        for _ in 0..50 {
            let markers = spawn_markers(&progress, &grid, &mut rng).unwrap();
            assert_eq!(markers.len(), 3);
            assert_eq!(markers[2].kind, MarkerKind::Boss);
            assert_ne!(markers[2].pos, markers[0].pos);
            assert_ne!(markers[2].pos, markers[1].pos);
            assert_eq!(markers[2].pos.0.rem_euclid(2), 1);
            assert_eq!(markers[2].pos.1.rem_euclid(2), 1);
        }
    }

    #[test]
    fn no_boss_without_room() {
        let progress = ProgressHandle::new();
        progress.lock().finish();
        let mut rng = Random::seed_from_u64(0);

        let markers = spawn_markers(&progress, &GridConfig::new(1, 1, 2), &mut rng).unwrap();
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|m| m.kind != MarkerKind::Boss));
    }
}
