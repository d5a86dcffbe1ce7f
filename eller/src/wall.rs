use crate::dims::Dims;

/// A single wall decision, in maze space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    /// Wall along the right edge of the cell.
    Right(Dims),
    /// Wall along the lower edge of the cell.
    Bottom(Dims),
}

impl Wall {
    pub fn cell(&self) -> Dims {
        match self {
            Wall::Right(pos) | Wall::Bottom(pos) => *pos,
        }
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Wall::Right(_))
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Wall::Bottom(_))
    }
}

/// Receives wall decisions as soon as they are made.
///
/// Nothing about the maze is kept once a row has been advanced, so whatever the sink does with
/// the walls is the only lasting result of a generation run.
pub trait WallSink {
    fn place_wall(&mut self, wall: Wall);

    fn place_right_wall(&mut self, cell: Dims) {
        self.place_wall(Wall::Right(cell));
    }

    fn place_bottom_wall(&mut self, cell: Dims) {
        self.place_wall(Wall::Bottom(cell));
    }
}

impl<S: WallSink + ?Sized> WallSink for &mut S {
    fn place_wall(&mut self, wall: Wall) {
        (**self).place_wall(wall);
    }
}

/// Records every wall in the order it was placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallLog {
    walls: Vec<Wall>,
}

impl WallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn contains(&self, wall: Wall) -> bool {
        self.walls.contains(&wall)
    }

    pub fn has_right_wall(&self, cell: Dims) -> bool {
        self.contains(Wall::Right(cell))
    }

    pub fn has_bottom_wall(&self, cell: Dims) -> bool {
        self.contains(Wall::Bottom(cell))
    }

    pub fn clear(&mut self) {
        self.walls.clear();
    }
}

impl WallSink for WallLog {
    fn place_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }
}

/// Sends every wall to both sinks.
pub struct Tee<A, B>(pub A, pub B);

impl<A: WallSink, B: WallSink> WallSink for Tee<A, B> {
    fn place_wall(&mut self, wall: Wall) {
        self.0.place_wall(wall);
        self.1.place_wall(wall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_order() {
        let mut log = WallLog::new();
        log.place_right_wall(Dims(-1, 0));
        log.place_bottom_wall(Dims(0, 1));

        assert_eq!(
            log.walls(),
            &[Wall::Right(Dims(-1, 0)), Wall::Bottom(Dims(0, 1))]
        );
        assert!(log.has_bottom_wall(Dims(0, 1)));
        assert!(!log.has_right_wall(Dims(0, 1)));
    }

    #[test]
    fn tee_duplicates() {
        let (mut a, mut b) = (WallLog::new(), WallLog::new());
        Tee(&mut a, &mut b).place_bottom_wall(Dims(3, -2));
        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
    }
}
