use std::ops::{Index, Range};

use rand::{seq::SliceRandom as _, Rng};

use crate::{
    algorithms::GeneratorError,
    cell::{MazeCell, SetIdCounter},
    dims::Dims,
};

/// The row currently being swept, left to right.
///
/// Merging only relabels the right neighbour, so once cells get cut into fresh sets one set can
/// end up split over several runs. Runs are always maximal spans of equal ids and are handled
/// independently of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<MazeCell>,
}

impl Row {
    /// Creates row 0, every cell in its own fresh set.
    pub fn first(width: i32, ids: &mut SetIdCounter) -> Result<Self, GeneratorError> {
        if width < 1 {
            return Err(GeneratorError::InvalidSize(Dims(width, 1)));
        }

        let cells = (0..width)
            .map(|x| Ok(MazeCell::new(Dims(x, 0), ids.issue()?)))
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        Ok(Self { cells })
    }

    pub fn from_cells(cells: Vec<MazeCell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[MazeCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [MazeCell] {
        &mut self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &MazeCell> {
        self.cells.iter()
    }

    /// Maze-space `y` shared by all cells of the row.
    pub fn y(&self) -> Option<i32> {
        self.cells.first().map(|c| c.coord().1)
    }

    pub(crate) fn ensure_not_empty(&self) -> Result<(), GeneratorError> {
        if self.is_empty() {
            Err(GeneratorError::EmptyRow)
        } else {
            Ok(())
        }
    }

    /// Splits the row into maximal runs of neighbouring cells sharing a set id.
    pub fn runs(&self) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start = 0;

        for i in 1..=self.cells.len() {
            if i == self.cells.len() || self.cells[i].set() != self.cells[start].set() {
                runs.push(start..i);
                start = i;
            }
        }

        runs
    }

    /// Same as [`Row::runs`], but the indices inside each run come in a uniformly random order.
    ///
    /// Runs themselves stay in row order, only their members get permuted.
    pub fn shuffled_runs<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vec<usize>> {
        self.runs()
            .into_iter()
            .map(|run| {
                let mut order: Vec<_> = run.collect();
                order.shuffle(rng);
                order
            })
            .collect()
    }
}

impl Index<usize> for Row {
    type Output = MazeCell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a MazeCell;
    type IntoIter = std::slice::Iter<'a, MazeCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::{algorithms::Random, cell::SetId};

    fn row_of(sets: &[u32]) -> Row {
        Row::from_cells(
            sets.iter()
                .enumerate()
                .map(|(x, &s)| MazeCell::new(Dims(x as i32, 0), SetId(s)))
                .collect(),
        )
    }

    #[test]
    fn first_row_has_unique_increasing_sets() {
        let mut ids = SetIdCounter::new();
        let row = Row::first(4, &mut ids).unwrap();

        let sets: Vec<_> = row.iter().map(|c| c.set()).collect();
        assert_eq!(sets, vec![SetId(0), SetId(1), SetId(2), SetId(3)]);
        assert_eq!(row.y(), Some(0));
        assert_eq!(row[3].coord(), Dims(3, 0));
        assert_eq!(ids.issued(), 4);
    }

    #[test]
    fn first_row_rejects_zero_width() {
        let mut ids = SetIdCounter::new();
        assert!(matches!(
            Row::first(0, &mut ids),
            Err(GeneratorError::InvalidSize(_))
        ));
    }

    #[test]
    fn runs_group_neighbours() {
        let row = row_of(&[0, 0, 2, 3, 3, 3, 6]);
        assert_eq!(row.runs(), vec![0..2, 2..3, 3..6, 6..7]);
    }

    #[test]
    fn runs_of_single_cell() {
        assert_eq!(row_of(&[5]).runs(), vec![0..1]);
    }

    #[test]
    fn runs_of_empty_row() {
        assert!(row_of(&[]).runs().is_empty());
    }

    #[test]
    fn shuffle_keeps_run_membership() {
        let row = row_of(&[0, 0, 0, 0, 4, 5, 5]);
        let mut rng = Random::seed_from_u64(7);

        for _ in 0..20 {
            let shuffled = row.shuffled_runs(&mut rng);
            assert_eq!(shuffled.len(), 3);

            for (run, order) in row.runs().into_iter().zip(shuffled) {
                let mut sorted = order.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, run.collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn shuffle_visits_every_order_start() {
        let row = row_of(&[1, 1, 1]);
        let mut rng = Random::seed_from_u64(42);

        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[row.shuffled_runs(&mut rng)[0][0]] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
