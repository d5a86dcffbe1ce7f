//! The three per-row passes of the sweep.
//!
//! Each pass takes the row by value and hands it back, so only one pass can touch the row at a
//! time. Walls are sent to the sink the moment they are decided.

use log::debug;
use rand::Rng;

use crate::{
    cell::SetIdCounter,
    dims::Dims,
    row::Row,
    wall::WallSink,
};

use super::GeneratorError;

const RIGHT: Dims = Dims(1, 0);
const UP: Dims = Dims(0, 1);

/// Places the wall left of the first cell of the row.
pub fn left_boundary<S: WallSink + ?Sized>(row: &Row, sink: &mut S) -> Result<(), GeneratorError> {
    row.ensure_not_empty()?;
    sink.place_right_wall(row[0].coord() - RIGHT);
    Ok(())
}

/// Places the wall right of the last cell of the row.
pub fn right_boundary<S: WallSink + ?Sized>(row: &Row, sink: &mut S) -> Result<(), GeneratorError> {
    row.ensure_not_empty()?;
    sink.place_right_wall(row[row.len() - 1].coord());
    Ok(())
}

/// Closes the row from above.
pub fn top_boundary<S: WallSink + ?Sized>(row: &Row, sink: &mut S) -> Result<(), GeneratorError> {
    row.ensure_not_empty()?;
    for cell in row {
        sink.place_bottom_wall(cell.coord() + UP);
    }
    Ok(())
}

/// Decides the right walls of the row and merges neighbouring sets where there's no wall.
///
/// Neighbours already in the same set are always separated, anything else would close a loop.
pub fn right_wall_pass<R, S>(
    mut row: Row,
    right_wall_prob: f32,
    rng: &mut R,
    sink: &mut S,
) -> Result<Row, GeneratorError>
where
    R: Rng + ?Sized,
    S: WallSink + ?Sized,
{
    left_boundary(&row, sink)?;

    let cells = row.cells_mut();
    for i in 0..cells.len() - 1 {
        let set = cells[i].set();
        if set == cells[i + 1].set() || rng.gen::<f32>() < right_wall_prob {
            sink.place_right_wall(cells[i].coord());
        } else {
            cells[i + 1].join(set);
        }
    }

    right_boundary(&row, sink)?;
    Ok(row)
}

/// Decides the bottom walls of the row.
///
/// In every run one cell, picked at random, stays open downwards, the rest are closed with
/// the given probability. Walls are placed in row order.
pub fn bottom_wall_pass<R, S>(
    mut row: Row,
    bottom_wall_prob: f32,
    rng: &mut R,
    sink: &mut S,
) -> Result<Row, GeneratorError>
where
    R: Rng + ?Sized,
    S: WallSink + ?Sized,
{
    row.ensure_not_empty()?;

    let runs = row.shuffled_runs(rng);
    let cells = row.cells_mut();
    for run in &runs {
        let Some((&open, rest)) = run.split_first() else {
            continue;
        };

        cells[open].set_bottom_wall(false);
        for &i in rest {
            if rng.gen::<f32>() < bottom_wall_prob {
                cells[i].set_bottom_wall(true);
            }
        }
    }

    for cell in cells.iter().filter(|c| c.has_bottom_wall()) {
        debug!("Placing bottom wall at {:?}", cell.coord());
        sink.place_bottom_wall(cell.coord());
    }

    Ok(row)
}

/// Turns the row into the next one.
///
/// Cells closed from below lose their set and start over in a fresh one. Everything moves one
/// cell down.
pub fn advance_row(mut row: Row, ids: &mut SetIdCounter) -> Result<Row, GeneratorError> {
    row.ensure_not_empty()?;

    for cell in row.cells_mut() {
        if cell.has_bottom_wall() {
            cell.set_bottom_wall(false);
            cell.join(ids.issue()?);
        }
        cell.set_coord(cell.coord() - UP);
    }

    Ok(row)
}

/// Closes every still open cell of the row from below.
pub fn close_bottom<S: WallSink + ?Sized>(mut row: Row, sink: &mut S) -> Result<Row, GeneratorError> {
    row.ensure_not_empty()?;

    for cell in row.cells_mut() {
        if !cell.has_bottom_wall() {
            cell.set_bottom_wall(true);
            sink.place_bottom_wall(cell.coord());
        }
    }

    Ok(row)
}
