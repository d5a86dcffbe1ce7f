//! Procedural maze generation on a tile grid, using a row sweep of Eller's algorithm.
//!
//! The maze itself is never stored: the generator keeps a single row in memory and sends every
//! wall to a [`wall::WallSink`] as soon as it's decided, usually a [`surface::WallRenderer`]
//! drawing onto a tile surface.

pub mod algorithms;
pub mod cell;
pub mod dims;
pub mod grid;
pub mod progress;
pub mod row;
pub mod surface;
pub mod wall;

pub use algorithms::{GenerationMode, GenerationReport, Generator, GeneratorError, GeneratorParams};
