use std::env;
use std::hash::{DefaultHasher, Hash as _, Hasher as _};

use eller::{
    algorithms::{steps, Random},
    cell::SetIdCounter,
    row::Row,
    wall::WallLog,
};

use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Prints the set ids of every row as the sweep goes, one color per set.
///
/// Usage: `sets <width> <height> [seed]`
fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected 2 or 3 integers"
    );

    let input_seed = args.get(2).copied();
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = Random::seed_from_u64(seed);

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let base_hash = rng.gen::<u64>();
    let (width, height) = (args[0] as i32, args[1] as usize);

    let mut ids = SetIdCounter::new();
    let mut log = WallLog::new();
    let mut row = Row::first(width, &mut ids).unwrap();

    for _ in 0..height {
        row = steps::right_wall_pass(row, 0.5, &mut rng, &mut log).unwrap();
        row = steps::bottom_wall_pass(row, 0.5, &mut rng, &mut log).unwrap();
        show_row(&row, base_hash);
        row = steps::advance_row(row, &mut ids).unwrap();
    }

    println!("{} set ids, {} walls", ids.issued(), log.len());
}

fn show_row(row: &Row, base_hash: u64) {
    for cell in row {
        let mut hasher = DefaultHasher::new();
        cell.set().hash(&mut hasher);

        let hash = hasher.finish().wrapping_add(base_hash);
        let (r, g, b) = ((hash >> 16) as u8, (hash >> 8) as u8, hash as u8);

        let mark = if cell.has_bottom_wall() { '_' } else { ' ' };
        print!("\x1b[48;2;{r};{g};{b}m{mark}\x1b[0m");
    }
    println!();
}
