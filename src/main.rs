mod error;
mod logging;
mod render;
mod settings;
mod spawn;

use std::path::PathBuf;

use clap::Parser;
use eller::{
    algorithms::Random,
    grid::GridConfig,
    progress::ProgressHandle,
    surface::TileMap,
    GenerationMode, Generator, GeneratorParams,
};
use rand::SeedableRng as _;

use error::Error;
use render::Canvas;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, name = "tilemaze")]
struct Args {
    #[arg(long, help = "Maze width, in cells")]
    width: Option<i32>,
    #[arg(long, help = "Maze height, in cells")]
    height: Option<i32>,
    #[arg(short, long, help = "Size of a maze cell, in tiles")]
    cell_size: Option<i32>,
    #[arg(short, long, help = "Seed for deterministic generation")]
    seed: Option<u64>,
    #[arg(short, long, help = "Leave the last row open, so every cell is reachable")]
    bottom_row_empty: bool,
    #[arg(long, help = "Chance of a wall between two neighbouring sets")]
    right_wall_prob: Option<f32>,
    #[arg(long, help = "Chance of closing a cell from below")]
    bottom_wall_prob: Option<f32>,
    #[arg(long, help = "Don't place the player and the key")]
    no_markers: bool,
    #[arg(long, help = "Print without colors")]
    plain: bool,
    #[arg(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
    #[arg(long, help = "Show config path and quit")]
    show_config_path: bool,
    #[arg(long, help = "Reset config to default and quit")]
    reset_config: bool,
    #[arg(long, help = "Show loaded config and quit")]
    debug_config: bool,
}

impl Args {
    fn grid(&self, mut grid: GridConfig) -> GridConfig {
        grid.width = self.width.unwrap_or(grid.width);
        grid.height = self.height.unwrap_or(grid.height);
        grid.cell_size = self.cell_size.unwrap_or(grid.cell_size);
        grid
    }

    fn params(&self, mut params: GeneratorParams) -> GeneratorParams {
        params.right_wall_prob = self.right_wall_prob.unwrap_or(params.right_wall_prob);
        params.bottom_wall_prob = self.bottom_wall_prob.unwrap_or(params.bottom_wall_prob);
        params.seed = self.seed.or(params.seed);
        if self.bottom_row_empty {
            params.mode = GenerationMode::BottomRowEmpty;
        }
        params
    }

    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    if args.reset_config {
        Settings::reset_config(&args.config_path())?;
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = args.config_path();
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    better_panic::install();
    logging::init(args.verbose)?;

    let settings = Settings::load(&args.config_path())?;
    if args.debug_config {
        println!("{}", settings.to_ron()?);
        return Ok(());
    }

    let grid = args.grid(settings.get_grid());
    let params = args.params(settings.get_generator());

    let generator = Generator::new(grid, params)?;
    let progress = ProgressHandle::new();
    let (map, report) =
        generator.generate_tiles(TileMap::new(), settings.get_palette(), &progress)?;

    let seed = report.seed.unwrap_or_default();
    log::info!("{} tiles written, {} walls", map.writes(), report.walls);

    let markers = if settings.get_show_markers() && !args.no_markers {
        let mut rng = Random::seed_from_u64(seed);
        rng.jump();
        spawn::spawn_markers(&progress, &grid, &mut rng).unwrap_or_default()
    } else {
        Vec::new()
    };

    let canvas = Canvas::draw(&map, &markers);
    let glyphs = settings.get_glyphs();
    if args.plain {
        print!("{}", canvas.to_plain(&glyphs));
    } else {
        print!("{}", canvas.paint(&glyphs, &settings.get_colors()));
    }

    if params.seed.is_none() {
        println!("Seed: {}", seed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_override_settings() {
        let args = Args::parse_from([
            "tilemaze",
            "--width",
            "30",
            "--seed",
            "7",
            "--bottom-row-empty",
            "--right-wall-prob",
            "0.25",
        ]);

        let grid = args.grid(GridConfig::new(10, 12, 3));
        assert_eq!((grid.width, grid.height, grid.cell_size), (30, 12, 3));

        let params = args.params(GeneratorParams::default().bottom_wall_prob(0.75));
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.mode, GenerationMode::BottomRowEmpty);
        assert_eq!(params.right_wall_prob, 0.25);
        assert_eq!(params.bottom_wall_prob, 0.75);
    }

    #[test]
    fn settings_seed_is_kept_without_argument() {
        let args = Args::parse_from(["tilemaze", "-vv"]);
        assert_eq!(args.verbose, 2);

        let params = args.params(GeneratorParams::default().seed(Some(3)));
        assert_eq!(params.seed, Some(3));
        assert_eq!(params.mode, GenerationMode::Standard);
    }
}
