use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Color;
use eller::{grid::GridConfig, surface::TilePalette, GeneratorParams};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: String,
    pub player: String,
    pub key: String,
    #[serde(default = "ColorScheme::default_boss")]
    pub boss: String,
}

impl ColorScheme {
    pub fn walls(&self) -> Color {
        Color::from(self.wall.as_str())
    }

    pub fn players(&self) -> Color {
        Color::from(self.player.as_str())
    }

    pub fn keys(&self) -> Color {
        Color::from(self.key.as_str())
    }

    pub fn bosses(&self) -> Color {
        Color::from(self.boss.as_str())
    }

    fn default_boss() -> String {
        "red".into()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: "white".into(),
            player: "green".into(),
            key: "yellow".into(),
            boss: Self::default_boss(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub grid: Option<GridConfig>,
    #[serde(default)]
    pub generator: Option<GeneratorParams>,
    #[serde(default)]
    pub palette: Option<TilePalette>,
    /// One glyph per tile variant, variants past the end wrap around.
    #[serde(default)]
    pub glyphs: Option<String>,
    #[serde(default)]
    pub colors: Option<ColorScheme>,
    #[serde(default)]
    pub show_markers: Option<bool>,
}

impl Settings {
    pub fn get_grid(&self) -> GridConfig {
        self.grid.unwrap_or_default()
    }

    pub fn get_generator(&self) -> GeneratorParams {
        self.generator.unwrap_or_default()
    }

    pub fn get_palette(&self) -> TilePalette {
        self.palette.clone().unwrap_or_default()
    }

    pub fn get_glyphs(&self) -> Vec<char> {
        match &self.glyphs {
            Some(glyphs) if !glyphs.is_empty() => glyphs.chars().collect(),
            _ => vec!['#'],
        }
    }

    pub fn get_colors(&self) -> ColorScheme {
        self.colors.clone().unwrap_or_default()
    }

    pub fn get_show_markers(&self) -> bool {
        self.show_markers.unwrap_or(true)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tilemaze")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(source: &str, path: &Path) -> Result<Self, Error> {
        Self::options()
            .from_str(source)
            .map_err(|err| Error::Settings(path.to_path_buf(), err))
    }

    /// Loads the settings, writing the default ones first if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            log::info!("Creating default settings at {:?}", path);
            Self::reset_config(path)?;
        }

        let source = fs::read_to_string(path)?;
        Self::from_ron(&source, path)
    }

    pub fn reset_config(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, Error> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use eller::{dims::WorldPos, GenerationMode};

    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS, Path::new("default")).unwrap();

        let grid = settings.get_grid();
        assert_eq!((grid.width, grid.height, grid.cell_size), (16, 10, 2));
        assert_eq!(grid.origin, WorldPos(0.0, 0.0));
        assert_eq!(settings.get_generator().mode, GenerationMode::Standard);
        assert_eq!(settings.get_palette().variants().len(), 3);
        assert_eq!(settings.get_glyphs().len(), 3);
        assert!(settings.get_show_markers());
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron(
            "(generator: (mode: bottom_row_empty, seed: 5))",
            Path::new("inline"),
        )
        .unwrap();

        let params = settings.get_generator();
        assert_eq!(params.mode, GenerationMode::BottomRowEmpty);
        assert_eq!(params.seed, Some(5));
        assert_eq!(params.right_wall_prob, 0.5);
        assert_eq!(settings.get_grid(), GridConfig::default());
        assert_eq!(settings.get_glyphs(), vec!['#']);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            Settings::from_ron("(palette: [])", Path::new("inline")),
            Err(Error::Settings(..))
        ));
    }

    #[test]
    fn settings_survive_serialization() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS, Path::new("default")).unwrap();
        let source = settings.to_ron().unwrap();
        let again = Settings::from_ron(&source, Path::new("again")).unwrap();

        assert_eq!(again.get_grid(), settings.get_grid());
        assert_eq!(again.get_palette(), settings.get_palette());
    }

    #[test]
    fn unknown_colors_default_to_white() {
        let scheme = ColorScheme {
            wall: "no such color".into(),
            ..Default::default()
        };
        assert_eq!(scheme.walls(), Color::White);
        assert_eq!(scheme.players(), Color::Green);
    }

    #[test]
    fn boss_color_is_optional() {
        let settings = Settings::from_ron(
            "(colors: (wall: \"blue\", player: \"green\", key: \"yellow\"))",
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(settings.get_colors().bosses(), Color::Red);
    }
}
