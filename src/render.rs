use std::fmt::Write as _;

use colored::Colorize as _;
use eller::{dims::Dims, surface::TileMap};

use crate::{
    settings::ColorScheme,
    spawn::{Marker, MarkerKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Empty,
    Wall(u16),
    Marker(MarkerKind),
}

/// Snapshot of a tile map, one glyph per tile, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<Glyph>>,
}

impl Canvas {
    pub fn draw(map: &TileMap, markers: &[Marker]) -> Self {
        let Some((min, max)) = map.bounds() else {
            return Self { rows: Vec::new() };
        };

        let rows = Dims::iter_fill(min, max + Dims(1, 1))
            .map(|pos| {
                if let Some(marker) = markers.iter().find(|m| m.pos == pos) {
                    Glyph::Marker(marker.kind)
                } else {
                    map.get(pos).map_or(Glyph::Empty, |tile| Glyph::Wall(tile.0))
                }
            })
            .collect::<Vec<_>>()
            .chunks((max.0 - min.0 + 1) as usize)
            .map(<[Glyph]>::to_vec)
            .collect();

        Self { rows }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    #[cfg(test)]
    pub fn glyph_at(&self, x: usize, y: usize) -> Option<Glyph> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Plain text, without any colors.
    pub fn to_plain(&self, glyphs: &[char]) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.extend(row.iter().map(|&g| Self::char_of(g, glyphs)));
            out.push('\n');
        }
        out
    }

    pub fn paint(&self, glyphs: &[char], colors: &ColorScheme) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for &glyph in row {
                let ch = Self::char_of(glyph, glyphs).to_string();
                let _ = match glyph {
                    Glyph::Empty => write!(out, "{}", ch),
                    Glyph::Wall(_) => write!(out, "{}", ch.color(colors.walls())),
                    Glyph::Marker(MarkerKind::Player) => {
                        write!(out, "{}", ch.color(colors.players()).bold())
                    }
                    Glyph::Marker(MarkerKind::Key) => {
                        write!(out, "{}", ch.color(colors.keys()).bold())
                    }
                    Glyph::Marker(MarkerKind::Boss) => {
                        write!(out, "{}", ch.color(colors.bosses()).bold())
                    }
                };
            }
            out.push('\n');
        }
        out
    }

    fn char_of(glyph: Glyph, glyphs: &[char]) -> char {
        match glyph {
            Glyph::Empty => ' ',
            Glyph::Wall(_) if glyphs.is_empty() => '#',
            Glyph::Wall(variant) => glyphs[variant as usize % glyphs.len()],
            Glyph::Marker(kind) => kind.glyph(),
        }
    }
}
