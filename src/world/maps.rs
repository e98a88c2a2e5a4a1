//! Tile map — the ground layout of the farm.
//!
//! A map is a fixed-size grid of `GroundKind` values stored row-major.
//! Only the Soil ↔ Untilled transition ever changes a cell after load.

use std::str::FromStr;

use crate::shared::*;

/// Ground grid plus the player start encoded in the map header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    /// Row-major tile data: tiles[row * width + col]
    tiles: Vec<GroundKind>,
    start: Position,
    start_facing: Facing,
}

impl TileMap {
    /// Parse a map description.
    ///
    /// Format:
    /// ```text
    /// # comment lines and blank lines are ignored
    /// @ 1 2 d        optional header: start row, start col, facing key
    /// GGGUU
    /// GSSUW
    /// ```
    /// Symbols: `G` grass, `S` tilled soil, `U` untilled soil, `W` water.
    pub fn load(description: &str) -> Result<Self, MapFormatError> {
        let mut header: Option<&str> = None;
        let mut rows: Vec<&str> = Vec::new();

        for line in description.lines() {
            let trimmed = line.trim_end();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('@') {
                if header.is_some() || !rows.is_empty() {
                    return Err(MapFormatError::BadHeader(trimmed.to_string()));
                }
                header = Some(trimmed);
                continue;
            }
            rows.push(trimmed);
        }

        let Some(first) = rows.first() else {
            return Err(MapFormatError::Empty);
        };
        let width = first.chars().count();
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapFormatError::RaggedRow { row, expected: width, found });
            }
            for (col, symbol) in line.chars().enumerate() {
                let kind = GroundKind::from_symbol(symbol)
                    .ok_or(MapFormatError::UnknownSymbol { row, col, symbol })?;
                tiles.push(kind);
            }
        }

        let (start, start_facing) = match header {
            Some(line) => parse_header(line)?,
            None => ((0, 0), Facing::Down),
        };

        let map = Self { width, height, tiles, start, start_facing };
        match map.get(start) {
            Ok(ground) if ground.is_walkable() => Ok(map),
            _ => Err(MapFormatError::BadStart(start)),
        }
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn contains(&self, (row, col): Position) -> bool {
        row < self.height && col < self.width
    }

    pub fn get(&self, pos: Position) -> Result<GroundKind, FarmError> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Untilled → Soil. Every other ground kind refuses.
    pub fn till(&mut self, pos: Position) -> Result<(), FarmError> {
        let i = self.index(pos)?;
        match self.tiles[i] {
            GroundKind::Untilled => {
                self.tiles[i] = GroundKind::Soil;
                Ok(())
            }
            ground => Err(FarmError::NotTillable { pos, ground }),
        }
    }

    /// Soil → Untilled, the exact inverse of `till`.
    pub fn untill(&mut self, pos: Position) -> Result<(), FarmError> {
        let i = self.index(pos)?;
        match self.tiles[i] {
            GroundKind::Soil => {
                self.tiles[i] = GroundKind::Untilled;
                Ok(())
            }
            ground => Err(FarmError::NotTilled { pos, ground }),
        }
    }

    /// Ground layout as one symbol string per row.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| row.iter().map(|g| g.symbol()).collect())
            .collect()
    }

    /// Every cell with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, GroundKind)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &g)| ((i / width, i % width), g))
    }

    pub fn start(&self) -> (Position, Facing) {
        (self.start, self.start_facing)
    }

    fn index(&self, pos: Position) -> Result<usize, FarmError> {
        if self.contains(pos) {
            Ok(pos.0 * self.width + pos.1)
        } else {
            Err(FarmError::OutOfBounds(pos))
        }
    }
}

impl FromStr for TileMap {
    type Err = MapFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileMap::load(s)
    }
}

fn parse_header(line: &str) -> Result<(Position, Facing), MapFormatError> {
    let bad = || MapFormatError::BadHeader(line.to_string());
    let mut parts = line.trim_start_matches('@').split_whitespace();

    let row = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let col = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let facing = match parts.next() {
        None => Facing::Down,
        Some(key) => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Facing::from_key(c).ok_or_else(bad)?,
                _ => return Err(bad()),
            }
        }
    };
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok(((row, col), facing))
}
