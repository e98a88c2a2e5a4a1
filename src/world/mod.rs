//! World domain — the static ground layout of the farm.

pub mod maps;

pub use maps::TileMap;

/// Built-in 10×10 farm used when no map file is given: a tillable field in
/// the middle, a pond in the bottom-right corner, grass around the edges.
pub const DEFAULT_FARM: &str = "\
@ 0 0 s
GGGGGGGGGG
GUUUUUUUUG
GUUUUUUUUG
GUUSSSUUUG
GUUSSSUUUG
GUUUUUUUUG
GUUUUUUUUG
GGGGGGGWWW
GGGGGGGWWW
GGGGGGGWWW
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_farm_loads() {
        let map = TileMap::load(DEFAULT_FARM).expect("built-in map must parse");
        assert_eq!(map.dimensions(), (10, 10));
    }
}
