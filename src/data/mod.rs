//! Data layer — hard-coded game-design tables.
//!
//! Species growth tables live in `crops`, the item catalogue in `items`.
//! Prices are configuration and live in `crate::config`.

pub mod crops;
pub mod items;

pub use crops::{DroughtPolicy, GrowthStage, HarvestPolicy, Species, SpeciesDef};
pub use items::ItemKind;
