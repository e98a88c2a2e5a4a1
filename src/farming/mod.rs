//! Farming domain — plants, watering, growth stages, harvest.
//!
//! Plants are plain data owned by `crate::model::FarmModel`; this module
//! only knows how a single plant behaves.

pub mod crops;

pub use crops::Plant;
