//! meshcat-engine: the single entry point front ends call into.

pub mod engine;

pub use engine::CatalogEngine;
