/// Procedural terrain synthesis
///
/// Heightfield generation from layered noise, straight-line path carving,
/// and randomized object scattering, tied together by a fixed-order build
/// pipeline.

pub mod error;
pub mod noise;
pub mod path;
pub mod pipeline;
pub mod scatter;
pub mod terrain;
pub mod world_data;

// Re-export main types for convenience
pub use error::{TerrainError, TerrainResult};
pub use path::{corridor_window, straight_line, CorridorWindow, PathCarver};
pub use pipeline::{build, TerrainBuildPipeline, TerrainBuildResult};
pub use scatter::Scatterer;
pub use terrain::HeightGenerator;
pub use world_data::{resolution_for, HeightField, ItemKind, Placement, TextureBinding, Vec3};
