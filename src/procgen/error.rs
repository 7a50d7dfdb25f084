/// Errors raised while validating or running a terrain build
use super::world_data::ItemKind;
use thiserror::Error;

pub type TerrainResult<T> = Result<T, TerrainError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be at least 1")]
    InvalidCount { field: &'static str },
    #[error("{requested} decoration(s) requested but the catalog is empty")]
    EmptyCatalog { requested: usize },
    #[error("{0:?} cannot be scattered as a decoration")]
    InvalidCatalogEntry(ItemKind),
    #[error("Invalid texture layer: {0}")]
    InvalidTextureLayer(String),
    #[error("Terrain too large: {width}x{length} (max: {max}x{max})")]
    TooLarge { width: u32, length: u32, max: u32 },
    #[error("{field} range is invalid: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Reject zero, negative and non-finite values
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> TerrainResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TerrainError::NonPositive { field, value })
    }
}

/// Reject empty or inverted `[min, max)` sampling ranges
pub(crate) fn ensure_range(field: &'static str, range: [f32; 2]) -> TerrainResult<[f32; 2]> {
    let [min, max] = range;
    if min.is_finite() && max.is_finite() && min < max {
        Ok(range)
    } else {
        Err(TerrainError::InvalidRange { field, min, max })
    }
}
