/// Scene files for finished terrain builds
///
/// `.json` files use serde_json; every other extension is written as MessagePack.
use crate::procgen::TerrainBuildResult;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("MessagePack encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("MessagePack decode error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Json,
    MessagePack,
}

impl SceneFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SceneFormat::Json,
            _ => SceneFormat::MessagePack,
        }
    }
}

pub fn save_build<P: AsRef<Path>>(path: P, result: &TerrainBuildResult) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = match SceneFormat::from_path(path) {
        SceneFormat::Json => serde_json::to_vec_pretty(result)?,
        SceneFormat::MessagePack => rmp_serde::to_vec(result)?,
    };
    fs::write(path, bytes)?;
    tracing::info!("Wrote terrain scene to {}", path.display());
    Ok(())
}

pub fn load_build<P: AsRef<Path>>(path: P) -> Result<TerrainBuildResult, ExportError> {
    let path = path.as_ref();
    let content = fs::read(path)?;
    let result: TerrainBuildResult = match SceneFormat::from_path(path) {
        SceneFormat::Json => serde_json::from_slice(&content)?,
        SceneFormat::MessagePack => rmp_serde::from_slice(&content)?,
    };
    Ok(result)
}
