use crate::procgen::scatter::{
    DEFAULT_CLOUD_JITTER, DEFAULT_CLOUD_OFFSET, DEFAULT_CLOUD_SCALE, DEFAULT_WATER_DEPTH,
    DEFAULT_WATER_SCALE,
};
use crate::procgen::world_data::{ItemKind, Vec3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything one terrain build needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainBuildConfig {
    /// Seeds both the noise field and the placement generator
    pub seed: u64,
    pub terrain: TerrainSettings,
    pub path: PathSettings,
    pub scatter: ScatterSettings,
    pub texture: TextureSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub width: u32,
    pub length: u32,
    pub max_height: f32,
    pub scale: f32,
    pub octaves: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Defaults to the terrain origin
    pub start: Option<Vec3>,
    /// Defaults to the far corner `(width, 0, length)`
    pub end: Option<Vec3>,
    pub step_count: usize,
    pub corridor_width: f32,
    /// Normalized height of the flattened corridor
    pub grade: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterSettings {
    pub decoration_count: usize,
    pub water_body_count: usize,
    pub cloud_count: usize,
    pub catalog: Vec<ItemKind>,
    pub water_depth: f32,
    pub water_scale: Vec3,
    pub cloud_offset: f32,
    pub cloud_jitter: [f32; 2],
    pub cloud_scale: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    pub layer: String,
    pub tile_size: [f32; 2],
}

impl Default for TerrainBuildConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            terrain: TerrainSettings::default(),
            path: PathSettings::default(),
            scatter: ScatterSettings::default(),
            texture: TextureSettings::default(),
        }
    }
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            width: 64,
            length: 64,
            max_height: 20.0,
            scale: 20.0,
            octaves: 1,
        }
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            step_count: 100,
            corridor_width: 5.0,
            grade: 0.0,
        }
    }
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            decoration_count: 50,
            water_body_count: 2,
            cloud_count: 10,
            catalog: ItemKind::DEFAULT_CATALOG.to_vec(),
            water_depth: DEFAULT_WATER_DEPTH,
            water_scale: DEFAULT_WATER_SCALE,
            cloud_offset: DEFAULT_CLOUD_OFFSET,
            cloud_jitter: DEFAULT_CLOUD_JITTER,
            cloud_scale: DEFAULT_CLOUD_SCALE,
        }
    }
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            layer: "grass".to_string(),
            tile_size: [15.0, 15.0],
        }
    }
}

impl PathSettings {
    pub fn start_or_default(&self) -> Vec3 {
        self.start.unwrap_or(Vec3::ZERO)
    }

    pub fn end_or_default(&self, terrain: &TerrainSettings) -> Vec3 {
        self.end
            .unwrap_or_else(|| Vec3::new(terrain.width as f32, 0.0, terrain.length as f32))
    }
}

/// Configuration file for the `terrain-forge` binary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub build: TerrainBuildConfig,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Scene file written after a build; skipped when unset
    pub path: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: Some("./terrain.msgpack".to_string()),
        }
    }
}

/// Where `AppConfig::load_or_default` got its values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File,
    Missing,
    /// The file exists but could not be read or parsed
    Invalid(String),
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid
    ///
    /// Returns the source alongside the config so the caller can report it
    /// once logging is set up.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, ConfigSource) {
        let path = path.as_ref();
        if !path.exists() {
            return (Self::default(), ConfigSource::Missing);
        }
        match Self::load(path) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => (Self::default(), ConfigSource::Invalid(e.to_string())),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
