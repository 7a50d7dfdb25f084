/// Data structures for procedural terrain builds
use super::error::{ensure_positive, TerrainError, TerrainResult};
use serde::{Deserialize, Serialize};

/// Samples per detail patch attached alongside the heightmap resolution
pub const DETAIL_RESOLUTION_PER_PATCH: usize = 16;

/// Largest accepted width or length, in world units (a 4097² grid)
pub const MAX_TERRAIN_EXTENT: u32 = 4096;

/// World-space triple, used for positions and scale factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1)
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        Vec3 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Kinds of objects the scatterer can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Tree,
    Bush,
    Rock,
    FlowerRed,
    FlowerBlue,
    Water,
    Cloud,
}

impl ItemKind {
    /// Decoration catalog used when none is configured
    pub const DEFAULT_CATALOG: [ItemKind; 5] = [
        ItemKind::Tree,
        ItemKind::Bush,
        ItemKind::Rock,
        ItemKind::FlowerBlue,
        ItemKind::FlowerRed,
    ];

    /// Whether this kind rests directly on the sampled terrain surface
    pub fn is_decoration(self) -> bool {
        !matches!(self, ItemKind::Water | ItemKind::Cloud)
    }
}

/// One scattered object, handed to the renderer for instantiation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: ItemKind,
    pub position: Vec3,
    pub scale: Vec3,
}

/// Terrain layer identifier paired with its tile size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureBinding {
    pub layer: String,
    pub tile_size: [f32; 2],
}

impl TextureBinding {
    pub fn new(layer: impl Into<String>, tile_size: [f32; 2]) -> TerrainResult<Self> {
        let layer = layer.into();
        if layer.trim().is_empty() {
            return Err(TerrainError::InvalidTextureLayer(
                "layer identifier is empty".to_string(),
            ));
        }
        if tile_size.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(TerrainError::InvalidTextureLayer(format!(
                "tile size must be positive, got {}x{}",
                tile_size[0], tile_size[1]
            )));
        }
        Ok(Self { layer, tile_size })
    }
}

/// Heightmap resolution for the given extents: next power of two, plus one
///
/// Extents above [`MAX_TERRAIN_EXTENT`] are rejected before any size
/// arithmetic can overflow.
pub fn resolution_for(width: u32, length: u32) -> TerrainResult<usize> {
    let too_large = TerrainError::TooLarge {
        width,
        length,
        max: MAX_TERRAIN_EXTENT,
    };
    if width.max(length) > MAX_TERRAIN_EXTENT {
        return Err(too_large);
    }
    (width.max(length) as usize)
        .checked_next_power_of_two()
        .and_then(|base| base.checked_add(1))
        .filter(|resolution| resolution.checked_mul(*resolution).is_some())
        .ok_or(too_large)
}

/// Square grid of normalized heights covering `width × length` world units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightField {
    /// World extent along X
    pub width: u32,
    /// World extent along Z
    pub length: u32,
    /// World height of a normalized sample of 1.0
    pub max_height: f32,
    /// Samples per axis
    pub resolution: usize,
    pub detail_resolution: usize,
    pub detail_resolution_per_patch: usize,
    /// Row-major samples in [0, 1]: heights[z * resolution + x]
    pub heights: Vec<f32>,
    /// Presentation metadata, attached once by the pipeline
    pub texture: Option<TextureBinding>,
}

impl HeightField {
    /// Create a flat field with every sample at 0
    pub fn new(width: u32, length: u32, max_height: f32) -> TerrainResult<Self> {
        ensure_positive("width", width as f32)?;
        ensure_positive("length", length as f32)?;
        ensure_positive("max_height", max_height)?;

        let resolution = resolution_for(width, length)?;
        Ok(Self {
            width,
            length,
            max_height,
            resolution,
            detail_resolution: resolution,
            detail_resolution_per_patch: DETAIL_RESOLUTION_PER_PATCH,
            heights: vec![0.0; resolution * resolution],
            texture: None,
        })
    }

    /// Normalized sample at grid coordinates (0 outside the grid)
    pub fn get(&self, x: usize, z: usize) -> f32 {
        if x >= self.resolution || z >= self.resolution {
            return 0.0;
        }
        self.heights[z * self.resolution + x]
    }

    /// Store a normalized sample, clamped into [0, 1]
    pub fn set(&mut self, x: usize, z: usize, value: f32) {
        if x < self.resolution && z < self.resolution {
            self.heights[z * self.resolution + x] = value.clamp(0.0, 1.0);
        }
    }

    /// World position of a grid sample along X
    pub fn grid_to_world_x(&self, x: usize) -> f32 {
        x as f32 / (self.resolution - 1) as f32 * self.width as f32
    }

    /// World position of a grid sample along Z
    pub fn grid_to_world_z(&self, z: usize) -> f32 {
        z as f32 / (self.resolution - 1) as f32 * self.length as f32
    }

    /// Bilinearly interpolated normalized height at world (x, z)
    ///
    /// Positions outside the field clamp to the nearest edge.
    pub fn sample_normalized(&self, world_x: f32, world_z: f32) -> f32 {
        let last = (self.resolution - 1) as f32;
        let grid_x = (world_x / self.width as f32 * last).clamp(0.0, last);
        let grid_z = (world_z / self.length as f32 * last).clamp(0.0, last);

        let x0 = grid_x.floor() as usize;
        let z0 = grid_z.floor() as usize;
        let x1 = (x0 + 1).min(self.resolution - 1);
        let z1 = (z0 + 1).min(self.resolution - 1);

        let fx = grid_x - x0 as f32;
        let fz = grid_z - z0 as f32;

        let h00 = self.get(x0, z0);
        let h10 = self.get(x1, z0);
        let h01 = self.get(x0, z1);
        let h11 = self.get(x1, z1);

        let h0 = h00 * (1.0 - fx) + h10 * fx;
        let h1 = h01 * (1.0 - fx) + h11 * fx;

        h0 * (1.0 - fz) + h1 * fz
    }

    /// World-space height at world (x, z)
    pub fn sample_height(&self, world_x: f32, world_z: f32) -> f32 {
        self.sample_normalized(world_x, world_z) * self.max_height
    }

    /// Highest world-space height over every grid sample
    pub fn max_height_sample(&self) -> f32 {
        self.heights.iter().copied().fold(0.0_f32, f32::max) * self.max_height
    }

    /// Overwrite a square window of samples with `value`
    ///
    /// The window is truncated at the grid edge, so callers may pass any base.
    pub fn flatten_window(&mut self, x_base: usize, z_base: usize, extent: usize, value: f32) {
        let value = value.clamp(0.0, 1.0);
        let x_end = (x_base + extent).min(self.resolution);
        let z_end = (z_base + extent).min(self.resolution);

        for z in z_base.min(z_end)..z_end {
            let row = z * self.resolution;
            for cell in &mut self.heights[row + x_base.min(x_end)..row + x_end] {
                *cell = value;
            }
        }
    }
}
