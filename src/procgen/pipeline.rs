/// Fixed-order terrain build: heights, texture, path, scatter, spawn
use super::error::{ensure_positive, TerrainError, TerrainResult};
use super::path::PathCarver;
use super::scatter::{validate_catalog, Scatterer};
use super::terrain::HeightGenerator;
use super::world_data::{resolution_for, HeightField, Placement, TextureBinding, Vec3};
use crate::config::TerrainBuildConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Fully populated scene handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainBuildResult {
    pub seed: u64,
    pub field: HeightField,
    pub texture: TextureBinding,
    pub waypoints: Vec<Vec3>,
    pub spawn_point: Vec3,
    pub decorations: Vec<Placement>,
    pub water_bodies: Vec<Placement>,
    pub clouds: Vec<Placement>,
}

impl TerrainBuildResult {
    pub fn placement_count(&self) -> usize {
        self.decorations.len() + self.water_bodies.len() + self.clouds.len()
    }
}

/// Validated build plan; each call to `build` runs every stage in order
#[derive(Debug, Clone)]
pub struct TerrainBuildPipeline {
    config: TerrainBuildConfig,
    generator_octaves: u32,
    carver: PathCarver,
    scatterer: Scatterer,
    texture: TextureBinding,
}

impl TerrainBuildPipeline {
    /// Validate `config` up front so a failing build never allocates a grid
    pub fn new(config: TerrainBuildConfig) -> TerrainResult<Self> {
        let terrain = &config.terrain;
        ensure_positive("width", terrain.width as f32)?;
        ensure_positive("length", terrain.length as f32)?;
        ensure_positive("max_height", terrain.max_height)?;
        ensure_positive("scale", terrain.scale)?;
        resolution_for(terrain.width, terrain.length)?;
        if terrain.octaves == 0 {
            return Err(TerrainError::InvalidCount { field: "octaves" });
        }
        if config.path.step_count == 0 {
            return Err(TerrainError::InvalidCount { field: "step_count" });
        }

        let carver = PathCarver::new(config.path.corridor_width, config.path.grade)?;
        let scatter = &config.scatter;
        let counts = [
            ("decoration_count", scatter.decoration_count),
            ("water_body_count", scatter.water_body_count),
            ("cloud_count", scatter.cloud_count),
        ];
        if let Some(&(field, _)) = counts.iter().find(|(_, count)| *count == 0) {
            return Err(TerrainError::InvalidCount { field });
        }
        validate_catalog(&scatter.catalog, scatter.decoration_count)?;
        let scatterer = Scatterer::new(
            scatter.water_depth,
            scatter.water_scale,
            scatter.cloud_offset,
            scatter.cloud_jitter,
            scatter.cloud_scale,
        )?;
        let texture = TextureBinding::new(config.texture.layer.clone(), config.texture.tile_size)?;
        let generator_octaves = terrain.octaves;

        Ok(Self {
            config,
            generator_octaves,
            carver,
            scatterer,
            texture,
        })
    }

    pub fn config(&self) -> &TerrainBuildConfig {
        &self.config
    }

    /// Run the build with a generator seeded from the configured seed
    pub fn build(&self) -> TerrainResult<TerrainBuildResult> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.build_with_rng(&mut rng)
    }

    /// Run the build drawing every random choice from `rng`
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> TerrainResult<TerrainBuildResult> {
        let terrain = &self.config.terrain;
        let path = &self.config.path;
        let scatter = &self.config.scatter;

        info!(
            "Starting terrain build: {}x{} (seed {})",
            terrain.width, terrain.length, self.config.seed
        );

        // Noise seed keeps the low 32 bits of the build seed
        let generator = HeightGenerator::new(self.config.seed as u32, self.generator_octaves)?;
        let mut field =
            generator.generate(terrain.width, terrain.length, terrain.max_height, terrain.scale)?;

        field.texture = Some(self.texture.clone());
        info!(
            "Applied texture layer '{}' ({}x{} tiles)",
            self.texture.layer, self.texture.tile_size[0], self.texture.tile_size[1]
        );

        let waypoints = self.carver.carve_straight_path(
            &mut field,
            path.start_or_default(),
            path.end_or_default(terrain),
            path.step_count,
        )?;

        let decorations =
            self.scatterer
                .scatter_decorations(&field, &scatter.catalog, scatter.decoration_count, rng)?;
        let water_bodies = self
            .scatterer
            .scatter_water_bodies(&field, scatter.water_body_count, rng);
        let clouds = self.scatterer.scatter_clouds(&field, scatter.cloud_count, rng);

        let spawn_point = waypoints[rng.gen_range(0..waypoints.len())];
        info!(
            "Spawn point selected at ({:.2}, {:.2}, {:.2})",
            spawn_point.x, spawn_point.y, spawn_point.z
        );

        Ok(TerrainBuildResult {
            seed: self.config.seed,
            texture: self.texture.clone(),
            field,
            waypoints,
            spawn_point,
            decorations,
            water_bodies,
            clouds,
        })
    }
}

/// Validate and run a build in one call
pub fn build(config: TerrainBuildConfig) -> TerrainResult<TerrainBuildResult> {
    TerrainBuildPipeline::new(config)?.build()
}
