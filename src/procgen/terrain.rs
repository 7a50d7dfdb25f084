/// Core heightfield generation logic
use super::error::{ensure_positive, TerrainError, TerrainResult};
use super::noise::TerrainNoise;
use super::world_data::HeightField;
use tracing::{debug, info};

/// Fills heightfields with layered Perlin noise
pub struct HeightGenerator {
    noise: TerrainNoise,
}

impl HeightGenerator {
    /// Create a generator for the given noise seed and octave count
    pub fn new(seed: u32, octaves: u32) -> TerrainResult<Self> {
        if octaves == 0 {
            return Err(TerrainError::InvalidCount { field: "octaves" });
        }
        Ok(Self {
            noise: TerrainNoise::new(seed, octaves),
        })
    }

    /// Generate a `width × length` heightfield
    ///
    /// Every grid sample is mapped back to its world position and the noise
    /// is evaluated at `(x / width * scale, z / length * scale)`.
    pub fn generate(
        &self,
        width: u32,
        length: u32,
        max_height: f32,
        scale: f32,
    ) -> TerrainResult<HeightField> {
        ensure_positive("scale", scale)?;
        let mut field = HeightField::new(width, length, max_height)?;

        info!(
            "Generating terrain heightfield: {}x{} samples for {}x{} world units",
            field.resolution, field.resolution, width, length
        );

        self.fill(&mut field, scale);
        Ok(field)
    }

    /// Overwrite every sample of an existing field with fresh noise
    pub fn fill(&self, field: &mut HeightField, scale: f32) {
        let resolution = field.resolution;
        let width = field.width as f32;
        let length = field.length as f32;

        for z in 0..resolution {
            let noise_z = field.grid_to_world_z(z) / length * scale;
            for x in 0..resolution {
                let noise_x = field.grid_to_world_x(x) / width * scale;
                field.set(x, z, self.noise.sample(noise_x, noise_z));
            }
        }

        debug!(
            "Filled {} samples using {} octave(s) at scale {}",
            field.heights.len(),
            self.noise.octaves(),
            scale
        );
    }
}
