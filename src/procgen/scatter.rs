/// Randomized placement of decorations, water bodies and clouds
use super::error::{ensure_positive, ensure_range, TerrainError, TerrainResult};
use super::world_data::{HeightField, ItemKind, Placement, Vec3};
use rand::Rng;
use tracing::{debug, info};

/// Depth of water bodies below the sampled terrain
pub const DEFAULT_WATER_DEPTH: f32 = 0.5;
pub const DEFAULT_WATER_SCALE: Vec3 = Vec3::new(10.0, 1.0, 10.0);
/// Height of the cloud layer above the highest terrain sample
pub const DEFAULT_CLOUD_OFFSET: f32 = 30.0;
pub const DEFAULT_CLOUD_JITTER: [f32; 2] = [10.0, 20.0];
pub const DEFAULT_CLOUD_SCALE: [f32; 2] = [3.0, 10.0];

/// Check that `count` decorations can be drawn from `catalog`
pub fn validate_catalog(catalog: &[ItemKind], count: usize) -> TerrainResult<()> {
    if count > 0 && catalog.is_empty() {
        return Err(TerrainError::EmptyCatalog { requested: count });
    }
    match catalog.iter().find(|kind| !kind.is_decoration()) {
        Some(kind) => Err(TerrainError::InvalidCatalogEntry(*kind)),
        None => Ok(()),
    }
}

/// Places objects at uniformly random terrain positions
///
/// All randomness comes from the generator passed to each call, so a seeded
/// generator reproduces the same placements.
#[derive(Debug, Clone)]
pub struct Scatterer {
    water_depth: f32,
    water_scale: Vec3,
    cloud_offset: f32,
    cloud_jitter: [f32; 2],
    cloud_scale: [f32; 2],
}

impl Default for Scatterer {
    fn default() -> Self {
        Self {
            water_depth: DEFAULT_WATER_DEPTH,
            water_scale: DEFAULT_WATER_SCALE,
            cloud_offset: DEFAULT_CLOUD_OFFSET,
            cloud_jitter: DEFAULT_CLOUD_JITTER,
            cloud_scale: DEFAULT_CLOUD_SCALE,
        }
    }
}

impl Scatterer {
    pub fn new(
        water_depth: f32,
        water_scale: Vec3,
        cloud_offset: f32,
        cloud_jitter: [f32; 2],
        cloud_scale: [f32; 2],
    ) -> TerrainResult<Self> {
        if !water_depth.is_finite() || water_depth < 0.0 {
            return Err(TerrainError::NonPositive {
                field: "water_depth",
                value: water_depth,
            });
        }
        ensure_positive("water_scale.x", water_scale.x)?;
        ensure_positive("water_scale.y", water_scale.y)?;
        ensure_positive("water_scale.z", water_scale.z)?;
        if !cloud_offset.is_finite() {
            return Err(TerrainError::NonPositive {
                field: "cloud_offset",
                value: cloud_offset,
            });
        }
        ensure_range("cloud_jitter", cloud_jitter)?;
        ensure_range("cloud_scale", cloud_scale)?;
        ensure_positive("cloud_scale", cloud_scale[0])?;

        Ok(Self {
            water_depth,
            water_scale,
            cloud_offset,
            cloud_jitter,
            cloud_scale,
        })
    }

    pub fn water_depth(&self) -> f32 {
        self.water_depth
    }

    pub fn cloud_offset(&self) -> f32 {
        self.cloud_offset
    }

    /// Uniform world (x, z) inside the field, with y sampled from the terrain
    pub fn random_position<R: Rng + ?Sized>(&self, field: &HeightField, rng: &mut R) -> Vec3 {
        let x = rng.gen_range(0.0..field.width as f32);
        let z = rng.gen_range(0.0..field.length as f32);
        Vec3::new(x, field.sample_height(x, z), z)
    }

    /// Vegetation, rocks and flowers resting on the terrain
    pub fn scatter_decorations<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        catalog: &[ItemKind],
        count: usize,
        rng: &mut R,
    ) -> TerrainResult<Vec<Placement>> {
        validate_catalog(catalog, count)?;

        let placements: Vec<Placement> = (0..count)
            .map(|_| {
                let kind = catalog[rng.gen_range(0..catalog.len())];
                Placement {
                    kind,
                    position: self.random_position(field, rng),
                    scale: Vec3::ONE,
                }
            })
            .collect();

        info!("Scattered {} decoration(s) from {} kind(s)", placements.len(), catalog.len());
        Ok(placements)
    }

    /// Water bodies sunk `water_depth` below the terrain
    pub fn scatter_water_bodies<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        count: usize,
        rng: &mut R,
    ) -> Vec<Placement> {
        let placements: Vec<Placement> = (0..count)
            .map(|_| {
                let mut position = self.random_position(field, rng);
                position.y -= self.water_depth;
                Placement {
                    kind: ItemKind::Water,
                    position,
                    scale: self.water_scale,
                }
            })
            .collect();

        info!("Scattered {} water body placement(s)", placements.len());
        placements
    }

    /// Clouds floating above the highest point of the terrain
    pub fn scatter_clouds<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        count: usize,
        rng: &mut R,
    ) -> Vec<Placement> {
        if count == 0 {
            return Vec::new();
        }

        let cloud_base = field.max_height_sample() + self.cloud_offset;
        debug!("Cloud base altitude {:.2}", cloud_base);

        let [jitter_min, jitter_max] = self.cloud_jitter;
        let [scale_min, scale_max] = self.cloud_scale;

        let placements: Vec<Placement> = (0..count)
            .map(|_| {
                let mut position = self.random_position(field, rng);
                position.y = cloud_base + rng.gen_range(jitter_min..=jitter_max);
                Placement {
                    kind: ItemKind::Cloud,
                    position,
                    scale: Vec3::splat(rng.gen_range(scale_min..=scale_max)),
                }
            })
            .collect();

        info!("Scattered {} cloud(s)", placements.len());
        placements
    }
}
