/// Layered coherent noise for heightfield generation
use noise::{NoiseFn, Perlin};

/// Octave-stacked Perlin sampler returning values in [0, 1]
pub struct TerrainNoise {
    /// One Perlin source per octave, base frequency first
    layers: Vec<Perlin>,
}

impl TerrainNoise {
    /// Create a sampler with `octaves` layers (at least one) seeded from `seed`
    pub fn new(seed: u32, octaves: u32) -> Self {
        let layers = (0..octaves.max(1))
            .map(|i| Perlin::new(seed.wrapping_add(i)))
            .collect();
        Self { layers }
    }

    pub fn octaves(&self) -> usize {
        self.layers.len()
    }

    /// Sample at a normalized noise coordinate
    ///
    /// Octave `k` runs at frequency `2^k` with amplitude `0.5^k`; the sum is
    /// normalized by the total amplitude and remapped from [-1, 1] to [0, 1].
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for layer in &self.layers {
            total += layer.get([x as f64 * frequency, y as f64 * frequency]) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        let normalized = total / max_amplitude;
        (((normalized + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
    }
}
