use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use terrain_forge::config::TerrainBuildConfig;
use terrain_forge::procgen::{
    build, corridor_window, resolution_for, HeightField, HeightGenerator, PathCarver, Scatterer,
    Vec3,
};

fn field_with(width: u32, length: u32, values: &[f32]) -> HeightField {
    let mut field = HeightField::new(width, length, 10.0).unwrap();
    for (i, h) in field.heights.iter_mut().enumerate() {
        *h = values[i % values.len()];
    }
    field
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolution_is_next_power_of_two_plus_one(width in 1u32..=4096, length in 1u32..=4096) {
        let resolution = resolution_for(width, length).unwrap();
        let base = resolution - 1;
        prop_assert!(base.is_power_of_two());
        prop_assert!(base >= width.max(length) as usize);
        prop_assert!(base / 2 < width.max(length) as usize);
    }

    #[test]
    fn oversized_terrain_is_rejected(width in 4097u32..=u32::MAX, length in 1u32..=4096) {
        prop_assert!(resolution_for(width, length).is_err());
        prop_assert!(resolution_for(length, width).is_err());
    }

    #[test]
    fn generated_heights_stay_normalized(
        width in 1u32..96,
        length in 1u32..96,
        scale in 0.01f32..100.0,
        seed in any::<u32>(),
        octaves in 1u32..5,
    ) {
        let generator = HeightGenerator::new(seed, octaves).unwrap();
        let field = generator.generate(width, length, 20.0, scale).unwrap();
        prop_assert_eq!(field.heights.len(), field.resolution * field.resolution);
        prop_assert!(field.heights.iter().all(|h| (0.0..=1.0).contains(h)));
    }

    #[test]
    fn built_heights_stay_normalized(
        seed in any::<u64>(),
        width in 4u32..80,
        length in 4u32..80,
        corridor in 0.5f32..200.0,
    ) {
        let mut config = TerrainBuildConfig::default();
        config.seed = seed;
        config.terrain.width = width;
        config.terrain.length = length;
        config.path.corridor_width = corridor;
        config.path.step_count = 20;
        config.scatter.decoration_count = 5;

        let result = build(config).unwrap();
        prop_assert!(result.field.heights.iter().all(|h| (0.0..=1.0).contains(h)));
        prop_assert_eq!(result.waypoints.len(), 21);
    }

    #[test]
    fn flattening_is_idempotent(
        x in -80.0f32..160.0,
        z in -80.0f32..160.0,
        corridor in 0.1f32..300.0,
        seed in any::<u32>(),
    ) {
        let generator = HeightGenerator::new(seed, 1).unwrap();
        let mut once = generator.generate(64, 48, 20.0, 6.0).unwrap();
        let carver = PathCarver::new(corridor, 0.0).unwrap();
        let point = Vec3::new(x, 0.0, z);

        carver.flatten_at(&mut once, point);
        let mut twice = once.clone();
        carver.flatten_at(&mut twice, point);
        prop_assert_eq!(once.heights, twice.heights);
    }

    #[test]
    fn corridor_windows_stay_in_bounds(
        width in 1u32..200,
        length in 1u32..200,
        x in -1000.0f32..1000.0,
        z in -1000.0f32..1000.0,
        corridor in 0.0f32..5000.0,
    ) {
        let field = HeightField::new(width, length, 1.0).unwrap();
        let window = corridor_window(&field, x, z, corridor);
        prop_assert!(window.extent <= field.resolution);
        prop_assert!(window.x_base + window.extent <= field.resolution);
        prop_assert!(window.z_base + window.extent <= field.resolution);
    }

    #[test]
    fn corridor_writes_only_touch_the_window(
        x in -100.0f32..200.0,
        z in -100.0f32..200.0,
        corridor in 0.1f32..400.0,
    ) {
        let mut field = field_with(64, 64, &[1.0]);
        let carver = PathCarver::new(corridor, 0.0).unwrap();
        let window = carver.flatten_at(&mut field, Vec3::new(x, 0.0, z));

        let flattened = field.heights.iter().filter(|h| **h == 0.0).count();
        prop_assert_eq!(flattened, window.extent * window.extent);
        prop_assert_eq!(field.heights.len(), field.resolution * field.resolution);
    }

    #[test]
    fn max_scan_matches_brute_force(values in proptest::collection::vec(0.0f32..=1.0, 1..64)) {
        let field = field_with(16, 16, &values);
        let mut expected = 0.0f32;
        for z in 0..field.resolution {
            for x in 0..field.resolution {
                expected = expected.max(field.get(x, z));
            }
        }
        prop_assert_eq!(field.max_height_sample(), expected * field.max_height);
    }

    #[test]
    fn water_sits_exactly_below_its_sample(seed in any::<u64>(), depth in 0.0f32..5.0) {
        let field = field_with(32, 32, &[0.1, 0.7, 0.4, 0.9]);
        let scatterer = Scatterer::new(depth, Vec3::new(10.0, 1.0, 10.0), 30.0, [10.0, 20.0], [3.0, 10.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for placement in scatterer.scatter_water_bodies(&field, 8, &mut rng) {
            let p = placement.position;
            let sampled = field.sample_height(p.x, p.z);
            prop_assert!((p.y - (sampled - depth)).abs() < 1e-4);
        }
    }
}

#[test]
fn max_scan_handles_uniform_grids() {
    let zeros = field_with(16, 16, &[0.0]);
    assert_eq!(zeros.max_height_sample(), 0.0);

    let ones = field_with(16, 16, &[1.0]);
    assert_eq!(ones.max_height_sample(), ones.max_height);
}
