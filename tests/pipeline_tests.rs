use terrain_forge::config::TerrainBuildConfig;
use terrain_forge::procgen::{build, ItemKind, TerrainBuildPipeline, TerrainError, Vec3};

/// 64×64 terrain, diagonal path, seed 42
fn scenario_config() -> TerrainBuildConfig {
    let mut config = TerrainBuildConfig::default();
    config.seed = 42;
    config.terrain.width = 64;
    config.terrain.length = 64;
    config.terrain.max_height = 20.0;
    config.terrain.scale = 20.0;
    config.path.start = Some(Vec3::new(0.0, 0.0, 0.0));
    config.path.end = Some(Vec3::new(64.0, 0.0, 64.0));
    config.path.step_count = 100;
    config.path.corridor_width = 5.0;
    config.scatter.decoration_count = 50;
    config.scatter.water_body_count = 2;
    config.scatter.cloud_count = 10;
    config
}

#[test]
fn test_scenario_grid_and_path() {
    let result = build(scenario_config()).unwrap();

    assert_eq!(result.field.resolution, 65);
    assert_eq!(result.field.heights.len(), 65 * 65);
    assert!(result.field.heights.iter().all(|h| (0.0..=1.0).contains(h)));

    assert_eq!(result.waypoints.len(), 101);
    let first = result.waypoints[0];
    let last = result.waypoints[100];
    assert_eq!((first.x, first.z), (0.0, 0.0));
    assert_eq!((last.x, last.z), (64.0, 64.0));
    for pair in result.waypoints.windows(2) {
        assert!(pair[1].x > pair[0].x && pair[1].z > pair[0].z);
        assert!((pair[0].x - pair[0].z).abs() < 1e-4);
    }
    assert!(result.waypoints.contains(&result.spawn_point));
}

#[test]
fn test_scenario_path_is_flattened() {
    let result = build(scenario_config()).unwrap();

    for point in &result.waypoints {
        assert_eq!(point.y, result.field.sample_height(point.x, point.z));
        assert!(point.y.abs() < 1e-4, "waypoint at ({}, {}) sits at {}", point.x, point.z, point.y);
    }
}

#[test]
fn test_scenario_decorations_match_resample() {
    let result = build(scenario_config()).unwrap();

    assert_eq!(result.decorations.len(), 50);
    for placement in &result.decorations {
        assert!(ItemKind::DEFAULT_CATALOG.contains(&placement.kind));
        let p = placement.position;
        assert!((0.0..64.0).contains(&p.x) && (0.0..64.0).contains(&p.z));
        assert_eq!(p.y, result.field.sample_height(p.x, p.z));
    }
}

#[test]
fn test_scenario_water_bodies() {
    let result = build(scenario_config()).unwrap();

    assert_eq!(result.water_bodies.len(), 2);
    for placement in &result.water_bodies {
        let p = placement.position;
        let sampled = result.field.sample_height(p.x, p.z);
        assert!((p.y - (sampled - 0.5)).abs() < 1e-5);
        assert_eq!(placement.scale, Vec3::new(10.0, 1.0, 10.0));
    }
}

#[test]
fn test_scenario_clouds() {
    let result = build(scenario_config()).unwrap();
    let grid_max = result.field.heights.iter().copied().fold(0.0_f32, f32::max);

    assert_eq!(result.clouds.len(), 10);
    for placement in &result.clouds {
        assert!(placement.position.y >= grid_max * 20.0 + 30.0);
        assert!(placement.position.y <= grid_max * 20.0 + 50.0 + 1e-3);
        assert!((3.0..=10.0).contains(&placement.scale.x));
    }
}

#[test]
fn test_build_is_deterministic_for_a_seed() {
    let first = build(scenario_config()).unwrap();
    let second = build(scenario_config()).unwrap();

    assert_eq!(first.field.heights, second.field.heights);
    assert_eq!(first.waypoints, second.waypoints);
    assert_eq!(first.decorations, second.decorations);
    assert_eq!(first.water_bodies, second.water_bodies);
    assert_eq!(first.clouds, second.clouds);
    assert_eq!(first.spawn_point, second.spawn_point);
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let mut other = scenario_config();
    other.seed = 43;

    let a = build(scenario_config()).unwrap();
    let b = build(other).unwrap();
    assert_ne!(a.field.heights, b.field.heights);
    assert_ne!(a.decorations, b.decorations);
}

#[test]
fn test_pipeline_can_be_rebuilt() {
    let pipeline = TerrainBuildPipeline::new(scenario_config()).unwrap();
    assert_eq!(pipeline.build().unwrap(), pipeline.build().unwrap());
}

#[test]
fn test_rectangular_terrain() {
    let mut config = scenario_config();
    config.terrain.width = 100;
    config.terrain.length = 30;
    config.path.start = None;
    config.path.end = None;

    let result = build(config).unwrap();
    assert_eq!(result.field.resolution, 129);
    assert_eq!(result.waypoints.last().map(|p| (p.x, p.z)), Some((100.0, 30.0)));
    for placement in &result.decorations {
        assert!(placement.position.x < 100.0 && placement.position.z < 30.0);
    }
}

#[test]
fn test_path_outside_terrain_still_builds() {
    let mut config = scenario_config();
    config.path.start = Some(Vec3::new(-50.0, 0.0, -50.0));
    config.path.end = Some(Vec3::new(200.0, 0.0, 120.0));
    config.path.corridor_width = 1000.0;

    let result = build(config).unwrap();
    // A corridor wider than the grid flattens everything
    assert!(result.field.heights.iter().all(|h| *h == 0.0));
    assert_eq!(result.field.max_height_sample(), 0.0);
}

#[test]
fn test_invalid_config_fails_fast() {
    let mut config = scenario_config();
    config.terrain.max_height = 0.0;
    assert_eq!(
        build(config).unwrap_err(),
        TerrainError::NonPositive {
            field: "max_height",
            value: 0.0
        }
    );

    let mut config = scenario_config();
    config.scatter.catalog.clear();
    assert_eq!(
        build(config).unwrap_err(),
        TerrainError::EmptyCatalog { requested: 50 }
    );

    let mut config = scenario_config();
    config.texture.tile_size = [15.0, -1.0];
    assert!(matches!(
        build(config),
        Err(TerrainError::InvalidTextureLayer(_))
    ));
}
