/// Path waypoint generation and corridor flattening
use super::error::{ensure_positive, TerrainError, TerrainResult};
use super::world_data::{HeightField, Vec3};
use tracing::{debug, info};

/// Square block of grid samples flattened around one waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorridorWindow {
    pub x_base: usize,
    pub z_base: usize,
    /// Side length in samples
    pub extent: usize,
    /// The window had to be moved or shrunk to stay inside the grid
    pub clamped: bool,
}

/// Compute the grid window covered by a corridor centred on world (x, z)
///
/// Positions scale by `resolution / width` (and `/ length`); the corridor
/// width scales by `resolution / max(width, length)`. The base is clamped to
/// `[0, resolution - extent]` and an extent wider than the grid covers all of it.
/// A positive corridor always covers at least one sample; when it rounds below
/// that the window is widened to one sample and reported as clamped.
pub fn corridor_window(
    field: &HeightField,
    world_x: f32,
    world_z: f32,
    corridor_width: f32,
) -> CorridorWindow {
    let resolution = field.resolution as f32;
    let pos_x = (world_x / field.width as f32 * resolution).round() as i64;
    let pos_z = (world_z / field.length as f32 * resolution).round() as i64;

    let larger = field.width.max(field.length) as f32;
    let raw_extent = (corridor_width / larger * resolution).round().max(0.0) as usize;
    let extent = if corridor_width > 0.0 {
        raw_extent.clamp(1, field.resolution)
    } else {
        0
    };

    let half = (extent / 2) as i64;
    let max_base = (field.resolution - extent) as i64;
    let wanted_x = pos_x - half;
    let wanted_z = pos_z - half;
    let x_base = wanted_x.clamp(0, max_base);
    let z_base = wanted_z.clamp(0, max_base);

    CorridorWindow {
        x_base: x_base as usize,
        z_base: z_base as usize,
        extent,
        clamped: raw_extent != extent || wanted_x != x_base || wanted_z != z_base,
    }
}

/// Evenly spaced points from `start` to `end`, both ends included
pub fn straight_line(start: Vec3, end: Vec3, step_count: usize) -> TerrainResult<Vec<Vec3>> {
    if step_count == 0 {
        return Err(TerrainError::InvalidCount { field: "step_count" });
    }
    Ok((0..=step_count)
        .map(|i| start.lerp(end, i as f32 / step_count as f32))
        .collect())
}

/// Flattens a fixed-width corridor along a sequence of waypoints
#[derive(Debug, Clone)]
pub struct PathCarver {
    corridor_width: f32,
    /// Normalized height the corridor is flattened to
    grade: f32,
}

impl PathCarver {
    pub fn new(corridor_width: f32, grade: f32) -> TerrainResult<Self> {
        ensure_positive("corridor_width", corridor_width)?;
        if !(0.0..=1.0).contains(&grade) {
            return Err(TerrainError::InvalidRange {
                field: "grade",
                min: grade,
                max: 1.0,
            });
        }
        Ok(Self {
            corridor_width,
            grade,
        })
    }

    pub fn corridor_width(&self) -> f32 {
        self.corridor_width
    }

    pub fn grade(&self) -> f32 {
        self.grade
    }

    /// Flatten the corridor window around one waypoint
    pub fn flatten_at(&self, field: &mut HeightField, point: Vec3) -> CorridorWindow {
        let window = corridor_window(field, point.x, point.z, self.corridor_width);
        if window.clamped {
            debug!(
                "Corridor at ({:.2}, {:.2}) clamped to base ({}, {}) extent {}",
                point.x, point.z, window.x_base, window.z_base, window.extent
            );
        }
        field.flatten_window(window.x_base, window.z_base, window.extent, self.grade);
        window
    }

    /// Carve along the given points, returning them with post-flatten heights
    pub fn carve<I>(&self, field: &mut HeightField, points: I) -> Vec<Vec3>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut waypoints = Vec::new();
        let mut clamped = 0;

        for mut point in points {
            // Provisional height before the corridor is cut
            point.y = field.sample_height(point.x, point.z);
            if self.flatten_at(field, point).clamped {
                clamped += 1;
            }
            point.y = field.sample_height(point.x, point.z);
            waypoints.push(point);
        }

        info!(
            "Carved path corridor: {} waypoints, width {}, {} window(s) clamped to grid bounds",
            waypoints.len(),
            self.corridor_width,
            clamped
        );
        waypoints
    }

    /// Straight-line path from `start` to `end` with `step_count + 1` waypoints
    pub fn carve_straight_path(
        &self,
        field: &mut HeightField,
        start: Vec3,
        end: Vec3,
        step_count: usize,
    ) -> TerrainResult<Vec<Vec3>> {
        let points = straight_line(start, end, step_count)?;
        Ok(self.carve(field, points))
    }
}
