//! Grid-bucketed spatial index for the dot field
//!
//! Maps an integer cell coordinate to the dots created inside that cell,
//! so pointer-distance checks scan a small neighborhood instead of the
//! whole batch.

use std::collections::{HashMap, HashSet};

/// Integer cell coordinate: `(floor(x / cell_size), floor(y / cell_size))`.
pub type CellKey = (i32, i32);

/// Bucket grid over surface-local space.
///
/// Rebuilt together with the dot batch on every resize; each dot lives in
/// exactly one bucket, the one containing its creation position.
#[derive(Debug)]
pub struct SpatialGrid {
    cells: HashMap<CellKey, Vec<usize>>,
    cell_size: f32,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cells: HashMap::new(),
            cell_size,
        }
    }

    /// Cell containing `(x, y)`.
    #[inline]
    pub fn cell_of(&self, x: f32, y: f32) -> CellKey {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// Register a dot index under the cell containing its position.
    pub fn insert(&mut self, x: f32, y: f32, index: usize) {
        let key = self.cell_of(x, y);
        self.cells.entry(key).or_default().push(index);
    }

    /// Drop all buckets, keeping the cell size.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Union of dot indices in all cells within `radius` of `(x, y)`.
    ///
    /// Scans `ceil(radius / cell_size)` cells in each direction, which is
    /// guaranteed to cover the influence circle. `out` is a reusable
    /// scratch set; it is not cleared here.
    pub fn neighborhood(&self, x: f32, y: f32, radius: f32, out: &mut HashSet<usize>) {
        let (cx, cy) = self.cell_of(x, y);
        let reach = (radius / self.cell_size).ceil() as i32;
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) {
                    out.extend(bucket.iter().copied());
                }
            }
        }
    }

    /// Indices bucketed under `key`, if any.
    pub fn bucket(&self, key: CellKey) -> Option<&[usize]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_of_floors_towards_negative() {
        let grid = SpatialGrid::new(80.0);
        assert_eq!(grid.cell_of(0.0, 0.0), (0, 0));
        assert_eq!(grid.cell_of(79.9, 79.9), (0, 0));
        assert_eq!(grid.cell_of(80.0, 160.0), (1, 2));
        assert_eq!(grid.cell_of(-0.1, -80.1), (-1, -2));
    }

    #[test]
    fn insert_buckets_by_position() {
        let mut grid = SpatialGrid::new(50.0);
        grid.insert(10.0, 10.0, 0);
        grid.insert(40.0, 10.0, 1);
        grid.insert(60.0, 10.0, 2);

        assert_eq!(grid.bucket((0, 0)), Some(&[0, 1][..]));
        assert_eq!(grid.bucket((1, 0)), Some(&[2][..]));
        assert_eq!(grid.bucket((2, 0)), None);
        assert_eq!(grid.bucket_count(), 2);
    }

    #[test]
    fn neighborhood_unions_cell_ring() {
        let mut grid = SpatialGrid::new(80.0);
        // One dot per cell along a row: cells (0,0) .. (5,0)
        for i in 0..6 {
            grid.insert(i as f32 * 80.0 + 40.0, 40.0, i);
        }

        // radius 120 over cell size 80 reaches 2 cells each way
        let mut out = HashSet::new();
        grid.neighborhood(200.0, 40.0, 120.0, &mut out); // pointer in cell (2,0)

        let expected: HashSet<usize> = [0, 1, 2, 3, 4].into_iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn neighborhood_is_empty_far_from_dots() {
        let mut grid = SpatialGrid::new(80.0);
        grid.insert(40.0, 40.0, 0);

        let mut out = HashSet::new();
        grid.neighborhood(2000.0, 2000.0, 120.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn clear_drops_buckets() {
        let mut grid = SpatialGrid::new(50.0);
        grid.insert(10.0, 10.0, 0);
        grid.clear();
        assert_eq!(grid.bucket_count(), 0);
        assert_eq!(grid.bucket((0, 0)), None);
    }
}
