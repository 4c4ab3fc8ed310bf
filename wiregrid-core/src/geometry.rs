/// Lattice geometry for the wireframe grid
use nalgebra::Point3;
use rand::Rng;
use std::ops::Range;
use tracing::debug;

pub const WIDTH_RANGE: Range<usize> = 50..60;
pub const HEIGHT_RANGE: Range<usize> = 10..15;
pub const DEPTH_RANGE: Range<usize> = 15..25;

/// Number of lattice points along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl GridDimensions {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Pick each dimension independently from its fixed range
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let dims = Self {
            width: rng.gen_range(WIDTH_RANGE),
            height: rng.gen_range(HEIGHT_RANGE),
            depth: rng.gen_range(DEPTH_RANGE),
        };
        debug!(
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            "picked grid dimensions"
        );
        dims
    }

    /// Integer center used by the text mask: floor(dimension / 2) per axis
    pub fn center(&self) -> (usize, usize, usize) {
        (self.width / 2, self.height / 2, self.depth / 2)
    }

    /// Shift a lattice index so the grid is centered on the origin.
    ///
    /// Subtracts exactly half of each dimension, so odd dimensions land on
    /// half-integer coordinates.
    pub fn centered(&self, x: usize, y: usize, z: usize) -> Point3<f64> {
        Point3::new(
            x as f64 - self.width as f64 / 2.0,
            y as f64 - self.height as f64 / 2.0,
            z as f64 - self.depth as f64 / 2.0,
        )
    }

    pub fn point_count(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Number of unique edges between axis-adjacent lattice points
    pub fn edge_count(&self) -> usize {
        let (w, h, d) = (self.width, self.height, self.depth);
        w.saturating_sub(1) * h * d + w * h.saturating_sub(1) * d + w * h * d.saturating_sub(1)
    }
}

/// Pick the process-wide grid dimensions from the thread RNG
pub fn initialize() -> GridDimensions {
    GridDimensions::random(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_dimensions_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let dims = GridDimensions::random(&mut rng);
            assert!(WIDTH_RANGE.contains(&dims.width));
            assert!(HEIGHT_RANGE.contains(&dims.height));
            assert!(DEPTH_RANGE.contains(&dims.depth));
        }
    }

    #[test]
    fn test_seeded_dimensions_repeat() {
        let a = GridDimensions::random(&mut StdRng::seed_from_u64(42));
        let b = GridDimensions::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_initialize() {
        let dims = initialize();
        assert!(WIDTH_RANGE.contains(&dims.width));
        assert!(DEPTH_RANGE.contains(&dims.depth));
    }

    #[test]
    fn test_centered_uses_exact_half() {
        let dims = GridDimensions::new(50, 10, 15);
        let p = dims.centered(0, 0, 0);
        assert_eq!(p, Point3::new(-25.0, -5.0, -7.5));
        assert_eq!(dims.center(), (25, 5, 7));
    }

    #[test]
    fn test_edge_count() {
        let dims = GridDimensions::new(2, 2, 2);
        assert_eq!(dims.edge_count(), 12);
        assert_eq!(GridDimensions::new(1, 1, 1).edge_count(), 0);
        assert_eq!(GridDimensions::new(50, 10, 15).point_count(), 7500);
    }
}
