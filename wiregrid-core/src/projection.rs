/// Projection from centered lattice coordinates to canvas space
use nalgebra::{Point2, Point3};

use crate::transform::ViewState;

/// Strength of the depth term in the perspective divide, per unit of zoom
const PERSPECTIVE_DEPTH_SCALE: f64 = 0.01;

/// Drawing surface size in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A projected lattice point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Segment length after perspective scaling
    pub size: f64,
    pub perspective: f64,
}

impl ScreenPoint {
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// Pseudo-perspective projector.
///
/// `perspective = 1 / (1 + depth * 0.01 * zoom)` is applied to the rotated
/// x/y. The divide is not guarded: a denominator at or below zero yields
/// flipped or huge coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub segment_length: f64,
}

impl Projector {
    pub fn new(segment_length: f64) -> Self {
        Self { segment_length }
    }

    /// Project a point already centered on the origin
    pub fn project(&self, point: &Point3<f64>, view: &ViewState, canvas: CanvasSize) -> ScreenPoint {
        let rotated = view.rotation() * point;
        let perspective = 1.0 / (1.0 + rotated.z * PERSPECTIVE_DEPTH_SCALE * view.zoom_factor);
        let scale = self.segment_length * perspective;
        let center = canvas.center();

        ScreenPoint {
            x: center.x + rotated.x * scale,
            y: center.y + rotated.y * scale,
            size: scale,
            perspective,
        }
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridDimensions;

    fn canvas() -> CanvasSize {
        CanvasSize::new(800.0, 600.0)
    }

    #[test]
    fn test_unrotated_projection_is_pure_scaling() {
        let projector = Projector::default();
        for zoom in [0.5, 1.0, 7.3] {
            let view = ViewState::new(0.0, 0.0, zoom);
            for (x, y, z) in [(3.0, -4.0, 2.5), (-25.0, 5.0, -7.5), (0.0, 0.0, 12.0)] {
                let p = projector.project(&Point3::new(x, y, z), &view, canvas());
                let scale = 10.0 / (1.0 + z * 0.01 * zoom);
                assert!((p.x - (400.0 + x * scale)).abs() < 1e-9);
                assert!((p.y - (300.0 + y * scale)).abs() < 1e-9);
                assert!((p.size - scale).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_grid_origin_scenario() {
        let dims = GridDimensions::new(50, 10, 15);
        let projector = Projector::new(10.0);
        let view = ViewState::new(0.0, 0.0, 1.0);
        let p = projector.project(&dims.centered(0, 0, 0), &view, canvas());

        let perspective = 1.0 / (1.0 - 7.5 * 0.01);
        assert!((p.perspective - perspective).abs() < 1e-12);
        assert!((p.perspective - 1.0811).abs() < 1e-3);
        assert!((p.x - (400.0 - 250.0 * perspective)).abs() < 1e-9);
        assert!((p.x - 129.73).abs() < 0.01);
        assert!((p.y - 245.95).abs() < 0.01);
    }

    #[test]
    fn test_front_face_corners_symmetric() {
        let dims = GridDimensions::new(50, 10, 15);
        let projector = Projector::default();
        let view = ViewState::default();
        let center = canvas().center();

        for z in [0, dims.depth] {
            let a = projector.project(&dims.centered(0, 0, z), &view, canvas());
            let b = projector.project(&dims.centered(dims.width, dims.height, z), &view, canvas());
            assert!((a.x + b.x - 2.0 * center.x).abs() < 1e-9);
            assert!((a.y + b.y - 2.0 * center.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_perspective_still_computes() {
        let projector = Projector::default();
        let view = ViewState::new(0.0, 0.0, 200.0);
        let p = projector.project(&Point3::new(1.0, 1.0, -1.0), &view, canvas());
        assert!(p.perspective < 0.0);
        assert!(p.x < 400.0);
    }
}
