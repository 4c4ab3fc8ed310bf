/// Frame building: every lattice edge becomes one line on a `Surface`
use nalgebra::Point2;
use tracing::trace;

use crate::error::Result;
use crate::geometry::GridDimensions;
use crate::projection::{CanvasSize, Projector};
use crate::text_mask::{is_highlighted, TextMask};
use crate::transform::ViewState;

/// Rendering parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Canvas units per lattice step before perspective
    pub segment_length: f64,
    /// Alpha of edges leaving a lit point
    pub highlight_alpha: f64,
    /// Alpha of every other edge
    pub base_alpha: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            segment_length: 10.0,
            highlight_alpha: 1.0,
            base_alpha: 0.1,
        }
    }
}

/// A white line with a global alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
    pub alpha: f64,
}

/// Anything lines can be drawn on
pub trait Surface {
    /// Wipe the previous frame
    fn clear(&mut self, canvas: CanvasSize);

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, alpha: f64);
}

/// Recording surface, handy for inspecting a frame
impl Surface for Vec<DrawCommand> {
    fn clear(&mut self, _canvas: CanvasSize) {
        Vec::clear(self);
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, alpha: f64) {
        self.push(DrawCommand { from, to, alpha });
    }
}

/// Renders the wireframe lattice with the hidden text
#[derive(Debug, Clone)]
pub struct GridRenderer {
    dims: GridDimensions,
    mask: TextMask,
    projector: Projector,
    config: RenderConfig,
}

impl GridRenderer {
    pub fn new(dims: GridDimensions, mask: TextMask, config: RenderConfig) -> Self {
        Self {
            dims,
            mask,
            projector: Projector::new(config.segment_length),
            config,
        }
    }

    /// Renderer for the "THE INTERNET" banner with default parameters
    pub fn with_default_text(dims: GridDimensions) -> Result<Self> {
        Ok(Self::new(dims, TextMask::the_internet()?, RenderConfig::default()))
    }

    pub fn dimensions(&self) -> &GridDimensions {
        &self.dims
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Clear the surface and draw the full frame.
    ///
    /// Points are visited z, then y, then x ascending. Each point draws its
    /// forward edges (+x, +y, +z) so every edge appears once. An edge's alpha
    /// comes from its origin point only.
    pub fn render<S: Surface + ?Sized>(&self, view: &ViewState, canvas: CanvasSize, surface: &mut S) {
        surface.clear(canvas);

        let GridDimensions {
            width,
            height,
            depth,
        } = self.dims;
        let project = |x, y, z| {
            self.projector
                .project(&self.dims.centered(x, y, z), view, canvas)
                .position()
        };

        let mut lines = 0usize;
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    let current = project(x, y, z);
                    let alpha = if is_highlighted(x, y, z, &self.dims, &self.mask) {
                        self.config.highlight_alpha
                    } else {
                        self.config.base_alpha
                    };

                    if x + 1 < width {
                        surface.draw_line(current, project(x + 1, y, z), alpha);
                        lines += 1;
                    }
                    if y + 1 < height {
                        surface.draw_line(current, project(x, y + 1, z), alpha);
                        lines += 1;
                    }
                    if z + 1 < depth {
                        surface.draw_line(current, project(x, y, z + 1), alpha);
                        lines += 1;
                    }
                }
            }
        }

        trace!(lines, "frame rendered");
    }

    /// The frame as a list of draw commands
    pub fn commands(&self, view: &ViewState, canvas: CanvasSize) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.dims.edge_count());
        self.render(view, canvas, &mut commands);
        commands
    }
}
