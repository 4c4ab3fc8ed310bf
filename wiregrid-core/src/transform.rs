/// View state and the input glue that mutates it
use nalgebra::{Rotation3, Vector3};
use rand::Rng;
use tracing::debug;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 200.0;
pub const ZOOM_STEP: f64 = 0.1;
/// Radians of rotation per pixel of pointer travel
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Rotation (radians) and zoom read by the projector on every frame.
///
/// Rotations accumulate without wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub zoom_factor: f64,
}

impl ViewState {
    pub fn new(rotation_x: f64, rotation_y: f64, zoom_factor: f64) -> Self {
        Self {
            rotation_x,
            rotation_y,
            zoom_factor: zoom_factor.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Both rotations drawn from [10, 80) degrees, zoom 1.0
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rotation_x = rng.gen_range(10.0_f64..80.0).to_radians();
        let rotation_y = rng.gen_range(10.0_f64..80.0).to_radians();
        Self::new(rotation_x, rotation_y, 1.0)
    }

    /// Store a zoom factor clamped to [MIN_ZOOM, MAX_ZOOM]
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom_factor = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_factor = (self.zoom_factor + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_factor = (self.zoom_factor - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Rotation around X first, then around Y using the rotated depth.
    ///
    /// The Y step turns +x towards -z, i.e. a right-handed rotation by
    /// `-rotation_y`.
    pub fn rotation(&self) -> Rotation3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.rotation_x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), -self.rotation_y);
        ry * rx
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Translates pointer drags and zoom keys into `ViewState` updates.
///
/// A drag rotates relative to the rotation captured when the previous drag
/// ended, so pointer motion within one gesture never compounds.
#[derive(Debug, Clone)]
pub struct ViewController {
    view: ViewState,
    checkpoint: (f64, f64),
    drag_origin: Option<(f64, f64)>,
}

impl ViewController {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            checkpoint: (view.rotation_x, view.rotation_y),
            drag_origin: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        debug!(x, y, "drag started");
        self.drag_origin = Some((x, y));
    }

    /// Returns true when the view changed and a new frame is due
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some((start_x, start_y)) = self.drag_origin else {
            return false;
        };
        self.view.rotation_x = self.checkpoint.0 + (y - start_y) * DRAG_SENSITIVITY;
        self.view.rotation_y = self.checkpoint.1 + (x - start_x) * DRAG_SENSITIVITY;
        true
    }

    /// Ends the gesture (pointer released or left the surface)
    pub fn end_drag(&mut self) {
        if self.drag_origin.take().is_some() {
            debug!(
                rotation_x = self.view.rotation_x,
                rotation_y = self.view.rotation_y,
                "drag ended"
            );
        }
        self.checkpoint = (self.view.rotation_x, self.view.rotation_y);
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        debug!(zoom = self.view.zoom_factor, "zoom in");
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
        debug!(zoom = self.view.zoom_factor, "zoom out");
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.view.set_zoom(zoom);
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}
