/// Wiregrid Core Library - lattice geometry, projection and frame building
///
/// This library provides the stateless core of the wireframe grid renderer:
/// grid dimensions, the view state driven by input glue, the pseudo-perspective
/// projector, the text mask lookup and the renderer that turns all of it into
/// line draw commands on a `Surface`.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod render;
pub mod text_mask;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{initialize, GridDimensions};
pub use projection::{CanvasSize, Projector, ScreenPoint};
pub use render::{DrawCommand, GridRenderer, RenderConfig, Surface};
pub use text_mask::{is_highlighted, TextMask};
pub use transform::{ViewController, ViewState};
