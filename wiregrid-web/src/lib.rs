/// Wiregrid Web - HTML canvas front end
///
/// The page forwards DOM events to the exported methods, e.g.
///
/// ```js
/// const grid = new WebRenderer("gridCanvas");
/// canvas.addEventListener("mousedown", e => grid.pointer_down(e.clientX, e.clientY));
/// canvas.addEventListener("mousemove", e => grid.pointer_move(e.clientX, e.clientY));
/// canvas.addEventListener("mouseup", () => grid.pointer_up());
/// canvas.addEventListener("mouseleave", () => grid.pointer_leave());
/// window.addEventListener("keydown", e => grid.key_down(e.key));
/// window.addEventListener("resize", () => grid.resize(innerWidth, innerHeight));
/// ```
use nalgebra::Point2;
use tracing::debug;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wiregrid_core::{
    CanvasSize, GridDimensions, GridRenderer, Surface, ViewController, ViewState,
};

const LINE_COLOR: &str = "#ffffff";

/// Scene state independent of the browser: grid, view and canvas size
pub struct GridScene {
    grid: GridRenderer,
    controller: ViewController,
    canvas: CanvasSize,
}

impl GridScene {
    pub fn new(grid: GridRenderer, view: ViewState, canvas: CanvasSize) -> Self {
        Self {
            grid,
            controller: ViewController::new(view),
            canvas,
        }
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn dimensions(&self) -> &GridDimensions {
        self.grid.dimensions()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.controller.begin_drag(x, y);
    }

    /// Returns true when a redraw is due
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.controller.drag_to(x, y)
    }

    pub fn pointer_up(&mut self) {
        self.controller.end_drag();
    }

    /// Returns true when a redraw is due
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => self.controller.zoom_in(),
            "ArrowDown" => self.controller.zoom_out(),
            _ => return false,
        }
        true
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "canvas resized");
        self.canvas = CanvasSize::new(width, height);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.grid.render(self.controller.view(), self.canvas, surface);
    }
}

/// 2D canvas context as a line surface
struct CanvasSurface<'a>(&'a CanvasRenderingContext2d);

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, canvas: CanvasSize) {
        self.0.clear_rect(0.0, 0.0, canvas.width, canvas.height);
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, alpha: f64) {
        let ctx = self.0;
        ctx.set_global_alpha(alpha);
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }
}

#[wasm_bindgen]
pub struct WebRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    scene: GridScene,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Attach to a canvas element, size it to the window and draw the
    /// first frame
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id}")))?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);

        let mut rng = rand::thread_rng();
        let dims = GridDimensions::random(&mut rng);
        let grid = GridRenderer::with_default_text(dims)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let scene = GridScene::new(
            grid,
            ViewState::random(&mut rng),
            CanvasSize::new(width, height),
        );

        let mut renderer = WebRenderer {
            canvas,
            context,
            scene,
        };
        renderer.resize(width, height);
        Ok(renderer)
    }

    /// Clear the canvas and draw a full frame
    pub fn render(&self) {
        self.scene.render(&mut CanvasSurface(&self.context));
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.scene.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.scene.pointer_move(x, y) {
            self.render();
        }
    }

    pub fn pointer_up(&mut self) {
        self.scene.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.scene.pointer_up();
    }

    pub fn key_down(&mut self, key: &str) {
        if self.scene.key_down(key) {
            self.render();
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.scene.resize(width, height);
        self.render();
    }

    pub fn zoom(&self) -> f64 {
        self.scene.view().zoom_factor
    }
}
