/// Terminal front end for the wireframe grid
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use tracing::debug;
use wiregrid_core::{GridRenderer, ViewController, ViewState};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Approximate pixel size of a terminal cell, so drag sensitivity feels
/// like a pointer on a canvas
const CELL_PIXELS: (f64, f64) = (8.0, 16.0);

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Redraw,
    Ignore,
    Quit,
}

/// Main application struct for terminal grid rendering
pub struct TerminalApp {
    grid: GridRenderer,
    controller: ViewController,
    surface: AsciiRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(grid: GridRenderer, view: ViewState) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(grid, view, width, height))
    }

    pub fn with_size(grid: GridRenderer, view: ViewState, width: u16, height: u16) -> Self {
        Self {
            grid,
            controller: ViewController::new(view),
            surface: AsciiRenderer::new(width as usize, height as usize),
            running: true,
        }
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn surface(&self) -> &AsciiRenderer {
        &self.surface
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        execute!(
            stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while self.running {
            // Frames are only produced in response to input
            match self.handle_event(event::read()?) {
                Response::Redraw => self.render()?,
                Response::Quit => self.running = false,
                Response::Ignore => {}
            }
        }

        Ok(())
    }

    /// Apply one terminal event to the view
    pub fn handle_event(&mut self, event: Event) -> Response {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.surface.resize(width as usize, height as usize);
                Response::Redraw
            }
            Event::FocusLost => {
                self.controller.end_drag();
                Response::Ignore
            }
            _ => Response::Ignore,
        }
    }

    fn handle_key(&mut self, KeyEvent { code, modifiers, kind, .. }: KeyEvent) -> Response {
        if kind != KeyEventKind::Press {
            return Response::Ignore;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Response::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Response::Quit,
            KeyCode::Up => {
                self.controller.zoom_in();
                Response::Redraw
            }
            KeyCode::Down => {
                self.controller.zoom_out();
                Response::Redraw
            }
            _ => Response::Ignore,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Response {
        let x = mouse.column as f64 * CELL_PIXELS.0;
        let y = mouse.row as f64 * CELL_PIXELS.1;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.controller.begin_drag(x, y);
                Response::Ignore
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.controller.drag_to(x, y) {
                    Response::Redraw
                } else {
                    Response::Ignore
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.controller.end_drag();
                Response::Ignore
            }
            _ => Response::Ignore,
        }
    }

    /// Rebuild the frame buffer without touching the terminal
    pub fn build_frame(&mut self) {
        let canvas = self.surface.canvas_size();
        self.grid
            .render(self.controller.view(), canvas, &mut self.surface);
    }

    fn render(&mut self) -> io::Result<()> {
        self.build_frame();

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        self.surface.draw(&mut stdout)?;

        // Draw UI overlay
        let dims = self.grid.dimensions();
        let view = self.controller.view();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wiregrid {}x{}x{} | Zoom: {:.1} | Controls: Drag=Rotate Up/Down=Zoom Q=Quit",
                dims.width, dims.height, dims.depth, view.zoom_factor
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use wiregrid_core::GridDimensions;

    fn app() -> TerminalApp {
        let grid = GridRenderer::with_default_text(GridDimensions::new(50, 10, 15)).unwrap();
        TerminalApp::with_size(grid, ViewState::new(0.5, 0.5, 1.0), 80, 24)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_zoom_keys() {
        let mut app = app();
        assert_eq!(app.handle_event(key(KeyCode::Up)), Response::Redraw);
        assert!((app.view().zoom_factor - 1.1).abs() < 1e-12);
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Down));
        assert!((app.view().zoom_factor - 0.9).abs() < 1e-12);
        assert_eq!(app.handle_event(key(KeyCode::Char('x'))), Response::Ignore);
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Response::Quit);
    }

    #[test]
    fn test_drag_rotates() {
        let mut app = app();
        // motion without a pressed button does nothing
        assert_eq!(
            app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 5)),
            Response::Ignore
        );

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        assert_eq!(
            app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 15, 11)),
            Response::Redraw
        );
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 15, 11));

        assert!((app.view().rotation_y - (0.5 + 5.0 * 8.0 * 0.01)).abs() < 1e-12);
        assert!((app.view().rotation_x - (0.5 + 16.0 * 0.01)).abs() < 1e-12);
    }

    #[test]
    fn test_resize_changes_canvas() {
        let mut app = app();
        assert_eq!(app.handle_event(Event::Resize(100, 30)), Response::Redraw);
        assert_eq!(app.surface().canvas_size().width, 100.0);
        assert_eq!(app.surface().canvas_size().height, 60.0);
    }

    #[test]
    fn test_frame_shows_text() {
        let mut app = app();
        app.build_frame();
        let lines = app.surface().lines();
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().any(|l| l.contains('@')));
    }
}
