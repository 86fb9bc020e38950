//! Single-window manager.
//!
//! At most one application window is open. On a desktop-sized viewport a
//! freshly opened window is maximized; the maximize toggle drops it back to
//! a draggable window at its last windowed position. Below
//! [`COMPACT_BREAKPOINT`] every open window is a full-screen modal.

use std::collections::HashMap;

use egui::{pos2, Pos2, Rect, Vec2};

use super::apps::AppId;

pub const COMPACT_BREAKPOINT: f32 = 1024.0;
pub const MAX_WIDTH_FRACTION: f32 = 0.9;
pub const DEFAULT_POSITION: Pos2 = pos2(100.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Windowed,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenWindow {
    app: AppId,
    mode: WindowMode,
    position: Pos2,
}

/// Where and how the open window should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presentation {
    Closed,
    Windowed { app: AppId, rect: Rect },
    Maximized { app: AppId, rect: Rect },
    FullscreenModal { app: AppId, rect: Rect },
}

impl Presentation {
    pub fn app(&self) -> Option<AppId> {
        match *self {
            Presentation::Closed => None,
            Presentation::Windowed { app, .. }
            | Presentation::Maximized { app, .. }
            | Presentation::FullscreenModal { app, .. } => Some(app),
        }
    }

    pub fn rect(&self) -> Option<Rect> {
        match *self {
            Presentation::Closed => None,
            Presentation::Windowed { rect, .. }
            | Presentation::Maximized { rect, .. }
            | Presentation::FullscreenModal { rect, .. } => Some(rect),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowManager {
    open: Option<OpenWindow>,
    /// Last windowed position per app, restored when un-maximizing.
    previous_positions: HashMap<AppId, Pos2>,
    viewport: Rect,
    top_inset: f32,
    bottom_inset: f32,
}

impl WindowManager {
    /// `top_inset` is the menu bar height, `bottom_inset` the space kept
    /// free for the dock.
    pub fn new(top_inset: f32, bottom_inset: f32) -> Self {
        Self {
            open: None,
            previous_positions: HashMap::new(),
            viewport: Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 800.0)),
            top_inset,
            bottom_inset,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn open_app(&self) -> Option<AppId> {
        self.open.map(|w| w.app)
    }

    pub fn is_open(&self, app: AppId) -> bool {
        self.open_app() == Some(app)
    }

    pub fn mode(&self) -> Option<WindowMode> {
        self.open.map(|w| w.mode)
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.width() < COMPACT_BREAKPOINT
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The area between the menu bar and the dock.
    pub fn desktop_area(&self) -> Rect {
        let top = (self.viewport.top() + self.top_inset).min(self.viewport.bottom());
        let bottom = (self.viewport.bottom() - self.bottom_inset).max(top);
        Rect::from_min_max(pos2(self.viewport.left(), top), pos2(self.viewport.right(), bottom))
    }

    /// Windowed size for `app`, capped to the viewport.
    pub fn window_size(&self, app: AppId) -> Vec2 {
        let size = app.default_size();
        let area = self.desktop_area();
        Vec2::new(
            size.x.min(self.viewport.width() * MAX_WIDTH_FRACTION),
            size.y.min(area.height()),
        )
    }

    pub fn presentation(&self) -> Presentation {
        let Some(window) = self.open else {
            return Presentation::Closed;
        };
        let app = window.app;
        if self.is_compact() {
            return Presentation::FullscreenModal {
                app,
                rect: self.viewport,
            };
        }
        match window.mode {
            WindowMode::Maximized => Presentation::Maximized {
                app,
                rect: self.desktop_area(),
            },
            WindowMode::Windowed => Presentation::Windowed {
                app,
                rect: Rect::from_min_size(window.position, self.window_size(app)),
            },
        }
    }

    // ── Transitions ─────────────────────────────────────────────

    /// Open `app`, replacing whatever was open. Always starts maximized.
    pub fn open(&mut self, app: AppId) {
        let position = self.previous_position(app);
        self.open = Some(OpenWindow {
            app,
            mode: WindowMode::Maximized,
            position,
        });
    }

    pub fn close(&mut self) {
        if let Some(window) = self.open.take() {
            if window.mode == WindowMode::Windowed {
                self.previous_positions.insert(window.app, window.position);
            }
        }
    }

    /// Flip between maximized and windowed. Ignored when nothing is open or
    /// the viewport is compact.
    pub fn toggle_maximize(&mut self) {
        if self.is_compact() {
            return;
        }
        let Some(mut window) = self.open else {
            return;
        };
        match window.mode {
            WindowMode::Windowed => {
                self.previous_positions.insert(window.app, window.position);
                window.mode = WindowMode::Maximized;
            }
            WindowMode::Maximized => {
                window.position = self.clamp_position(window.app, self.previous_position(window.app));
                window.mode = WindowMode::Windowed;
            }
        }
        self.open = Some(window);
    }

    /// Move a windowed window, keeping it inside the desktop area.
    pub fn set_position(&mut self, position: Pos2) {
        let Some(mut window) = self.open else {
            return;
        };
        if window.mode != WindowMode::Windowed || self.is_compact() {
            return;
        }
        window.position = self.clamp_position(window.app, position);
        self.open = Some(window);
    }

    pub fn drag_by(&mut self, delta: Vec2) {
        if let Some(window) = self.open {
            self.set_position(window.position + delta);
        }
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if let Some(mut window) = self.open {
            window.position = self.clamp_position(window.app, window.position);
            self.open = Some(window);
        }
    }

    fn previous_position(&self, app: AppId) -> Pos2 {
        self.previous_positions
            .get(&app)
            .copied()
            .unwrap_or(DEFAULT_POSITION)
    }

    fn clamp_position(&self, app: AppId, position: Pos2) -> Pos2 {
        let area = self.desktop_area();
        let size = self.window_size(app);
        let max_x = (area.right() - size.x).max(area.left());
        let max_y = (area.bottom() - size.y).max(area.top());
        pos2(
            position.x.clamp(area.left(), max_x),
            position.y.clamp(area.top(), max_y),
        )
    }
}
