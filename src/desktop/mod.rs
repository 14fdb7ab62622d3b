//! Desktop window manager.
//!
//! Pure window bookkeeping for the Ubuntu-style portfolio desktop: which
//! content panes are open, where they sit, their stacking order and the
//! in-flight drag / resize gesture. The browser binding in [`dom`] owns the
//! actual elements and mirrors every record onto its node after each
//! operation.
//!
//! Window lifecycle:
//!
//! ```text
//!            open                 minimize
//! closed ----------> normal <-----------------> minimized
//!   ^                  ^  |        restore          |
//!   |       maximize   |  | maximize                |
//!   |       (toggle)   |  v                         |
//!   +---- close ---- maximized ---------------------+
//! ```
//!
//! `close` is two-phase: the record is flagged `closing` while the exit
//! animation plays and only leaves the registry in [`WindowManager::finish_close`].

pub mod background;
pub mod catalog;
pub mod dom;

use std::collections::HashMap;

use crate::config::DesktopConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::lang::Lang;

pub use catalog::WindowContent;

/// Axis-aligned rectangle in CSS pixels, relative to the windows container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Browser viewport (`innerWidth` / `innerHeight`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: String,
    pub title: String,
    pub geometry: Rect,
    pub minimized: bool,
    pub maximized: bool,
    /// Geometry to return to when leaving the maximized state.
    pub previous_geometry: Option<Rect>,
    pub z_index: u32,
    pub focused: bool,
    /// Exit animation running; removed by `finish_close`.
    pub closing: bool,
}

impl WindowRecord {
    pub fn state(&self) -> WindowState {
        if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Created,
    /// Already open; it was focused instead.
    Focused,
    /// It was animating out; the close was cancelled.
    Reopened,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockOutcome {
    Opened,
    /// The window was mid-close; the close is cancelled.
    Reopened,
    Focused,
    Restored,
}

#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    id: String,
    pointer: (f64, f64),
    origin: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
struct ResizeSession {
    id: String,
    pointer: (f64, f64),
    size: (f64, f64),
}

/// Registry of open windows plus the stacking counter and active pointer.
#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: HashMap<String, WindowRecord>,
    top_z: u32,
    active: Option<String>,
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
    config: DesktopConfig,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl WindowManager {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            windows: HashMap::new(),
            top_z: config.base_z_index,
            active: None,
            drag: None,
            resize: None,
            config,
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.get(id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Registered and not animating out. Drives the dock "active" marker.
    pub fn is_open(&self, id: &str) -> bool {
        self.windows.get(id).is_some_and(|w| !w.closing)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Highest stacking value handed out so far.
    pub fn top_z(&self) -> u32 {
        self.top_z
    }

    /// Usable area: the viewport minus dock and top panel.
    pub fn work_area(&self, viewport: Viewport) -> Rect {
        Rect::new(
            0.0,
            0.0,
            (viewport.width - self.config.dock_width).max(0.0),
            (viewport.height - self.config.panel_height).max(0.0),
        )
    }

    /// Centered placement for a new window of the given size.
    pub fn initial_geometry(&self, width: f64, height: f64, viewport: Viewport) -> Rect {
        let area = self.work_area(viewport);
        let left = ((area.width - width) / 2.0).max(self.config.min_left);
        let top = ((area.height - height) / 2.0).max(self.config.min_top);
        Rect::new(left, top, width, height)
    }

    /// Open the pane `id` using the catalog for `lang`.
    pub fn open(&mut self, id: &str, lang: Lang, viewport: Viewport) -> PortfolioResult<OpenOutcome> {
        if let Some(existing) = self.windows.get_mut(id) {
            let outcome = if existing.closing {
                existing.closing = false;
                OpenOutcome::Reopened
            } else {
                OpenOutcome::Focused
            };
            self.focus(id);
            return Ok(outcome);
        }

        let content = catalog::lookup(id, lang)
            .ok_or_else(|| PortfolioError::UnknownWindow(id.to_string()))?;
        self.open_with(content, viewport);
        Ok(OpenOutcome::Created)
    }

    /// Register a window for `content`, which must not already be open.
    pub fn open_with(&mut self, content: &WindowContent, viewport: Viewport) {
        let width = content.width.unwrap_or(self.config.default_width);
        let height = content.height.unwrap_or(self.config.default_height);
        let geometry = self.initial_geometry(width, height, viewport);
        self.windows.insert(
            content.id.to_string(),
            WindowRecord {
                id: content.id.to_string(),
                title: content.title.to_string(),
                geometry,
                minimized: false,
                maximized: false,
                previous_geometry: None,
                z_index: self.config.base_z_index,
                focused: false,
                closing: false,
            },
        );
        self.focus(content.id);
        if content.maximized {
            self.toggle_maximize(content.id, viewport);
        }
        log::info!("window opened: {}", content.id);
    }

    /// Start the exit animation. Returns `false` if `id` is not open.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(record) = self.windows.get_mut(id) else {
            return false;
        };
        record.closing = true;
        if self.drag.as_ref().is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        if self.resize.as_ref().is_some_and(|r| r.id == id) {
            self.resize = None;
        }
        true
    }

    /// Drop a window whose exit animation finished. A window reopened in the
    /// meantime is kept.
    pub fn finish_close(&mut self, id: &str) -> bool {
        if !self.windows.get(id).is_some_and(|w| w.closing) {
            return false;
        }
        self.windows.remove(id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        log::info!("window closed: {id}");
        true
    }

    pub fn minimize(&mut self, id: &str) -> bool {
        match self.windows.get_mut(id) {
            Some(w) => {
                w.minimized = true;
                true
            }
            None => false,
        }
    }

    pub fn restore(&mut self, id: &str) -> bool {
        match self.windows.get_mut(id) {
            Some(w) => {
                w.minimized = false;
                self.focus(id)
            }
            None => false,
        }
    }

    /// Toggle between the saved geometry and the full work area.
    pub fn toggle_maximize(&mut self, id: &str, viewport: Viewport) -> bool {
        let area = self.work_area(viewport);
        let Some(w) = self.windows.get_mut(id) else {
            return false;
        };
        if w.maximized {
            w.maximized = false;
            if let Some(prev) = w.previous_geometry.take() {
                w.geometry = prev;
            }
        } else {
            w.previous_geometry = Some(w.geometry);
            w.geometry = area;
            w.maximized = true;
        }
        true
    }

    /// Refit maximized windows after the viewport changed.
    pub fn relayout(&mut self, viewport: Viewport) {
        let area = self.work_area(viewport);
        for w in self.windows.values_mut().filter(|w| w.maximized) {
            w.geometry = area;
        }
    }

    /// Raise `id` above everything else and make it the active window.
    pub fn focus(&mut self, id: &str) -> bool {
        if !self.windows.contains_key(id) {
            return false;
        }
        for w in self.windows.values_mut() {
            w.focused = false;
        }
        self.top_z += 1;
        let top = self.top_z;
        if let Some(w) = self.windows.get_mut(id) {
            w.focused = true;
            w.z_index = top;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Dock click: reopen if closing, restore if minimized, focus if open,
    /// open otherwise.
    pub fn dock_activate(
        &mut self,
        id: &str,
        lang: Lang,
        viewport: Viewport,
    ) -> PortfolioResult<DockOutcome> {
        match self.windows.get(id) {
            Some(w) if w.closing => self.open(id, lang, viewport).map(|_| DockOutcome::Reopened),
            Some(w) if w.minimized => {
                self.restore(id);
                Ok(DockOutcome::Restored)
            }
            Some(_) => {
                self.focus(id);
                Ok(DockOutcome::Focused)
            }
            None => self.open(id, lang, viewport).map(|_| DockOutcome::Opened),
        }
    }

    // --- Drag / resize ------------------------------------------------------

    /// Capture the pointer for moving `id`. Maximized windows stay put.
    pub fn begin_drag(&mut self, id: &str, pointer: (f64, f64)) -> bool {
        match self.windows.get(id) {
            Some(w) if !w.maximized && !w.closing => {
                self.drag = Some(DragSession {
                    id: id.to_string(),
                    pointer,
                    origin: (w.geometry.x, w.geometry.y),
                });
                true
            }
            _ => false,
        }
    }

    /// Apply the pointer delta since `begin_drag`. Returns the moved window.
    pub fn drag_to(&mut self, pointer: (f64, f64)) -> Option<&WindowRecord> {
        let session = self.drag.as_ref()?;
        let w = self.windows.get_mut(&session.id)?;
        w.geometry.x = session.origin.0 + (pointer.0 - session.pointer.0);
        w.geometry.y = session.origin.1 + (pointer.1 - session.pointer.1);
        Some(&*w)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_resize(&mut self, id: &str, pointer: (f64, f64)) -> bool {
        match self.windows.get(id) {
            Some(w) if !w.maximized && !w.closing => {
                self.resize = Some(ResizeSession {
                    id: id.to_string(),
                    pointer,
                    size: (w.geometry.width, w.geometry.height),
                });
                true
            }
            _ => false,
        }
    }

    /// Grow / shrink from the bottom-right corner, clamped to the minimum size.
    pub fn resize_to(&mut self, pointer: (f64, f64)) -> Option<&WindowRecord> {
        let session = self.resize.as_ref()?;
        let (min_w, min_h) = (self.config.min_width, self.config.min_height);
        let w = self.windows.get_mut(&session.id)?;
        w.geometry.width = (session.size.0 + (pointer.0 - session.pointer.0)).max(min_w);
        w.geometry.height = (session.size.1 + (pointer.1 - session.pointer.1)).max(min_h);
        Some(&*w)
    }

    pub fn end_resize(&mut self) {
        self.resize = None;
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(1468.0, 928.0);

    #[test]
    fn test_initial_geometry_centers_in_work_area() {
        let wm = WindowManager::default();
        // work area 1400x900
        let r = wm.initial_geometry(650.0, 550.0, VIEW);
        assert_eq!(r, Rect::new(375.0, 175.0, 650.0, 550.0));
    }

    #[test]
    fn test_initial_geometry_clamps_to_minimum_offsets() {
        let wm = WindowManager::default();
        let r = wm.initial_geometry(1000.0, 700.0, Viewport::new(800.0, 600.0));
        assert_eq!(r.x, 20.0);
        assert_eq!(r.y, 40.0);
    }

    #[test]
    fn test_focus_assigns_increasing_z() {
        let mut wm = WindowManager::default();
        wm.open("about", Lang::Ptbr, VIEW).unwrap();
        wm.open("skills", Lang::Ptbr, VIEW).unwrap();
        assert_eq!(wm.get("about").unwrap().z_index, 101);
        assert_eq!(wm.get("skills").unwrap().z_index, 102);
        wm.focus("about");
        assert_eq!(wm.get("about").unwrap().z_index, 103);
        assert!(!wm.get("skills").unwrap().focused);
        assert_eq!(wm.active(), Some("about"));
    }

    #[test]
    fn test_maximize_round_trip_restores_geometry() {
        let mut wm = WindowManager::default();
        wm.open("about", Lang::Ptbr, VIEW).unwrap();
        let before = wm.get("about").unwrap().geometry;
        wm.toggle_maximize("about", VIEW);
        let w = wm.get("about").unwrap();
        assert_eq!(w.state(), WindowState::Maximized);
        assert_eq!(w.geometry, Rect::new(0.0, 0.0, 1400.0, 900.0));
        wm.toggle_maximize("about", VIEW);
        assert_eq!(wm.get("about").unwrap().geometry, before);
        assert!(wm.get("about").unwrap().previous_geometry.is_none());
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut wm = WindowManager::default();
        wm.open("about", Lang::Ptbr, VIEW).unwrap();
        assert!(wm.begin_resize("about", (500.0, 500.0)));
        let w = wm.resize_to((0.0, 0.0)).unwrap();
        assert_eq!(w.geometry.width, 500.0);
        assert_eq!(w.geometry.height, 400.0);
    }

    #[test]
    fn test_close_then_reopen_cancels_removal() {
        let mut wm = WindowManager::default();
        wm.open("contact", Lang::Ptbr, VIEW).unwrap();
        assert!(wm.close("contact"));
        assert!(!wm.is_open("contact"));
        assert_eq!(wm.open("contact", Lang::Ptbr, VIEW).unwrap(), OpenOutcome::Reopened);
        assert!(!wm.finish_close("contact"));
        assert!(wm.is_open("contact"));
    }
}
