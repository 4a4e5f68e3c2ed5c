use egui::{Color32, Pos2, Vec2};
use log::{debug, info, warn};

use super::EditorState;
use crate::config::PaintConfig;
use crate::history::History;
use crate::surface::{DrawableHandle, Surface};
use crate::tools::{BrushConfig, Mode, ShapeKind};

/// The drawing core: owns the surface, the stroke history, the active tool and
/// the pointer interaction state.
///
/// All entry points are total. Pointer events that make no sense in the
/// current state are ignored, and undo, redo and clear on an empty history do
/// nothing. Surface errors are logged and otherwise swallowed.
///
/// # Example
///
/// ```rust
/// use egui::{Color32, Pos2, Vec2};
/// use simple_paint::{Canvas, Editor, Mode};
///
/// let canvas = Canvas::new(Color32::WHITE, Vec2::new(400.0, 300.0));
/// let mut editor = Editor::new(canvas);
///
/// editor.set_mode(Mode::RECTANGLE);
/// editor.on_pointer_down(Pos2::new(10.0, 10.0));
/// editor.on_pointer_move(Pos2::new(50.0, 40.0));
/// editor.on_pointer_up(Pos2::new(50.0, 40.0));
///
/// assert_eq!(editor.history().len(), 1);
/// assert!(editor.can_undo());
/// ```
#[derive(Debug)]
pub struct Editor<S: Surface> {
    surface: S,
    history: History,
    state: EditorState,
    mode: Mode,
    brush: BrushConfig,
    indicator: Option<DrawableHandle>,
    indicator_color: Color32,
    indicator_width: f32,
}

impl<S: Surface> Editor<S> {
    /// Editor with the default brush, starting in free draw mode
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, &PaintConfig::default())
    }

    pub fn with_config(surface: S, config: &PaintConfig) -> Self {
        Self {
            surface,
            history: History::new(),
            state: EditorState::Idle,
            mode: Mode::default(),
            brush: config.brush.normalized(),
            indicator: None,
            indicator_color: config.indicator_color,
            indicator_width: config.indicator_width,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    /// Handle of the eraser size indicator, if one is shown
    pub fn indicator(&self) -> Option<DrawableHandle> {
        self.indicator
    }

    // --- pointer protocol ---

    /// Start a drag. Drawing after an undo discards the redo branch for good.
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if self.state.is_dragging() {
            debug!("Pointer down while dragging, sealing the previous drag");
            self.seal_drag();
        }
        let discarded = self.history.truncate(&mut self.surface);
        if discarded > 0 {
            debug!("Drawing after undo discarded {discarded} stroke(s)");
        }
        self.hide_indicator();
        self.state = EditorState::dragging(pos);
    }

    /// Extend the drag: a new segment for freehand modes, a new preview for shapes
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        let EditorState::Dragging {
            anchor,
            stroke,
            preview,
        } = &mut self.state
        else {
            return;
        };

        if self.mode.is_freehand() {
            let color = match self.mode {
                // the eraser paints with the background
                Mode::Erase => self.surface.background(),
                _ => self.brush.color(),
            };
            let handle = self
                .surface
                .create_segment(*anchor, pos, color, self.brush.width());
            stroke.push(handle);
            *anchor = pos;
        } else if let Some(kind) = self.mode.shape() {
            if let Some(old) = preview.take() {
                delete_logged(&mut self.surface, old);
            }
            *preview = Some(create_shape(&mut self.surface, &self.brush, kind, *anchor, pos));
        }
    }

    /// Finish the drag and commit whatever it produced as one stroke
    pub fn on_pointer_up(&mut self, pos: Pos2) {
        let EditorState::Dragging {
            anchor,
            mut stroke,
            preview,
        } = std::mem::take(&mut self.state)
        else {
            return;
        };

        if let Some(preview) = preview {
            delete_logged(&mut self.surface, preview);
            if let Some(kind) = self.mode.shape() {
                stroke.push(create_shape(&mut self.surface, &self.brush, kind, anchor, pos));
            }
        }

        if let Some(stroke) = stroke.finish() {
            self.history.commit(stroke);
        }
        self.on_hover(pos);
    }

    /// Pointer motion with no button held. Only drives the eraser indicator.
    pub fn on_hover(&mut self, pos: Pos2) {
        if self.mode == Mode::Erase && self.in_bounds(pos) {
            self.hide_indicator();
            let radius = Vec2::splat(self.brush.width());
            self.indicator = Some(self.surface.create_oval(
                pos - radius,
                pos + radius,
                self.indicator_color,
                self.indicator_width,
            ));
        } else {
            self.hide_indicator();
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.hide_indicator();
    }

    // --- tool selection ---

    /// Switch tools. Resets any shape preview and hides the eraser indicator.
    pub fn set_mode(&mut self, mode: Mode) {
        if let EditorState::Dragging { preview, .. } = &mut self.state {
            if let Some(old) = preview.take() {
                delete_logged(&mut self.surface, old);
            }
        }
        self.hide_indicator();
        if self.mode != mode {
            info!("Drawing mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Takes effect from the next segment or shape on
    pub fn set_color(&mut self, color: Color32) {
        self.brush.set_color(color);
    }

    /// Clamped into the supported range. Takes effect from the next segment or shape on.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush.set_size(size);
    }

    // --- history ---

    /// Step back one stroke. An unfinished drag is sealed first and becomes
    /// the stroke that is undone.
    pub fn undo(&mut self) {
        self.seal_drag();
        self.history.undo(&mut self.surface);
    }

    /// Step forward one stroke. An unfinished drag is sealed first, which
    /// leaves nothing to redo.
    pub fn redo(&mut self) {
        self.seal_drag();
        self.history.redo(&mut self.surface);
    }

    /// Release every drawn primitive, including an unfinished drag
    pub fn clear(&mut self) {
        if let EditorState::Dragging { stroke, preview, .. } = std::mem::take(&mut self.state) {
            for &handle in stroke.handles().iter().chain(preview.iter()) {
                delete_logged(&mut self.surface, handle);
            }
        }
        self.history.clear(&mut self.surface);
        self.hide_indicator();
        info!("Canvas cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- internals ---

    /// Close an unfinished drag: keep its permanent segments, drop its preview.
    /// The redo branch was truncated when the drag started, so the commit
    /// always lands on the tail.
    fn seal_drag(&mut self) {
        if let EditorState::Dragging { stroke, preview, .. } = std::mem::take(&mut self.state) {
            if let Some(preview) = preview {
                delete_logged(&mut self.surface, preview);
            }
            if let Some(stroke) = stroke.finish() {
                self.history.commit(stroke);
            }
        }
    }

    fn hide_indicator(&mut self) {
        if let Some(handle) = self.indicator.take() {
            delete_logged(&mut self.surface, handle);
        }
    }

    fn in_bounds(&self, pos: Pos2) -> bool {
        let bounds = self.surface.bounds();
        (0.0..=bounds.x).contains(&pos.x) && (0.0..=bounds.y).contains(&pos.y)
    }
}

fn create_shape<S: Surface>(
    surface: &mut S,
    brush: &BrushConfig,
    kind: ShapeKind,
    from: Pos2,
    to: Pos2,
) -> DrawableHandle {
    match kind {
        ShapeKind::Rectangle => surface.create_rectangle(from, to, brush.color(), brush.width()),
        ShapeKind::Circle => surface.create_oval(from, to, brush.color(), brush.width()),
        ShapeKind::Line => surface.create_line(from, to, brush.color(), brush.width()),
    }
}

fn delete_logged<S: Surface>(surface: &mut S, handle: DrawableHandle) {
    if let Err(err) = surface.delete(handle) {
        warn!("Failed to delete drawable: {err}");
    }
}
