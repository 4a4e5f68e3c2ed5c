//! The pointer interaction state machine of the editor.
//!
//! ```text
//!              pointer_down
//!   ┌──────┐ ───────────────► ┌──────────┐
//!   │ Idle │                  │ Dragging │ ◄─┐ pointer_move
//!   └──────┘ ◄─────────────── └──────────┘ ──┘
//!              pointer_up
//! ```
//!
//! While dragging, freehand modes move the anchor along with the pointer and
//! collect one handle per segment. Shape modes keep the anchor fixed and hold a
//! single preview handle that is replaced on every move.
use egui::Pos2;

use crate::stroke::StrokeBuilder;
use crate::surface::DrawableHandle;

#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No button held
    #[default]
    Idle,
    /// Between pointer-down and pointer-up
    Dragging {
        /// Start of the next segment, or the fixed corner of a shape
        anchor: Pos2,
        /// Permanent handles produced so far
        stroke: StrokeBuilder,
        /// Shape preview, never part of the stroke
        preview: Option<DrawableHandle>,
    },
}

impl EditorState {
    /// Fresh drag anchored at `pos`
    pub fn dragging(pos: Pos2) -> Self {
        EditorState::Dragging {
            anchor: pos,
            stroke: StrokeBuilder::new(),
            preview: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<Pos2> {
        match self {
            EditorState::Dragging { anchor, .. } => Some(*anchor),
            EditorState::Idle => None,
        }
    }

    pub fn preview(&self) -> Option<DrawableHandle> {
        match self {
            EditorState::Dragging { preview, .. } => *preview,
            EditorState::Idle => None,
        }
    }

    /// Handles collected by the drag in progress
    pub fn pending_handles(&self) -> &[DrawableHandle] {
        match self {
            EditorState::Dragging { stroke, .. } => stroke.handles(),
            EditorState::Idle => &[],
        }
    }
}
