use log::{debug, warn};

use crate::stroke::Stroke;
use crate::surface::{DrawableHandle, Surface};

/// Linear undo/redo history over committed strokes.
///
/// Strokes before the cursor are visible, strokes after it are hidden and can
/// be redone. Committing after an undo requires [`History::truncate`] first,
/// which releases the redo branch for good.
#[derive(Debug, Default)]
pub struct History {
    strokes: Vec<Stroke>,
    /// Number of strokes currently applied (visible). Cursor is `applied - 1`.
    applied: usize,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Index of the last applied stroke, `None` when nothing is applied
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Returns true if there is a stroke that can be undone
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Returns true if there is a stroke that can be redone
    pub fn can_redo(&self) -> bool {
        self.applied < self.strokes.len()
    }

    /// Append a stroke and move the cursor onto it.
    ///
    /// Any redo branch must have been truncated beforehand.
    pub fn commit(&mut self, stroke: Stroke) {
        debug_assert!(!stroke.is_empty(), "committed strokes are never empty");
        debug_assert!(!self.can_redo(), "commit with a pending redo branch");
        debug!("Committing stroke with {} handle(s)", stroke.len());
        self.strokes.push(stroke);
        self.applied = self.strokes.len();
    }

    /// Discard every stroke after the cursor and release its handles.
    ///
    /// Returns the number of strokes discarded.
    pub fn truncate<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        if !self.can_redo() {
            return 0;
        }
        let discarded: Vec<Stroke> = self.strokes.drain(self.applied..).collect();
        debug!("Discarding {} undone stroke(s)", discarded.len());
        for stroke in &discarded {
            release(surface, stroke.handles());
        }
        discarded.len()
    }

    /// Hide the stroke under the cursor and step back
    pub fn undo<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(index) = self.cursor() else {
            return false;
        };
        set_visible(surface, self.strokes[index].handles(), false);
        self.applied = index;
        debug!("Undo: cursor now {:?}", self.cursor());
        true
    }

    /// Step forward and show the stroke under the cursor
    pub fn redo<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.can_redo() {
            return false;
        }
        set_visible(surface, self.strokes[self.applied].handles(), true);
        self.applied += 1;
        debug!("Redo: cursor now {:?}", self.cursor());
        true
    }

    /// Release every handle and reset to empty
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for stroke in self.strokes.drain(..) {
            release(surface, stroke.handles());
        }
        self.applied = 0;
    }
}

fn set_visible<S: Surface + ?Sized>(surface: &mut S, handles: &[DrawableHandle], visible: bool) {
    for &handle in handles {
        if let Err(err) = surface.set_visible(handle, visible) {
            warn!("Failed to change visibility: {err}");
        }
    }
}

fn release<S: Surface + ?Sized>(surface: &mut S, handles: &[DrawableHandle]) {
    for &handle in handles {
        if let Err(err) = surface.delete(handle) {
            warn!("Failed to release drawable: {err}");
        }
    }
}
